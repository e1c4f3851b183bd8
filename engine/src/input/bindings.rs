//! Input Bindings Module
//!
//! Maps physical winit keys to flight commands, allowing key remapping
//! without touching the flight controller.

use std::collections::HashMap;

use winit::keyboard::KeyCode;

use super::FlightCommand;

/// Maps physical keys to flight commands.
///
/// Bindings are one-to-one: binding a key or command again drops its
/// previous pairing.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_command: HashMap<KeyCode, FlightCommand>,
    command_to_key: HashMap<FlightCommand, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default flight layout.
    ///
    /// Default bindings:
    /// - ArrowUp / ArrowDown = Forward / Backward
    /// - ArrowLeft / ArrowRight = YawLeft / YawRight
    /// - W / S = PitchUp / PitchDown
    /// - A / D = RollLeft / RollRight
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::ArrowUp, FlightCommand::Forward);
        bindings.bind(KeyCode::ArrowDown, FlightCommand::Backward);
        bindings.bind(KeyCode::ArrowLeft, FlightCommand::YawLeft);
        bindings.bind(KeyCode::ArrowRight, FlightCommand::YawRight);
        bindings.bind(KeyCode::KeyW, FlightCommand::PitchUp);
        bindings.bind(KeyCode::KeyS, FlightCommand::PitchDown);
        bindings.bind(KeyCode::KeyA, FlightCommand::RollLeft);
        bindings.bind(KeyCode::KeyD, FlightCommand::RollRight);

        bindings
    }

    /// Bindings with nothing mapped.
    pub fn empty() -> Self {
        Self {
            key_to_command: HashMap::new(),
            command_to_key: HashMap::new(),
        }
    }

    /// Bind a key to a command, replacing any previous pairing of either.
    pub fn bind(&mut self, key: KeyCode, command: FlightCommand) {
        if let Some(old_command) = self.key_to_command.remove(&key) {
            self.command_to_key.remove(&old_command);
        }
        if let Some(old_key) = self.command_to_key.remove(&command) {
            self.key_to_command.remove(&old_key);
        }
        self.key_to_command.insert(key, command);
        self.command_to_key.insert(command, key);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(command) = self.key_to_command.remove(&key) {
            self.command_to_key.remove(&command);
        }
    }

    /// Command bound to `key`, if any.
    pub fn command_for(&self, key: KeyCode) -> Option<FlightCommand> {
        self.key_to_command.get(&key).copied()
    }

    /// Key bound to `command`, if any.
    pub fn key_for(&self, command: FlightCommand) -> Option<KeyCode> {
        self.command_to_key.get(&command).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_cover_all_commands() {
        let bindings = KeyBindings::default();
        for command in FlightCommand::ALL {
            assert!(bindings.key_for(command).is_some(), "{command:?} unbound");
        }
        assert_eq!(bindings.command_for(KeyCode::ArrowUp), Some(FlightCommand::Forward));
        assert_eq!(bindings.command_for(KeyCode::KeyW), Some(FlightCommand::PitchUp));
        assert_eq!(bindings.command_for(KeyCode::Space), None);
    }

    #[test]
    fn test_rebind_replaces_old_pairing() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::KeyI, FlightCommand::Forward);
        assert_eq!(bindings.command_for(KeyCode::ArrowUp), None);
        assert_eq!(bindings.key_for(FlightCommand::Forward), Some(KeyCode::KeyI));

        bindings.unbind_key(KeyCode::KeyI);
        assert_eq!(bindings.key_for(FlightCommand::Forward), None);
    }
}
