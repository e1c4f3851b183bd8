//! Flight Commands
//!
//! The discrete events the flight controller understands. Each key press
//! maps to at most one command.

use serde::{Deserialize, Serialize};

/// A single discrete flight input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightCommand {
    /// Move along the view direction (default: ArrowUp)
    Forward,
    /// Move against the view direction (default: ArrowDown)
    Backward,
    /// Turn left about the vertical axis (default: ArrowLeft)
    YawLeft,
    /// Turn right about the vertical axis (default: ArrowRight)
    YawRight,
    /// Tilt the view up (default: W)
    PitchUp,
    /// Tilt the view down (default: S)
    PitchDown,
    /// Roll counter-clockwise (default: A)
    RollLeft,
    /// Roll clockwise (default: D)
    RollRight,
}

impl FlightCommand {
    pub const ALL: [FlightCommand; 8] = [
        FlightCommand::Forward,
        FlightCommand::Backward,
        FlightCommand::YawLeft,
        FlightCommand::YawRight,
        FlightCommand::PitchUp,
        FlightCommand::PitchDown,
        FlightCommand::RollLeft,
        FlightCommand::RollRight,
    ];

    /// True for the commands that translate the viewpoint (and so go
    /// through the collision gate).
    pub fn is_translation(self) -> bool {
        matches!(self, FlightCommand::Forward | FlightCommand::Backward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_forward_and_backward_translate() {
        let moving: Vec<_> = FlightCommand::ALL
            .into_iter()
            .filter(|c| c.is_translation())
            .collect();
        assert_eq!(moving, vec![FlightCommand::Forward, FlightCommand::Backward]);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&FlightCommand::PitchDown).unwrap();
        assert_eq!(json, "\"pitch-down\"");
        let parsed: FlightCommand = serde_json::from_str("\"yaw-left\"").unwrap();
        assert_eq!(parsed, FlightCommand::YawLeft);
    }
}
