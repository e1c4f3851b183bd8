//! Input Module
//!
//! Turns key presses into discrete flight commands. The flight controller
//! only ever sees [`FlightCommand`]s, never raw keys.
//!
//! # Example
//!
//! ```rust,ignore
//! use terrain_flight_engine::input::{FlightCommand, KeyBindings};
//! use winit::keyboard::KeyCode;
//!
//! let bindings = KeyBindings::default();
//! if let Some(command) = bindings.command_for(KeyCode::ArrowUp) {
//!     scene.handle_command(command);
//! }
//! ```

pub mod bindings;
pub mod commands;

pub use bindings::KeyBindings;
pub use commands::FlightCommand;
