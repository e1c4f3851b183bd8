//! Camera Module
//!
//! The flying viewpoint: its state, the transforms derived from it, and the
//! controller that applies flight commands with collision gating.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod flight_controller;
pub mod viewpoint;

pub use flight_controller::{FlightController, MoveOutcome};
pub use viewpoint::ViewpointState;
