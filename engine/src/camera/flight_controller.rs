//! Flight Controller Module
//!
//! Turns discrete flight commands into orientation steps and collision-gated
//! moves over the terrain mesh.
//!
//! Key features:
//! - Fixed-angle pitch/yaw/roll steps, never gated
//! - Forward/backward moves along the view direction
//! - Moves are dropped if the travel segment hits terrain within the
//!   collision threshold of the viewpoint

use glam::Vec3;
use log::debug;

use super::viewpoint::ViewpointState;
use crate::config::FlightParams;
use crate::input::FlightCommand;
use crate::mesh::TerrainMesh;
use crate::physics::nearby_hits;

/// Result of a proposed translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The viewpoint moved by `displacement` (model space)
    Committed { displacement: Vec3 },
    /// Terrain was hit `distance` away; position unchanged
    Blocked { distance: f32 },
}

impl MoveOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, MoveOutcome::Committed { .. })
    }
}

/// Flight controller owning the viewpoint state.
///
/// ## Usage
/// ```rust,ignore
/// let mut controller = FlightController::new(FlightParams::default(), spawn);
///
/// // On each key event
/// controller.handle_command(FlightCommand::Forward, &mesh);
///
/// // After any change
/// let model_view = controller.state().model_view();
/// ```
#[derive(Clone, Debug)]
pub struct FlightController {
    state: ViewpointState,
    params: FlightParams,
}

impl FlightController {
    /// Controller with the viewpoint at `position`, level orientation and
    /// the configured initial scale.
    pub fn new(params: FlightParams, position: Vec3) -> Self {
        Self {
            state: ViewpointState {
                position,
                scale: params.initial_scale,
                ..Default::default()
            },
            params,
        }
    }

    #[inline]
    pub fn state(&self) -> &ViewpointState {
        &self.state
    }

    /// Set the orientation directly (degrees).
    pub fn set_orientation(&mut self, pitch: f32, yaw: f32, roll: f32) {
        self.state.pitch = pitch;
        self.state.yaw = yaw;
        self.state.roll = roll;
    }

    /// Add orientation deltas (degrees). Rotation is never collision-checked.
    pub fn rotate(&mut self, d_pitch: f32, d_yaw: f32, d_roll: f32) {
        self.state.pitch += d_pitch;
        self.state.yaw += d_yaw;
        self.state.roll += d_roll;
    }

    /// Apply one command. Returns the move outcome for translations and
    /// `None` for rotations.
    pub fn handle_command(&mut self, command: FlightCommand, mesh: &TerrainMesh) -> Option<MoveOutcome> {
        let step = self.params.rotation_step_deg;
        // The camera looks down local -Z, so "forward" is a negative delta
        let outcome = match command {
            FlightCommand::Forward => Some(self.attempt_move(mesh, -self.params.move_step)),
            FlightCommand::Backward => Some(self.attempt_move(mesh, self.params.move_step)),
            FlightCommand::YawLeft => {
                self.rotate(0.0, -step, 0.0);
                None
            }
            FlightCommand::YawRight => {
                self.rotate(0.0, step, 0.0);
                None
            }
            // Lower pitch tilts the view direction up
            FlightCommand::PitchUp => {
                self.rotate(-step, 0.0, 0.0);
                None
            }
            FlightCommand::PitchDown => {
                self.rotate(step, 0.0, 0.0);
                None
            }
            FlightCommand::RollLeft => {
                self.rotate(0.0, 0.0, -step);
                None
            }
            FlightCommand::RollRight => {
                self.rotate(0.0, 0.0, step);
                None
            }
        };
        debug!(
            "Flight: {command:?} -> pitch {:.1}, yaw {:.1}, roll {:.1}, position {}",
            self.state.pitch, self.state.yaw, self.state.roll, self.state.position
        );
        outcome
    }

    /// Try to move `delta` along local Z.
    ///
    /// The displacement is rotated into model space and tested as a segment
    /// from the current position against every nearby triangle. The move is
    /// committed only if the nearest hit lies beyond the collision threshold.
    pub fn attempt_move(&mut self, mesh: &TerrainMesh, delta: f32) -> MoveOutcome {
        let displacement = self.state.local_z_to_model(delta);
        let position = self.state.position;

        let closest = nearby_hits(mesh, position, displacement, self.params.proximity_radius)
            .iter()
            .map(|hit| hit.distance)
            .fold(self.params.no_collision_distance, f32::min);

        if closest > self.params.collision_threshold {
            self.state.position += displacement;
            debug!("Flight: moved by {displacement} to {}", self.state.position);
            MoveOutcome::Committed { displacement }
        } else {
            debug!("Flight: move blocked, terrain {closest:.4} away");
            MoveOutcome::Blocked { distance: closest }
        }
    }
}
