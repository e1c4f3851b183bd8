//! Flight Configuration
//!
//! Every tunable of the simulation in one place. `Default` returns the
//! values the simulator was tuned with; a JSON file may override any
//! subset of them.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::terrain::{MAX_DETAIL, TerrainParams};

/// Movement and collision tunables, in model units and degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightParams {
    /// Distance travelled per forward/backward command
    pub move_step: f32,
    /// Orientation change per rotation command (degrees)
    pub rotation_step_deg: f32,
    /// Triangles with a vertex this close to the viewpoint are tested
    pub proximity_radius: f32,
    /// A move is blocked if the nearest hit is at or within this distance
    pub collision_threshold: f32,
    /// Nearest-hit distance assumed when nothing is hit
    pub no_collision_distance: f32,
    /// Height above the centre cell where the viewpoint starts
    pub spawn_clearance: f32,
    /// Initial uniform scale of the model-view transform
    pub initial_scale: f32,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            move_step: 0.05,
            rotation_step_deg: 6.0,
            proximity_radius: 0.2,
            collision_threshold: 0.2,
            no_collision_distance: 1.0,
            spawn_clearance: 0.03,
            initial_scale: 1.0,
        }
    }
}

/// Perspective projection parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewParams {
    /// Vertical field of view (degrees)
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            fov_y_deg: 45.0,
            near: 0.01,
            far: 10.0,
        }
    }
}

/// Top-level configuration for a flight session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub terrain: TerrainParams,
    pub flight: FlightParams,
    pub view: ViewParams,
}

fn require_positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::invalid(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

impl FlightConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!("Config: loaded {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FlightConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make generation or movement meaningless.
    pub fn validate(&self) -> Result<()> {
        require_positive("terrain.roughness", self.terrain.roughness)?;
        if self.terrain.detail > MAX_DETAIL {
            return Err(EngineError::invalid(format!(
                "terrain.detail {} exceeds maximum of {MAX_DETAIL}",
                self.terrain.detail
            )));
        }

        let f = &self.flight;
        require_positive("flight.move_step", f.move_step)?;
        require_positive("flight.rotation_step_deg", f.rotation_step_deg)?;
        require_positive("flight.proximity_radius", f.proximity_radius)?;
        require_positive("flight.collision_threshold", f.collision_threshold)?;
        require_positive("flight.no_collision_distance", f.no_collision_distance)?;
        require_positive("flight.initial_scale", f.initial_scale)?;
        if !f.spawn_clearance.is_finite() {
            return Err(EngineError::invalid("flight.spawn_clearance must be finite"));
        }

        let v = &self.view;
        require_positive("view.fov_y_deg", v.fov_y_deg)?;
        require_positive("view.near", v.near)?;
        require_positive("view.far", v.far)?;
        if v.far <= v.near {
            return Err(EngineError::invalid(format!(
                "view.far ({}) must exceed view.near ({})",
                v.far, v.near
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FlightConfig::default();
        assert_eq!(config.terrain.detail, 7);
        assert_eq!(config.terrain.roughness, 0.003);
        assert_eq!(config.terrain.seed, None);
        assert_eq!(config.flight.move_step, 0.05);
        assert_eq!(config.flight.rotation_step_deg, 6.0);
        assert_eq!(config.flight.proximity_radius, 0.2);
        assert_eq!(config.flight.collision_threshold, 0.2);
        assert_eq!(config.flight.no_collision_distance, 1.0);
        assert_eq!(config.view.fov_y_deg, 45.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            FlightConfig::from_json(r#"{ "terrain": { "detail": 5, "seed": 99 } }"#).unwrap();
        assert_eq!(config.terrain.detail, 5);
        assert_eq!(config.terrain.seed, Some(99));
        assert_eq!(config.terrain.roughness, 0.003);
        assert_eq!(config.flight, FlightParams::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            FlightConfig::from_json(r#"{ "terrain": { "roughness": 0.0 } }"#),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            FlightConfig::from_json(r#"{ "flight": { "move_step": -1.0 } }"#),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            FlightConfig::from_json(r#"{ "view": { "near": 5.0, "far": 1.0 } }"#),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            FlightConfig::from_json("not json"),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = FlightConfig::default();
        let parsed = FlightConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
