//! Terrain Parameters
//!
//! Inputs to terrain generation, loadable from the flight config file.

use serde::{Deserialize, Serialize};

/// Adjustable terrain generation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Grid side is `2^detail + 1`
    pub detail: u32,
    /// Displacement amplitude per unit of step size (typically 0..0.01)
    pub roughness: f32,
    /// Seed for the random stream. `None` picks a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            detail: 7,
            roughness: 0.003,
            seed: None,
        }
    }
}
