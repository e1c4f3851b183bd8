//! Scene Module
//!
//! Owns the generated world (grid, mesh, normals) and the flight controller,
//! and keeps the render context in sync after every state change.
//!
//! Startup order: terrain → mesh → normals → spawn. The mesh must be
//! complete before the first collision test.

pub mod render_context;

pub use render_context::RenderContext;

use glam::Vec3;
use log::info;

use crate::camera::{FlightController, MoveOutcome};
use crate::config::FlightConfig;
use crate::error::Result;
use crate::input::FlightCommand;
use crate::mesh::{TerrainMesh, Topology, estimate_normals};
use crate::terrain::{HeightFieldGenerator, HeightGrid, RandomSource, RngSource};

/// The single static terrain and the viewpoint flying over it.
pub struct FlightScene {
    grid: HeightGrid,
    mesh: TerrainMesh,
    render: RenderContext,
    controller: FlightController,
    seed: Option<u64>,
}

impl FlightScene {
    /// Generate a scene from a configuration. Uses the configured seed, or
    /// draws a fresh one and logs it so the run can be reproduced.
    pub fn new(config: &FlightConfig) -> Result<Self> {
        let seed = config.terrain.seed.unwrap_or_else(rand::random);
        info!("Scene: terrain seed {seed}");
        let mut scene = Self::with_source(config, RngSource::seeded(seed))?;
        scene.seed = Some(seed);
        Ok(scene)
    }

    /// Generate a scene drawing randomness from `source`.
    pub fn with_source<S: RandomSource>(config: &FlightConfig, source: S) -> Result<Self> {
        config.validate()?;
        let mut generator = HeightFieldGenerator::new(source);
        let grid = generator.generate(config.terrain.detail, config.terrain.roughness)?;
        Ok(Self::from_grid(config, grid))
    }

    /// Build a scene over an existing height grid.
    pub fn from_grid(config: &FlightConfig, grid: HeightGrid) -> Self {
        let mesh = TerrainMesh::from_grid(&grid);
        let normals = estimate_normals(&mesh.vertices, &mesh.indices, Topology::TriangleStrip);
        let height_range = mesh.height_range();

        let spawn = Vec3::new(0.0, grid.center_height() + config.flight.spawn_clearance, 0.0);
        let controller = FlightController::new(config.flight, spawn);
        let render = RenderContext::new(
            normals,
            height_range,
            controller.state().model_view(),
            config.view,
        );
        info!("Scene: spawn at {spawn}, height range {height_range:.4}");

        Self {
            grid,
            mesh,
            render,
            controller,
            seed: None,
        }
    }

    /// Apply a flight command and refresh the model-view if the viewpoint
    /// changed.
    pub fn handle_command(&mut self, command: FlightCommand) -> Option<MoveOutcome> {
        let outcome = self.controller.handle_command(command, &self.mesh);
        // Rotations always apply; translations only when committed
        let changed = !command.is_translation() || outcome.is_some_and(|o| o.is_committed());
        if changed {
            self.render.model_view = self.controller.state().model_view();
        }
        outcome
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.render.set_viewport(width, height);
    }

    pub fn grid(&self) -> &HeightGrid {
        &self.grid
    }

    pub fn mesh(&self) -> &TerrainMesh {
        &self.mesh
    }

    pub fn render(&self) -> &RenderContext {
        &self.render
    }

    pub fn controller(&self) -> &FlightController {
        &self.controller
    }

    /// Seed used for generation, when the scene drew its own.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
