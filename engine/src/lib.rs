//! Terrain Flight Engine Library
//!
//! Procedural fractal terrain with a collision-gated flying viewpoint.
//! The library produces everything a renderer needs (vertex, normal and
//! index buffers, height range, model-view and projection matrices) but
//! does no rendering itself.
//!
//! # Modules
//!
//! - [`terrain`] - Square-diamond height-field synthesis and median smoothing
//! - [`mesh`] - Triangle-strip mesh, vertex normals, GPU buffer packing
//! - [`physics`] - Segment-triangle collision against the terrain mesh
//! - [`camera`] - Viewpoint state and the flight controller
//! - [`input`] - Flight commands and key bindings
//! - [`config`] - Serializable configuration
//! - [`scene`] - Orchestration of all of the above
//!
//! # Example
//!
//! ```ignore
//! use terrain_flight_engine::config::FlightConfig;
//! use terrain_flight_engine::input::FlightCommand;
//! use terrain_flight_engine::scene::FlightScene;
//!
//! let mut scene = FlightScene::new(&FlightConfig::default())?;
//! scene.handle_command(FlightCommand::Forward);
//!
//! let vertices = scene.render().gpu_vertices(scene.mesh());
//! let model_view = scene.render().model_view;
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod mesh;
pub mod physics;
pub mod scene;
pub mod terrain;

pub use camera::{FlightController, MoveOutcome, ViewpointState};
pub use config::FlightConfig;
pub use error::{EngineError, Result};
pub use input::{FlightCommand, KeyBindings};
pub use mesh::TerrainMesh;
pub use scene::{FlightScene, RenderContext};
pub use terrain::{HeightFieldGenerator, HeightGrid};
