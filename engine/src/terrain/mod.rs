//! Terrain Module
//!
//! Procedural height fields: fractal midpoint displacement plus median
//! smoothing. The grid produced here is immutable once generated and feeds
//! the mesh builder.

pub mod generator;
pub mod height_grid;
pub mod median;
pub mod params;
pub mod random;

pub use generator::{HeightFieldGenerator, MAX_DETAIL};
pub use height_grid::HeightGrid;
pub use median::median_filter_3x3;
pub use params::TerrainParams;
pub use random::{ConstantSource, RandomSource, RngSource};
