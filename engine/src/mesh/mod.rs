//! Mesh Module
//!
//! Height grid → strip mesh → vertex normals → GPU-ready buffers.

pub mod builder;
pub mod gpu;
pub mod normals;

pub use builder::{TerrainMesh, strip_index_count};
pub use gpu::{GpuVertex, index_bytes, interleave, vertex_bytes};
pub use normals::{Topology, estimate_normals, face_normal};
