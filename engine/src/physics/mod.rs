//! Physics module
//!
//! Terrain collision for the flight viewpoint. Built without an external
//! physics library: one exact segment-triangle test and a proximity broad
//! phase over the strip mesh.
//!
//! # Unit System
//!
//! Normalized model space: the terrain spans `[-1, 1]` on X and Z.
//!
//! # Submodules
//!
//! - [`collision`] - Segment-triangle intersection and broad phase

pub mod collision;

pub use collision::{
    Coords, DIRECTION_W, POINT_W, SegmentHit, ensure_vec4, intersect_segment_triangle,
    nearby_hits, segment_triangle_hit,
};
