//! Collision detection module
//!
//! Line-segment vs triangle intersection for the terrain mesh, plus a
//! proximity broad phase so a move only tests triangles near the viewpoint.
//!
//! # Segment-Triangle Intersection
//!
//! The segment `origin + r * direction, r ∈ [0, 1]` is intersected with the
//! triangle's plane, then the hit is accepted if its barycentric
//! coordinates `(s, t)` in the `(b - a, c - a)` basis satisfy
//! `s >= 0, t >= 0, s + t <= 1`.
//!
//! # Example
//!
//! ```ignore
//! use terrain_flight_engine::physics::collision::intersect_segment_triangle;
//! use glam::Vec3;
//!
//! let hit = intersect_segment_triangle(
//!     Vec3::new(0.1, -1.0, 0.1),
//!     Vec3::new(0.0, 2.0, 0.0),
//!     Vec3::ZERO,
//!     Vec3::X,
//!     Vec3::Z,
//! )?;
//! assert!(hit.is_some());
//! ```

use glam::{Vec3, Vec4};
use log::trace;

use crate::error::{EngineError, Result};
use crate::mesh::TerrainMesh;

/// Homogeneous `w` of a point.
pub const POINT_W: f32 = 1.0;
/// Homogeneous `w` of a direction.
pub const DIRECTION_W: f32 = 0.0;

/// A 3- or 4-component geometric input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coords {
    Xyz(Vec3),
    Xyzw(Vec4),
}

impl From<Vec3> for Coords {
    fn from(v: Vec3) -> Self {
        Coords::Xyz(v)
    }
}

impl From<Vec4> for Coords {
    fn from(v: Vec4) -> Self {
        Coords::Xyzw(v)
    }
}

impl From<[f32; 3]> for Coords {
    fn from(v: [f32; 3]) -> Self {
        Coords::Xyz(Vec3::from_array(v))
    }
}

impl From<[f32; 4]> for Coords {
    fn from(v: [f32; 4]) -> Self {
        Coords::Xyzw(Vec4::from_array(v))
    }
}

impl TryFrom<&[f32]> for Coords {
    type Error = EngineError;

    fn try_from(v: &[f32]) -> Result<Self> {
        match *v {
            [x, y, z] => Ok(Coords::Xyz(Vec3::new(x, y, z))),
            [x, y, z, w] => Ok(Coords::Xyzw(Vec4::new(x, y, z, w))),
            _ => Err(EngineError::invalid(format!(
                "expected 3 or 4 components, got {}",
                v.len()
            ))),
        }
    }
}

/// Promote to 4 components with the given `w`, or check an existing `w`.
///
/// A 4-component input whose `w` differs from `last` is rejected.
pub fn ensure_vec4(v: impl Into<Coords>, last: f32) -> Result<Vec4> {
    match v.into() {
        Coords::Xyz(v) => Ok(v.extend(last)),
        Coords::Xyzw(v) if v.w == last => Ok(v),
        Coords::Xyzw(v) => Err(EngineError::invalid(format!(
            "expected w = {last}, got {v}"
        ))),
    }
}

/// Intersect the segment from `origin` along `direction` with triangle
/// `abc`.
///
/// Points are promoted with `w = 1`, the direction with `w = 0`.
///
/// # Returns
///
/// * `Ok(Some(p))` - The hit point (`w = 1`)
/// * `Ok(None)` - No hit, segment parallel to the plane, or degenerate triangle
/// * `Err(InvalidArgument)` - An input has the wrong `w`
pub fn intersect_segment_triangle(
    origin: impl Into<Coords>,
    direction: impl Into<Coords>,
    a: impl Into<Coords>,
    b: impl Into<Coords>,
    c: impl Into<Coords>,
) -> Result<Option<Vec4>> {
    let origin = ensure_vec4(origin, POINT_W)?;
    let direction = ensure_vec4(direction, DIRECTION_W)?;
    let a = ensure_vec4(a, POINT_W)?;
    let b = ensure_vec4(b, POINT_W)?;
    let c = ensure_vec4(c, POINT_W)?;
    Ok(segment_triangle_hit(origin, direction, a, b, c))
}

/// Unchecked core of [`intersect_segment_triangle`] for already
/// homogeneous inputs.
pub fn segment_triangle_hit(origin: Vec4, direction: Vec4, a: Vec4, b: Vec4, c: Vec4) -> Option<Vec4> {
    // Triangle edge vectors
    let u = b - a;
    let v = c - a;
    let uu = u.dot(u);
    let vv = v.dot(v);
    let uv = u.dot(v);
    let tri_scale = uv * uv - uu * vv;
    if tri_scale == 0.0 {
        // Degenerate triangle
        return None;
    }
    let n = u.truncate().cross(v.truncate()).extend(0.0);

    let denom = n.dot(direction);
    if denom == 0.0 {
        // Segment parallel to the plane
        return None;
    }
    let r = n.dot(a - origin) / denom;
    if !(0.0..=1.0).contains(&r) {
        return None;
    }
    let p = origin + direction * r;

    let w = p - a;
    let wu = w.dot(u);
    let wv = w.dot(v);
    let s = (uv * wv - vv * wu) / tri_scale;
    let t = (uv * wu - uu * wv) / tri_scale;
    if s < 0.0 || t < 0.0 || s + t > 1.0 {
        return None;
    }
    Some(p)
}

/// A segment hit against one strip triangle of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Hit point (`w = 1`)
    pub point: Vec4,
    /// Index-buffer position where the triangle's triple starts
    pub strip_index: usize,
    /// Distance from the segment origin to the hit point
    pub distance: f32,
}

/// Test the segment against every strip triangle with at least one vertex
/// within `radius` of `origin`.
pub fn nearby_hits(mesh: &TerrainMesh, origin: Vec3, direction: Vec3, radius: f32) -> Vec<SegmentHit> {
    let origin4 = origin.extend(POINT_W);
    let direction4 = direction.extend(DIRECTION_W);
    let mut tested = 0usize;
    let mut hits = Vec::new();

    for k in 0..mesh.triangle_count() {
        let [ia, ib, ic] = mesh.strip_triangle(k);
        let (a, b, c) = (
            mesh.vertices[ia as usize],
            mesh.vertices[ib as usize],
            mesh.vertices[ic as usize],
        );
        let near = [a, b, c]
            .iter()
            .any(|v| v.truncate().distance(origin) <= radius);
        if !near {
            continue;
        }
        tested += 1;
        if let Some(point) = segment_triangle_hit(origin4, direction4, a, b, c) {
            hits.push(SegmentHit {
                point,
                strip_index: k,
                distance: point.truncate().distance(origin),
            });
        }
    }

    trace!(
        "Collision: {tested} of {} triangles near {origin}, {} hits",
        mesh.triangle_count(),
        hits.len()
    );
    hits
}
