//! Vertex Normal Estimation
//!
//! Accumulates un-normalized face normals onto each triangle's vertices and
//! normalizes once at the end, so larger faces weigh more.

use glam::{Vec3, Vec4};

/// How an index buffer encodes triangles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    /// Every index plus the previous two forms a triangle; winding flips
    /// on odd positions.
    #[default]
    TriangleStrip,
    /// Independent triples.
    TriangleList,
}

impl Topology {
    fn stride(self) -> usize {
        match self {
            Topology::TriangleStrip => 1,
            Topology::TriangleList => 3,
        }
    }
}

/// Face normal of the triangle starting at index-buffer position `k`.
///
/// For strips, odd positions swap the first edge so every triangle winds
/// the same way. Degenerate triangles give the zero vector.
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3, k: usize, topology: Topology) -> Vec3 {
    let first = if topology == Topology::TriangleStrip && k % 2 != 0 {
        a - b
    } else {
        b - a
    };
    first.cross(a - c)
}

/// One normal per vertex (`w = 0`), in vertex order.
///
/// Vertices touched only by degenerate faces (or by none) keep the zero
/// vector.
pub fn estimate_normals(vertices: &[Vec4], indices: &[u32], topology: Topology) -> Vec<Vec4> {
    let mut sums = vec![Vec3::ZERO; vertices.len()];

    let mut k = 0;
    while k + 2 < indices.len() {
        let (j, l, m) = (
            indices[k] as usize,
            indices[k + 1] as usize,
            indices[k + 2] as usize,
        );
        let n = face_normal(
            vertices[j].truncate(),
            vertices[l].truncate(),
            vertices[m].truncate(),
            k,
            topology,
        );
        sums[j] += n;
        sums[l] += n;
        sums[m] += n;
        k += topology.stride();
    }

    sums.into_iter()
        .map(|n| n.normalize_or_zero().extend(0.0))
        .collect()
}
