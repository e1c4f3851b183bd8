//! Terrain Mesh Builder
//!
//! Turns a height grid into a flat vertex list plus a single triangle strip
//! covering the grid row pair by row pair. Rows are joined with two
//! repeated indices, which produce zero-area triangles that downstream
//! consumers must tolerate.

use glam::Vec4;
use log::info;

use crate::terrain::HeightGrid;

/// Vertex and strip index data for one or more height grids sharing a
/// single vertex buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerrainMesh {
    /// Homogeneous model-space points (`w = 1`), in insertion order
    pub vertices: Vec<Vec4>,
    /// Triangle-strip indices into `vertices`
    pub indices: Vec<u32>,
}

/// Number of strip indices emitted for an `n x m` grid.
pub fn strip_index_count(n: usize, m: usize) -> usize {
    if n < 2 {
        return 0;
    }
    2 * m * (n - 1) + 2 * (n - 2)
}

/// Map a grid index onto `[-1, 1]`.
#[inline]
fn unit_coord(i: usize, count: usize) -> f32 {
    if count < 2 {
        return 0.0;
    }
    2.0 * i as f32 / (count - 1) as f32 - 1.0
}

impl TerrainMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh holding a single grid.
    pub fn from_grid(grid: &HeightGrid) -> Self {
        let mut mesh = Self::new();
        mesh.append_grid(grid);
        mesh
    }

    /// Append a grid's vertices and strip indices.
    ///
    /// Indices are offset by the vertex count at call time so several
    /// grids can share one vertex buffer. Each appended grid forms its own
    /// strip; draw calls must range over its indices separately.
    pub fn append_grid(&mut self, grid: &HeightGrid) {
        let n = grid.size();
        let m = grid.size();
        let off = self.vertices.len() as u32;

        self.vertices.reserve(n * m);
        for i in 0..n {
            for j in 0..m {
                self.vertices.push(Vec4::new(
                    unit_coord(i, n),
                    grid.get(i, j),
                    unit_coord(j, m),
                    1.0,
                ));
            }
        }

        self.indices.reserve(strip_index_count(n, m));
        let (n32, m32) = (n as u32, m as u32);
        for i in 0..n32.saturating_sub(1) {
            for j in 0..m32 {
                self.indices.push(off + i * m32 + j);
                self.indices.push(off + (i + 1) * m32 + j);
            }
            // Stitch to the next row pair
            if i + 2 < n32 {
                self.indices.push(off + (i + 2) * m32 - 1);
                self.indices.push(off + (i + 1) * m32);
            }
        }

        info!(
            "Mesh: appended {n}x{m} grid ({} vertices, {} indices total)",
            self.vertices.len(),
            self.indices.len()
        );
    }

    /// Number of strip triangles (including degenerate stitch triangles).
    pub fn triangle_count(&self) -> usize {
        self.indices.len().saturating_sub(2)
    }

    /// Vertex indices of strip triangle `k` (the triple starting at `k`).
    ///
    /// # Panics
    ///
    /// Panics if `k >= self.triangle_count()`.
    pub fn strip_triangle(&self, k: usize) -> [u32; 3] {
        [self.indices[k], self.indices[k + 1], self.indices[k + 2]]
    }

    /// `max(y) - min(y)` over all vertices, or 0 for an empty mesh.
    pub fn height_range(&self) -> f32 {
        if self.vertices.is_empty() {
            return 0.0;
        }
        let (lo, hi) = self
            .vertices
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v.y), hi.max(v.y))
            });
        hi - lo
    }
}
