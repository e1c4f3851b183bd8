//! GPU Buffer Packing
//!
//! Interleaves positions and normals into a `Pod` vertex layout the
//! renderer can upload as-is.

use bytemuck::{Pod, Zeroable};
use glam::Vec4;

/// Interleaved vertex: homogeneous position (`w = 1`) and normal (`w = 0`).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 4],
    pub normal: [f32; 4],
}

static_assertions::assert_eq_size!(GpuVertex, [u8; 32]);

/// Zip positions and normals into GPU vertices. Extra entries in the longer
/// slice are ignored.
pub fn interleave(vertices: &[Vec4], normals: &[Vec4]) -> Vec<GpuVertex> {
    vertices
        .iter()
        .zip(normals)
        .map(|(p, n)| GpuVertex {
            position: p.to_array(),
            normal: n.to_array(),
        })
        .collect()
}

/// Raw bytes of a vertex buffer.
pub fn vertex_bytes(vertices: &[GpuVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Raw bytes of a `u32` index buffer.
pub fn index_bytes(indices: &[u32]) -> &[u8] {
    bytemuck::cast_slice(indices)
}
