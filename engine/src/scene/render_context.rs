//! Render Context
//!
//! Everything the external rendering layer reads: normals, the height range
//! for shading, and the current model-view and projection matrices.

use glam::{Mat4, Vec4};

use crate::config::ViewParams;
use crate::mesh::{GpuVertex, TerrainMesh, interleave};

/// Data handed to the renderer. Rebuilt transforms only; buffers are fixed
/// after startup.
#[derive(Clone, Debug)]
pub struct RenderContext {
    /// Per-vertex normals (`w = 0`), parallel to the mesh vertices
    pub normals: Vec<Vec4>,
    /// `max(y) - min(y)` of the terrain
    pub height_range: f32,
    /// Current model-view transform
    pub model_view: Mat4,
    /// Current perspective projection
    pub projection: Mat4,
    view: ViewParams,
    aspect: f32,
}

impl RenderContext {
    pub fn new(normals: Vec<Vec4>, height_range: f32, model_view: Mat4, view: ViewParams) -> Self {
        let mut ctx = Self {
            normals,
            height_range,
            model_view,
            projection: Mat4::IDENTITY,
            view,
            aspect: 1.0,
        };
        ctx.update_projection();
        ctx
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Recompute the projection for a new viewport size. Zero-sized
    /// viewports (minimized windows) are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
        self.update_projection();
    }

    fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh_gl(
            self.view.fov_y_deg.to_radians(),
            self.aspect,
            self.view.near,
            self.view.far,
        );
    }

    /// Interleaved vertex buffer for upload.
    pub fn gpu_vertices(&self, mesh: &TerrainMesh) -> Vec<GpuVertex> {
        interleave(&mesh.vertices, &self.normals)
    }
}
