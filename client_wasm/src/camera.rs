//! Camera for the Pong court
//!
//! Simple 2D orthographic camera, top-left origin, y growing downward like
//! the court coordinates.

use glam::{Mat4, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera covering a `width` x `height` court
    pub fn orthographic(width: f32, height: f32) -> Self {
        // Position camera looking down at the court
        let eye = Vec3::new(width / 2.0, height / 2.0, 10.0);
        let target = Vec3::new(width / 2.0, height / 2.0, 0.0);
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);

        // Bottom/top swapped so y grows downward
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, 0.1, 100.0);

        Self { view, projection }
    }
}

/// Camera uniform data (matches the WGSL struct)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = (camera.projection * camera.view).to_cols_array_2d();
    }
}
