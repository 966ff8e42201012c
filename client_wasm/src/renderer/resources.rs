use game_core::Config;
use wgpu::util::DeviceExt;
use wgpu::*;

use crate::camera::{Camera, CameraUniform};

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the
/// GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub left_paddle: Buffer,
    pub right_paddle: Buffer,
    pub ball: Buffer,
    pub center_line: Buffer,
    pub dash_count: u32,
}

pub fn create_buffers(device: &Device, camera: &Camera, config: &Config) -> GameBuffers {
    // Camera buffer
    let mut camera_uniform = CameraUniform::new();
    camera_uniform.update_view_proj(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // Per-object instance buffers, updated each frame
    let instance_buffer_size = std::mem::size_of::<InstanceData>() as u64;

    let left_paddle = device.create_buffer(&BufferDescriptor {
        label: Some("Left Paddle Instance Buffer"),
        size: instance_buffer_size,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let right_paddle = device.create_buffer(&BufferDescriptor {
        label: Some("Right Paddle Instance Buffer"),
        size: instance_buffer_size,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let ball = device.create_buffer(&BufferDescriptor {
        label: Some("Ball Instance Buffer"),
        size: instance_buffer_size,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    // Center line dashes never move; write them once at creation.
    let dashes = center_line_instances(config);
    let center_line = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Center Line Instance Buffer"),
        contents: bytemuck::cast_slice(&dashes),
        usage: BufferUsages::VERTEX,
    });

    GameBuffers {
        camera: camera_buffer,
        left_paddle,
        right_paddle,
        ball,
        center_line,
        dash_count: dashes.len() as u32,
    }
}

/// Dash column down the vertical midline of the court
fn center_line_instances(config: &Config) -> Vec<InstanceData> {
    const DASH_LENGTH: f32 = 10.0;
    const DASH_GAP: f32 = 10.0;
    const DASH_WIDTH: f32 = 4.0;

    let x = config.court_width / 2.0;
    let mut dashes = Vec::new();
    let mut y = DASH_LENGTH / 2.0;
    while y + DASH_LENGTH / 2.0 <= config.court_height {
        dashes.push(InstanceData {
            transform: [x, y, DASH_WIDTH, DASH_LENGTH],
            tint: [1.0, 1.0, 1.0, 1.0],
        });
        y += DASH_LENGTH + DASH_GAP;
    }
    dashes
}
