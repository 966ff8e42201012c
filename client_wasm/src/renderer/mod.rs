pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use game_core::{Config, CourtState};
use wgpu::*;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use self::resources::{GameBuffers, InstanceData};

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    // Pipeline
    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    // Resources
    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle

    // State
    pub last_instance_data: Option<(InstanceData, InstanceData, InstanceData)>,
}

impl Renderer {
    pub async fn new(canvas: web_sys::HtmlCanvasElement, config: &Config) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(config.court_width, config.court_height);

        let buffers = resources::create_buffers(&ctx.device, &camera, config);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let (rect_vertices, rect_indices) = create_rectangle();
        let rect_mesh = Mesh::new(&ctx.device, &ctx.queue, &rect_vertices, &rect_indices);

        let (circle_vertices, circle_indices) = create_circle(32);
        let circle_mesh = Mesh::new(&ctx.device, &ctx.queue, &circle_vertices, &circle_indices);

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
            last_instance_data: None,
        })
    }

    /// Paint one frame from the given court state
    pub fn draw(&mut self, court: &CourtState) -> Result<(), String> {
        draw::draw_frame(self, court)
    }

    /// Resize the rendering surface
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.size = (width, height);
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.surface.configure(&self.device, &self.surface_config);
        }
    }
}
