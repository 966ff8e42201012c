use game_core::{CourtState, Paddle};
use wgpu::*;

use super::resources::InstanceData;
use super::Renderer;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Paint one frame from the given court state
pub fn draw_frame(renderer: &mut Renderer, court: &CourtState) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, court);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, court: &CourtState) {
    let left_instance = paddle_instance(&court.left_paddle);
    let right_instance = paddle_instance(&court.right_paddle);
    let ball_instance = InstanceData {
        transform: [
            court.ball.pos.x,
            court.ball.pos.y,
            court.ball.radius * 2.0,
            court.ball.radius * 2.0,
        ],
        tint: WHITE,
    };

    let current = (left_instance, right_instance, ball_instance);
    let needs_update = renderer
        .last_instance_data
        .map(|last| {
            last.0.transform != current.0.transform
                || last.1.transform != current.1.transform
                || last.2.transform != current.2.transform
        })
        .unwrap_or(true);

    if needs_update {
        renderer.queue.write_buffer(
            &renderer.buffers.left_paddle,
            0,
            bytemuck::cast_slice(&[left_instance]),
        );
        renderer.queue.write_buffer(
            &renderer.buffers.right_paddle,
            0,
            bytemuck::cast_slice(&[right_instance]),
        );
        renderer.queue.write_buffer(
            &renderer.buffers.ball,
            0,
            bytemuck::cast_slice(&[ball_instance]),
        );
        renderer.last_instance_data = Some(current);
    }
}

// Paddles carry their top-left corner; the shader wants the center.
fn paddle_instance(paddle: &Paddle) -> InstanceData {
    InstanceData {
        transform: [
            paddle.x + paddle.width / 2.0,
            paddle.y + paddle.height / 2.0,
            paddle.width,
            paddle.height,
        ],
        tint: WHITE,
    }
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects: center-line dashes, then the paddles
    pass.set_vertex_buffer(0, renderer.meshes.0.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.meshes.0.index_buffer.slice(..), IndexFormat::Uint16);

    pass.set_vertex_buffer(1, renderer.buffers.center_line.slice(..));
    pass.draw_indexed(
        0..renderer.meshes.0.index_count,
        0,
        0..renderer.buffers.dash_count,
    );

    pass.set_vertex_buffer(1, renderer.buffers.left_paddle.slice(..));
    pass.draw_indexed(0..renderer.meshes.0.index_count, 0, 0..1);

    pass.set_vertex_buffer(1, renderer.buffers.right_paddle.slice(..));
    pass.draw_indexed(0..renderer.meshes.0.index_count, 0, 0..1);

    // Circle (ball)
    pass.set_vertex_buffer(0, renderer.meshes.1.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.meshes.1.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.ball.slice(..));
    pass.draw_indexed(0..renderer.meshes.1.index_count, 0, 0..1);
}
