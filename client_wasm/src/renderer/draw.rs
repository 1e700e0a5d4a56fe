use super::resources::{BALL_INSTANCES, PADDLE_INSTANCES};
use super::Renderer;
use crate::mesh::Mesh;
use crate::scene::{SceneInstances, BACKGROUND};
use game_core::Snapshot;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, snapshot: &Snapshot) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame, the next one draws to the fresh surface
            renderer.reconfigure();
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    update_buffers(renderer, snapshot);

    {
        let [r, g, b, a] = BACKGROUND;
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color { r, g, b, a }),
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

/// Upload instances when the snapshot is from a new tick
fn update_buffers(renderer: &mut Renderer, snapshot: &Snapshot) {
    if renderer.last_tick == Some(snapshot.tick) {
        return;
    }

    let scene = SceneInstances::from_snapshot(snapshot);
    renderer.queue.write_buffer(
        &renderer.buffers.instances,
        0,
        bytemuck::cast_slice(&[scene.left_paddle, scene.right_paddle, scene.ball]),
    );
    renderer.last_tick = Some(snapshot.tick);
}

fn draw_mesh(pass: &mut RenderPass<'_>, mesh: &Mesh, instances: std::ops::Range<u32>) {
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..mesh.index_count, 0, instances);
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>) {
    pass.set_pipeline(&renderer.pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));

    draw_mesh(pass, &renderer.rect_mesh, PADDLE_INSTANCES);
    draw_mesh(pass, &renderer.circle_mesh, BALL_INSTANCES);
}
