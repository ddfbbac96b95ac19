use wgpu::*;

use super::resources::InstanceData;
use super::Renderer;
use crate::error::ClientError;
use crate::scene::Quad;

/// Draw one frame. A lost or outdated surface is reconfigured and the frame skipped.
pub fn draw_frame(renderer: &mut Renderer, quads: &[Quad]) -> Result<(), ClientError> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            log::warn!("surface lost, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            log::warn!("surface timeout, skipping frame");
            return Ok(());
        }
        Err(e) => return Err(ClientError::Frame(format!("{:?}", e))),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());

    update_instances(renderer, quads);

    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

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

        if !quads.is_empty() {
            pass.set_pipeline(&renderer.quad_pipeline);
            pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, renderer.quad_mesh.vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
            pass.set_index_buffer(renderer.quad_mesh.index_buffer.slice(..), IndexFormat::Uint16);
            pass.draw_indexed(0..renderer.quad_mesh.index_count, 0, 0..quads.len() as u32);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_instances(renderer: &mut Renderer, quads: &[Quad]) {
    renderer.buffers.ensure_capacity(&renderer.device, quads.len());
    let instances: Vec<InstanceData> = quads.iter().map(InstanceData::from).collect();
    if !instances.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.instances, 0, bytemuck::cast_slice(&instances));
    }
}
