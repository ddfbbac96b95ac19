pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::error::ClientError;
use crate::mesh::Mesh;
use crate::scene::Quad;
use game_core::Config;
use resources::GameBuffers;
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    // Pipeline
    pub quad_pipeline: RenderPipeline,

    // Bind Groups
    pub camera_bind_group: BindGroup,

    // Resources
    pub buffers: GameBuffers,
    pub quad_mesh: Mesh,
}

impl Renderer {
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        config: &Config,
    ) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(canvas).await?;
        // Arena pixels, independent of the canvas resolution
        let camera = Camera::orthographic(config.arena_width as f32, config.arena_height as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);
        let quad_mesh = Mesh::unit_quad(&ctx.device, &ctx.queue);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            quad_pipeline: pipes.quad_pipeline,
            camera_bind_group,
            buffers,
            quad_mesh,
        })
    }

    pub fn draw(&mut self, quads: &[Quad]) -> Result<(), ClientError> {
        draw::draw_frame(self, quads)
    }
}
