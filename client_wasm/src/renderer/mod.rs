pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use game_core::{Board, RenderAdapter, Snapshot};
use resources::GameBuffers;
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: GameBuffers,
    pub rect_mesh: Mesh,
    pub circle_mesh: Mesh,

    /// Tick of the last snapshot uploaded
    pub last_tick: Option<u64>,
}

impl Renderer {
    /// Set up WebGPU on the canvas with the camera covering `board`
    pub async fn new(canvas: web_sys::HtmlCanvasElement, board: Board) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(board.width, board.height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        let (rect_vertices, rect_indices) = create_rectangle();
        let rect_mesh = Mesh::new(&ctx.device, "Paddle", &rect_vertices, &rect_indices);
        let (circle_vertices, circle_indices) = create_circle(32);
        let circle_mesh = Mesh::new(&ctx.device, "Ball", &circle_vertices, &circle_indices);

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
            pipeline: pipes.pipeline,
            camera_bind_group,
            buffers,
            rect_mesh,
            circle_mesh,
            last_tick: None,
        })
    }

    /// Reapply the surface configuration after the surface was lost
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }
}

impl RenderAdapter for Renderer {
    fn draw(&mut self, snapshot: &Snapshot) -> Result<(), String> {
        draw::draw_frame(self, snapshot)
    }
}
