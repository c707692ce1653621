use anyhow::Result;
use wgpu::util::DeviceExt;

use crate::render::{Color, RenderCtx, RenderTarget};
use crate::shader::ShaderLibrary;

use super::pipeline::create_pipeline;
use super::vertex::{INSTANCE_COUNT, TRIANGLE_VERTICES, VERTEX_COUNT};

/// Clears the drawable and draws the fixed triangle.
///
/// All GPU state is created in [`new`](Self::new) and never changes afterwards:
/// one immutable vertex buffer and one pipeline. Each frame is an identical
/// clear + draw.
pub struct TriangleRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
}

impl TriangleRenderer {
    /// Every frame starts from this color.
    pub const CLEAR: Color = Color::FOREST;

    pub fn new(ctx: &RenderCtx<'_>, library: &ShaderLibrary) -> Result<Self> {
        let vertex_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("prism triangle vbo"),
                contents: bytemuck::cast_slice(&TRIANGLE_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let pipeline = create_pipeline(ctx, library)?;

        Ok(Self {
            pipeline,
            vertex_buffer,
        })
    }

    /// Records the clear and the single draw into `target`.
    pub fn render(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("prism triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(Self::CLEAR.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw(0..VERTEX_COUNT, 0..INSTANCE_COUNT);
    }
}
