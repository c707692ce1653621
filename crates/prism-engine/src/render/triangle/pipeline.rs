use anyhow::Result;

use crate::render::RenderCtx;
use crate::shader::{ShaderLibrary, ShaderStage};

use super::vertex::Vertex;

pub const VERTEX_ENTRY: &str = "basic_vertex";
pub const FRAGMENT_ENTRY: &str = "basic_fragment";

/// Parses and validates the embedded triangle shader.
pub fn shader_library() -> Result<ShaderLibrary> {
    ShaderLibrary::from_wgsl("prism triangle shader", include_str!("../shaders/triangle.wgsl"))
}

/// Builds the triangle pipeline for the current surface format.
///
/// Both stage functions are resolved by name before anything reaches the
/// device, so a missing function is reported with the library's contents.
/// The library was validated on load; the device only sees known-good IR.
pub fn create_pipeline(ctx: &RenderCtx<'_>, library: &ShaderLibrary) -> Result<wgpu::RenderPipeline> {
    let vs = library.function(VERTEX_ENTRY, ShaderStage::Vertex)?;
    let fs = library.function(FRAGMENT_ENTRY, ShaderStage::Fragment)?;

    let shader = library.create_module(ctx.device);

    let pipeline_layout = ctx
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("prism triangle pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

    let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("prism triangle pipeline"),
        layout: Some(&pipeline_layout),

        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(vs.name.as_str()),
            compilation_options: Default::default(),
            buffers: &[Vertex::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(fs.name.as_str()),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                // Opaque surface; no blending.
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    log::debug!(
        "triangle pipeline built ({} -> {}, {:?})",
        vs.name,
        fs.name,
        ctx.surface_format
    );

    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_shader_has_exactly_the_two_stages() {
        let lib = shader_library().expect("embedded shader must parse and validate");
        let entries: Vec<(&str, ShaderStage)> = lib
            .entry_points()
            .iter()
            .map(|e| (e.name.as_str(), e.stage))
            .collect();
        assert_eq!(
            entries,
            [
                (VERTEX_ENTRY, ShaderStage::Vertex),
                (FRAGMENT_ENTRY, ShaderStage::Fragment),
            ]
        );
    }

    #[test]
    fn embedded_shader_stages_are_not_interchangeable() {
        let lib = shader_library().unwrap();
        assert!(lib.function(VERTEX_ENTRY, ShaderStage::Fragment).is_err());
        assert!(lib.function(FRAGMENT_ENTRY, ShaderStage::Vertex).is_err());
    }

    #[test]
    fn vertex_layout_matches_shader_input() {
        use wgpu::naga;

        let lib = shader_library().unwrap();
        let ep = lib
            .module()
            .entry_points
            .iter()
            .find(|ep| ep.name == VERTEX_ENTRY)
            .expect("vertex entry point");

        assert_eq!(ep.function.arguments.len(), 1);
        let arg = &ep.function.arguments[0];
        assert!(matches!(arg.binding, Some(naga::Binding::Location { location: 0, .. })));

        let layout = Vertex::layout();
        assert_eq!(layout.attributes[0].shader_location, 0);
    }
}
