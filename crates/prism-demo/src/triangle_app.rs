use anyhow::Result;
use prism_engine::core::{App, AppControl, FrameCtx, InitCtx};
use prism_engine::render::triangle::{shader_library, TriangleRenderer};

/// Clears to green and draws one white triangle, every frame.
#[derive(Default)]
pub struct TriangleApp {
    renderer: Option<TriangleRenderer>,
}

impl App for TriangleApp {
    fn on_init(&mut self, ctx: &mut InitCtx<'_, '_>) -> Result<()> {
        let library = shader_library()?;
        library.log_contents();

        let renderer = TriangleRenderer::new(&ctx.render_ctx(), &library)?;
        log::info!(
            "triangle ready (window {:?}, clear {:?})",
            ctx.window.id,
            TriangleRenderer::CLEAR
        );

        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };

        ctx.render(|target| renderer.render(target))
    }
}
