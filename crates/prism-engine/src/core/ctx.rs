use winit::window::{Window, WindowId};

use crate::device::Gpu;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::{FrameOutcome, FrameTime};

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Context handed to [`App::on_init`](super::App::on_init).
pub struct InitCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a Gpu<'w>,
}

impl<'a, 'w> InitCtx<'a, 'w> {
    /// Device + surface format, for building GPU resources.
    pub fn render_ctx(&self) -> RenderCtx<'_> {
        RenderCtx::new(self.gpu.device(), self.gpu.surface_format())
    }
}

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
    outcome: FrameOutcome,
    surface_failed: bool,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    pub(crate) fn new(window: WindowCtx<'a>, gpu: &'a mut Gpu<'w>, time: FrameTime) -> Self {
        Self {
            window,
            gpu,
            time,
            outcome: FrameOutcome::Dropped,
            surface_failed: false,
        }
    }

    /// Whether this tick ended with a presented drawable.
    pub fn outcome(&self) -> FrameOutcome {
        self.outcome
    }

    /// Set when drawable acquisition hit an unrecoverable surface error.
    pub(crate) fn surface_failed(&self) -> bool {
        self.surface_failed
    }

    /// Acquires the next drawable, lets `draw` record into it, then submits
    /// and presents.
    ///
    /// If no drawable is available the frame is skipped and `draw` is not
    /// called. Only a fatal surface error returns [`AppControl::Exit`].
    pub fn render<F>(&mut self, draw: F) -> AppControl
    where
        F: FnOnce(&mut RenderTarget<'_>),
    {
        if !self.gpu.is_drawable() {
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                if self.gpu.handle_surface_error(err).is_fatal() {
                    self.surface_failed = true;
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        // RenderTarget borrows frame.encoder; dropped before present() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.present(frame);
        self.outcome = FrameOutcome::Presented;

        AppControl::Continue
    }
}
