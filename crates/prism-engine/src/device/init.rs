use crate::config::{parse_backends, parse_present_mode, BACKEND_VAR, PRESENT_MODE_VAR};

/// Initialization parameters for the GPU layer.
///
/// Defaults reproduce the classic single-triangle setup: an 8-bit BGRA
/// (non-sRGB) framebuffer-only surface, opaque composition, vsync'd FIFO
/// presentation.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends the instance may pick an adapter from.
    pub backends: wgpu::Backends,

    pub power_preference: wgpu::PowerPreference,

    /// Surface formats in order of preference.
    ///
    /// The first one the surface supports wins; if none is supported the
    /// surface's own first format is used.
    pub preferred_formats: Vec<wgpu::TextureFormat>,

    /// Present mode (swap behavior).
    ///
    /// FIFO is always supported and paces frames to the display refresh. An
    /// unsupported request falls back to FIFO.
    pub present_mode: wgpu::PresentMode,

    /// Alpha mode preference for the surface.
    ///
    /// If unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: wgpu::CompositeAlphaMode,

    /// Required wgpu features. Nothing beyond core is needed for one triangle.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            preferred_formats: vec![
                wgpu::TextureFormat::Bgra8Unorm,
                wgpu::TextureFormat::Rgba8Unorm,
            ],
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Opaque,
            required_features: wgpu::Features::empty(),
            // Mobile GPUs and GL backends cannot meet the desktop defaults.
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}

impl GpuInit {
    /// Defaults with `PRISM_BACKEND` / `PRISM_PRESENT_MODE` applied.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(BACKEND_VAR).ok().as_deref(),
            std::env::var(PRESENT_MODE_VAR).ok().as_deref(),
        )
    }

    /// Applies textual overrides. Unrecognised values are logged and ignored.
    pub fn with_overrides(mut self, backend: Option<&str>, present_mode: Option<&str>) -> Self {
        if let Some(raw) = backend {
            match parse_backends(raw) {
                Some(b) => self.backends = b,
                None => log::warn!("ignoring unrecognised {BACKEND_VAR}={raw:?}"),
            }
        }

        if let Some(raw) = present_mode {
            match parse_present_mode(raw) {
                Some(m) => self.present_mode = m,
                None => log::warn!("ignoring unrecognised {PRESENT_MODE_VAR}={raw:?}"),
            }
        }

        self
    }
}
