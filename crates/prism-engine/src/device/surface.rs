//! Surface capability negotiation.
//!
//! Pure selection helpers, kept free of live wgpu objects so they can be tested
//! without an adapter.

use winit::dpi::PhysicalSize;

/// Picks the first preferred format the surface supports, else the surface's
/// first format. `None` when the surface reports no formats at all.
pub(crate) fn choose_surface_format(
    supported: &[wgpu::TextureFormat],
    preferred: &[wgpu::TextureFormat],
) -> Option<wgpu::TextureFormat> {
    preferred
        .iter()
        .copied()
        .find(|f| supported.contains(f))
        .or_else(|| supported.first().copied())
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: wgpu::CompositeAlphaMode,
) -> wgpu::CompositeAlphaMode {
    if supported.contains(&requested) {
        return requested;
    }
    supported
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// FIFO is guaranteed by every backend, so it is the fallback.
pub(crate) fn choose_present_mode(
    supported: &[wgpu::PresentMode],
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    match requested {
        // Auto modes are resolved by wgpu itself.
        wgpu::PresentMode::AutoVsync | wgpu::PresentMode::AutoNoVsync => requested,
        m if supported.contains(&m) => m,
        _ => wgpu::PresentMode::Fifo,
    }
}

/// wgpu rejects 0x0 surface configurations.
#[inline]
pub(crate) fn is_drawable_size(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as Alpha, PresentMode, TextureFormat as Fmt};

    #[test]
    fn preferred_format_wins_when_supported() {
        let supported = [Fmt::Bgra8UnormSrgb, Fmt::Bgra8Unorm];
        let preferred = [Fmt::Bgra8Unorm, Fmt::Rgba8Unorm];
        assert_eq!(choose_surface_format(&supported, &preferred), Some(Fmt::Bgra8Unorm));
    }

    #[test]
    fn preference_order_is_respected() {
        let supported = [Fmt::Rgba8Unorm, Fmt::Bgra8Unorm];
        let preferred = [Fmt::Bgra8Unorm, Fmt::Rgba8Unorm];
        assert_eq!(choose_surface_format(&supported, &preferred), Some(Fmt::Bgra8Unorm));
    }

    #[test]
    fn falls_back_to_first_supported_format() {
        let supported = [Fmt::Rgba16Float, Fmt::Rgb10a2Unorm];
        assert_eq!(
            choose_surface_format(&supported, &[Fmt::Bgra8Unorm]),
            Some(Fmt::Rgba16Float)
        );
    }

    #[test]
    fn no_formats_means_no_surface() {
        assert_eq!(choose_surface_format(&[], &[Fmt::Bgra8Unorm]), None);
    }

    #[test]
    fn opaque_alpha_when_available() {
        assert_eq!(choose_alpha_mode(&[Alpha::PreMultiplied, Alpha::Opaque], Alpha::Opaque), Alpha::Opaque);
    }

    #[test]
    fn alpha_falls_back_to_first_then_auto() {
        assert_eq!(choose_alpha_mode(&[Alpha::Inherit], Alpha::Opaque), Alpha::Inherit);
        assert_eq!(choose_alpha_mode(&[], Alpha::Opaque), Alpha::Auto);
    }

    #[test]
    fn unsupported_present_mode_falls_back_to_fifo() {
        let supported = [PresentMode::Fifo];
        assert_eq!(choose_present_mode(&supported, PresentMode::Mailbox), PresentMode::Fifo);
        assert_eq!(choose_present_mode(&supported, PresentMode::Fifo), PresentMode::Fifo);
        assert_eq!(
            choose_present_mode(&supported, PresentMode::AutoNoVsync),
            PresentMode::AutoNoVsync
        );
    }

    #[test]
    fn zero_extent_is_not_drawable() {
        assert!(!is_drawable_size(PhysicalSize::new(0, 600)));
        assert!(!is_drawable_size(PhysicalSize::new(800, 0)));
        assert!(is_drawable_size(PhysicalSize::new(1, 1)));
    }
}
