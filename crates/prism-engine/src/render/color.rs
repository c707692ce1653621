/// Straight-alpha RGBA color, components in `[0, 1]`.
///
/// Values are written to the framebuffer as-is; with a non-sRGB surface that
/// means byte-exact output of [`from_rgb_u8`](Self::from_rgb_u8) inputs.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// The clear color behind the triangle: `#006837`.
    pub const FOREST: Self = Self::from_rgb_u8(0, 104, 55);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forest_matches_clear_color() {
        let c = Color::FOREST;
        assert_eq!(c.r, 0.0);
        assert!((c.g - 104.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 55.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn to_wgpu_widens_components() {
        let w = Color::new(0.25, 0.5, 0.75, 1.0).to_wgpu();
        assert_eq!((w.r, w.g, w.b, w.a), (0.25, 0.5, 0.75, 1.0));
    }

    #[test]
    fn u8_extremes_map_to_unit_range() {
        assert_eq!(Color::from_rgb_u8(255, 255, 255), Color::WHITE);
        assert_eq!(Color::from_rgb_u8(0, 0, 0), Color::new(0.0, 0.0, 0.0, 1.0));
    }
}
