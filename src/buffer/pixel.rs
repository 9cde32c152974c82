//! Pixel: The atomic unit of matrix display.
//!
//! A pixel is a bare 24-bit color. LED matrices have no glyphs, styles
//! or layers, so the pixel carries nothing beyond its three channels
//! and the whole frame stays a flat, cache-friendly array.

/// True-color RGB representation.
///
/// Uses 3 bytes for 24-bit color depth. Matrix drivers that support
/// fewer bits per channel quantize at the hardware boundary, not here.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// An unlit LED. Identical to black on a matrix panel.
    pub const OFF: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Scale brightness by a factor in `[0.0, 1.0]`.
    ///
    /// Panels are commonly driven below full duty; out-of-range factors
    /// are clamped.
    #[must_use]
    pub fn dim(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self::new(
            (f32::from(self.r) * f) as u8,
            (f32::from(self.g) * f) as u8,
            (f32::from(self.b) * f) as u8,
        )
    }

    /// Whether this pixel is unlit.
    #[inline]
    pub const fn is_off(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_u32() {
        let color = Rgb::from_u32(0xFF5500);
        assert_eq!(color.r, 0xFF);
        assert_eq!(color.g, 0x55);
        assert_eq!(color.b, 0x00);
    }

    #[test]
    fn test_rgb_debug_hex() {
        assert_eq!(format!("{:?}", Rgb::new(255, 85, 0)), "#ff5500");
    }

    #[test]
    fn test_dim_scales_and_clamps() {
        let color = Rgb::new(200, 100, 50);
        let half = color.dim(0.5);
        assert_eq!(half, Rgb::new(100, 50, 25));

        // Out-of-range factors clamp instead of wrapping
        assert_eq!(color.dim(2.0), color);
        assert_eq!(color.dim(-1.0), Rgb::OFF);
    }

    #[test]
    fn test_is_off() {
        assert!(Rgb::OFF.is_off());
        assert!(!Rgb::new(0, 1, 0).is_off());
    }
}
