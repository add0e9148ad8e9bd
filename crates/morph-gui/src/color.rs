/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert sRGB color (0-255) to linear space
    /// Uses proper sRGB gamma correction (ITU-R BT.709)
    #[inline]
    pub const fn srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Approximate ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::rgba(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// Unpack a `0xAARRGGBB` sRGB color, the layout resource files usually store
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self::srgba(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Convert back to 8-bit sRGB channels
    pub fn to_srgba8(&self) -> [u8; 4] {
        fn linear_to_srgb(c: f32) -> u8 {
            let c = c.clamp(0.0, 1.0);
            let s = if c <= 0.003_130_8 {
                c * 12.92
            } else {
                1.055 * c.powf(1.0 / 2.4) - 0.055
            };
            (s * 255.0).round().clamp(0.0, 255.0) as u8
        }

        [
            linear_to_srgb(self.r),
            linear_to_srgb(self.g),
            linear_to_srgb(self.b),
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Multiply the color channels by `factor`, keeping alpha
    ///
    /// Used for the pressed look of a button: a factor below 1.0 darkens the
    /// color. Channels are clamped to [0, 1].
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            r: (self.r * factor).clamp(0.0, 1.0),
            g: (self.g * factor).clamp(0.0, 1.0),
            b: (self.b * factor).clamp(0.0, 1.0),
            a: self.a,
        }
    }
}

/// Plain text colors
pub mod css {
    use super::Color;

    pub const BLACK: Color = Color::srgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::srgba(255, 255, 255, 255);
}

/// Catppuccin Mocha accents used for button fills
pub mod catppuccin {
    pub mod mocha {
        use crate::color::Color;

        pub const MAUVE: Color = Color::srgba(203, 166, 247, 255);
        pub const RED: Color = Color::srgba(243, 139, 168, 255);
        pub const GREEN: Color = Color::srgba(166, 227, 161, 255);
        pub const SAPPHIRE: Color = Color::srgba(116, 199, 236, 255);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_keeps_alpha() {
        let color = Color::rgba(0.5, 1.0, 0.25, 0.4);
        let pressed = color.scaled(0.8);

        assert!((pressed.r - 0.4).abs() < 1e-6);
        assert!((pressed.g - 0.8).abs() < 1e-6);
        assert!((pressed.b - 0.2).abs() < 1e-6);
        assert_eq!(pressed.a, 0.4);
    }

    #[test]
    fn test_scaled_clamps() {
        let brighter = Color::rgb(0.9, 0.1, 0.0).scaled(2.0);
        assert_eq!(brighter.r, 1.0);
        assert!((brighter.g - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_to_srgba8_extremes() {
        assert_eq!(css::WHITE.to_srgba8(), [255, 255, 255, 255]);
        assert_eq!(css::BLACK.to_srgba8(), [0, 0, 0, 255]);
        assert_eq!(Color::transparent().to_srgba8(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_from_argb_u32() {
        let white = Color::from_argb_u32(0xFFFF_FFFF);
        assert_eq!(white, css::WHITE);

        let half_black = Color::from_argb_u32(0x8000_0000);
        assert_eq!(half_black.r, 0.0);
        assert!((half_black.a - 128.0 / 255.0).abs() < 1e-6);
    }
}
