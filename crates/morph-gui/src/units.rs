//! Density-independent unit conversion.
//!
//! Conversions are pure functions of a [`DeviceMetrics`] value instead of
//! reading ambient display state, so the same widget can be laid out for any
//! display (or for tests) by passing different metrics.

/// Reference density: one dp equals one pixel at this many dots per inch.
pub const BASELINE_DPI: f32 = 160.0;

/// Physical characteristics of the display a widget is laid out for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceMetrics {
    /// Device pixels per density-independent pixel (dp)
    pub density: f32,
    /// Device pixels per scale-independent pixel (sp); density times the
    /// user's font scale
    pub scaled_density: f32,
    /// Screen width in device pixels
    pub screen_width: u32,
    /// Screen height in device pixels
    pub screen_height: u32,
}

impl DeviceMetrics {
    pub const fn new(density: f32, screen_width: u32, screen_height: u32) -> Self {
        Self {
            density,
            scaled_density: density,
            screen_width,
            screen_height,
        }
    }

    /// Build metrics from a dots-per-inch value
    pub fn from_dpi(dpi: f32, screen_width: u32, screen_height: u32) -> Self {
        Self::new(dpi / BASELINE_DPI, screen_width, screen_height)
    }

    /// Apply a user font scale on top of the display density
    pub fn with_font_scale(mut self, font_scale: f32) -> Self {
        self.scaled_density = self.density * font_scale;
        self
    }
}

impl Default for DeviceMetrics {
    fn default() -> Self {
        Self::new(1.0, 1080, 1920)
    }
}

/// Convert density-independent pixels to device pixels
pub fn dp_to_px(metrics: &DeviceMetrics, dp: f32) -> f32 {
    dp * metrics.density
}

/// Convert scale-independent pixels (font sizes) to whole device pixels
///
/// Truncates towards zero, so text sizes always land on an integer pixel size.
pub fn sp_to_px(metrics: &DeviceMetrics, sp: f32) -> f32 {
    (sp * metrics.scaled_density).trunc()
}

/// Screen size in device pixels as `(width, height)`
pub fn screen_size(metrics: &DeviceMetrics) -> (u32, u32) {
    (metrics.screen_width, metrics.screen_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_to_px_scales_by_density() {
        let metrics = DeviceMetrics::new(2.625, 1080, 2340);
        assert_eq!(dp_to_px(&metrics, 0.0), 0.0);
        assert_eq!(dp_to_px(&metrics, 80.0), 210.0);
    }

    #[test]
    fn test_sp_to_px_truncates_and_uses_font_scale() {
        let metrics = DeviceMetrics::new(2.625, 1080, 2340);
        // 16 * 2.625 = 42.0
        assert_eq!(sp_to_px(&metrics, 16.0), 42.0);

        let scaled = metrics.with_font_scale(1.1);
        // 16 * 2.8875 = 46.2
        assert_eq!(sp_to_px(&scaled, 16.0), 46.0);
        // dp is unaffected by the font scale
        assert_eq!(dp_to_px(&scaled, 80.0), 210.0);
    }

    #[test]
    fn test_from_dpi() {
        let metrics = DeviceMetrics::from_dpi(320.0, 720, 1280);
        assert_eq!(metrics.density, 2.0);
        assert_eq!(screen_size(&metrics), (720, 1280));
    }
}
