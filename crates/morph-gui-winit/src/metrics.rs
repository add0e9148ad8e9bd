//! Display metrics from a winit window

use morph_gui::DeviceMetrics;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Metrics for the display `window` is on
///
/// The window's scale factor is the dp density. The screen size is the
/// monitor's, falling back to the window's own size when the monitor is
/// unknown (e.g. on Wayland before the first configure).
pub fn device_metrics(window: &Window) -> DeviceMetrics {
    let screen = match window.current_monitor() {
        Some(monitor) => monitor.size(),
        None => {
            log::debug!("no current monitor, using the window size as screen size");
            window.inner_size()
        }
    };
    metrics_from(window.scale_factor(), screen)
}

/// Metrics for a display with `scale_factor` and `screen` size
pub fn metrics_from(scale_factor: f64, screen: PhysicalSize<u32>) -> DeviceMetrics {
    DeviceMetrics::new(scale_factor as f32, screen.width, screen.height)
}
