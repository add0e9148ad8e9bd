//! # morph-gui-winit
//!
//! winit adapter for morph-gui.
//!
//! - [`PointerTracker`] turns mouse and touch `WindowEvent`s into
//!   [`PointerEvent`](morph_gui::PointerEvent)s
//! - [`device_metrics`] reads density and screen size from a window
//! - [`pump_frame`] / [`dispatch_window_event`] keep a
//!   [`MorphingButton`](morph_gui_interactive::MorphingButton) animating from
//!   a winit event loop
//!
//! See `examples/stepper.rs` for a complete event loop.

mod input;
mod metrics;
mod pump;

pub use input::*;
pub use metrics::*;
pub use pump::*;
