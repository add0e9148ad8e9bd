//! # morph-gui
//!
//! Graphics backend agnostic primitives for the morphing stepper button.
//!
//! This crate provides the geometry, color, easing and capability traits the
//! widget in `morph-gui-interactive` is written against. It has no dependency
//! on any specific windowing system, text engine or graphics API. Backends
//! live in separate crates like `morph-gui-text` and `morph-gui-winit`.
//!
//! ## Geometry & Units
//!
//! - [`Point`], [`Rect`] - Screen-space geometry in device pixels
//! - [`DeviceMetrics`] - Display density, used by [`dp_to_px`] and [`sp_to_px`]
//!
//! ## Animation
//!
//! - [`Transition`] - Duration and easing of a timed animation
//! - [`EasingFn`] - Easing curves such as [`decelerate`]
//!
//! ## Capabilities
//!
//! - [`TextLayouter`] - Lays text out into lines
//! - [`Resources`] / [`Drawable`] - Icon and color lookup
//! - [`Canvas`] - Painting primitives, with [`PaintList`] as a recording canvas
//! - [`PointerEvent`] - Single-pointer input

mod color;
mod error;
mod input;
mod measure;
mod output;
mod primitives;
mod resources;
pub mod transition;
mod units;

pub use color::*;
pub use error::*;
pub use input::*;
pub use measure::*;
pub use output::*;
pub use primitives::*;
pub use resources::*;
pub use transition::*;
pub use units::*;
