//! # morph-gui-interactive
//!
//! The morphing add/stepper button.
//!
//! This crate holds the widget logic: the synchronized morph animation, the
//! pointer state machine, per-frame geometry and the [`MorphingButton`] that
//! ties them together. It paints through the `morph-gui` capability traits
//! and has no windowing or text engine dependency of its own.

mod animation;
mod config;
mod geometry;
mod morphing_button;
mod state;

pub use animation::*;
pub use config::*;
pub use geometry::*;
pub use morphing_button::*;
pub use state::*;
