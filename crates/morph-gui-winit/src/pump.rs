//! Redraw pump
//!
//! The widget never schedules its own frames. A winit host forwards events
//! with [`dispatch_window_event`] and calls [`pump_frame`] on every
//! `RedrawRequested`; both report whether another redraw should be requested.

use crate::input::PointerTracker;
use morph_gui_interactive::MorphingButton;
use std::time::Instant;
use winit::event::WindowEvent;

/// What to do after a redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    /// Something changed and the button has to be painted
    pub paint: bool,
    /// The morph is still running; request the next redraw
    pub request_redraw: bool,
}

/// Advance the button's animation for one frame
pub fn pump_frame(button: &mut MorphingButton, now: Instant) -> Frame {
    button.tick(now);
    Frame {
        paint: button.take_redraw_request(),
        request_redraw: button.is_animating(),
    }
}

/// Forward a window event to the button
///
/// Returns whether a redraw should be requested.
pub fn dispatch_window_event(
    button: &mut MorphingButton,
    tracker: &mut PointerTracker,
    event: &WindowEvent,
    now: Instant,
) -> bool {
    match tracker.handle_winit_event(event) {
        Some(pointer) => {
            log::trace!("pointer {:?} at {:?}", pointer.action, pointer.position);
            button.handle_pointer(pointer, now)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_gui::{
        BuiltinResources, DeviceMetrics, PaintList, PointerEvent, TextLayout, TextLayouter,
        TextStyle,
    };
    use morph_gui_interactive::{MorphingButtonConfig, SizeConstraint};
    use std::time::Duration;

    struct NoText;

    impl TextLayouter for NoText {
        fn layout_text(&mut self, _text: &str, _style: &TextStyle, max_width: f32) -> TextLayout {
            TextLayout {
                max_width,
                ..TextLayout::default()
            }
        }
    }

    fn button() -> MorphingButton {
        let metrics = DeviceMetrics::new(1.0, 400, 800);
        let mut button = MorphingButton::new(
            MorphingButtonConfig::default(),
            &metrics,
            &BuiltinResources,
            NoText,
        )
        .unwrap();
        button.measure(SizeConstraint::Unspecified, SizeConstraint::Unspecified);
        button.paint(&mut PaintList::new());
        button
    }

    #[test]
    fn test_pump_runs_until_morph_ends() {
        let mut button = button();
        let t0 = Instant::now();

        let first = pump_frame(&mut button, t0);
        assert_eq!(
            first,
            Frame {
                paint: true,
                request_redraw: false
            }
        );
        assert_eq!(pump_frame(&mut button, t0), Frame::default());

        button.handle_pointer(PointerEvent::down(200.0, 40.0), t0);
        button.handle_pointer(PointerEvent::up(200.0, 40.0), t0);

        let mid = pump_frame(&mut button, t0 + Duration::from_millis(50));
        assert!(mid.paint);
        assert!(mid.request_redraw);

        let last = pump_frame(&mut button, t0 + Duration::from_millis(200));
        assert!(last.paint);
        assert!(!last.request_redraw);
        assert_eq!(button.quantity(), 1);
    }
}
