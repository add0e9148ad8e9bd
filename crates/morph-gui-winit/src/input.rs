//! Winit input adapter
//!
//! Turns winit mouse and touch events into morph-gui's single-pointer
//! [`PointerEvent`]s. The left mouse button and the first finger down both
//! act as the pointer; every other button and finger is ignored.

use morph_gui::{Point, PointerAction, PointerEvent};
use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};

/// Tracks one pointer across winit events
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Last known cursor position, window coordinates
    cursor: Option<Point>,
    pressed: bool,
    /// Finger currently acting as the pointer
    touch_id: Option<u64>,
    /// Top-left of the widget in window coordinates
    origin: Point,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report positions relative to `origin` instead of the window corner
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn event(&self, action: PointerAction, position: Point) -> PointerEvent {
        PointerEvent::new(action, position).translated(self.origin)
    }

    pub fn on_cursor_moved(&mut self, x: f64, y: f64) -> Option<PointerEvent> {
        let position = Point::new(x as f32, y as f32);
        self.cursor = Some(position);
        // Hover is not a gesture
        (self.pressed && self.touch_id.is_none())
            .then(|| self.event(PointerAction::Move, position))
    }

    pub fn on_mouse_button(
        &mut self,
        state: ElementState,
        button: MouseButton,
    ) -> Option<PointerEvent> {
        if button != MouseButton::Left || self.touch_id.is_some() {
            return None;
        }
        let position = self.cursor?;

        match state {
            ElementState::Pressed if !self.pressed => {
                self.pressed = true;
                Some(self.event(PointerAction::Down, position))
            }
            ElementState::Released if self.pressed => {
                self.pressed = false;
                Some(self.event(PointerAction::Up, position))
            }
            _ => None,
        }
    }

    /// The cursor left the window; an ongoing press is cancelled
    pub fn on_cursor_left(&mut self) -> Option<PointerEvent> {
        self.cursor = None;
        if self.pressed && self.touch_id.is_none() {
            self.pressed = false;
            return Some(PointerEvent::cancel());
        }
        None
    }

    pub fn on_touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) -> Option<PointerEvent> {
        let position = Point::new(x as f32, y as f32);

        match phase {
            TouchPhase::Started => {
                if self.pressed {
                    return None;
                }
                self.touch_id = Some(id);
                self.pressed = true;
                Some(self.event(PointerAction::Down, position))
            }
            _ if self.touch_id != Some(id) => None,
            TouchPhase::Moved => Some(self.event(PointerAction::Move, position)),
            TouchPhase::Ended => {
                self.touch_id = None;
                self.pressed = false;
                Some(self.event(PointerAction::Up, position))
            }
            TouchPhase::Cancelled => {
                self.touch_id = None;
                self.pressed = false;
                Some(PointerEvent::cancel())
            }
        }
    }

    /// Process a winit WindowEvent
    ///
    /// Returns the pointer event it amounts to, if any.
    pub fn handle_winit_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x, position.y)
            }
            WindowEvent::CursorLeft { .. } => self.on_cursor_left(),
            WindowEvent::MouseInput { state, button, .. } => self.on_mouse_button(*state, *button),
            WindowEvent::Touch(Touch {
                id,
                phase,
                location,
                ..
            }) => self.on_touch(*id, *phase, location.x, location.y),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_click() {
        let mut tracker = PointerTracker::new();

        // Hover only
        assert_eq!(tracker.on_cursor_moved(10.0, 20.0), None);

        let down = tracker.on_mouse_button(ElementState::Pressed, MouseButton::Left);
        assert_eq!(down, Some(PointerEvent::down(10.0, 20.0)));

        let moved = tracker.on_cursor_moved(15.0, 20.0);
        assert_eq!(moved, Some(PointerEvent::moved(15.0, 20.0)));

        let up = tracker.on_mouse_button(ElementState::Released, MouseButton::Left);
        assert_eq!(up, Some(PointerEvent::up(15.0, 20.0)));
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let mut tracker = PointerTracker::new();
        tracker.on_cursor_moved(10.0, 20.0);
        assert_eq!(
            tracker.on_mouse_button(ElementState::Pressed, MouseButton::Right),
            None
        );
        // Release without a press
        assert_eq!(
            tracker.on_mouse_button(ElementState::Released, MouseButton::Left),
            None
        );
    }

    #[test]
    fn test_press_without_cursor_is_ignored() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.on_mouse_button(ElementState::Pressed, MouseButton::Left),
            None
        );
    }

    #[test]
    fn test_leaving_window_cancels() {
        let mut tracker = PointerTracker::new();
        tracker.on_cursor_moved(10.0, 20.0);
        tracker.on_mouse_button(ElementState::Pressed, MouseButton::Left);

        assert_eq!(tracker.on_cursor_left(), Some(PointerEvent::cancel()));
        assert!(!tracker.is_pressed());
        assert_eq!(tracker.on_cursor_left(), None);
    }

    #[test]
    fn test_first_finger_only() {
        let mut tracker = PointerTracker::new();

        let down = tracker.on_touch(1, TouchPhase::Started, 5.0, 5.0);
        assert_eq!(down, Some(PointerEvent::down(5.0, 5.0)));
        // Second finger
        assert_eq!(tracker.on_touch(2, TouchPhase::Started, 50.0, 5.0), None);
        assert_eq!(tracker.on_touch(2, TouchPhase::Moved, 60.0, 5.0), None);
        assert_eq!(tracker.on_touch(2, TouchPhase::Ended, 60.0, 5.0), None);

        let moved = tracker.on_touch(1, TouchPhase::Moved, 6.0, 5.0);
        assert_eq!(moved, Some(PointerEvent::moved(6.0, 5.0)));
        let up = tracker.on_touch(1, TouchPhase::Ended, 6.0, 5.0);
        assert_eq!(up, Some(PointerEvent::up(6.0, 5.0)));
    }

    #[test]
    fn test_touch_cancel() {
        let mut tracker = PointerTracker::new();
        tracker.on_touch(7, TouchPhase::Started, 5.0, 5.0);
        assert_eq!(
            tracker.on_touch(7, TouchPhase::Cancelled, 5.0, 5.0),
            Some(PointerEvent::cancel())
        );
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn test_origin_offset() {
        let mut tracker = PointerTracker::new().with_origin(Point::new(100.0, 50.0));
        tracker.on_cursor_moved(130.0, 90.0);
        let down = tracker.on_mouse_button(ElementState::Pressed, MouseButton::Left);
        assert_eq!(down, Some(PointerEvent::down(30.0, 40.0)));
    }
}
