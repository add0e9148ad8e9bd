//! Backend-agnostic single-pointer input
//!
//! Windowing libraries translate their mouse and touch events into
//! [`PointerEvent`]s; widgets only ever see this type. Only one pointer is
//! tracked, there is no multi-touch.

use crate::Point;

/// Phase of a pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// The pointer went down (finger touched, primary button pressed)
    Down,
    /// The pointer moved while down
    Move,
    /// The pointer was released
    Up,
    /// The gesture was aborted by the system; nothing should be committed
    Cancel,
}

/// A pointer event in widget-local device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub position: Point,
}

impl PointerEvent {
    pub const fn new(action: PointerAction, position: Point) -> Self {
        Self { action, position }
    }

    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, Point::new(x, y))
    }

    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, Point::new(x, y))
    }

    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, Point::new(x, y))
    }

    pub const fn cancel() -> Self {
        Self::new(PointerAction::Cancel, Point::zero())
    }

    /// The same event expressed relative to `origin`
    ///
    /// Hosts that place the widget somewhere other than the window origin use
    /// this to move window coordinates into widget coordinates.
    pub fn translated(self, origin: Point) -> Self {
        Self {
            action: self.action,
            position: Point::new(self.position.x - origin.x, self.position.y - origin.y),
        }
    }
}
