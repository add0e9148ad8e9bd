//! Interaction state machine
//!
//! Owns the quantity counter, the pressed flags and the hit regions recorded
//! by the last paint. Pointer events and programmatic changes come back as a
//! [`QuantityChange`] describing what the widget has to do; the state machine
//! itself never touches the animation or the layout.

use morph_gui::{Point, PointerAction, PointerEvent, Rect};

/// Discrete visual state of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MorphPhase {
    /// Single wide add button, quantity is zero
    #[default]
    Collapsed,
    /// Decrement and increment pair, quantity is positive
    Expanded,
}

impl MorphPhase {
    pub fn for_quantity(quantity: u32) -> Self {
        if quantity > 0 {
            MorphPhase::Expanded
        } else {
            MorphPhase::Collapsed
        }
    }

    pub fn is_expanded(self) -> bool {
        self == MorphPhase::Expanded
    }
}

/// Button rectangles as last painted
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HitRegions {
    /// Decrement button (left)
    pub left: Rect,
    /// Increment button (right)
    pub right: Rect,
}

impl HitRegions {
    pub fn contains_any(&self, point: Point) -> bool {
        self.left.contains(point) || self.right.contains(point)
    }
}

/// Work the widget must do after a quantity change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// Lay the quantity label out again
    Relayout,
    /// Point the animation at the new phase and start it
    Flip(MorphPhase),
    Repaint,
}

/// Result of a quantity change
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityChange {
    pub previous: u32,
    pub quantity: u32,
    /// Phase after the change
    pub phase: MorphPhase,
    /// Effects in the order they must run
    pub effects: Vec<SideEffect>,
}

impl QuantityChange {
    pub fn needs_relayout(&self) -> bool {
        self.effects.contains(&SideEffect::Relayout)
    }

    /// Target phase when the change crossed zero
    pub fn flip(&self) -> Option<MorphPhase> {
        self.effects.iter().find_map(|effect| match effect {
            SideEffect::Flip(phase) => Some(*phase),
            _ => None,
        })
    }

    pub fn needs_repaint(&self) -> bool {
        self.effects.contains(&SideEffect::Repaint)
    }
}

/// Outcome of a pointer event
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerOutcome {
    /// Quantity change committed by a release, if any
    pub change: Option<QuantityChange>,
    /// Pressed flags or quantity changed
    pub repaint: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MorphState {
    quantity: u32,
    morphed: bool,
    left_pressed: bool,
    right_pressed: bool,
    hit_regions: HitRegions,
}

impl MorphState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn phase(&self) -> MorphPhase {
        if self.morphed {
            MorphPhase::Expanded
        } else {
            MorphPhase::Collapsed
        }
    }

    pub fn is_morphed(&self) -> bool {
        self.morphed
    }

    pub fn is_left_pressed(&self) -> bool {
        self.left_pressed
    }

    pub fn is_right_pressed(&self) -> bool {
        self.right_pressed
    }

    pub fn hit_regions(&self) -> &HitRegions {
        &self.hit_regions
    }

    /// Store the rectangles just painted
    pub fn record_hit_regions(&mut self, regions: HitRegions) {
        self.hit_regions = regions;
    }

    /// Add `delta` to the quantity, clamping at zero
    pub fn apply_quantity_change(&mut self, delta: i64) -> Option<QuantityChange> {
        let target = i64::from(self.quantity)
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX));
        self.set_quantity(u32::try_from(target).unwrap_or(u32::MAX))
    }

    /// Jump to `quantity`; `None` when nothing changed
    pub fn set_quantity(&mut self, quantity: u32) -> Option<QuantityChange> {
        if quantity == self.quantity {
            return None;
        }

        let previous = self.quantity;
        let before = self.phase();
        self.quantity = quantity;
        let phase = MorphPhase::for_quantity(quantity);

        let mut effects = vec![SideEffect::Relayout];
        if phase != before {
            self.morphed = phase.is_expanded();
            effects.push(SideEffect::Flip(phase));
        }
        effects.push(SideEffect::Repaint);

        Some(QuantityChange {
            previous,
            quantity,
            phase,
            effects,
        })
    }

    /// Feed one pointer event through the state machine
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> PointerOutcome {
        let flags_before = (self.left_pressed, self.right_pressed);
        let point = event.position;
        let regions = self.hit_regions;
        let mut change = None;

        match event.action {
            PointerAction::Down => {
                if !self.morphed {
                    // Both halves make up the one wide button
                    if regions.contains_any(point) {
                        self.left_pressed = true;
                        self.right_pressed = true;
                    }
                } else if regions.left.contains(point) {
                    self.left_pressed = true;
                } else if regions.right.contains(point) {
                    self.right_pressed = true;
                }
            }
            PointerAction::Move => {
                if !self.morphed {
                    if !regions.contains_any(point) {
                        self.left_pressed = false;
                        self.right_pressed = false;
                    }
                } else {
                    if !regions.left.contains(point) {
                        self.left_pressed = false;
                    }
                    if !regions.right.contains(point) {
                        self.right_pressed = false;
                    }
                }
            }
            PointerAction::Up => {
                if !self.morphed {
                    if (self.left_pressed || self.right_pressed) && regions.contains_any(point) {
                        change = self.apply_quantity_change(1);
                    }
                } else if self.left_pressed && regions.left.contains(point) {
                    change = self.apply_quantity_change(-1);
                } else if self.right_pressed && regions.right.contains(point) {
                    change = self.apply_quantity_change(1);
                }
                self.left_pressed = false;
                self.right_pressed = false;
            }
            PointerAction::Cancel => {
                self.left_pressed = false;
                self.right_pressed = false;
            }
        }

        let repaint = flags_before != (self.left_pressed, self.right_pressed) || change.is_some();
        PointerOutcome { change, repaint }
    }
}
