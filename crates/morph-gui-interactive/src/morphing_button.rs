//! Morphing add/stepper button
//!
//! Starts as one wide button. The first tap turns it into a round decrement
//! button, the current quantity and an increment button. Decrementing back to
//! zero turns it into the wide button again. Both directions animate eight
//! properties on one shared timeline (see [`AnimationDriver`]).

use crate::animation::{AnimationDriver, MorphGeometry, MorphValues};
use crate::config::{MorphingButtonConfig, ResolvedColors, ResolvedDimensions};
use crate::geometry::{label_top, quantity_label_width, type_label_width, FrameGeometry};
use crate::state::{HitRegions, MorphPhase, MorphState, QuantityChange, SideEffect};
use morph_gui::{
    drawable_to_bitmap, screen_size, Bitmap, BitmapPlacement, Canvas, Color, ConfigResult,
    DeviceMetrics, HorizontalAlign, IconId, Point, PointerEvent, Resources, TextLayout,
    TextLayouter, TextStyle,
};
use std::time::Instant;

/// How a parent constrains one axis of the button
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeConstraint {
    /// The size is fixed by the parent
    Exactly(f32),
    /// Any size up to the bound
    AtMost(f32),
    /// No constraint; the preferred size is used
    Unspecified,
}

impl SizeConstraint {
    /// Final size for a preferred `desired` size
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            SizeConstraint::Exactly(size) => size,
            SizeConstraint::AtMost(bound) => desired.min(bound),
            SizeConstraint::Unspecified => desired,
        }
    }
}

/// A button that morphs between an add button and a quantity stepper
///
/// The host owns the loop: it forwards pointer events to
/// [`handle_pointer`](Self::handle_pointer), calls [`tick`](Self::tick) every
/// frame while [`is_animating`](Self::is_animating) and paints whenever
/// [`take_redraw_request`](Self::take_redraw_request) reports a pending
/// redraw.
///
/// # Example
///
/// ```ignore
/// let mut button = MorphingButton::new(
///     MorphingButtonConfig::default().with_label("Adult"),
///     &metrics,
///     &BuiltinResources,
///     CosmicLayouter::new(),
/// )?
/// .on_quantity_changed(|quantity| println!("quantity: {quantity}"));
///
/// button.measure(SizeConstraint::Unspecified, SizeConstraint::Unspecified);
/// button.paint(&mut canvas);
/// ```
pub struct MorphingButton {
    config: MorphingButtonConfig,
    metrics: DeviceMetrics,
    dimensions: ResolvedDimensions,
    colors: ResolvedColors,
    plus_icon: Option<Bitmap>,
    minus_icon: Option<Bitmap>,
    layouter: Box<dyn TextLayouter>,

    label: Option<String>,
    label_style: TextStyle,
    label_layout: Option<TextLayout>,
    quantity_text: Option<String>,
    quantity_style: TextStyle,
    quantity_layout: Option<TextLayout>,

    state: MorphState,
    driver: AnimationDriver,
    size: (f32, f32),
    redraw_requested: bool,
    on_quantity_changed: Option<Box<dyn FnMut(u32)>>,
}

impl MorphingButton {
    /// Create a collapsed button with quantity zero
    ///
    /// Sizes are converted to device pixels for `metrics` once. Icons and
    /// colors are looked up in `resources`; a missing icon is simply not drawn.
    pub fn new(
        config: MorphingButtonConfig,
        metrics: &DeviceMetrics,
        resources: &dyn Resources,
        layouter: impl TextLayouter + 'static,
    ) -> ConfigResult<Self> {
        let dimensions = config.resolve(metrics)?;
        let colors = config.resolve_colors(resources);

        let icon_px = dimensions.icon_size as u32;
        let plus_icon = load_icon(resources, IconId::Increment, icon_px);
        let minus_icon = load_icon(resources, IconId::Decrement, icon_px);

        let geometry = MorphGeometry {
            width: 0.0,
            height: 0.0,
            button_height: dimensions.button_height,
            circular_diameter: dimensions.circular_diameter,
            corner_radius: dimensions.corner_radius,
            icon_size: dimensions.icon_size,
        };

        Ok(Self {
            label: config.label.clone(),
            label_style: TextStyle::new(dimensions.label_font_size, colors.label)
                .with_align(HorizontalAlign::Center),
            label_layout: None,
            quantity_text: None,
            quantity_style: TextStyle::new(dimensions.quantity_font_size, colors.quantity)
                .with_align(HorizontalAlign::Center),
            quantity_layout: None,
            state: MorphState::new(),
            driver: AnimationDriver::new(geometry, config.transition),
            size: (0.0, 0.0),
            redraw_requested: true,
            on_quantity_changed: None,
            metrics: *metrics,
            dimensions,
            colors,
            plus_icon,
            minus_icon,
            layouter: Box::new(layouter),
            config,
        })
    }

    /// Set a callback fired with the new quantity after every change
    pub fn on_quantity_changed(mut self, f: impl FnMut(u32) + 'static) -> Self {
        self.on_quantity_changed = Some(Box::new(f));
        self
    }

    pub fn config(&self) -> &MorphingButtonConfig {
        &self.config
    }

    pub fn dimensions(&self) -> &ResolvedDimensions {
        &self.dimensions
    }

    pub fn colors(&self) -> &ResolvedColors {
        &self.colors
    }

    pub fn quantity(&self) -> u32 {
        self.state.quantity()
    }

    pub fn phase(&self) -> MorphPhase {
        self.state.phase()
    }

    pub fn is_morphed(&self) -> bool {
        self.state.is_morphed()
    }

    pub fn state(&self) -> &MorphState {
        &self.state
    }

    pub fn animation(&self) -> &AnimationDriver {
        &self.driver
    }

    /// Whether the host should keep calling [`tick`](Self::tick)
    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Current values of the animated properties
    pub fn values(&self) -> MorphValues {
        self.driver.values()
    }

    /// Measured `(width, height)`
    pub fn size(&self) -> (f32, f32) {
        self.size
    }

    /// Rectangles recorded by the last paint
    pub fn hit_regions(&self) -> &HitRegions {
        self.state.hit_regions()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Alignment the type label is currently drawn with
    pub fn label_align(&self) -> HorizontalAlign {
        self.label_style.align
    }

    /// Full screen width by the button height, in whole pixels
    pub fn preferred_size(&self) -> (f32, f32) {
        let (screen_width, _) = screen_size(&self.metrics);
        (screen_width as f32, self.dimensions.button_height.trunc())
    }

    /// Resolve the button size against the parent's constraints
    ///
    /// Re-evaluates every animation endpoint for the new size and lays both
    /// labels out again. Returns the measured size.
    pub fn measure(&mut self, width: SizeConstraint, height: SizeConstraint) -> (f32, f32) {
        let (preferred_width, preferred_height) = self.preferred_size();
        self.size = (
            width.resolve(preferred_width),
            height.resolve(preferred_height),
        );

        self.driver.refresh_endpoints(self.geometry());
        self.update_text_layouts();
        self.redraw_requested = true;
        self.size
    }

    fn geometry(&self) -> MorphGeometry {
        MorphGeometry {
            width: self.size.0,
            height: self.size.1,
            button_height: self.dimensions.button_height,
            circular_diameter: self.dimensions.circular_diameter,
            corner_radius: self.dimensions.corner_radius,
            icon_size: self.dimensions.icon_size,
        }
    }

    fn update_text_layouts(&mut self) {
        if self.size.0 <= 0.0 {
            return;
        }
        let geometry = self.geometry();

        if let Some(text) = &self.quantity_text {
            let (screen_width, _) = screen_size(&self.metrics);
            let max_width = quantity_label_width(screen_width as f32, &geometry);
            self.quantity_layout =
                Some(self.layouter.layout_text(text, &self.quantity_style, max_width));
        }

        if let Some(label) = &self.label {
            let icon_width = self.plus_icon.as_ref().map_or(0, Bitmap::width);
            let max_width = type_label_width(&geometry, icon_width);
            self.label_layout = Some(self.layouter.layout_text(label, &self.label_style, max_width));
        }
    }

    /// Replace the type label
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
        self.update_text_layouts();
        self.redraw_requested = true;
    }

    /// Add `delta` to the quantity, clamping at zero
    ///
    /// Returns whether the quantity changed.
    pub fn apply_quantity_change(&mut self, delta: i64, now: Instant) -> bool {
        match self.state.apply_quantity_change(delta) {
            Some(change) => {
                self.run_effects(change, now);
                true
            }
            None => false,
        }
    }

    /// Jump to `quantity`, morphing if it crosses zero
    ///
    /// Returns whether the quantity changed.
    pub fn set_quantity(&mut self, quantity: u32, now: Instant) -> bool {
        match self.state.set_quantity(quantity) {
            Some(change) => {
                self.run_effects(change, now);
                true
            }
            None => false,
        }
    }

    fn run_effects(&mut self, change: QuantityChange, now: Instant) {
        log::debug!(
            "morphing button quantity {} -> {}",
            change.previous,
            change.quantity
        );

        for effect in &change.effects {
            match effect {
                SideEffect::Relayout => {
                    self.quantity_text = Some(change.quantity.to_string());
                    self.update_text_layouts();
                }
                SideEffect::Flip(phase) => self.flip(*phase, now),
                SideEffect::Repaint => self.redraw_requested = true,
            }
        }

        if let Some(ref mut on_quantity_changed) = self.on_quantity_changed {
            on_quantity_changed(change.quantity);
        }
    }

    fn flip(&mut self, phase: MorphPhase, now: Instant) {
        let expanded = phase.is_expanded();
        self.driver.reconfigure(expanded);
        self.label_style.align = if expanded {
            HorizontalAlign::Left
        } else {
            HorizontalAlign::Center
        };
        // The type label keeps its lines, only the anchor changes
        let max_width = self.label_layout.as_ref().map(|layout| layout.max_width);
        if let (Some(max_width), Some(label)) = (max_width, &self.label) {
            self.label_layout = Some(self.layouter.layout_text(label, &self.label_style, max_width));
        }

        let started = self.driver.start(now);
        log::debug!("morphing button flipped to {phase:?} (animation started: {started})");
    }

    /// Feed a pointer event in widget-local coordinates
    ///
    /// Returns whether a repaint is needed.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> bool {
        let outcome = self.state.handle_pointer(&event);
        if let Some(change) = outcome.change {
            self.run_effects(change, now);
        }
        if outcome.repaint {
            self.redraw_requested = true;
        }
        outcome.repaint
    }

    /// Advance the morph animation to `now`
    ///
    /// Returns whether the animated values changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.driver.tick(now);
        if changed {
            self.redraw_requested = true;
        }
        changed
    }

    /// Jump a running morph to its end state
    pub fn finish_animation(&mut self) {
        if self.driver.is_running() {
            self.driver.finish();
            self.redraw_requested = true;
        }
    }

    /// Whether a redraw was requested since the last call; clears the request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn button_color(&self, pressed: bool) -> Color {
        if pressed {
            self.colors.button.scaled(self.config.pressed_factor)
        } else {
            self.colors.button
        }
    }

    /// Paint the current frame and record the hit regions for pointer input
    pub fn paint(&mut self, canvas: &mut dyn Canvas) {
        let values = self.driver.values();
        let geometry = self.geometry();
        let frame = FrameGeometry::derive(&values, &geometry);
        let height = geometry.height;

        if frame.content_alpha > 0 {
            if let Some(layout) = &self.quantity_layout {
                let origin = Point::new(
                    frame.quantity_label_x,
                    label_top(height, layout.total_height),
                );
                canvas.draw_text(layout, origin, &self.quantity_style, frame.content_alpha);
            }
        }

        canvas.fill_round_rect(
            frame.left,
            frame.left_radius,
            self.button_color(self.state.is_left_pressed()),
        );
        if self.state.is_morphed() {
            if let Some(minus_icon) = &self.minus_icon {
                canvas.draw_bitmap(minus_icon, BitmapPlacement::new(frame.minus_icon));
            }
        }

        canvas.fill_round_rect(
            frame.right,
            frame.right_radius,
            self.button_color(self.state.is_right_pressed()),
        );
        if let Some(plus_icon) = &self.plus_icon {
            canvas.draw_bitmap(plus_icon, frame.plus_icon);
        }

        if let Some(layout) = &self.label_layout {
            let origin = Point::new(frame.type_label_x, label_top(height, layout.total_height));
            canvas.draw_text(layout, origin, &self.label_style, u8::MAX);
        }

        self.state.record_hit_regions(frame.hit_regions());
    }
}

fn load_icon(resources: &dyn Resources, id: IconId, size: u32) -> Option<Bitmap> {
    match resources.load_drawable(id) {
        Some(drawable) => Some(drawable_to_bitmap(drawable.as_ref(), size, size)),
        None => {
            log::warn!("icon {id:?} not found, it will not be drawn");
            None
        }
    }
}
