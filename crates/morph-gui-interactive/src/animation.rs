//! Synchronized morph animation.
//!
//! Eight properties move together between a collapsed and an expanded
//! keyframe. Each endpoint is a formula over the current [`MorphGeometry`],
//! listed once in [`MORPH_TABLE`], so a resize only needs the formulas
//! re-evaluated. All properties share a single timeline owned by
//! [`AnimationDriver`].

use morph_gui::{lerp_f32, Transition};
use std::time::Instant;

/// Measured bounds and resolved dimensions the endpoint formulas read
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MorphGeometry {
    /// Measured widget width
    pub width: f32,
    /// Measured widget height
    pub height: f32,
    pub button_height: f32,
    pub circular_diameter: f32,
    pub corner_radius: f32,
    pub icon_size: f32,
}

/// The animated quantities of the morphing button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphProperty {
    RightButtonWidth,
    LeftButtonWidth,
    LeftButtonRadius,
    LeftButtonHeight,
    PlusIconX,
    /// Degrees
    PlusIconRotation,
    /// 0 to 255
    ContentAlpha,
    TypeLabelX,
}

impl MorphProperty {
    pub const ALL: [MorphProperty; 8] = [
        MorphProperty::RightButtonWidth,
        MorphProperty::LeftButtonWidth,
        MorphProperty::LeftButtonRadius,
        MorphProperty::LeftButtonHeight,
        MorphProperty::PlusIconX,
        MorphProperty::PlusIconRotation,
        MorphProperty::ContentAlpha,
        MorphProperty::TypeLabelX,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Value in the single wide button state
    pub fn collapsed(self, geometry: &MorphGeometry) -> f32 {
        (MORPH_TABLE[self.index()].collapsed)(geometry)
    }

    /// Value in the split stepper state
    pub fn expanded(self, geometry: &MorphGeometry) -> f32 {
        (MORPH_TABLE[self.index()].expanded)(geometry)
    }

    /// Interpolation endpoints when heading to `toward_expanded`
    pub fn tween(self, geometry: &MorphGeometry, toward_expanded: bool) -> Tween {
        let collapsed = self.collapsed(geometry);
        let expanded = self.expanded(geometry);
        if toward_expanded {
            Tween::new(collapsed, expanded)
        } else {
            Tween::new(expanded, collapsed)
        }
    }
}

/// Endpoint formula over the current geometry
pub type EndpointFn = fn(&MorphGeometry) -> f32;

/// Collapsed and expanded formulas of one property
#[derive(Clone, Copy)]
pub struct Keyframes {
    pub property: MorphProperty,
    pub collapsed: EndpointFn,
    pub expanded: EndpointFn,
}

/// Collapsed width of the increment button
fn resting_right_width(g: &MorphGeometry) -> f32 {
    g.width * 2.0 / 3.0 + g.corner_radius * 2.0
}

/// Endpoint formulas, indexed by `MorphProperty as usize`
pub const MORPH_TABLE: [Keyframes; 8] = [
    Keyframes {
        property: MorphProperty::RightButtonWidth,
        collapsed: resting_right_width,
        expanded: |g: &MorphGeometry| g.width / 2.0,
    },
    Keyframes {
        property: MorphProperty::LeftButtonWidth,
        collapsed: |g: &MorphGeometry| g.width / 3.0 + g.corner_radius * 2.0,
        expanded: |g: &MorphGeometry| g.circular_diameter,
    },
    Keyframes {
        property: MorphProperty::LeftButtonRadius,
        collapsed: |g: &MorphGeometry| g.corner_radius,
        expanded: |g: &MorphGeometry| g.circular_diameter / 2.0,
    },
    Keyframes {
        property: MorphProperty::LeftButtonHeight,
        collapsed: |g: &MorphGeometry| g.button_height,
        expanded: |g: &MorphGeometry| g.circular_diameter,
    },
    Keyframes {
        property: MorphProperty::PlusIconX,
        collapsed: |g: &MorphGeometry| g.width / 2.0,
        expanded: |g: &MorphGeometry| g.width / 2.0 + g.icon_size / 2.0,
    },
    Keyframes {
        property: MorphProperty::PlusIconRotation,
        collapsed: |_: &MorphGeometry| -90.0,
        expanded: |_: &MorphGeometry| 90.0,
    },
    Keyframes {
        property: MorphProperty::ContentAlpha,
        collapsed: |_: &MorphGeometry| 0.0,
        expanded: |_: &MorphGeometry| 255.0,
    },
    // The label shifts by a quarter of the right button's width as it rests
    // before a run, i.e. its collapsed width. Reading the resting width keeps
    // both directions on the same endpoint pair.
    Keyframes {
        property: MorphProperty::TypeLabelX,
        collapsed: |g: &MorphGeometry| g.width / 2.0,
        expanded: |g: &MorphGeometry| g.width / 2.0 + resting_right_width(g) / 4.0,
    },
];

/// Start and end value of one property for the current direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start: f32,
    pub end: f32,
}

impl Tween {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Value at eased `progress`; exact at both ends
    pub fn value(&self, progress: f32) -> f32 {
        if progress <= 0.0 {
            self.start
        } else if progress >= 1.0 {
            self.end
        } else {
            lerp_f32(self.start, self.end, progress)
        }
    }
}

/// Snapshot of every animated property at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MorphValues {
    pub right_button_width: f32,
    pub left_button_width: f32,
    pub left_button_radius: f32,
    pub left_button_height: f32,
    pub plus_icon_x: f32,
    pub plus_icon_rotation: f32,
    pub content_alpha: f32,
    pub type_label_x: f32,
}

impl MorphValues {
    fn from_fn(mut f: impl FnMut(MorphProperty) -> f32) -> Self {
        Self {
            right_button_width: f(MorphProperty::RightButtonWidth),
            left_button_width: f(MorphProperty::LeftButtonWidth),
            left_button_radius: f(MorphProperty::LeftButtonRadius),
            left_button_height: f(MorphProperty::LeftButtonHeight),
            plus_icon_x: f(MorphProperty::PlusIconX),
            plus_icon_rotation: f(MorphProperty::PlusIconRotation),
            content_alpha: f(MorphProperty::ContentAlpha),
            type_label_x: f(MorphProperty::TypeLabelX),
        }
    }

    pub fn get(&self, property: MorphProperty) -> f32 {
        match property {
            MorphProperty::RightButtonWidth => self.right_button_width,
            MorphProperty::LeftButtonWidth => self.left_button_width,
            MorphProperty::LeftButtonRadius => self.left_button_radius,
            MorphProperty::LeftButtonHeight => self.left_button_height,
            MorphProperty::PlusIconX => self.plus_icon_x,
            MorphProperty::PlusIconRotation => self.plus_icon_rotation,
            MorphProperty::ContentAlpha => self.content_alpha,
            MorphProperty::TypeLabelX => self.type_label_x,
        }
    }
}

/// Drives all morph properties along one shared timeline
///
/// A run is started with [`start`](Self::start) and advanced by the host with
/// [`tick`](Self::tick) until it reports completion. Starting while a run is
/// in flight is ignored; [`reconfigure`](Self::reconfigure) still swaps the
/// endpoints, so the in-flight run continues towards the new ones.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    geometry: MorphGeometry,
    toward_expanded: bool,
    tweens: [Tween; 8],
    transition: Transition,
    /// Eased progress of the current or last run; `None` until the first
    /// reconfigure
    progress: Option<f32>,
    started_at: Option<Instant>,
}

impl AnimationDriver {
    /// Create a driver resting in the collapsed state
    pub fn new(geometry: MorphGeometry, transition: Transition) -> Self {
        Self {
            geometry,
            toward_expanded: false,
            tweens: Self::tweens_for(&geometry, false),
            transition,
            progress: None,
            started_at: None,
        }
    }

    fn tweens_for(geometry: &MorphGeometry, toward_expanded: bool) -> [Tween; 8] {
        MorphProperty::ALL.map(|property| property.tween(geometry, toward_expanded))
    }

    pub fn geometry(&self) -> &MorphGeometry {
        &self.geometry
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Whether the endpoints currently lead to the expanded state
    pub fn is_toward_expanded(&self) -> bool {
        self.toward_expanded
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Eased progress of the current or last run
    pub fn progress(&self) -> Option<f32> {
        self.progress
    }

    /// Current endpoints of `property`
    pub fn endpoints(&self, property: MorphProperty) -> Tween {
        self.tweens[property.index()]
    }

    /// Point every property at the state given by `target_morphed`
    ///
    /// Endpoints become collapsed→expanded or expanded→collapsed. When idle the
    /// progress resets to 0, so each property reports its new start value
    /// until the next run is ticked. A run in flight keeps its progress.
    pub fn reconfigure(&mut self, target_morphed: bool) {
        self.toward_expanded = target_morphed;
        self.tweens = Self::tweens_for(&self.geometry, target_morphed);
        if !self.is_running() {
            self.progress = Some(0.0);
        }
        log::debug!(
            "morph animation reconfigured toward {}",
            if target_morphed { "expanded" } else { "collapsed" }
        );
    }

    /// Re-evaluate every endpoint formula for new geometry
    ///
    /// Direction and progress are untouched.
    pub fn refresh_endpoints(&mut self, geometry: MorphGeometry) {
        self.geometry = geometry;
        self.tweens = Self::tweens_for(&self.geometry, self.toward_expanded);
    }

    /// Begin a run at `now`
    ///
    /// Returns `false` without restarting when a run is already in flight.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            log::trace!("morph animation already running, start ignored");
            return false;
        }
        self.started_at = Some(now);
        self.progress = Some(0.0);
        true
    }

    /// Advance the run to `now`
    ///
    /// Returns `true` when the values changed and a repaint is needed. The run
    /// stops by itself once the transition duration has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };

        let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
        let progress = self.transition.progress(elapsed);
        self.progress = Some(progress);
        if progress >= 1.0 {
            self.started_at = None;
            log::trace!("morph animation finished after {elapsed:.3}s");
        } else {
            log::trace!("morph animation tick: elapsed {elapsed:.3}s, progress {progress:.3}");
        }
        true
    }

    /// Jump a running animation to its end
    pub fn finish(&mut self) {
        if self.started_at.take().is_some() {
            self.progress = Some(1.0);
        }
    }

    fn value_with_progress(&self, property: MorphProperty, progress: Option<f32>) -> f32 {
        match progress {
            Some(progress) => self.tweens[property.index()].value(progress),
            // Never sampled: rest at the collapsed keyframe
            None => property.collapsed(&self.geometry),
        }
    }

    /// Current value of `property` as of the last tick
    pub fn value(&self, property: MorphProperty) -> f32 {
        self.value_with_progress(property, self.progress)
    }

    /// Value of `property` at `now`, without advancing the driver
    pub fn value_at(&self, property: MorphProperty, now: Instant) -> f32 {
        let progress = match self.started_at {
            Some(started_at) => {
                let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
                Some(self.transition.progress(elapsed))
            }
            None => self.progress,
        };
        self.value_with_progress(property, progress)
    }

    /// Current value of every property
    pub fn values(&self) -> MorphValues {
        MorphValues::from_fn(|property| self.value(property))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn geometry() -> MorphGeometry {
        MorphGeometry {
            width: 1080.0,
            height: 240.0,
            button_height: 240.0,
            circular_diameter: 180.0,
            corner_radius: 12.0,
            icon_size: 90.0,
        }
    }

    fn driver() -> AnimationDriver {
        AnimationDriver::new(geometry(), Transition::morph())
    }

    #[test]
    fn test_table_is_indexed_by_property() {
        for (index, keyframes) in MORPH_TABLE.iter().enumerate() {
            assert_eq!(keyframes.property.index(), index);
            assert_eq!(MorphProperty::ALL[index], keyframes.property);
        }
    }

    #[test]
    fn test_keyframe_formulas() {
        let g = geometry();
        assert_eq!(MorphProperty::RightButtonWidth.collapsed(&g), 744.0);
        assert_eq!(MorphProperty::RightButtonWidth.expanded(&g), 540.0);
        assert_eq!(MorphProperty::LeftButtonWidth.collapsed(&g), 384.0);
        assert_eq!(MorphProperty::LeftButtonWidth.expanded(&g), 180.0);
        assert_eq!(MorphProperty::LeftButtonRadius.expanded(&g), 90.0);
        assert_eq!(MorphProperty::LeftButtonHeight.collapsed(&g), 240.0);
        assert_eq!(MorphProperty::PlusIconX.expanded(&g), 585.0);
        assert_eq!(MorphProperty::PlusIconRotation.collapsed(&g), -90.0);
        assert_eq!(MorphProperty::ContentAlpha.expanded(&g), 255.0);
        assert_eq!(MorphProperty::TypeLabelX.expanded(&g), 540.0 + 744.0 / 4.0);
    }

    #[test]
    fn test_rests_collapsed_before_first_run() {
        let driver = driver();
        let g = geometry();

        assert_eq!(driver.progress(), None);
        assert!(!driver.is_running());
        for property in MorphProperty::ALL {
            assert_eq!(driver.value(property), property.collapsed(&g));
        }
    }

    #[test]
    fn test_progress_zero_reports_start_endpoint() {
        let mut driver = driver();
        let g = geometry();

        driver.reconfigure(true);
        for property in MorphProperty::ALL {
            assert_eq!(driver.value(property), property.collapsed(&g));
            assert_eq!(driver.value(property), driver.endpoints(property).start);
        }

        driver.reconfigure(false);
        for property in MorphProperty::ALL {
            assert_eq!(driver.value(property), property.expanded(&g));
        }
        // Right button width is never reported as a raw zero
        assert_ne!(driver.value(MorphProperty::RightButtonWidth), 0.0);
    }

    #[test]
    fn test_progress_one_reports_end_endpoint_exactly() {
        let mut driver = driver();
        let t0 = Instant::now();

        driver.reconfigure(true);
        assert!(driver.start(t0));
        assert!(driver.tick(t0 + Duration::from_millis(150)));
        assert!(!driver.is_running());
        assert_eq!(driver.progress(), Some(1.0));

        for property in MorphProperty::ALL {
            assert_eq!(driver.value(property), driver.endpoints(property).end);
        }
    }

    #[test]
    fn test_tick_advances_monotonically() {
        let mut driver = driver();
        let t0 = Instant::now();
        driver.reconfigure(true);
        driver.start(t0);

        let mut previous = driver.value(MorphProperty::ContentAlpha);
        for ms in (10..=150).step_by(10) {
            driver.tick(t0 + Duration::from_millis(ms));
            let alpha = driver.value(MorphProperty::ContentAlpha);
            assert!(alpha >= previous, "alpha went back at {ms}ms");
            previous = alpha;
        }
        assert_eq!(previous, 255.0);

        // Halfway through time, a decelerating curve is past halfway in value
        let mut driver = self::driver();
        driver.reconfigure(true);
        driver.start(t0);
        driver.tick(t0 + Duration::from_millis(75));
        assert!(driver.value(MorphProperty::ContentAlpha) > 127.5);
        assert!(driver.is_running());
    }

    #[test]
    fn test_tick_without_run_is_noop() {
        let mut driver = driver();
        assert!(!driver.tick(Instant::now()));
        assert_eq!(driver.progress(), None);
    }

    #[test]
    fn test_round_trip_restores_endpoints() {
        let mut driver = driver();
        let g = geometry();

        driver.reconfigure(true);
        let expanding: Vec<Tween> = MorphProperty::ALL
            .iter()
            .map(|p| driver.endpoints(*p))
            .collect();
        driver.reconfigure(false);

        for (property, tween) in MorphProperty::ALL.iter().zip(expanding) {
            let back = driver.endpoints(*property);
            assert_eq!(back.start, tween.end);
            assert_eq!(back.end, tween.start);
            assert_eq!(back.end, property.collapsed(&g));
        }
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let mut driver = driver();
        let t0 = Instant::now();

        driver.reconfigure(true);
        assert!(driver.start(t0));
        driver.tick(t0 + Duration::from_millis(100));
        let progress = driver.progress();

        // Flip back mid-flight: endpoints change, the run keeps its clock
        driver.reconfigure(false);
        assert!(!driver.start(t0 + Duration::from_millis(100)));
        assert_eq!(driver.progress(), progress);
        assert!(driver.is_running());

        driver.tick(t0 + Duration::from_millis(150));
        assert!(!driver.is_running());
        let g = geometry();
        for property in MorphProperty::ALL {
            assert_eq!(driver.value(property), property.collapsed(&g));
        }
    }

    #[test]
    fn test_value_at_does_not_advance() {
        let mut driver = driver();
        let t0 = Instant::now();
        driver.reconfigure(true);
        driver.start(t0);

        let later = driver.value_at(MorphProperty::LeftButtonWidth, t0 + Duration::from_millis(150));
        assert_eq!(later, 180.0);
        assert_eq!(driver.value(MorphProperty::LeftButtonWidth), 384.0);
        assert!(driver.is_running());
    }

    #[test]
    fn test_refresh_endpoints_keeps_progress() {
        let mut driver = driver();
        let t0 = Instant::now();
        driver.reconfigure(true);
        driver.start(t0);
        driver.tick(t0 + Duration::from_secs(1));

        let mut wider = geometry();
        wider.width = 1440.0;
        driver.refresh_endpoints(wider);

        assert!(driver.is_toward_expanded());
        assert_eq!(driver.progress(), Some(1.0));
        assert_eq!(driver.value(MorphProperty::RightButtonWidth), 720.0);
    }

    #[test]
    fn test_finish_jumps_to_end() {
        let mut driver = driver();
        driver.reconfigure(true);
        driver.start(Instant::now());
        driver.finish();

        assert!(!driver.is_running());
        assert_eq!(driver.value(MorphProperty::PlusIconRotation), 90.0);
    }
}
