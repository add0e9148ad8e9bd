//! Easing curves and timed transitions.

/// Easing function type: takes progress (0.0 to 1.0) and returns eased value (0.0 to 1.0)
pub type EasingFn = fn(f32) -> f32;

/// Linear interpolation (no easing)
pub fn linear(t: f32) -> f32 {
    t
}

/// Deceleration curve with a configurable factor
///
/// `1 - (1 - t)^(2 * factor)`. A factor of 1.0 is a quadratic ease out,
/// larger factors decelerate harder towards the end.
pub fn decelerate_with_factor(t: f32, factor: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powf(2.0 * factor)
}

/// Deceleration curve with factor 1.5 (cubic ease out)
pub fn decelerate(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * t + 1.0
}

/// Linearly interpolate between two f32 values
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// How long a timed animation runs and how its progress is eased
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    /// Duration in seconds
    pub duration: f32,

    /// Easing function to apply
    pub easing: EasingFn,
}

impl Transition {
    pub fn new(duration: f32, easing: EasingFn) -> Self {
        Self { duration, easing }
    }

    /// No animation; every run completes on its first tick
    pub fn instant() -> Self {
        Self {
            duration: 0.0,
            easing: linear,
        }
    }

    /// 150ms with the factor 1.5 deceleration curve
    pub fn morph() -> Self {
        Self {
            duration: 0.15,
            easing: decelerate,
        }
    }

    /// Eased progress after `elapsed` seconds, clamped to [0, 1]
    ///
    /// A zero-length transition is always complete. The end of the run
    /// reports exactly 1.0 whatever the easing curve returns there.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let t = (elapsed / self.duration).clamp(0.0, 1.0);
        if t >= 1.0 {
            1.0
        } else {
            (self.easing)(t)
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::morph()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decelerate_matches_factor_form() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let a = decelerate(t);
            let b = decelerate_with_factor(t, 1.5);
            assert!((a - b).abs() < 1e-5, "t={t}: {a} vs {b}");
        }
    }

    #[test]
    fn test_decelerate_is_monotonic() {
        let mut previous = decelerate(0.0);
        assert_eq!(previous, 0.0);
        for i in 1..=100 {
            let value = decelerate(i as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(previous, 1.0);
        // Harder than the quadratic curve
        assert!(decelerate(0.5) > decelerate_with_factor(0.5, 1.0));
    }

    #[test]
    fn test_progress_clamps() {
        let transition = Transition::morph();
        assert_eq!(transition.progress(-1.0), 0.0);
        assert_eq!(transition.progress(0.0), 0.0);
        assert_eq!(transition.progress(0.15), 1.0);
        assert_eq!(transition.progress(10.0), 1.0);
        assert_eq!(Transition::instant().progress(0.0), 1.0);
    }

    #[test]
    fn test_linear_progress() {
        let transition = Transition::new(2.0, linear);
        assert_eq!(transition.progress(1.0), 0.5);
    }

    #[test]
    fn test_lerp_f32() {
        assert_eq!(lerp_f32(0.0, 100.0, 0.0), 0.0);
        assert_eq!(lerp_f32(0.0, 100.0, 0.5), 50.0);
        assert_eq!(lerp_f32(0.0, 100.0, 1.0), 100.0);
    }
}
