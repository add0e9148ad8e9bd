use thiserror::Error;

/// Invalid construction-time widget attributes
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a finite size in range (got {value})")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("circular button diameter {diameter} exceeds button height {height}")]
    CircleExceedsHeight { diameter: f32, height: f32 },
    #[error("pressed color factor must be within [0, 1] (got {0})")]
    PressedFactorOutOfRange(f32),
    #[error("transition duration must be finite and non-negative (got {0})")]
    InvalidDuration(f32),
}

/// Result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Check that `value` is usable as a size
pub fn ensure_dimension(name: &'static str, value: f32) -> ConfigResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidDimension { name, value })
    }
}

/// Check that `value` is usable as a size that may be zero (e.g. a corner radius)
pub fn ensure_non_negative(name: &'static str, value: f32) -> ConfigResult<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dimension() {
        assert_eq!(ensure_dimension("height", 80.0), Ok(80.0));
        assert!(matches!(
            ensure_dimension("height", 0.0),
            Err(ConfigError::InvalidDimension { name: "height", .. })
        ));
        assert!(ensure_dimension("height", f32::NAN).is_err());
        assert!(ensure_dimension("height", f32::INFINITY).is_err());

        assert_eq!(ensure_non_negative("corner_radius", 0.0), Ok(0.0));
        assert!(ensure_non_negative("corner_radius", -1.0).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::CircleExceedsHeight {
            diameter: 90.0,
            height: 80.0,
        };
        assert_eq!(
            err.to_string(),
            "circular button diameter 90 exceeds button height 80"
        );
    }
}
