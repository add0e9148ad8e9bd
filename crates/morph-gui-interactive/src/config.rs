//! Construction-time attributes of the morphing button

use morph_gui::{
    catppuccin::mocha, css, dp_to_px, ensure_dimension, ensure_non_negative, sp_to_px, Color,
    ColorId, ConfigError, ConfigResult, DeviceMetrics, Resources, Transition,
};
use morph_gui_macros::WithBuilders;

/// Attributes of a morphing button
///
/// Sizes are in density-independent pixels (dp), font sizes in
/// scale-independent pixels (sp). Colors left unset fall back to the resource
/// provider, then to built-in defaults.
///
/// # Example
///
/// ```ignore
/// let config = MorphingButtonConfig::default()
///     .with_label("Adult")
///     .with_color(mocha::MAUVE)
///     .with_button_height(64.0);
/// ```
#[derive(Debug, Clone, WithBuilders)]
pub struct MorphingButtonConfig {
    /// Initial type label, drawn on the increment button
    #[with_builders(some, into)]
    pub label: Option<String>,
    /// Base fill color of both buttons
    #[with_builders(some)]
    pub color: Option<Color>,
    /// Type label color
    #[with_builders(some)]
    pub label_color: Option<Color>,
    /// Quantity text color
    #[with_builders(some)]
    pub quantity_color: Option<Color>,
    /// Height of the wide button (dp)
    pub button_height: f32,
    /// Diameter of the round decrement button (dp)
    pub circular_button_diameter: f32,
    /// Corner radius of the rectangular buttons (dp)
    pub corner_radius: f32,
    /// Edge length of the square icons (dp)
    pub icon_size: f32,
    /// Type label font size (sp)
    pub label_font_size: f32,
    /// Quantity font size (sp)
    pub quantity_font_size: f32,
    /// Multiplier applied to the base color while a button is held
    pub pressed_factor: f32,
    /// Timing of the morph
    pub transition: Transition,
}

impl Default for MorphingButtonConfig {
    fn default() -> Self {
        Self {
            label: None,
            color: None,
            label_color: None,
            quantity_color: None,
            button_height: 80.0,
            circular_button_diameter: 60.0,
            corner_radius: 4.0,
            icon_size: 30.0,
            label_font_size: 16.0,
            quantity_font_size: 16.0,
            pressed_factor: 0.8,
            transition: Transition::morph(),
        }
    }
}

/// Device-pixel sizes, converted once at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDimensions {
    pub button_height: f32,
    pub circular_diameter: f32,
    pub corner_radius: f32,
    pub icon_size: f32,
    pub label_font_size: f32,
    pub quantity_font_size: f32,
}

/// Final colors after resource and default fallback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColors {
    pub button: Color,
    pub label: Color,
    pub quantity: Color,
}

impl MorphingButtonConfig {
    /// Check every attribute for a usable value
    pub fn validate(&self) -> ConfigResult<()> {
        let height = ensure_dimension("button_height", self.button_height)?;
        let diameter = ensure_dimension("circular_button_diameter", self.circular_button_diameter)?;
        ensure_non_negative("corner_radius", self.corner_radius)?;
        ensure_dimension("icon_size", self.icon_size)?;
        ensure_dimension("label_font_size", self.label_font_size)?;
        ensure_dimension("quantity_font_size", self.quantity_font_size)?;

        if diameter > height {
            return Err(ConfigError::CircleExceedsHeight { diameter, height });
        }
        if !(0.0..=1.0).contains(&self.pressed_factor) {
            return Err(ConfigError::PressedFactorOutOfRange(self.pressed_factor));
        }
        let duration = self.transition.duration;
        if !duration.is_finite() || duration < 0.0 {
            return Err(ConfigError::InvalidDuration(duration));
        }
        Ok(())
    }

    /// Validate and convert sizes to device pixels for `metrics`
    pub fn resolve(&self, metrics: &DeviceMetrics) -> ConfigResult<ResolvedDimensions> {
        self.validate()?;
        Ok(ResolvedDimensions {
            button_height: dp_to_px(metrics, self.button_height),
            circular_diameter: dp_to_px(metrics, self.circular_button_diameter),
            corner_radius: dp_to_px(metrics, self.corner_radius),
            icon_size: dp_to_px(metrics, self.icon_size),
            label_font_size: sp_to_px(metrics, self.label_font_size),
            quantity_font_size: sp_to_px(metrics, self.quantity_font_size),
        })
    }

    /// Pick each color from the config, then `resources`, then the defaults
    pub fn resolve_colors(&self, resources: &dyn Resources) -> ResolvedColors {
        let pick = |configured: Option<Color>, id: ColorId, fallback: Color| {
            configured
                .or_else(|| resources.load_color(id))
                .unwrap_or(fallback)
        };
        ResolvedColors {
            button: pick(self.color, ColorId::Button, mocha::SAPPHIRE),
            label: pick(self.label_color, ColorId::Label, css::WHITE),
            quantity: pick(self.quantity_color, ColorId::Quantity, css::BLACK),
        }
    }
}
