//! Per-frame paint geometry derived from the animated values

use crate::animation::{MorphGeometry, MorphProperty, MorphValues};
use crate::state::HitRegions;
use morph_gui::{BitmapPlacement, Rect};

/// Everything paint needs to place for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    /// Decrement button
    pub left: Rect,
    pub left_radius: f32,
    /// Increment button
    pub right: Rect,
    pub right_radius: f32,
    /// Plus icon, before bitmap size is known to the canvas
    pub plus_icon: BitmapPlacement,
    /// Minus icon bounds, used while expanded
    pub minus_icon: Rect,
    /// Center anchor of the quantity label
    pub quantity_label_x: f32,
    /// Anchor of the type label; its meaning follows the label's alignment
    pub type_label_x: f32,
    pub content_alpha: u8,
}

impl FrameGeometry {
    pub fn derive(values: &MorphValues, geometry: &MorphGeometry) -> Self {
        let (width, height) = (geometry.width, geometry.height);

        let padding = (height - values.left_button_height) / 2.0;
        let left = Rect::from_min_size(
            [padding, padding],
            [values.left_button_width, values.left_button_height],
        );
        let right = Rect::from_ltrb(width - values.right_button_width, 0.0, width, height);

        let content_alpha = alpha_u8(values.content_alpha);
        let icon_y = (height - geometry.icon_size) / 2.0;
        let plus_icon = BitmapPlacement::new(Rect::from_min_size(
            [values.plus_icon_x.trunc(), icon_y],
            [geometry.icon_size, geometry.icon_size],
        ))
        .with_rotation(values.plus_icon_rotation)
        .with_alpha(content_alpha);

        let minus_icon = Rect::from_min_size(
            [icon_y, icon_y],
            [geometry.icon_size, geometry.icon_size],
        );

        let gap = width - values.left_button_width - values.right_button_width;

        Self {
            left,
            left_radius: values.left_button_radius,
            right,
            right_radius: geometry.corner_radius,
            plus_icon,
            minus_icon,
            quantity_label_x: gap / 2.0 + values.left_button_width,
            type_label_x: values.type_label_x,
            content_alpha,
        }
    }

    pub fn hit_regions(&self) -> HitRegions {
        HitRegions {
            left: self.left,
            right: self.right,
        }
    }
}

/// Clamp an animated alpha into a paint alpha, truncating the fraction
pub fn alpha_u8(alpha: f32) -> u8 {
    if alpha.is_nan() {
        return 0;
    }
    alpha.clamp(0.0, 255.0) as u8
}

/// Top of a text block of `text_height` centered in `height`
pub fn label_top(height: f32, text_height: f32) -> f32 {
    (height - text_height) / 2.0
}

/// Width available to the quantity label between the expanded buttons
pub fn quantity_label_width(screen_width: f32, geometry: &MorphGeometry) -> f32 {
    let right = MorphProperty::RightButtonWidth.expanded(geometry);
    let left = MorphProperty::LeftButtonWidth.expanded(geometry);
    let height_delta =
        geometry.button_height - MorphProperty::LeftButtonHeight.expanded(geometry);
    (screen_width - right - left - height_delta / 2.0).max(0.0).trunc()
}

/// Width available to the type label beside the plus icon
pub fn type_label_width(geometry: &MorphGeometry, icon_width: u32) -> f32 {
    let right = MorphProperty::RightButtonWidth.expanded(geometry);
    (right - icon_width as f32).max(0.0).trunc()
}
