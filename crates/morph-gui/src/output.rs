//! Painting seam.
//!
//! Widgets paint through the [`Canvas`] trait. A real backend rasterizes the
//! calls; [`PaintList`] just records them as [`PaintCommand`]s, which is what
//! tests and headless hosts use.

use crate::color::Color;
use crate::measure::{TextLayout, TextStyle};
use crate::primitives::{Point, Rect};
use crate::resources::Bitmap;
use glam::{Affine2, Vec2};

/// Where and how a bitmap is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitmapPlacement {
    /// Destination rect before rotation
    pub dest: Rect,
    /// Clockwise rotation in degrees about the center of `dest`
    pub rotation_degrees: f32,
    /// Opacity, 0 (invisible) to 255 (opaque)
    pub alpha: u8,
}

impl BitmapPlacement {
    pub fn new(dest: Rect) -> Self {
        Self {
            dest,
            rotation_degrees: 0.0,
            alpha: u8::MAX,
        }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Transform from the destination rect's space into screen space
    ///
    /// With y pointing down, a positive angle turns clockwise on screen.
    pub fn transform(&self) -> Affine2 {
        let pivot: Vec2 = self.dest.center().into();
        Affine2::from_translation(pivot)
            * Affine2::from_angle(self.rotation_degrees.to_radians())
            * Affine2::from_translation(-pivot)
    }

    /// Where a point of the unrotated destination rect ends up on screen
    pub fn transform_point(&self, point: Point) -> Point {
        self.transform().transform_point2(point.into()).into()
    }
}

/// Painting primitives a widget needs from its host
pub trait Canvas {
    /// Fill a rect with equal circular corner radii
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Draw a bitmap, optionally rotated and faded
    fn draw_bitmap(&mut self, bitmap: &Bitmap, placement: BitmapPlacement);

    /// Draw laid out text
    ///
    /// `origin.y` is the top of the layout. `origin.x` is the anchor of each
    /// line according to `style.align`: its left edge, center or right edge.
    /// `alpha` multiplies the style color's alpha.
    fn draw_text(&mut self, layout: &TextLayout, origin: Point, style: &TextStyle, alpha: u8);
}

/// A recorded painting call
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    RoundRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    Bitmap {
        width: u32,
        height: u32,
        placement: BitmapPlacement,
    },
    Text {
        lines: Vec<String>,
        origin: Point,
        style: TextStyle,
        alpha: u8,
    },
}

/// Canvas that records every call in order
#[derive(Debug, Clone, Default)]
pub struct PaintList {
    commands: Vec<PaintCommand>,
}

impl PaintList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded round rects, in paint order
    pub fn round_rects(&self) -> impl Iterator<Item = (&Rect, f32, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            PaintCommand::RoundRect {
                rect,
                radius,
                color,
            } => Some((rect, *radius, color)),
            _ => None,
        })
    }

    /// Recorded text draws, in paint order
    pub fn texts(&self) -> impl Iterator<Item = &PaintCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::Text { .. }))
    }

    /// Recorded bitmap placements, in paint order
    pub fn bitmaps(&self) -> impl Iterator<Item = &BitmapPlacement> {
        self.commands.iter().filter_map(|c| match c {
            PaintCommand::Bitmap { placement, .. } => Some(placement),
            _ => None,
        })
    }
}

impl Canvas for PaintList {
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(PaintCommand::RoundRect {
            rect,
            radius,
            color,
        });
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, placement: BitmapPlacement) {
        self.commands.push(PaintCommand::Bitmap {
            width: bitmap.width(),
            height: bitmap.height(),
            placement,
        });
    }

    fn draw_text(&mut self, layout: &TextLayout, origin: Point, style: &TextStyle, alpha: u8) {
        self.commands.push(PaintCommand::Text {
            lines: layout.lines.iter().map(|line| line.text.clone()).collect(),
            origin,
            style: *style,
            alpha,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::css;

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn test_rotation_pivots_on_center() {
        let placement =
            BitmapPlacement::new(Rect::from_min_size([10.0, 10.0], [20.0, 20.0])).with_rotation(90.0);

        // The center is fixed
        assert!(approx(
            placement.transform_point(Point::new(20.0, 20.0)),
            Point::new(20.0, 20.0)
        ));
        // The top-left corner swings to the top-right (clockwise on screen)
        assert!(approx(
            placement.transform_point(Point::new(10.0, 10.0)),
            Point::new(30.0, 10.0)
        ));
    }

    #[test]
    fn test_unrotated_transform_is_identity() {
        let placement = BitmapPlacement::new(Rect::from_min_size([3.0, 4.0], [5.0, 6.0]));
        let p = Point::new(7.5, 1.25);
        assert!(approx(placement.transform_point(p), p));
    }

    #[test]
    fn test_paint_list_records_in_order() {
        let mut list = PaintList::new();
        let rect = Rect::from_ltrb(0.0, 0.0, 10.0, 10.0);
        list.fill_round_rect(rect, 2.0, css::WHITE);
        list.draw_bitmap(&Bitmap::new(4, 4), BitmapPlacement::new(rect).with_alpha(128));
        list.draw_text(
            &TextLayout::default(),
            Point::zero(),
            &TextStyle::new(16.0, css::BLACK),
            255,
        );

        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], PaintCommand::RoundRect { .. }));
        assert_eq!(list.bitmaps().next().map(|p| p.alpha), Some(128));
        assert_eq!(list.texts().count(), 1);

        list.clear();
        assert!(list.is_empty());
    }
}
