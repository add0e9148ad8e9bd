//! Text layout seam.
//!
//! This module provides a backend-agnostic trait for breaking a string into
//! lines for a given width and style. Backends like `morph-gui-text` implement
//! it; the widget only consumes the resulting [`TextLayout`].

use crate::color::Color;

/// Horizontal text alignment
///
/// Determines what the x coordinate a layout is drawn at refers to: the left
/// edge of each line, its center, or its right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Style a piece of text is laid out and drawn with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in device pixels
    pub font_size: f32,
    /// Line height as a multiplier of font size
    pub line_height_multiplier: f32,
    pub color: Color,
    pub align: HorizontalAlign,
}

impl TextStyle {
    pub fn new(font_size: f32, color: Color) -> Self {
        Self {
            font_size,
            line_height_multiplier: 1.2,
            color,
            align: HorizontalAlign::Left,
        }
    }

    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    /// Height of a single line in device pixels
    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_height_multiplier
    }
}

/// A single laid out line
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Advance width of the line in device pixels
    pub width: f32,
    /// Top of the line relative to the top of the layout
    pub top: f32,
    pub height: f32,
}

/// Result of laying out a string
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLayout {
    pub lines: Vec<TextLine>,
    pub total_height: f32,
    /// Width the layout was constrained to
    pub max_width: f32,
}

impl TextLayout {
    /// Width of the widest line
    pub fn width(&self) -> f32 {
        self.lines.iter().fold(0.0, |acc, line| acc.max(line.width))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Backend-agnostic text layout.
///
/// Implementors break `text` into lines no wider than `max_width` (wrapping at
/// word boundaries where possible) and report the resulting line metrics. The
/// widget calls this once per label whenever the label text or its available
/// width changes, never per frame.
pub trait TextLayouter {
    fn layout_text(&mut self, text: &str, style: &TextStyle, max_width: f32) -> TextLayout;
}
