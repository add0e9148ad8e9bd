//! # morph-gui-text
//!
//! Text layout backends for morph-gui.
//!
//! With the default `cosmic` feature this crate provides [`CosmicLayouter`],
//! a [`TextLayouter`](morph_gui::TextLayouter) that shapes and wraps text with `cosmic-text`. Only line
//! metrics are produced here; drawing glyphs is up to the canvas.

use morph_gui::{TextLayout, TextLine, TextStyle};

#[cfg(feature = "cosmic")]
pub use cosmic::CosmicLayouter;

/// Byte range of `text` covered by glyph ranges `(start, end)`
///
/// Wrapped lines only know which glyphs they hold; the covered range gives the
/// line's own text. Returns `None` for a line without glyphs.
pub fn covered_range(
    text: &str,
    glyphs: impl IntoIterator<Item = (usize, usize)>,
) -> Option<std::ops::Range<usize>> {
    let (start, end) = glyphs
        .into_iter()
        .fold(None, |acc: Option<(usize, usize)>, (start, end)| match acc {
            Some((lo, hi)) => Some((lo.min(start), hi.max(end))),
            None => Some((start, end)),
        })?;
    let end = end.min(text.len());
    (start <= end && text.is_char_boundary(start) && text.is_char_boundary(end))
        .then_some(start..end)
}

/// Layout for text that produced no lines at all
///
/// Keeps one line's worth of height so an empty label still centers.
pub fn empty_layout(style: &TextStyle, max_width: f32) -> TextLayout {
    TextLayout {
        lines: vec![TextLine {
            text: String::new(),
            width: 0.0,
            top: 0.0,
            height: style.line_height(),
        }],
        total_height: style.line_height(),
        max_width,
    }
}

#[cfg(feature = "cosmic")]
mod cosmic {
    use super::{covered_range, empty_layout};
    use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
    use morph_gui::{TextLayout, TextLayouter, TextLine, TextStyle};

    /// [`TextLayouter`] backed by a `cosmic-text` font system
    ///
    /// Loading system fonts is slow, so create one layouter and keep it.
    pub struct CosmicLayouter {
        font_system: FontSystem,
    }

    impl CosmicLayouter {
        /// Create a layouter using the system fonts
        pub fn new() -> Self {
            Self::with_font_system(FontSystem::new())
        }

        pub fn with_font_system(font_system: FontSystem) -> Self {
            Self { font_system }
        }

        pub fn font_system_mut(&mut self) -> &mut FontSystem {
            &mut self.font_system
        }
    }

    impl Default for CosmicLayouter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TextLayouter for CosmicLayouter {
        fn layout_text(&mut self, text: &str, style: &TextStyle, max_width: f32) -> TextLayout {
            let metrics = Metrics::new(style.font_size, style.line_height());
            let mut buffer = Buffer::new(&mut self.font_system, metrics);

            // A non-positive width would wrap after every glyph
            let wrap_width = (max_width > 0.0).then_some(max_width);
            buffer.set_size(&mut self.font_system, wrap_width, None);
            buffer.set_text(
                &mut self.font_system,
                text,
                &Attrs::new().family(Family::SansSerif),
                Shaping::Advanced,
                None,
            );
            buffer.shape_until_scroll(&mut self.font_system, true);

            let mut lines = Vec::new();
            let mut total_height = 0.0f32;
            for run in buffer.layout_runs() {
                let range = covered_range(
                    run.text,
                    run.glyphs.iter().map(|glyph| (glyph.start, glyph.end)),
                );
                let line_text = range.map_or_else(String::new, |range| {
                    run.text[range].trim_end().to_string()
                });
                lines.push(TextLine {
                    text: line_text,
                    width: run.line_w,
                    top: run.line_top,
                    height: run.line_height,
                });
                total_height = total_height.max(run.line_top + run.line_height);
            }

            if lines.is_empty() {
                return empty_layout(style, max_width);
            }

            log::trace!(
                "laid out {:?} into {} line(s), {total_height}px high",
                text,
                lines.len()
            );
            TextLayout {
                lines,
                total_height,
                max_width,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_gui::css;

    #[test]
    fn test_covered_range() {
        let text = "hello world";
        assert_eq!(covered_range(text, [(6, 7), (7, 11)]), Some(6..11));
        assert_eq!(covered_range(text, [(0, 1), (4, 5), (2, 3)]), Some(0..5));
        assert_eq!(covered_range(text, std::iter::empty()), None);
        // Clamped to the text
        assert_eq!(covered_range(text, [(6, 40)]), Some(6..11));
    }

    #[test]
    fn test_covered_range_respects_char_boundaries() {
        let text = "añb";
        // 'ñ' spans bytes 1..3
        assert_eq!(covered_range(text, [(1, 3)]), Some(1..3));
        assert_eq!(covered_range(text, [(2, 3)]), None);
    }

    #[test]
    fn test_empty_layout_keeps_line_height() {
        let style = TextStyle::new(20.0, css::BLACK);
        let layout = empty_layout(&style, 100.0);
        assert_eq!(layout.total_height, style.line_height());
        assert_eq!(layout.lines.len(), 1);
        assert_eq!(layout.width(), 0.0);
        assert_eq!(layout.max_width, 100.0);
    }
}
