//! Text measurement and line placement shared by all surfaces.

use super::{TextAlign, TextOptions, TextStyle};
use crate::writer::TextLayout;

/// One wrapped line, positioned relative to the text box.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Line content
    pub text: String,
    /// Absolute left edge after alignment
    pub x: f32,
    /// Offset of the line box top from the block top
    pub top: f32,
    /// Rendered width
    pub width: f32,
}

/// Result of flowing a string into a box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Lines in drawing order
    pub lines: Vec<PlacedLine>,
    /// Distance from a line box top to its baseline
    pub ascent: f32,
    /// Total height consumed
    pub height: f32,
}

/// Font metrics front-end for surfaces.
#[derive(Debug, Clone, Default)]
pub struct TextMetrics {
    layout: TextLayout,
}

impl TextMetrics {
    /// Create metrics backed by the Base-14 tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Height of one line of `style`.
    pub fn line_height(&self, style: &TextStyle, include_gap: bool) -> f32 {
        self.layout
            .font_manager()
            .get_font_or_default(style.face.base_font())
            .line_height(style.size, include_gap)
    }

    /// Width of `text` on a single line.
    pub fn text_width(&self, text: &str, style: &TextStyle) -> f32 {
        self.layout
            .font_manager()
            .text_width(text, style.face.base_font(), style.size)
    }

    /// Wrap and align `text` starting at horizontal position `x`.
    ///
    /// Each line advances by the font's line height (gap included) plus
    /// `options.line_gap`. Without an explicit width the text wraps at the
    /// right page edge. A single-line draw never wraps and never starts
    /// left of `x`, even when it is wider than the box.
    pub fn layout(
        &self,
        text: &str,
        x: f32,
        page_width: f32,
        style: &TextStyle,
        options: &TextOptions,
    ) -> TextBlock {
        let font_name = style.face.base_font();
        let font = self.layout.font_manager().get_font_or_default(font_name);
        let box_width = options.width.unwrap_or(page_width - x).max(0.0);
        let advance = font.line_height(style.size, true) + options.line_gap;

        let wrapped = if options.single_line {
            vec![(text.to_string(), self.text_width(text, style))]
        } else {
            self.layout.wrap_text(text, font_name, style.size, box_width)
        };

        let lines: Vec<PlacedLine> = wrapped
            .into_iter()
            .enumerate()
            .map(|(i, (line, width))| {
                let offset = match options.align {
                    TextAlign::Left => 0.0,
                    TextAlign::Center => (box_width - width) / 2.0,
                    TextAlign::Right => box_width - width,
                }
                .max(0.0);
                PlacedLine {
                    text: line,
                    x: x + offset,
                    top: i as f32 * advance,
                    width,
                }
            })
            .collect();

        TextBlock {
            height: lines.len() as f32 * advance,
            ascent: font.ascent(style.size),
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FontFace;
    use crate::writer::Color;

    const BODY: TextStyle = TextStyle::new(FontFace::Regular, 10.0, Color::black());

    #[test]
    fn test_single_line_height() {
        let metrics = TextMetrics::new();
        let block = metrics.layout("Short", 40.0, 595.0, &BODY, &TextOptions::new());
        assert_eq!(block.lines.len(), 1);
        assert!((block.height - 11.56).abs() < 0.001);
        assert!((block.ascent - 7.18).abs() < 0.001);
        assert_eq!(block.lines[0].x, 40.0);
    }

    #[test]
    fn test_line_gap_is_added_per_line() {
        let metrics = TextMetrics::new();
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let opts = TextOptions::new().width(80.0).line_gap(2.0);
        let block = metrics.layout(text, 0.0, 595.0, &BODY, &opts);

        assert!(block.lines.len() > 2);
        let expected = block.lines.len() as f32 * (11.56 + 2.0);
        assert!((block.height - expected).abs() < 0.01);
        assert!((block.lines[1].top - 13.56).abs() < 0.001);
    }

    #[test]
    fn test_center_alignment() {
        let metrics = TextMetrics::new();
        let width = metrics.text_width("GIC", &BODY);
        let block = metrics.layout("GIC", 100.0, 595.0, &BODY, &TextOptions::centered(60.0));
        assert!((block.lines[0].x - (100.0 + (60.0 - width) / 2.0)).abs() < 0.001);
    }

    #[test]
    fn test_right_alignment() {
        let metrics = TextMetrics::new();
        let block = metrics.layout(
            "end",
            0.0,
            595.0,
            &BODY,
            &TextOptions::new().width(100.0).align(TextAlign::Right),
        );
        let line = &block.lines[0];
        assert!((line.x + line.width - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_single_line_keeps_spaces_and_length() {
        let metrics = TextMetrics::new();
        let text = format!(" a  b {} ", "x".repeat(200));
        let opts = TextOptions::centered(100.0).single_line();
        let block = metrics.layout(&text, 40.0, 595.0, &BODY, &opts);

        assert_eq!(block.lines.len(), 1);
        assert_eq!(block.lines[0].text, text);
        assert_eq!(block.lines[0].x, 40.0);
        assert!((block.height - 11.56).abs() < 0.001);
    }

    #[test]
    fn test_default_width_reaches_page_edge() {
        let metrics = TextMetrics::new();
        let text = "word ".repeat(60);
        let block = metrics.layout(&text, 500.0, 595.0, &BODY, &TextOptions::new());
        for line in &block.lines {
            assert!(line.x + line.width <= 595.0 + 0.001);
        }
    }
}
