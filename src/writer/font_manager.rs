//! Font management for PDF generation.
//!
//! This module provides Base-14 font metrics for accurate text positioning
//! and line wrapping. Widths and vertical metrics come from the Adobe AFM
//! files; the line gap is the part of the font bounding box not covered
//! by ascender and descender.

use super::win_ansi;
use std::collections::HashMap;

/// Advance widths for printable ASCII (0x20..=0x7E) in Helvetica.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Advance widths for printable ASCII (0x20..=0x7E) in Helvetica-Bold.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

/// Font manager for PDF generation.
///
/// Manages the Base-14 fonts the composer uses and provides metrics for
/// text layout.
#[derive(Debug, Clone)]
pub struct FontManager {
    /// Registered fonts (name -> font info)
    fonts: HashMap<String, FontInfo>,
    /// Font used when a lookup misses
    fallback: FontInfo,
}

impl FontManager {
    /// Create a new font manager with the supported Base-14 fonts.
    pub fn new() -> Self {
        let mut manager = Self {
            fonts: HashMap::new(),
            fallback: FontInfo::base14("Helvetica"),
        };

        for name in ["Helvetica", "Helvetica-Bold", "Courier", "Courier-Bold"] {
            manager.register_font(FontInfo::base14(name));
        }
        manager
    }

    fn register_font(&mut self, font: FontInfo) {
        self.fonts.insert(font.name.clone(), font);
    }

    /// Get font info by name.
    pub fn get_font(&self, name: &str) -> Option<&FontInfo> {
        self.fonts.get(name)
    }

    /// Get font info, falling back to Helvetica if not found.
    pub fn get_font_or_default(&self, name: &str) -> &FontInfo {
        self.get_font(name).unwrap_or(&self.fallback)
    }

    /// Calculate the width of a string in the given font at the given size.
    ///
    /// Returns width in points.
    pub fn text_width(&self, text: &str, font_name: &str, font_size: f32) -> f32 {
        self.get_font_or_default(font_name).text_width(text, font_size)
    }

    /// Calculate the width of a single character.
    pub fn char_width(&self, ch: char, font_name: &str, font_size: f32) -> f32 {
        self.get_font_or_default(font_name).char_width(ch) * font_size / 1000.0
    }
}

impl Default for FontManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Information about a font.
#[derive(Debug, Clone)]
pub struct FontInfo {
    /// Font name (e.g., "Helvetica-Bold")
    pub name: String,
    /// Character widths in 1/1000 of font size
    widths: FontWidths,
    /// Ascender height (above baseline)
    pub ascender: f32,
    /// Descender depth (below baseline, negative)
    pub descender: f32,
    /// Line gap (extra space between lines)
    pub line_gap: f32,
    /// Cap height (height of capital letters)
    pub cap_height: f32,
}

impl FontInfo {
    fn base14(name: &str) -> Self {
        // (ascender, descender, line_gap, cap_height)
        let (ascender, descender, line_gap, cap_height) = match name {
            "Helvetica-Bold" => (718.0, -207.0, 265.0, 718.0),
            "Courier" => (629.0, -157.0, 269.0, 562.0),
            "Courier-Bold" => (626.0, -142.0, 283.0, 562.0),
            _ => (718.0, -207.0, 231.0, 718.0),
        };
        let widths = match name {
            "Helvetica-Bold" => FontWidths::Proportional(&HELVETICA_BOLD_WIDTHS),
            "Courier" | "Courier-Bold" => FontWidths::Monospace(600.0),
            _ => FontWidths::Proportional(&HELVETICA_WIDTHS),
        };

        Self {
            name: name.to_string(),
            widths,
            ascender,
            descender,
            line_gap,
            cap_height,
        }
    }

    /// Whether this is a bold face.
    pub fn is_bold(&self) -> bool {
        self.name.ends_with("-Bold")
    }

    /// Calculate the width of text in this font.
    ///
    /// Returns width in points for the given font size.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let width_units: f32 = text.chars().map(|c| self.char_width(c)).sum();
        width_units * font_size / 1000.0
    }

    /// Get the width of a single character in font units (1/1000 of em).
    pub fn char_width(&self, ch: char) -> f32 {
        match &self.widths {
            FontWidths::Monospace(width) => *width,
            FontWidths::Proportional(table) => proportional_width(table, self.is_bold(), ch),
        }
    }

    /// Distance from the top of a line box to the baseline.
    pub fn ascent(&self, font_size: f32) -> f32 {
        self.ascender * font_size / 1000.0
    }

    /// Height of one line at the given size, optionally including the
    /// font's line gap.
    pub fn line_height(&self, font_size: f32, include_gap: bool) -> f32 {
        let gap = if include_gap { self.line_gap } else { 0.0 };
        (gap + self.ascender - self.descender) * font_size / 1000.0
    }
}

/// Font width data.
#[derive(Debug, Clone)]
enum FontWidths {
    /// Proportional font with per-character widths for printable ASCII
    Proportional(&'static [u16; 95]),
    /// Monospace font with fixed width
    Monospace(f32),
}

fn proportional_width(table: &[u16; 95], bold: bool, ch: char) -> f32 {
    if (' '..='~').contains(&ch) {
        return table[ch as usize - 0x20] as f32;
    }
    match ch {
        '\u{00B7}' => 278.0, // periodcentered
        '\u{00D7}' => 584.0, // multiply
        '\u{2014}' => 1000.0,
        '\u{2013}' => 556.0,
        '\u{2022}' => 350.0,
        '\u{2019}' | '\u{2018}' => {
            if bold {
                278.0
            } else {
                222.0
            }
        },
        '\u{201C}' | '\u{201D}' => {
            if bold {
                500.0
            } else {
                333.0
            }
        },
        _ if win_ansi::unicode_to_winansi(ch).is_some() => 556.0,
        // Shown as the replacement byte
        _ => table[(win_ansi::REPLACEMENT - 0x20) as usize] as f32,
    }
}

/// Text layout helper for calculating text positioning.
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    /// Font manager reference
    font_manager: FontManager,
}

impl TextLayout {
    /// Create a new text layout helper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate wrapped lines for text within a given width.
    ///
    /// Words are packed greedily; a word wider than `max_width` on its own
    /// is split between characters. Explicit newlines start a new line.
    /// Returns a vector of (line_text, line_width) pairs, never empty.
    pub fn wrap_text(
        &self,
        text: &str,
        font_name: &str,
        font_size: f32,
        max_width: f32,
    ) -> Vec<(String, f32)> {
        let mut lines = Vec::new();
        let space_width = self.font_manager.char_width(' ', font_name, font_size);

        for paragraph in text.split('\n') {
            let mut current_line = String::new();
            let mut current_width = 0.0;

            for word in paragraph.split_whitespace() {
                let word_width = self.font_manager.text_width(word, font_name, font_size);

                if current_line.is_empty() && word_width > max_width {
                    for piece in self.split_word(word, font_name, font_size, max_width) {
                        if !current_line.is_empty() {
                            lines.push((std::mem::take(&mut current_line), current_width));
                        }
                        current_width = self.font_manager.text_width(&piece, font_name, font_size);
                        current_line = piece;
                    }
                } else if current_line.is_empty() {
                    current_line = word.to_string();
                    current_width = word_width;
                } else if current_width + space_width + word_width <= max_width {
                    current_line.push(' ');
                    current_line.push_str(word);
                    current_width += space_width + word_width;
                } else {
                    lines.push((std::mem::take(&mut current_line), current_width));
                    if word_width > max_width {
                        for piece in self.split_word(word, font_name, font_size, max_width) {
                            if !current_line.is_empty() {
                                lines.push((std::mem::take(&mut current_line), current_width));
                            }
                            current_width =
                                self.font_manager.text_width(&piece, font_name, font_size);
                            current_line = piece;
                        }
                    } else {
                        current_line = word.to_string();
                        current_width = word_width;
                    }
                }
            }

            if !current_line.is_empty() {
                lines.push((current_line, current_width));
            }
        }

        if lines.is_empty() {
            lines.push((String::new(), 0.0));
        }

        lines
    }

    /// Split a single over-wide word into pieces that each fit `max_width`
    /// (every piece holds at least one character).
    fn split_word(&self, word: &str, font_name: &str, font_size: f32, max_width: f32) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut piece = String::new();
        let mut width = 0.0;

        for ch in word.chars() {
            let w = self.font_manager.char_width(ch, font_name, font_size);
            if !piece.is_empty() && width + w > max_width {
                pieces.push(std::mem::take(&mut piece));
                width = 0.0;
            }
            piece.push(ch);
            width += w;
        }
        if !piece.is_empty() {
            pieces.push(piece);
        }
        pieces
    }

    /// Get the font manager.
    pub fn font_manager(&self) -> &FontManager {
        &self.font_manager
    }
}
