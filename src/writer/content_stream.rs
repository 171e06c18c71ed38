//! PDF content stream builder.
//!
//! Builds PDF content streams containing graphics and text operators
//! as described in ISO 32000-1 §8 and §9.
//!
//! Coordinates here are native PDF user space (origin bottom-left); the
//! canvas layer is responsible for flipping top-left layout coordinates.

use super::color::Color;
use super::win_ansi;
use crate::error::{Error, Result};
use std::io::Write;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Save graphics state (q)
    SaveState,
    /// Restore graphics state (Q)
    RestoreState,
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font resource and size (Tf)
    SetFont(String, f32),
    /// Set text matrix (Tm)
    SetTextMatrix(f32, f32, f32, f32, f32, f32),
    /// Show text (Tj), WinAnsi-encoded literal string
    ShowText(String),
    /// Set fill color RGB (rg)
    SetFillColorRGB(f32, f32, f32),
    /// Set stroke color RGB (RG)
    SetStrokeColorRGB(f32, f32, f32),
    /// Set line width (w)
    SetLineWidth(f32),
    /// Move to (m)
    MoveTo(f32, f32),
    /// Line to (l)
    LineTo(f32, f32),
    /// Curve to (c)
    CurveTo(f32, f32, f32, f32, f32, f32),
    /// Rectangle (re)
    Rectangle(f32, f32, f32, f32),
    /// Close path (h)
    ClosePath,
    /// Stroke (S)
    Stroke,
    /// Fill (f)
    Fill,
    /// Set graphics state from ExtGState dictionary (gs)
    SetExtGState(String),
}

/// Font selection cached so repeated `Tf` operators can be skipped.
#[derive(Debug, Clone, Default, PartialEq)]
struct FontState {
    name: Option<String>,
    size: f32,
}

/// Builder for PDF content streams.
///
/// Creates the byte sequence for a PDF content stream from operations.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    /// Operations in the stream
    operations: Vec<ContentStreamOp>,
    /// Current font selection
    font: FontState,
    /// Font selections saved by `q`, restored by `Q`
    saved_fonts: Vec<FontState>,
    /// Whether we're in a text object
    in_text_object: bool,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Operations recorded so far.
    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }

    /// Number of currently open `q` operators.
    pub fn state_depth(&self) -> usize {
        self.saved_fonts.len()
    }

    /// Begin a text object.
    pub fn begin_text(&mut self) -> &mut Self {
        if !self.in_text_object {
            self.op(ContentStreamOp::BeginText);
            self.in_text_object = true;
        }
        self
    }

    /// End a text object.
    pub fn end_text(&mut self) -> &mut Self {
        if self.in_text_object {
            self.op(ContentStreamOp::EndText);
            self.in_text_object = false;
        }
        self
    }

    /// Set font for text operations.
    pub fn set_font(&mut self, resource_name: &str, size: f32) -> &mut Self {
        if self.font.name.as_deref() != Some(resource_name) || self.font.size != size {
            self.op(ContentStreamOp::SetFont(resource_name.to_string(), size));
            self.font = FontState {
                name: Some(resource_name.to_string()),
                size,
            };
        }
        self
    }

    /// Add text with its baseline starting at `(x, y)`.
    pub fn text(&mut self, text: &str, x: f32, y: f32) -> &mut Self {
        self.begin_text();
        self.op(ContentStreamOp::SetTextMatrix(1.0, 0.0, 0.0, 1.0, x, y));
        self.op(ContentStreamOp::ShowText(text.to_string()));
        self
    }

    /// Set fill color.
    pub fn fill_color(&mut self, color: Color) -> &mut Self {
        self.op(ContentStreamOp::SetFillColorRGB(color.r, color.g, color.b))
    }

    /// Set stroke color.
    pub fn stroke_color(&mut self, color: Color) -> &mut Self {
        self.op(ContentStreamOp::SetStrokeColorRGB(color.r, color.g, color.b))
    }

    /// Set line width.
    pub fn set_line_width(&mut self, width: f32) -> &mut Self {
        self.op(ContentStreamOp::SetLineWidth(width))
    }

    /// Move to a point (start a new subpath).
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::MoveTo(x, y))
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::LineTo(x, y))
    }

    /// Draw a Bézier curve.
    pub fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> &mut Self {
        self.op(ContentStreamOp::CurveTo(x1, y1, x2, y2, x3, y3))
    }

    /// Draw a rectangle.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.op(ContentStreamOp::Rectangle(x, y, width, height))
    }

    /// Close path.
    pub fn close_path(&mut self) -> &mut Self {
        self.op(ContentStreamOp::ClosePath)
    }

    /// Stroke the current path.
    pub fn stroke(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Stroke)
    }

    /// Fill the current path.
    pub fn fill(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Fill)
    }

    /// Save the current graphics state.
    pub fn save_state(&mut self) -> &mut Self {
        self.end_text();
        self.saved_fonts.push(self.font.clone());
        self.op(ContentStreamOp::SaveState)
    }

    /// Restore the previous graphics state.
    ///
    /// A restore without a matching save is recorded anyway; `build()`
    /// reports the imbalance.
    pub fn restore_state(&mut self) -> &mut Self {
        self.end_text();
        match self.saved_fonts.pop() {
            Some(font) => self.font = font,
            None => self.font = FontState::default(),
        }
        self.op(ContentStreamOp::RestoreState)
    }

    /// Set extended graphics state (for transparency).
    ///
    /// The `gs_name` should reference an ExtGState resource defined in the page.
    pub fn set_ext_gstate(&mut self, gs_name: &str) -> &mut Self {
        self.op(ContentStreamOp::SetExtGState(gs_name.to_string()))
    }

    /// Draw a circle.
    ///
    /// Uses four Bézier curves to approximate the circle.
    pub fn circle(&mut self, cx: f32, cy: f32, radius: f32) -> &mut Self {
        let k = 0.552_284_8; // 4/3 * (sqrt(2) - 1)
        let c = radius * k;

        self.move_to(cx + radius, cy)
            .curve_to(cx + radius, cy + c, cx + c, cy + radius, cx, cy + radius)
            .curve_to(cx - c, cy + radius, cx - radius, cy + c, cx - radius, cy)
            .curve_to(cx - radius, cy - c, cx - c, cy - radius, cx, cy - radius)
            .curve_to(cx + c, cy - radius, cx + radius, cy - c, cx + radius, cy)
            .close_path()
    }

    /// Draw a rounded rectangle with its lower-left corner at `(x, y)`.
    pub fn rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
    ) -> &mut Self {
        let r = radius.min(width / 2.0).min(height / 2.0);
        let k = r * 0.552_284_8;

        self.move_to(x + r, y)
            .line_to(x + width - r, y)
            .curve_to(x + width - r + k, y, x + width, y + k, x + width, y + r)
            .line_to(x + width, y + height - r)
            .curve_to(
                x + width,
                y + height - r + k,
                x + width - k,
                y + height,
                x + width - r,
                y + height,
            )
            .line_to(x + r, y + height)
            .curve_to(x + r - k, y + height, x, y + height - k, x, y + height - r)
            .line_to(x, y + r)
            .curve_to(x, y + r - k, x + r - k, y, x + r, y)
            .close_path()
    }

    /// Draw a closed polygon through `points`.
    pub fn polygon(&mut self, points: &[(f32, f32)]) -> &mut Self {
        if let Some((&(x0, y0), rest)) = points.split_first() {
            self.move_to(x0, y0);
            for &(x, y) in rest {
                self.line_to(x, y);
            }
            self.close_path();
        }
        self
    }

    /// Build the content stream to bytes.
    pub fn build(&self) -> Result<Vec<u8>> {
        if self.state_depth() > 0 {
            return Err(Error::Render(format!(
                "content stream ends with {} unrestored graphics state(s)",
                self.state_depth()
            )));
        }
        let restores = self
            .operations
            .iter()
            .filter(|op| **op == ContentStreamOp::RestoreState)
            .count();
        let saves = self
            .operations
            .iter()
            .filter(|op| **op == ContentStreamOp::SaveState)
            .count();
        if restores != saves {
            return Err(Error::Render(format!(
                "unbalanced graphics state: {} saves, {} restores",
                saves, restores
            )));
        }

        let mut buf = Vec::new();
        for op in &self.operations {
            self.write_op(&mut buf, op)?;
            writeln!(buf)?;
        }
        if self.in_text_object {
            writeln!(buf, "ET")?;
        }

        Ok(buf)
    }

    /// Write a single operation to the buffer.
    fn write_op(&self, w: &mut Vec<u8>, op: &ContentStreamOp) -> std::io::Result<()> {
        match op {
            ContentStreamOp::SaveState => write!(w, "q"),
            ContentStreamOp::RestoreState => write!(w, "Q"),
            ContentStreamOp::BeginText => write!(w, "BT"),
            ContentStreamOp::EndText => write!(w, "ET"),
            ContentStreamOp::SetFont(name, size) => write!(w, "/{} {} Tf", name, size),
            ContentStreamOp::SetTextMatrix(a, b, c, d, e, f) => {
                write!(w, "{} {} {} {} {} {} Tm", a, b, c, d, e, f)
            },
            ContentStreamOp::ShowText(text) => {
                write!(w, "(")?;
                win_ansi::escape_literal_into(&win_ansi::encode(text), w);
                write!(w, ") Tj")
            },
            ContentStreamOp::SetFillColorRGB(r, g, b) => write!(w, "{} {} {} rg", r, g, b),
            ContentStreamOp::SetStrokeColorRGB(r, g, b) => write!(w, "{} {} {} RG", r, g, b),
            ContentStreamOp::SetLineWidth(width) => write!(w, "{} w", width),
            ContentStreamOp::MoveTo(x, y) => write!(w, "{} {} m", x, y),
            ContentStreamOp::LineTo(x, y) => write!(w, "{} {} l", x, y),
            ContentStreamOp::CurveTo(x1, y1, x2, y2, x3, y3) => {
                write!(w, "{} {} {} {} {} {} c", x1, y1, x2, y2, x3, y3)
            },
            ContentStreamOp::Rectangle(x, y, w_val, h) => {
                write!(w, "{} {} {} {} re", x, y, w_val, h)
            },
            ContentStreamOp::ClosePath => write!(w, "h"),
            ContentStreamOp::Stroke => write!(w, "S"),
            ContentStreamOp::Fill => write!(w, "f"),
            ContentStreamOp::SetExtGState(name) => write!(w, "/{} gs", name),
        }
    }
}
