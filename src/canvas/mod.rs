//! Drawing surfaces for page composition.
//!
//! A [`Surface`] is the vector/text primitive the composer draws on. Its
//! coordinate system has the origin at the top-left corner of the page with
//! `y` growing downwards, which matches how layouts are written; the PDF
//! implementation flips to PDF user space internally.
//!
//! Graphics state changes (fill and stroke colour, line width, opacity) made
//! through a surface persist until the matching restore. Use
//! [`Surface::scoped`] to bracket them:
//!
//! ```ignore
//! {
//!     let mut s = surface.scoped();
//!     s.stroke(&Shape::circle(100.0, 100.0, 20.0), &StrokeStyle::new(GOLD, 2.0));
//! } // restored here, even on unwind
//! ```
//!
//! Text draws save and restore around themselves.

mod pdf;
mod recording;
mod text;

pub use pdf::PdfCanvas;
pub use recording::{DrawCall, RecordingSurface};
pub use text::{PlacedLine, TextBlock, TextMetrics};

use crate::writer::Color;
use std::ops::{Deref, DerefMut};

/// Horizontal alignment of text within its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Left-aligned text (default)
    #[default]
    Left,
    /// Center-aligned text
    Center,
    /// Right-aligned text
    Right,
}

/// Typeface used for a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontFace {
    /// Helvetica
    #[default]
    Regular,
    /// Helvetica-Bold
    Bold,
    /// Courier, for literal strings such as links
    Mono,
}

impl FontFace {
    /// Base-14 font name.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
            FontFace::Mono => "Courier",
        }
    }
}

/// Font, size and colour of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Typeface
    pub face: FontFace,
    /// Font size in points
    pub size: f32,
    /// Fill colour of the glyphs
    pub color: Color,
}

impl TextStyle {
    /// Create a text style.
    pub const fn new(face: FontFace, size: f32, color: Color) -> Self {
        Self { face, size, color }
    }
}

/// Flow options for a text draw.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextOptions {
    /// Wrap width; `None` wraps at the right page edge
    pub width: Option<f32>,
    /// Alignment within the wrap width
    pub align: TextAlign,
    /// Extra space added after every line
    pub line_gap: f32,
    /// Draw the string as one line, exactly as given, without wrapping
    pub single_line: bool,
}

impl TextOptions {
    /// Left-aligned, unbounded, no extra line gap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrap width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for centered text within `width`.
    pub fn centered(width: f32) -> Self {
        Self::new().width(width).align(TextAlign::Center)
    }

    /// Set the extra per-line gap.
    pub fn line_gap(mut self, gap: f32) -> Self {
        self.line_gap = gap;
        self
    }

    /// Keep the string on one line, spaces included.
    pub fn single_line(mut self) -> Self {
        self.single_line = true;
        self
    }
}

/// Stroke parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke colour
    pub color: Color,
    /// Line width in points
    pub width: f32,
    /// Stroke opacity, 0.0 - 1.0
    pub opacity: f32,
}

impl StrokeStyle {
    /// Fully opaque stroke.
    pub const fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            opacity: 1.0,
        }
    }

    /// Set the stroke opacity.
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Geometry that can be filled or stroked, in top-left page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle with its top-left corner at `(x, y)`
    Rect {
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Width
        width: f32,
        /// Height
        height: f32,
    },
    /// Rectangle with rounded corners
    RoundedRect {
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Width
        width: f32,
        /// Height
        height: f32,
        /// Corner radius
        radius: f32,
    },
    /// Circle
    Circle {
        /// Centre x
        cx: f32,
        /// Centre y
        cy: f32,
        /// Radius
        radius: f32,
    },
    /// Closed polygon
    Polygon(Vec<(f32, f32)>),
    /// Straight line segment
    Line {
        /// Start point
        from: (f32, f32),
        /// End point
        to: (f32, f32),
    },
}

impl Shape {
    /// Rectangle shorthand.
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Shape::Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Rounded rectangle shorthand.
    pub fn rounded_rect(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Self {
        Shape::RoundedRect {
            x,
            y,
            width,
            height,
            radius,
        }
    }

    /// Circle shorthand.
    pub fn circle(cx: f32, cy: f32, radius: f32) -> Self {
        Shape::Circle { cx, cy, radius }
    }

    /// Line shorthand.
    pub fn line(from: (f32, f32), to: (f32, f32)) -> Self {
        Shape::Line { from, to }
    }

    /// Top-left corner of the shape's bounding box.
    pub fn origin(&self) -> (f32, f32) {
        match self {
            Shape::Rect { x, y, .. } | Shape::RoundedRect { x, y, .. } => (*x, *y),
            Shape::Circle { cx, cy, radius } => (cx - radius, cy - radius),
            Shape::Polygon(points) => points.iter().fold((f32::MAX, f32::MAX), |(mx, my), (x, y)| {
                (mx.min(*x), my.min(*y))
            }),
            Shape::Line { from, to } => (from.0.min(to.0), from.1.min(to.1)),
        }
    }
}

/// A page-based vector drawing target.
pub trait Surface {
    /// Page dimensions `(width, height)` in points.
    fn page_size(&self) -> (f32, f32);

    /// Number of pages opened so far.
    fn page_count(&self) -> usize;

    /// Start a new page; subsequent draws land on it.
    fn add_page(&mut self);

    /// Push the graphics state.
    fn save_state(&mut self);

    /// Pop the graphics state.
    fn restore_state(&mut self);

    /// Fill a shape with a solid colour.
    fn fill(&mut self, shape: &Shape, color: Color);

    /// Stroke a shape's outline.
    fn stroke(&mut self, shape: &Shape, style: &StrokeStyle);

    /// Draw flowed text whose first line box starts at `(x, y)`.
    ///
    /// Returns the height consumed, which is the same value
    /// [`measure_text`](Surface::measure_text) reports.
    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: &TextStyle,
        options: &TextOptions,
    ) -> f32;

    /// Height the text would consume if drawn at horizontal position `x`.
    fn measure_text(&self, text: &str, x: f32, style: &TextStyle, options: &TextOptions) -> f32;

    /// Height of a single line; with `include_gap` the font's line gap is added.
    fn line_height(&self, style: &TextStyle, include_gap: bool) -> f32;

    /// Open a save/restore scope that closes when the guard drops.
    fn scoped(&mut self) -> StateGuard<'_, Self>
    where
        Self: Sized,
    {
        StateGuard::new(self)
    }
}

/// Scoped graphics state: saves on creation, restores on drop.
pub struct StateGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> StateGuard<'a, S> {
    /// Save the surface's state and return the guard.
    pub fn new(surface: &'a mut S) -> Self {
        surface.save_state();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for StateGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for StateGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for StateGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore_state();
    }
}
