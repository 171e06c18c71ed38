//! In-memory surface that records draw calls.
//!
//! Used to check layouts (positions, page breaks, state scoping) without
//! parsing PDF output.

use super::{Shape, StrokeStyle, Surface, TextMetrics, TextOptions, TextStyle};
use crate::writer::{Color, PageSize};

/// A recorded surface operation. `page` is zero-based.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// A page was opened
    AddPage {
        /// Index of the new page
        index: usize,
    },
    /// Graphics state pushed
    Save,
    /// Graphics state popped
    Restore,
    /// Shape filled
    Fill {
        /// Page index
        page: usize,
        /// Geometry
        shape: Shape,
        /// Fill colour
        color: Color,
    },
    /// Shape stroked
    Stroke {
        /// Page index
        page: usize,
        /// Geometry
        shape: Shape,
        /// Stroke parameters
        style: StrokeStyle,
    },
    /// Text drawn
    Text {
        /// Page index
        page: usize,
        /// Full string as passed in
        text: String,
        /// Left edge of the text box
        x: f32,
        /// Top of the first line box
        y: f32,
        /// Style
        style: TextStyle,
        /// Number of wrapped lines
        lines: usize,
        /// Height consumed
        height: f32,
    },
}

/// Surface that keeps a log of everything drawn on it.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    pages: usize,
    depth: usize,
    balanced: bool,
    calls: Vec<DrawCall>,
    metrics: TextMetrics,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new(page_size: PageSize) -> Self {
        let (width, height) = page_size.dimensions();
        Self {
            width,
            height,
            pages: 0,
            depth: 0,
            balanced: true,
            calls: Vec::new(),
            metrics: TextMetrics::new(),
        }
    }

    /// All calls in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Currently open save scopes.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True when no restore ever ran without a save and every save was
    /// restored.
    pub fn is_balanced(&self) -> bool {
        self.balanced && self.depth == 0
    }

    /// Text draws as `(page, text, x, y)`.
    pub fn texts(&self) -> impl Iterator<Item = (usize, &str, f32, f32)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text {
                page, text, x, y, ..
            } => Some((*page, text.as_str(), *x, *y)),
            _ => None,
        })
    }

    /// First text draw whose string equals `needle`.
    pub fn find_text(&self, needle: &str) -> Option<&DrawCall> {
        self.calls
            .iter()
            .find(|call| matches!(call, DrawCall::Text { text, .. } if text == needle))
    }

    /// Fills on `page` in drawing order.
    pub fn fills_on(&self, page: usize) -> Vec<(&Shape, Color)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Fill {
                    page: p,
                    shape,
                    color,
                } if *p == page => Some((shape, *color)),
                _ => None,
            })
            .collect()
    }

    fn ensure_page(&mut self) -> usize {
        if self.pages == 0 {
            self.add_page();
        }
        self.pages - 1
    }
}

impl Surface for RecordingSurface {
    fn page_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn add_page(&mut self) {
        self.calls.push(DrawCall::AddPage { index: self.pages });
        self.pages += 1;
    }

    fn save_state(&mut self) {
        self.depth += 1;
        self.calls.push(DrawCall::Save);
    }

    fn restore_state(&mut self) {
        match self.depth.checked_sub(1) {
            Some(depth) => self.depth = depth,
            None => self.balanced = false,
        }
        self.calls.push(DrawCall::Restore);
    }

    fn fill(&mut self, shape: &Shape, color: Color) {
        let page = self.ensure_page();
        self.calls.push(DrawCall::Fill {
            page,
            shape: shape.clone(),
            color,
        });
    }

    fn stroke(&mut self, shape: &Shape, style: &StrokeStyle) {
        let page = self.ensure_page();
        self.calls.push(DrawCall::Stroke {
            page,
            shape: shape.clone(),
            style: *style,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: &TextStyle,
        options: &TextOptions,
    ) -> f32 {
        let page = self.ensure_page();
        let block = self.metrics.layout(text, x, self.width, style, options);
        self.calls.push(DrawCall::Text {
            page,
            text: text.to_string(),
            x,
            y,
            style: *style,
            lines: block.lines.len(),
            height: block.height,
        });
        block.height
    }

    fn measure_text(&self, text: &str, x: f32, style: &TextStyle, options: &TextOptions) -> f32 {
        self.metrics.layout(text, x, self.width, style, options).height
    }

    fn line_height(&self, style: &TextStyle, include_gap: bool) -> f32 {
        self.metrics.line_height(style, include_gap)
    }
}
