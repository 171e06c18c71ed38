//! PDF-backed drawing surface.

use super::{Shape, StrokeStyle, Surface, TextMetrics, TextOptions, TextStyle};
use crate::error::{Error, Result};
use crate::writer::{
    Color, ContentStreamBuilder, ExtGStateBuilder, PageBuilder, PageSize, PdfWriter,
    PdfWriterConfig,
};

/// Surface that draws into a [`PdfWriter`].
///
/// Every page has the same size and draws always land on the most recent
/// page. Drawing before the first [`add_page`](Surface::add_page) opens a
/// page implicitly.
pub struct PdfCanvas {
    writer: PdfWriter,
    width: f32,
    height: f32,
    metrics: TextMetrics,
}

impl PdfCanvas {
    /// Create an empty canvas.
    pub fn new(page_size: PageSize, config: PdfWriterConfig) -> Self {
        let (width, height) = page_size.dimensions();
        Self {
            writer: PdfWriter::with_config(config),
            width,
            height,
            metrics: TextMetrics::new(),
        }
    }

    /// Serialize the document.
    ///
    /// Any failure, including I/O while assembling the buffer, is reported
    /// as [`Error::Render`].
    pub fn finish(self) -> Result<Vec<u8>> {
        self.writer.finish().map_err(|e| match e {
            Error::Render(_) => e,
            other => Error::Render(other.to_string()),
        })
    }

    fn page(&mut self) -> PageBuilder<'_> {
        self.writer.current_page(self.width, self.height)
    }

    /// Append path operators for `shape` to the current page.
    fn path(&mut self, shape: &Shape) {
        let height = self.height;
        trace(self.page().content(), shape, height);
    }
}

/// Emit the path for `shape`, flipping top-left coordinates into PDF user
/// space for a page `height` points tall.
fn trace(builder: &mut ContentStreamBuilder, shape: &Shape, height: f32) {
    let flip = |y: f32| height - y;
    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => {
            builder.rect(*x, flip(y + height), *width, *height);
        },
        Shape::RoundedRect {
            x,
            y,
            width,
            height,
            radius,
        } => {
            builder.rounded_rect(*x, flip(y + height), *width, *height, *radius);
        },
        Shape::Circle { cx, cy, radius } => {
            builder.circle(*cx, flip(*cy), *radius);
        },
        Shape::Polygon(points) => {
            let flipped: Vec<(f32, f32)> = points.iter().map(|(x, y)| (*x, flip(*y))).collect();
            builder.polygon(&flipped);
        },
        Shape::Line { from, to } => {
            builder.move_to(from.0, flip(from.1)).line_to(to.0, flip(to.1));
        },
    }
}

impl Surface for PdfCanvas {
    fn page_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn page_count(&self) -> usize {
        self.writer.page_count()
    }

    fn add_page(&mut self) {
        let index = self.writer.add_page(self.width, self.height).index();
        log::trace!("opened page {}", index + 1);
    }

    fn save_state(&mut self) {
        self.page().content().save_state();
    }

    fn restore_state(&mut self) {
        self.page().content().restore_state();
    }

    fn fill(&mut self, shape: &Shape, color: Color) {
        self.page().content().fill_color(color);
        self.path(shape);
        self.page().content().fill();
    }

    fn stroke(&mut self, shape: &Shape, style: &StrokeStyle) {
        {
            let mut page = self.page();
            if style.opacity < 1.0 {
                page.set_ext_gstate(ExtGStateBuilder::new().stroke_alpha(style.opacity));
            }
            page.content().stroke_color(style.color).set_line_width(style.width);
        }
        self.path(shape);
        self.page().content().stroke();
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: &TextStyle,
        options: &TextOptions,
    ) -> f32 {
        let block = self.metrics.layout(text, x, self.width, style, options);
        let height = self.height;

        let mut page = self.page();
        page.content().save_state().fill_color(style.color);
        page.set_font(style.face.base_font(), style.size);
        for line in block.lines.iter().filter(|l| !l.text.is_empty()) {
            let baseline = height - (y + line.top + block.ascent);
            page.content().text(&line.text, line.x, baseline);
        }
        page.content().restore_state();

        block.height
    }

    fn measure_text(&self, text: &str, x: f32, style: &TextStyle, options: &TextOptions) -> f32 {
        self.metrics.layout(text, x, self.width, style, options).height
    }

    fn line_height(&self, style: &TextStyle, include_gap: bool) -> f32 {
        self.metrics.line_height(style, include_gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FontFace;

    fn canvas() -> PdfCanvas {
        PdfCanvas::new(PageSize::A4, PdfWriterConfig::default())
    }

    fn render(canvas: PdfCanvas) -> String {
        String::from_utf8_lossy(&canvas.finish().unwrap()).to_string()
    }

    #[test]
    fn test_rect_is_flipped() {
        let mut c = canvas();
        c.add_page();
        c.fill(&Shape::rect(0.0, 0.0, 595.0, 60.0), Color::black());
        let pdf = render(c);
        assert!(pdf.contains("0 782 595 60 re"));
    }

    #[test]
    fn test_polygon_is_flipped() {
        let mut c = canvas();
        c.fill(&Shape::Polygon(vec![(435.0, 0.0), (595.0, 0.0), (595.0, 160.0)]), Color::white());
        let pdf = render(c);
        assert!(pdf.contains("435 842 m\n595 842 l\n595 682 l\nh\nf"));
    }

    #[test]
    fn test_drawing_opens_first_page() {
        let mut c = canvas();
        assert_eq!(c.page_count(), 0);
        c.fill(&Shape::circle(10.0, 10.0, 5.0), Color::black());
        assert_eq!(c.page_count(), 1);
    }

    #[test]
    fn test_text_baseline_and_scope() {
        let mut c = canvas();
        c.add_page();
        let style = TextStyle::new(FontFace::Bold, 10.0, Color::white());
        let h = c.draw_text("GICLUB", 40.0, 100.0, &style, &TextOptions::new());
        assert!((h - c.line_height(&style, true)).abs() < 0.001);

        let pdf = render(c);
        // baseline = 842 - (100 + 7.18)
        assert!(pdf.contains("1 0 0 1 40 734.82 Tm"));
        assert!(pdf.contains("q\n1 1 1 rg\n/F1 10 Tf\nBT\n"));
        assert!(pdf.contains("ET\nQ"));
    }

    #[test]
    fn test_stroke_opacity_uses_ext_gstate() {
        let mut c = canvas();
        {
            let mut s = c.scoped();
            s.stroke(
                &Shape::line((40.0, 300.0), (555.0, 300.0)),
                &StrokeStyle::new(Color::white(), 1.0).with_opacity(0.4),
            );
        }
        let pdf = render(c);
        assert!(pdf.contains("/GS1 gs"));
        assert!(pdf.contains("40 542 m\n555 542 l\nS"));
    }

    #[test]
    fn test_measure_matches_draw() {
        let mut c = canvas();
        let style = TextStyle::new(FontFace::Regular, 9.0, Color::black());
        let opts = TextOptions::new().width(120.0).line_gap(2.0);
        let text = "Every level you unlock adds a deeper layer of income from your team.";
        let measured = c.measure_text(text, 50.0, &style, &opts);
        let drawn = c.draw_text(text, 50.0, 50.0, &style, &opts);
        assert_eq!(measured, drawn);
    }

    #[test]
    fn test_unbalanced_restore_fails_finish() {
        let mut c = canvas();
        c.restore_state();
        assert!(c.finish().unwrap_err().is_render());
    }
}
