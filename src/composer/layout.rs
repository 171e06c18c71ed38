//! Layout helpers shared by the templates.
//!
//! Helpers that flow content take the current cursor `y` and return the
//! next one. Every colour or stroke change happens inside a
//! [`StateGuard`](crate::canvas::StateGuard) scope.

use super::palette::{DARK, GOLD, NAVY, PURPLE, WHITE};
use crate::canvas::{FontFace, Shape, StrokeStyle, Surface, TextMetrics, TextOptions, TextStyle};
use crate::writer::Color;

/// Side margin, bottom margin and top margin of continuation pages.
pub const MARGIN: f32 = 40.0;
/// Height of a page header bar.
pub const HEADER_HEIGHT: f32 = 55.0;
/// First content line below a header bar.
pub const CONTENT_TOP: f32 = 75.0;
/// Vertical space a section head takes, including the gap after it.
pub const SECTION_HEAD_ADVANCE: f32 = 38.0;

const BULLET_GLYPH: &str = "\u{2022}";
const BULLET_TEXT_X: f32 = 62.0;

/// Fill `shape` with `color` in its own state scope.
pub fn fill_shape<S: Surface>(surface: &mut S, shape: Shape, color: Color) {
    let mut s = surface.scoped();
    s.fill(&shape, color);
}

/// Stroke `shape` in its own state scope.
pub fn stroke_shape<S: Surface>(surface: &mut S, shape: Shape, style: StrokeStyle) {
    let mut s = surface.scoped();
    s.stroke(&shape, &style);
}

/// Fill an axis-aligned rectangle.
pub fn fill_rect<S: Surface>(surface: &mut S, x: f32, y: f32, width: f32, height: f32, color: Color) {
    fill_shape(surface, Shape::rect(x, y, width, height), color);
}

/// Paint the full page in the background colour.
pub fn page_background<S: Surface>(surface: &mut S) {
    let (width, height) = surface.page_size();
    fill_rect(surface, 0.0, 0.0, width, height, DARK);
}

/// Lowest y content may reach on a regular page.
pub fn page_bottom<S: Surface>(surface: &S) -> f32 {
    surface.page_size().1 - MARGIN
}

/// Draw `text` centred horizontally on the page within a box `width` wide.
/// Returns the height used.
pub fn centre_text<S: Surface>(
    surface: &mut S,
    text: &str,
    y: f32,
    style: TextStyle,
    width: f32,
) -> f32 {
    let x = (surface.page_size().0 - width) / 2.0;
    surface.draw_text(text, x, y, &style, &TextOptions::centered(width))
}

/// Draw a referral link centred within `width` as one unbroken line.
///
/// The link is never wrapped or trimmed. When it is wider than `width` at
/// `style.size`, the size shrinks until it fits. Returns the style used.
pub fn link_line<S: Surface>(
    surface: &mut S,
    link: &str,
    y: f32,
    style: TextStyle,
    width: f32,
) -> TextStyle {
    let style = fit_to_width(link, style, width);
    let x = (surface.page_size().0 - width) / 2.0;
    surface.draw_text(link, x, y, &style, &TextOptions::centered(width).single_line());
    style
}

/// `style` with its size reduced so `text` fits on one line of `width`.
pub fn fit_to_width(text: &str, style: TextStyle, width: f32) -> TextStyle {
    let natural = TextMetrics::new().text_width(text, &style);
    if natural <= width || natural <= 0.0 {
        return style;
    }
    TextStyle {
        size: style.size * width / natural,
        ..style
    }
}

/// Draw a circular logo mark with `text` centred horizontally on it.
/// `text_box` is the `(top, width)` of the text box.
pub fn logo_mark<S: Surface>(
    surface: &mut S,
    (cx, cy): (f32, f32),
    radius: f32,
    ring_opacity: f32,
    text: &str,
    text_style: TextStyle,
    (text_top, text_width): (f32, f32),
) {
    fill_shape(surface, Shape::circle(cx, cy, radius), NAVY);
    stroke_shape(
        surface,
        Shape::circle(cx, cy, radius),
        StrokeStyle::new(GOLD, 2.0).with_opacity(ring_opacity),
    );
    surface.draw_text(
        text,
        cx - text_width / 2.0,
        text_top,
        &text_style,
        &TextOptions::centered(text_width),
    );
}

/// Navy header bar with a gold underline and a centred title. Returns the
/// first content y below it.
pub fn header_bar<S: Surface>(surface: &mut S, title: &str) -> f32 {
    let width = surface.page_size().0;
    fill_rect(surface, 0.0, 0.0, width, HEADER_HEIGHT, NAVY);
    fill_rect(surface, 0.0, HEADER_HEIGHT - 2.0, width, 3.0, GOLD);
    centre_text(
        surface,
        title,
        18.0,
        TextStyle::new(FontFace::Bold, 16.0, GOLD),
        width - 2.0 * MARGIN,
    );
    CONTENT_TOP
}

/// Horizontal rule across the content width.
pub fn hr<S: Surface>(surface: &mut S, y: f32, color: Color) {
    let width = surface.page_size().0;
    stroke_shape(
        surface,
        Shape::line((MARGIN, y), (width - MARGIN, y)),
        StrokeStyle::new(color, 1.0).with_opacity(0.4),
    );
}

/// Purple band with a bold white title. Returns the cursor below it.
pub fn section_head<S: Surface>(surface: &mut S, title: &str, y: f32) -> f32 {
    let width = surface.page_size().0;
    fill_rect(surface, MARGIN, y, width - 2.0 * MARGIN, 28.0, PURPLE);
    surface.draw_text(
        title,
        MARGIN + 8.0,
        y + 7.0,
        &TextStyle::new(FontFace::Bold, 12.0, WHITE),
        &TextOptions::new().width(width - 2.0 * MARGIN - 16.0),
    );
    y + SECTION_HEAD_ADVANCE
}

fn bullet_style() -> TextStyle {
    TextStyle::new(FontFace::Regular, 9.0, WHITE)
}

fn bullet_options<S: Surface>(surface: &S) -> TextOptions {
    TextOptions::new().width(surface.page_size().0 - BULLET_TEXT_X - MARGIN)
}

/// Space a bullet line will take, including the gap after it.
pub fn bullet_height<S: Surface>(surface: &S, text: &str) -> f32 {
    surface.measure_text(text, BULLET_TEXT_X, &bullet_style(), &bullet_options(surface)) + 4.0
}

/// Bullet glyph plus wrapped text. Advances by the text's measured height.
pub fn bullet<S: Surface>(surface: &mut S, text: &str, y: f32, color: Color) -> f32 {
    surface.draw_text(
        BULLET_GLYPH,
        46.0,
        y,
        &TextStyle::new(FontFace::Bold, 9.0, color),
        &TextOptions::new().width(12.0),
    );
    let options = bullet_options(surface);
    let height = surface.draw_text(text, BULLET_TEXT_X, y, &bullet_style(), &options);
    y + height + 4.0
}

/// Open a continuation page carrying only the background. Returns the top
/// margin.
pub fn continuation_page<S: Surface>(surface: &mut S) -> f32 {
    surface.add_page();
    page_background(surface);
    log::debug!("layout overflow, continued on page {}", surface.page_count());
    MARGIN
}

/// Keep the cursor if `needed` points still fit above `limit`, otherwise
/// break to a continuation page and return its top.
///
/// Blocks taller than a whole page are still placed at the top of the new
/// page.
pub fn ensure_room<S: Surface>(surface: &mut S, y: f32, needed: f32, limit: f32) -> f32 {
    if y + needed <= limit {
        y
    } else {
        continuation_page(surface)
    }
}

/// Top-left corner of grid cell `index`: column `index % columns`, row
/// `index / columns`, with `step` the distance between cell origins.
pub fn grid_cell(index: usize, columns: usize, origin: (f32, f32), step: (f32, f32)) -> (f32, f32) {
    let columns = columns.max(1);
    let col = (index % columns) as f32;
    let row = (index / columns) as f32;
    (origin.0 + col * step.0, origin.1 + row * step.1)
}

/// Centres of `count` equal segments spanning `left..left + width`.
pub fn segment_centres(count: usize, left: f32, width: f32) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let segment = width / count as f32;
    (0..count)
        .map(|i| left + i as f32 * segment + segment / 2.0)
        .collect()
}

/// Purple rounded panel with a gold top stripe.
pub fn cta_panel<S: Surface>(surface: &mut S, x: f32, y: f32, width: f32, height: f32) {
    fill_shape(surface, Shape::rounded_rect(x, y, width, height, 8.0), PURPLE);
    fill_rect(surface, x, y, width, 4.0, GOLD);
}
