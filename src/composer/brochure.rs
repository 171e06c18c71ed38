//! Three-page brochure: cover, income streams, join guide and FAQ.

use super::content::{BrochureContent, Faq, Step, StreamCard};
use super::layout::{
    bullet, bullet_height, centre_text, continuation_page, cta_panel, ensure_room, fill_rect,
    fill_shape, grid_cell, header_bar, hr, logo_mark, page_background, page_bottom, section_head,
    link_line, segment_centres, stroke_shape, MARGIN, SECTION_HEAD_ADVANCE,
};
use super::palette::{CARD, DARK, GOLD, GREEN, LIGHT, NAVY, PURPLE, WHITE};
use crate::canvas::{FontFace, Shape, StrokeStyle, Surface, TextOptions, TextStyle};

/// Stream card height.
pub const CARD_HEIGHT: f32 = 90.0;
/// Distance between stream card rows.
pub const CARD_ROW_STEP: f32 = 100.0;
/// Horizontal gap between stream card columns.
pub const CARD_GUTTER: f32 = 12.0;
/// Fixed height of a join step row.
pub const STEP_ROW: f32 = 42.0;
/// Height of the closing call-to-action panel.
pub const CTA_HEIGHT: f32 = 80.0;

const RULE_GAP: f32 = 12.0;
const STAT_Y: f32 = 495.0;
const STAT_RADIUS: f32 = 30.0;

/// Width of one stream card on a page `page_width` wide.
pub fn card_width(page_width: f32) -> f32 {
    (page_width - 2.0 * MARGIN - CARD_GUTTER) / 2.0
}

/// Top of the call-to-action panel on a page `page_height` tall.
pub fn cta_top(page_height: f32) -> f32 {
    page_height - 100.0
}

/// Draw the brochure onto `surface`, starting with a fresh page.
pub fn render<S: Surface>(surface: &mut S, content: &BrochureContent<'_>, link: &str) {
    cover(surface, content);
    streams_page(surface, content);
    guide_page(surface, content, link);
}

fn cover<S: Surface>(surface: &mut S, content: &BrochureContent<'_>) {
    surface.add_page();
    let (pw, ph) = surface.page_size();
    let text_width = pw - 2.0 * MARGIN;

    page_background(surface);
    fill_shape(
        surface,
        Shape::Polygon(vec![(pw - 160.0, 0.0), (pw, 0.0), (pw, 160.0)]),
        GOLD,
    );
    fill_rect(surface, 0.0, ph - 60.0, pw, 60.0, PURPLE);

    logo_mark(
        surface,
        (pw / 2.0, 210.0),
        58.0,
        0.7,
        content.logo,
        TextStyle::new(FontFace::Bold, 26.0, GOLD),
        (196.0, 60.0),
    );

    centre_text(
        surface,
        content.title,
        300.0,
        TextStyle::new(FontFace::Bold, 32.0, GOLD),
        text_width,
    );
    centre_text(
        surface,
        content.subtitle,
        340.0,
        TextStyle::new(FontFace::Regular, 13.0, LIGHT),
        text_width,
    );

    fill_shape(surface, Shape::rounded_rect(100.0, 375.0, pw - 200.0, 40.0, 5.0), GOLD);
    centre_text(
        surface,
        content.tagline,
        388.0,
        TextStyle::new(FontFace::Bold, 13.0, DARK),
        text_width,
    );

    let value_style = TextStyle::new(FontFace::Bold, 14.0, GOLD);
    let label_style = TextStyle::new(FontFace::Regular, 8.0, LIGHT);
    let badge_box = TextOptions::centered(56.0);
    let centres = segment_centres(content.stats.len(), MARGIN, text_width);
    for (stat, cx) in content.stats.iter().zip(centres) {
        let ring = Shape::circle(cx, STAT_Y, STAT_RADIUS);
        fill_shape(surface, ring.clone(), NAVY);
        stroke_shape(surface, ring, StrokeStyle::new(GOLD, 1.5).with_opacity(0.5));
        surface.draw_text(stat.value, cx - 28.0, 484.0, &value_style, &badge_box);
        surface.draw_text(stat.label, cx - 28.0, 504.0, &label_style, &badge_box);
    }

    centre_text(
        surface,
        content.footer,
        ph - 42.0,
        TextStyle::new(FontFace::Regular, 9.0, WHITE),
        text_width,
    );
}

fn streams_page<S: Surface>(surface: &mut S, content: &BrochureContent<'_>) {
    surface.add_page();
    page_background(surface);
    let limit = page_bottom(surface);
    let card_w = card_width(surface.page_size().0);

    // Grid origin on the current page; moved up by the rows already placed
    // when the grid continues on a new page.
    let mut grid_top = header_bar(surface, content.streams_heading);
    for (i, card) in content.streams.iter().enumerate() {
        let step = (card_w + CARD_GUTTER, CARD_ROW_STEP);
        let (mut cx, mut cy) = grid_cell(i, 2, (MARGIN, grid_top), step);
        if i % 2 == 0 && cy + CARD_HEIGHT > limit {
            let top = continuation_page(surface);
            grid_top = top - (i / 2) as f32 * CARD_ROW_STEP;
            (cx, cy) = grid_cell(i, 2, (MARGIN, grid_top), step);
        }
        stream_card(surface, i + 1, card, (cx, cy), card_w);
    }

    let rows = content.streams.len().div_ceil(2);
    let mut y = grid_top + rows as f32 * CARD_ROW_STEP + CARD_GUTTER;
    y = ensure_room(surface, y, RULE_GAP, limit);
    hr(surface, y, GOLD);
    y += RULE_GAP;

    let first = content
        .matrix_points
        .first()
        .map_or(0.0, |point| bullet_height(surface, point) + 2.0);
    y = ensure_room(surface, y, SECTION_HEAD_ADVANCE + first, limit);
    y = section_head(surface, content.matrix_heading, y);
    for point in content.matrix_points {
        y = ensure_room(surface, y, bullet_height(surface, point), limit);
        y = bullet(surface, point, y, GOLD);
        y += 2.0;
    }
}

fn stream_card<S: Surface>(
    surface: &mut S,
    number: usize,
    card: &StreamCard<'_>,
    (cx, cy): (f32, f32),
    card_w: f32,
) {
    fill_shape(surface, Shape::rounded_rect(cx, cy, card_w, CARD_HEIGHT, 6.0), CARD);
    fill_rect(surface, cx, cy, card_w, 4.0, card.accent);
    fill_shape(surface, Shape::circle(cx + 22.0, cy + 22.0, 11.0), card.accent);

    surface.draw_text(
        &number.to_string(),
        cx + 17.0,
        cy + 15.0,
        &TextStyle::new(FontFace::Bold, 10.0, DARK),
        &TextOptions::centered(12.0),
    );
    surface.draw_text(
        card.title,
        cx + 38.0,
        cy + 12.0,
        &TextStyle::new(FontFace::Bold, 10.0, GOLD),
        &TextOptions::new().width(card_w - 48.0),
    );
    surface.draw_text(
        card.description,
        cx + 12.0,
        cy + 36.0,
        &TextStyle::new(FontFace::Regular, 8.0, LIGHT),
        &TextOptions::new().width(card_w - 24.0).line_gap(2.0),
    );
}

fn guide_page<S: Surface>(surface: &mut S, content: &BrochureContent<'_>, link: &str) {
    surface.add_page();
    page_background(surface);
    let mut y = header_bar(surface, content.guide_heading);
    let limit = cta_top(surface.page_size().1);

    let first_step = if content.steps.is_empty() { 0.0 } else { STEP_ROW };
    y = ensure_room(surface, y, SECTION_HEAD_ADVANCE + 4.0 + first_step, limit);
    y = section_head(surface, content.steps_heading, y) + 4.0;
    for (i, step) in content.steps.iter().enumerate() {
        y = ensure_room(surface, y, STEP_ROW, limit);
        y = join_step(surface, i + 1, step, y);
    }

    y = ensure_room(surface, y, RULE_GAP, limit);
    hr(surface, y, GOLD);
    y += RULE_GAP;

    let first_faq = content.faq.first().map_or(0.0, |qa| faq_height(surface, qa));
    y = ensure_room(surface, y, SECTION_HEAD_ADVANCE + 4.0 + first_faq, limit);
    y = section_head(surface, content.faq_heading, y) + 4.0;
    for qa in content.faq {
        y = ensure_room(surface, y, faq_height(surface, qa), limit);
        y = faq_entry(surface, qa, y);
    }

    call_to_action(surface, content, link);
}

fn join_step<S: Surface>(surface: &mut S, number: usize, step: &Step<'_>, y: f32) -> f32 {
    let width = surface.page_size().0 - 120.0;
    fill_shape(surface, Shape::circle(58.0, y + 8.0, 10.0), GREEN);
    surface.draw_text(
        &number.to_string(),
        53.0,
        y + 2.0,
        &TextStyle::new(FontFace::Bold, 9.0, DARK),
        &TextOptions::centered(12.0),
    );
    surface.draw_text(
        step.title,
        78.0,
        y,
        &TextStyle::new(FontFace::Bold, 10.0, GOLD),
        &TextOptions::new().width(width),
    );
    surface.draw_text(
        step.description,
        78.0,
        y + 14.0,
        &TextStyle::new(FontFace::Regular, 9.0, LIGHT),
        &TextOptions::new().width(width),
    );
    y + STEP_ROW
}

const QUESTION: TextStyle = TextStyle::new(FontFace::Bold, 9.0, GOLD);
const ANSWER: TextStyle = TextStyle::new(FontFace::Regular, 9.0, LIGHT);
const FAQ_X: f32 = 46.0;

fn faq_options<S: Surface>(surface: &S) -> TextOptions {
    TextOptions::new().width(surface.page_size().0 - 86.0)
}

fn faq_texts(qa: &Faq<'_>) -> (String, String) {
    (format!("Q: {}", qa.question), format!("A: {}", qa.answer))
}

fn faq_height<S: Surface>(surface: &S, qa: &Faq<'_>) -> f32 {
    let (question, answer) = faq_texts(qa);
    let options = faq_options(surface);
    surface.measure_text(&question, FAQ_X, &QUESTION, &options)
        + 2.0
        + surface.measure_text(&answer, FAQ_X, &ANSWER, &options.line_gap(1.0))
        + 8.0
}

/// Question then answer, each advancing by its rendered height.
fn faq_entry<S: Surface>(surface: &mut S, qa: &Faq<'_>, mut y: f32) -> f32 {
    let (question, answer) = faq_texts(qa);
    let options = faq_options(surface);
    y += surface.draw_text(&question, FAQ_X, y, &QUESTION, &options) + 2.0;
    y += surface.draw_text(&answer, FAQ_X, y, &ANSWER, &options.line_gap(1.0)) + 8.0;
    y
}

fn call_to_action<S: Surface>(surface: &mut S, content: &BrochureContent<'_>, link: &str) {
    let (pw, ph) = surface.page_size();
    let top = cta_top(ph);
    let width = pw - 2.0 * MARGIN;

    cta_panel(surface, MARGIN, top, width, CTA_HEIGHT);
    centre_text(
        surface,
        content.cta_heading,
        top + 12.0,
        TextStyle::new(FontFace::Bold, 14.0, GOLD),
        width,
    );
    link_line(
        surface,
        link,
        top + 34.0,
        TextStyle::new(FontFace::Mono, 9.0, WHITE),
        width,
    );
    centre_text(
        surface,
        content.cta_note,
        top + 52.0,
        TextStyle::new(FontFace::Regular, 9.0, WHITE),
        width,
    );
}
