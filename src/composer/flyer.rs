//! Single-page flyer.

use super::content::FlyerContent;
use super::layout::{
    centre_text, continuation_page, cta_panel, ensure_room, fill_shape, grid_cell, logo_mark,
    link_line, page_background, page_bottom, stroke_shape, MARGIN,
};
use super::palette::{CARD, GOLD, LIGHT, PURPLE, WHITE};
use crate::canvas::{FontFace, Shape, StrokeStyle, Surface, TextOptions, TextStyle};

/// Distance between stream lines.
pub const LINE_STEP: f32 = 28.0;
/// Height of a trust badge.
pub const BADGE_HEIGHT: f32 = 26.0;
/// Distance between badge rows.
pub const BADGE_ROW_STEP: f32 = 34.0;
/// Height of the call-to-action panel.
pub const CTA_HEIGHT: f32 = 56.0;

const STREAMS_TOP: f32 = 360.0;

/// Width of one trust badge on a page `page_width` wide.
pub fn badge_width(page_width: f32) -> f32 {
    (page_width - 136.0) / 2.0
}

/// Draw the flyer onto `surface`, starting with a fresh page.
pub fn render<S: Surface>(surface: &mut S, content: &FlyerContent<'_>, link: &str) {
    surface.add_page();
    let (pw, ph) = surface.page_size();
    let limit = page_bottom(surface);

    page_background(surface);
    fill_shape(
        surface,
        Shape::Polygon(vec![(pw - 120.0, 0.0), (pw, 0.0), (pw, 120.0)]),
        GOLD,
    );
    fill_shape(
        surface,
        Shape::Polygon(vec![(0.0, ph - 120.0), (0.0, ph), (120.0, ph)]),
        PURPLE,
    );

    logo_mark(
        surface,
        (pw / 2.0, 140.0),
        55.0,
        0.8,
        content.logo,
        TextStyle::new(FontFace::Bold, 22.0, GOLD),
        (128.0, 52.0),
    );
    centre_text(
        surface,
        content.title,
        220.0,
        TextStyle::new(FontFace::Bold, 28.0, GOLD),
        pw - 2.0 * MARGIN,
    );
    centre_text(
        surface,
        content.subtitle,
        256.0,
        TextStyle::new(FontFace::Regular, 11.0, LIGHT),
        pw - 2.0 * MARGIN,
    );

    let hook = Shape::rounded_rect(60.0, 285.0, pw - 120.0, 50.0, 8.0);
    fill_shape(surface, hook.clone(), CARD);
    stroke_shape(surface, hook, StrokeStyle::new(GOLD, 1.0).with_opacity(0.5));
    centre_text(
        surface,
        content.hook,
        302.0,
        TextStyle::new(FontFace::Bold, 16.0, GOLD),
        pw - 120.0,
    );

    let mut y = STREAMS_TOP;
    for line in content.streams {
        y = ensure_room(surface, y, LINE_STEP, limit);
        centre_text(
            surface,
            line.text,
            y,
            TextStyle::new(FontFace::Bold, 11.0, line.color),
            pw - 2.0 * MARGIN,
        );
        y += LINE_STEP;
    }

    y = badges(surface, content.badges, y + 10.0, limit);

    y = ensure_room(surface, y, CTA_HEIGHT, limit);
    let cta_width = pw - 160.0;
    cta_panel(surface, 80.0, y, cta_width, CTA_HEIGHT);
    centre_text(
        surface,
        content.cta_heading,
        y + 12.0,
        TextStyle::new(FontFace::Bold, 12.0, WHITE),
        cta_width,
    );
    link_line(
        surface,
        link,
        y + 30.0,
        TextStyle::new(FontFace::Mono, 9.0, GOLD),
        cta_width,
    );
}

/// Two-column badge grid starting at `top`. Returns the cursor below it.
fn badges<S: Surface>(surface: &mut S, labels: &[&str], top: f32, limit: f32) -> f32 {
    let pw = surface.page_size().0;
    let width = badge_width(pw);
    let step = ((pw - 120.0) / 2.0 + 6.0, BADGE_ROW_STEP);
    let style = TextStyle::new(FontFace::Bold, 9.0, LIGHT);

    let mut grid_top = top;
    for (i, label) in labels.iter().enumerate() {
        let (mut bx, mut by) = grid_cell(i, 2, (60.0, grid_top), step);
        if i % 2 == 0 && by + BADGE_HEIGHT > limit {
            grid_top = continuation_page(surface) - (i / 2) as f32 * BADGE_ROW_STEP;
            (bx, by) = grid_cell(i, 2, (60.0, grid_top), step);
        }
        fill_shape(surface, Shape::rounded_rect(bx, by, width, BADGE_HEIGHT, 5.0), CARD);
        surface.draw_text(label, bx, by + 8.0, &style, &TextOptions::centered(width));
    }

    let rows = labels.len().div_ceil(2);
    grid_top + rows as f32 * BADGE_ROW_STEP + 12.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCall, RecordingSurface};
    use crate::composer::content::GICLUB;
    use crate::writer::PageSize;

    const LINK: &str = "https://giclub.online/register";

    fn recorded() -> RecordingSurface {
        let mut s = RecordingSurface::new(PageSize::A4);
        render(&mut s, &GICLUB.flyer, LINK);
        s
    }

    #[test]
    fn test_single_page() {
        let s = recorded();
        assert_eq!(s.page_count(), 1);
        assert!(s.is_balanced());
    }

    #[test]
    fn test_badge_grid() {
        let s = recorded();
        let origins: Vec<(f32, f32)> = s
            .fills_on(0)
            .into_iter()
            .filter_map(|(shape, _)| match shape {
                Shape::RoundedRect { x, y, height, .. } if *height == BADGE_HEIGHT => {
                    Some((*x, *y))
                },
                _ => None,
            })
            .collect();
        let right = 60.0 + (595.0 - 120.0) / 2.0 + 6.0;
        let top = STREAMS_TOP + 4.0 * LINE_STEP + 10.0;
        assert_eq!(
            origins,
            vec![
                (60.0, top),
                (right, top),
                (60.0, top + BADGE_ROW_STEP),
                (right, top + BADGE_ROW_STEP),
            ]
        );
    }

    #[test]
    fn test_stream_lines_step_evenly() {
        let s = recorded();
        let ys: Vec<f32> = GICLUB
            .flyer
            .streams
            .iter()
            .filter_map(|line| match s.find_text(line.text) {
                Some(DrawCall::Text { y, .. }) => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![360.0, 388.0, 416.0, 444.0]);
    }

    #[test]
    fn test_hook_and_link_centred() {
        let s = recorded();
        let hook_x = s.texts().find(|t| t.1 == GICLUB.flyer.hook).map(|t| t.2);
        assert_eq!(hook_x, Some(60.0));

        match s.find_text(LINK) {
            Some(DrawCall::Text { x, style, .. }) => {
                assert_eq!(*x, 80.0);
                assert_eq!(style.face, FontFace::Mono);
                assert_eq!(style.color, GOLD);
            },
            other => panic!("link not drawn: {:?}", other),
        }
    }
}
