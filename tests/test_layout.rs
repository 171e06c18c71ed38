//! Layout tests on the recording surface.
//!
//! Templates are drawn onto [`RecordingSurface`] with both the real copy and
//! synthetic copy long enough to force page breaks, then checked by their
//! recorded coordinates.

use promo_pdf::canvas::{DrawCall, RecordingSurface, Shape, Surface};
use promo_pdf::composer::brochure::{self, card_width, cta_top, CARD_ROW_STEP};
use promo_pdf::composer::content::{BrochureContent, Faq, StreamCard, GICLUB};
use promo_pdf::composer::layout::MARGIN;
use promo_pdf::composer::palette::{CARD, DARK, GREEN};
use promo_pdf::composer::{compose, DocumentKind};
use promo_pdf::writer::PageSize;

const LINK: &str = "https://giclub.online/register?ref=0xabc";
const PAGE_HEIGHT: f32 = 842.0;

// ============================================================================
// Helper Functions
// ============================================================================

fn record(content: &BrochureContent<'_>) -> RecordingSurface {
    let mut surface = RecordingSurface::new(PageSize::A4);
    brochure::render(&mut surface, content, LINK);
    surface
}

/// `(page, y, height)` of every text draw whose string satisfies `pred`.
fn text_boxes(surface: &RecordingSurface, pred: impl Fn(&str) -> bool) -> Vec<(usize, f32, f32)> {
    surface
        .calls()
        .iter()
        .filter_map(|call| match call {
            DrawCall::Text {
                page,
                text,
                y,
                height,
                ..
            } if pred(text) => Some((*page, *y, *height)),
            _ => None,
        })
        .collect()
}

fn card_origins(surface: &RecordingSurface, page: usize) -> Vec<(f32, f32)> {
    surface
        .fills_on(page)
        .into_iter()
        .filter_map(|(shape, color)| match shape {
            Shape::RoundedRect { x, y, .. } if color == CARD => Some((*x, *y)),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Standard copy
// ============================================================================

#[test]
fn test_every_kind_balances_state() {
    for kind in DocumentKind::ALL {
        let mut surface = RecordingSurface::new(PageSize::A4);
        compose(&mut surface, kind, LINK, &GICLUB);
        assert!(surface.is_balanced(), "{} leaves graphics state open", kind);
    }
}

#[test]
fn test_pages_open_with_background() {
    let surface = record(&GICLUB.brochure);
    for page in 0..surface.page_count() {
        let fills = surface.fills_on(page);
        match fills.first() {
            Some((Shape::Rect { x, y, width, height }, color)) => {
                assert_eq!((*x, *y, *width, *height), (0.0, 0.0, 595.0, 842.0));
                assert_eq!(*color, DARK);
            },
            other => panic!("page {} starts with {:?}", page, other),
        }
    }
}

#[test]
fn test_stream_grid_column_and_row() {
    let surface = record(&GICLUB.brochure);
    let step_x = card_width(595.0) + 12.0;
    for (i, (x, y)) in card_origins(&surface, 1).into_iter().enumerate() {
        let (col, row) = ((i % 2) as f32, (i / 2) as f32);
        assert_eq!(x, MARGIN + col * step_x);
        assert_eq!(y, 75.0 + row * CARD_ROW_STEP);
    }
}

#[test]
fn test_steps_use_fixed_rows() {
    let surface = record(&GICLUB.brochure);
    let circles: Vec<f32> = surface
        .fills_on(2)
        .into_iter()
        .filter_map(|(shape, color)| match shape {
            Shape::Circle { cy, .. } if color == GREEN => Some(*cy),
            _ => None,
        })
        .collect();
    assert_eq!(circles.len(), 4);
    for pair in circles.windows(2) {
        assert_eq!(pair[1] - pair[0], 42.0);
    }
}

// ============================================================================
// Pagination with synthetic copy
// ============================================================================

#[test]
fn test_long_matrix_list_breaks_page() {
    let points: Vec<String> = (0..60)
        .map(|i| format!("Synthetic matrix point number {} that explains one more detail.", i))
        .collect();
    let refs: Vec<&str> = points.iter().map(String::as_str).collect();
    let content = BrochureContent {
        matrix_points: &refs,
        ..GICLUB.brochure
    };

    let surface = record(&content);
    assert!(surface.page_count() > 3);
    assert!(surface.is_balanced());

    let bullets = text_boxes(&surface, |t| t.starts_with("Synthetic matrix point"));
    assert_eq!(bullets.len(), 60);
    for (page, y, height) in &bullets {
        assert!(y + height <= PAGE_HEIGHT - MARGIN, "page {} bullet at {}", page, y);
    }
    // the list continues at the top margin of the continuation page
    let continued = bullets.iter().find(|(page, _, _)| *page == 2).unwrap();
    assert_eq!(continued.1, MARGIN);
}

#[test]
fn test_continuation_page_has_no_header() {
    let points: Vec<String> = (0..60).map(|i| format!("Point {}", i)).collect();
    let refs: Vec<&str> = points.iter().map(String::as_str).collect();
    let content = BrochureContent {
        matrix_points: &refs,
        ..GICLUB.brochure
    };
    let surface = record(&content);

    // page 2 is the continuation: background only, then bullets
    let fills = surface.fills_on(2);
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].1, DARK);
}

#[test]
fn test_long_faq_stays_above_cta_panel() {
    let faq: Vec<Faq<'_>> = (0..30)
        .map(|_| Faq {
            question: "Is this question long enough to need another page eventually?",
            answer: "Yes. Each entry advances by the height it actually rendered, so the \
                     cursor is checked against the panel before every entry.",
        })
        .collect();
    let content = BrochureContent {
        faq: &faq,
        ..GICLUB.brochure
    };

    let surface = record(&content);
    assert!(surface.page_count() > 3);

    let limit = cta_top(PAGE_HEIGHT);
    let entries = text_boxes(&surface, |t| t.starts_with("Q: ") || t.starts_with("A: "));
    assert_eq!(entries.len(), 60);
    for (page, y, height) in entries {
        assert!(y + height <= limit, "page {} entry at {} overlaps the panel", page, y);
    }

    // call-to-action is drawn once, on the final page
    let links = text_boxes(&surface, |t| t == LINK);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].0, surface.page_count() - 1);
}

#[test]
fn test_long_stream_grid_continues() {
    let cards: Vec<StreamCard<'_>> = (0..20)
        .map(|_| StreamCard {
            accent: GREEN,
            title: "Stream",
            description: "A card used to overflow the grid.",
        })
        .collect();
    let content = BrochureContent {
        streams: &cards,
        ..GICLUB.brochure
    };

    let surface = record(&content);
    let first = card_origins(&surface, 1);
    let second = card_origins(&surface, 2);
    assert_eq!(first.len() + second.len(), 20);
    assert_eq!(first.len() % 2, 0);
    for (_, y) in &first {
        assert!(y + 90.0 <= PAGE_HEIGHT - MARGIN);
    }
    // rows restart at the top margin on the continuation page
    assert_eq!(second[0], (MARGIN, MARGIN));
    assert_eq!(second[2].1, MARGIN + CARD_ROW_STEP);
}
