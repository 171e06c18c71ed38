//! Integration tests for the download route, independent of any socket.

use promo_pdf::composer::DocumentKind;
use promo_pdf::service::{PromoService, Renderer, ROUTE};
use promo_pdf::{Composer, Error, Result};
use std::sync::Mutex;

const BASE: &str = "https://giclub.online";

// ============================================================================
// Test Renderers
// ============================================================================

/// Records what it was asked to render and returns a marker body.
#[derive(Default)]
struct CapturingRenderer {
    calls: Mutex<Vec<(DocumentKind, String)>>,
}

impl Renderer for CapturingRenderer {
    fn render(&self, kind: DocumentKind, referral_link: &str) -> Result<Vec<u8>> {
        self.calls
            .lock()
            .unwrap()
            .push((kind, referral_link.to_string()));
        Ok(b"%PDF-stub".to_vec())
    }
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&self, _kind: DocumentKind, _referral_link: &str) -> Result<Vec<u8>> {
        Err(Error::Render("writer refused".to_string()))
    }
}

fn get(service: &PromoService<CapturingRenderer>, query: &str) -> (u16, Option<String>) {
    let response = service.handle("GET", &format!("{}?{}", ROUTE, query));
    let disposition = response.header("Content-Disposition").map(str::to_string);
    (response.status, disposition)
}

// ============================================================================
// Scenario table
// ============================================================================

#[test]
fn test_filename_and_link_scenarios() {
    let scenarios = [
        (
            "wallet=0xabc&type=flyer",
            DocumentKind::Flyer,
            "GICLUB_Flyer.pdf",
            "https://giclub.online/register?ref=0xabc",
        ),
        (
            "type=income",
            DocumentKind::Income,
            "GICLUB_Income_Guide.pdf",
            "https://giclub.online/register",
        ),
        (
            "wallet=0x1&type=matrix",
            DocumentKind::Matrix,
            "GICLUB_Matrix_Guide.pdf",
            "https://giclub.online/register?ref=0x1",
        ),
        (
            "wallet=0x2",
            DocumentKind::Brochure,
            "GICLUB_Brochure.pdf",
            "https://giclub.online/register?ref=0x2",
        ),
        (
            "wallet=0x3&type=bogus",
            DocumentKind::Brochure,
            "GICLUB_Brochure.pdf",
            "https://giclub.online/register?ref=0x3",
        ),
        ("", DocumentKind::Brochure, "GICLUB_Brochure.pdf", "https://giclub.online/register"),
    ];

    for (query, kind, filename, link) in scenarios {
        let service = PromoService::new(CapturingRenderer::default(), BASE);
        let (status, disposition) = get(&service, query);
        assert_eq!(status, 200, "query {:?}", query);
        assert_eq!(
            disposition.as_deref(),
            Some(format!("attachment; filename=\"{}\"", filename).as_str())
        );

        let calls = service.renderer().calls.lock().unwrap().clone();
        assert_eq!(calls, vec![(kind, link.to_string())], "query {:?}", query);
    }
}

// ============================================================================
// Response shape
// ============================================================================

#[test]
fn test_pdf_response_headers() {
    let service = PromoService::new(Composer::new(), BASE);
    let response = service.handle("GET", &format!("{}?wallet=0xabc&type=flyer", ROUTE));

    assert_eq!(response.status, 200);
    assert_eq!(response.header("Content-Type"), Some("application/pdf"));
    assert_eq!(response.header("Cache-Control"), Some("no-store"));
    assert_eq!(
        response.header("Content-Length"),
        Some(response.body.len().to_string().as_str())
    );
    assert!(response.body.starts_with(b"%PDF-"));
}

#[test]
fn test_unknown_path_is_404() {
    let service = PromoService::new(CapturingRenderer::default(), BASE);
    let response = service.handle("GET", "/api/promotion/png?type=flyer");
    assert_eq!(response.status, 404);
    assert!(service.renderer().calls.lock().unwrap().is_empty());
}

#[test]
fn test_other_methods_are_405() {
    let service = PromoService::new(CapturingRenderer::default(), BASE);
    for method in ["POST", "PUT", "DELETE"] {
        let response = service.handle(method, ROUTE);
        assert_eq!(response.status, 405, "{}", method);
        assert_eq!(response.header("Allow"), Some("GET"));
    }
}

#[test]
fn test_render_failure_is_500_without_pdf() {
    let service = PromoService::new(FailingRenderer, BASE);
    let response = service.handle("GET", ROUTE);
    assert_eq!(response.status, 500);
    assert_eq!(response.header("Content-Type"), Some("text/plain; charset=utf-8"));
    assert!(response.header("Content-Disposition").is_none());
    assert!(!response.body.starts_with(b"%PDF"));
}

#[test]
fn test_trailing_slash_base_url() {
    let service = PromoService::new(CapturingRenderer::default(), "https://giclub.online/");
    service.handle("GET", &format!("{}?wallet=0xdef", ROUTE));
    let calls = service.renderer().calls.lock().unwrap().clone();
    assert_eq!(calls[0].1, "https://giclub.online/register?ref=0xdef");
}
