//! HTTP download route for promotional PDFs.
//!
//! [`PromoService`] is framework-agnostic: it maps a method and request URL
//! to a [`PromoResponse`]. [`PromoServer`] binds it to a `tiny_http` socket.
//!
//! ```text
//! GET /api/promotion/pdf?wallet=0xabc&type=flyer
//!   200 application/pdf, attachment; filename="GICLUB_Flyer.pdf"
//! ```

pub mod config;
pub mod server;

pub use config::ServiceConfig;
pub use server::PromoServer;

use crate::composer::{Composer, DocumentKind, DocumentRequest};
use crate::error::Result;

/// Path the download route is served on.
pub const ROUTE: &str = "/api/promotion/pdf";

/// Anything that can turn a request into PDF bytes.
pub trait Renderer: Send + Sync {
    /// Render one document.
    fn render(&self, kind: DocumentKind, referral_link: &str) -> Result<Vec<u8>>;
}

impl Renderer for Composer {
    fn render(&self, kind: DocumentKind, referral_link: &str) -> Result<Vec<u8>> {
        self.build(kind, referral_link)
    }
}

/// Build the registration link for `wallet` under `base_url`.
///
/// A trailing `/` on the base URL is dropped. An empty wallet counts as
/// absent. The wallet is inserted as given.
pub fn referral_link(base_url: &str, wallet: Option<&str>) -> String {
    let base = base_url.trim_end_matches('/');
    match wallet.filter(|w| !w.is_empty()) {
        Some(wallet) => format!("{}/register?ref={}", base, wallet),
        None => format!("{}/register", base),
    }
}

/// Decoded query parameters of a download request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromoQuery {
    /// `wallet` parameter, if present and non-empty
    pub wallet: Option<String>,
    /// Resolved `type` parameter
    pub kind: DocumentKind,
}

impl PromoQuery {
    /// Parse an `application/x-www-form-urlencoded` query string (without
    /// the leading `?`). The first occurrence of a parameter wins.
    pub fn parse(query: &str) -> Self {
        let mut wallet = None;
        let mut kind = None;
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "wallet" if wallet.is_none() => wallet = Some(value.into_owned()),
                "type" if kind.is_none() => kind = Some(value.into_owned()),
                _ => {},
            }
        }
        Self {
            wallet: wallet.filter(|w| !w.is_empty()),
            kind: DocumentKind::from_param(kind.as_deref()),
        }
    }
}

/// A response ready to be written by any HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoResponse {
    /// HTTP status code
    pub status: u16,
    /// Header name/value pairs in output order
    pub headers: Vec<(&'static str, String)>,
    /// Body bytes
    pub body: Vec<u8>,
}

impl PromoResponse {
    fn pdf(filename: &str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: vec![
                ("Content-Type", "application/pdf".to_string()),
                (
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", filename),
                ),
                ("Content-Length", body.len().to_string()),
                ("Cache-Control", "no-store".to_string()),
            ],
            body,
        }
    }

    fn text(status: u16, message: &str) -> Self {
        let body = message.as_bytes().to_vec();
        Self {
            status,
            headers: vec![
                ("Content-Type", "text/plain; charset=utf-8".to_string()),
                ("Content-Length", body.len().to_string()),
            ],
            body,
        }
    }

    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The download route.
#[derive(Debug, Clone)]
pub struct PromoService<R = Composer> {
    renderer: R,
    base_url: String,
}

impl PromoService<Composer> {
    /// Service backed by a composer built from `config`.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(Composer::with_config(config.composer_config()), &config.base_url)
    }
}

impl<R: Renderer> PromoService<R> {
    /// Create a service.
    pub fn new(renderer: R, base_url: &str) -> Self {
        Self {
            renderer,
            base_url: base_url.to_string(),
        }
    }

    /// The renderer behind this service.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Base URL used for referral links.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a query into a document request.
    pub fn request(&self, query: &PromoQuery) -> DocumentRequest {
        DocumentRequest::new(
            query.kind,
            referral_link(&self.base_url, query.wallet.as_deref()),
        )
    }

    /// Handle one request given its method and request target
    /// (`/path?query`).
    pub fn handle(&self, method: &str, target: &str) -> PromoResponse {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        if path != ROUTE {
            log::warn!("no route for {} {}", method, path);
            return PromoResponse::text(404, "Not Found");
        }
        if !method.eq_ignore_ascii_case("GET") {
            log::warn!("method {} not allowed on {}", method, path);
            let mut response = PromoResponse::text(405, "Method Not Allowed");
            response.headers.push(("Allow", "GET".to_string()));
            return response;
        }

        let request = self.request(&PromoQuery::parse(query));
        match self.renderer.render(request.kind, &request.referral_link) {
            Ok(pdf) => {
                log::debug!("serving {} ({} bytes)", request.kind.filename(), pdf.len());
                PromoResponse::pdf(request.kind.filename(), pdf)
            },
            Err(e) => {
                log::error!("failed to render {}: {}", request.kind, e);
                PromoResponse::text(500, "Failed to generate PDF")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referral_link() {
        let base = "https://giclub.online";
        assert_eq!(
            referral_link(base, Some("0xabc")),
            "https://giclub.online/register?ref=0xabc"
        );
        assert_eq!(referral_link(base, None), "https://giclub.online/register");
        assert_eq!(referral_link(base, Some("")), "https://giclub.online/register");
        assert_eq!(
            referral_link("https://giclub.online/", Some("0x1")),
            "https://giclub.online/register?ref=0x1"
        );
    }

    #[test]
    fn test_query_parse() {
        let q = PromoQuery::parse("wallet=0xabc&type=flyer");
        assert_eq!(q.wallet.as_deref(), Some("0xabc"));
        assert_eq!(q.kind, DocumentKind::Flyer);

        let q = PromoQuery::parse("");
        assert_eq!(q, PromoQuery::default());

        let q = PromoQuery::parse("wallet=&type=bogus");
        assert_eq!(q.wallet, None);
        assert_eq!(q.kind, DocumentKind::Brochure);
    }

    #[test]
    fn test_query_decoding_and_first_wins() {
        let q = PromoQuery::parse("type=matrix&type=flyer&wallet=a%20b");
        assert_eq!(q.kind, DocumentKind::Matrix);
        assert_eq!(q.wallet.as_deref(), Some("a b"));
    }

    #[test]
    fn test_response_header_lookup() {
        let r = PromoResponse::pdf("GICLUB_Flyer.pdf", vec![1, 2, 3]);
        assert_eq!(r.header("content-length"), Some("3"));
        assert_eq!(
            r.header("Content-Disposition"),
            Some("attachment; filename=\"GICLUB_Flyer.pdf\"")
        );
        assert_eq!(r.header("X-Missing"), None);
    }
}
