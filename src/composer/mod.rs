//! Promotional document composition.
//!
//! A [`Composer`] turns a [`DocumentKind`] and a referral link into a
//! complete PDF. Templates draw onto any [`Surface`], so the same code
//! produces PDF bytes through [`PdfCanvas`] and a draw-call log through
//! [`RecordingSurface`](crate::canvas::RecordingSurface).
//!
//! ```ignore
//! use promo_pdf::composer::{build_document, DocumentKind};
//!
//! let pdf = build_document(DocumentKind::Flyer, "https://giclub.online/register")?;
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

pub mod brochure;
pub mod content;
pub mod flyer;
pub mod layout;
pub mod palette;

pub use content::{PromoContent, GICLUB};

use crate::canvas::{PdfCanvas, Surface};
use crate::error::Result;
use crate::writer::{PageSize, PdfWriterConfig};
use std::fmt;

/// Which promotional document to produce.
///
/// `Income` and `Matrix` share the brochure layout; they differ only in
/// download filename and document title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentKind {
    /// Three-page brochure
    #[default]
    Brochure,
    /// Brochure offered as the income guide
    Income,
    /// Brochure offered as the matrix guide
    Matrix,
    /// One-page flyer
    Flyer,
}

impl DocumentKind {
    /// All kinds in a stable order.
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Brochure,
        DocumentKind::Income,
        DocumentKind::Matrix,
        DocumentKind::Flyer,
    ];

    /// Resolve a `type` query value. Missing or unrecognized values fall
    /// back to [`DocumentKind::Brochure`].
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("brochure") => DocumentKind::Brochure,
            Some("income") => DocumentKind::Income,
            Some("matrix") => DocumentKind::Matrix,
            Some("flyer") => DocumentKind::Flyer,
            Some(other) => {
                log::debug!("unknown document type {:?}, using brochure", other);
                DocumentKind::Brochure
            },
        }
    }

    /// Query value naming this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Brochure => "brochure",
            DocumentKind::Income => "income",
            DocumentKind::Matrix => "matrix",
            DocumentKind::Flyer => "flyer",
        }
    }

    /// Download filename.
    pub fn filename(self) -> &'static str {
        match self {
            DocumentKind::Brochure => "GICLUB_Brochure.pdf",
            DocumentKind::Income => "GICLUB_Income_Guide.pdf",
            DocumentKind::Matrix => "GICLUB_Matrix_Guide.pdf",
            DocumentKind::Flyer => "GICLUB_Flyer.pdf",
        }
    }

    /// Title written to the document information dictionary.
    pub fn title(self) -> &'static str {
        match self {
            DocumentKind::Brochure => "GICLUB Brochure",
            DocumentKind::Income => "GICLUB Income Guide",
            DocumentKind::Matrix => "GICLUB Matrix Guide",
            DocumentKind::Flyer => "GICLUB Flyer",
        }
    }

    /// Pages produced with the standard content.
    pub fn page_count(self) -> usize {
        match self {
            DocumentKind::Flyer => 1,
            _ => 3,
        }
    }

    fn is_flyer(self) -> bool {
        self == DocumentKind::Flyer
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved request for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    /// Template to render
    pub kind: DocumentKind,
    /// Link printed verbatim in the call-to-action panel
    pub referral_link: String,
}

impl DocumentRequest {
    /// Create a request.
    pub fn new(kind: DocumentKind, referral_link: impl Into<String>) -> Self {
        Self {
            kind,
            referral_link: referral_link.into(),
        }
    }
}

/// Composer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposerConfig {
    /// Page size of every page
    pub page_size: PageSize,
    /// Flate-compress content streams
    pub compress: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            compress: false,
        }
    }
}

impl ComposerConfig {
    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Builds promotional PDFs. Stateless apart from its configuration, so one
/// instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    config: ComposerConfig,
}

impl Composer {
    /// Composer with A4 pages and no compression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Composer with an explicit configuration.
    pub fn with_config(config: ComposerConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Render `kind` with the GICLUB copy and return the PDF bytes.
    ///
    /// Output depends only on the arguments and the configuration. No bytes
    /// are returned on failure.
    pub fn build(&self, kind: DocumentKind, referral_link: &str) -> Result<Vec<u8>> {
        let writer_config = PdfWriterConfig::default()
            .with_title(kind.title())
            .with_subject("GICLUB promotional material")
            .with_compress(self.config.compress);
        let mut canvas = PdfCanvas::new(self.config.page_size, writer_config);

        compose(&mut canvas, kind, referral_link, &GICLUB);
        let pages = canvas.page_count();
        let bytes = canvas.finish()?;

        log::debug!("built {} ({} pages, {} bytes)", kind, pages, bytes.len());
        Ok(bytes)
    }

    /// Render a [`DocumentRequest`].
    pub fn build_request(&self, request: &DocumentRequest) -> Result<Vec<u8>> {
        self.build(request.kind, &request.referral_link)
    }
}

/// Draw the template for `kind` onto `surface` using `content`.
pub fn compose<S: Surface>(
    surface: &mut S,
    kind: DocumentKind,
    referral_link: &str,
    content: &PromoContent<'_>,
) {
    if kind.is_flyer() {
        flyer::render(surface, &content.flyer, referral_link);
    } else {
        brochure::render(surface, &content.brochure, referral_link);
    }
}

/// Build a document with the default composer.
pub fn build_document(kind: DocumentKind, referral_link: &str) -> Result<Vec<u8>> {
    Composer::new().build(kind, referral_link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingSurface;

    #[test]
    fn test_from_param() {
        assert_eq!(DocumentKind::from_param(None), DocumentKind::Brochure);
        assert_eq!(DocumentKind::from_param(Some("")), DocumentKind::Brochure);
        assert_eq!(DocumentKind::from_param(Some("flyer")), DocumentKind::Flyer);
        assert_eq!(DocumentKind::from_param(Some("income")), DocumentKind::Income);
        assert_eq!(DocumentKind::from_param(Some("matrix")), DocumentKind::Matrix);
        assert_eq!(DocumentKind::from_param(Some("bogus")), DocumentKind::Brochure);
        assert_eq!(DocumentKind::from_param(Some("FLYER")), DocumentKind::Brochure);
    }

    #[test]
    fn test_round_trip_through_param() {
        for kind in DocumentKind::ALL {
            assert_eq!(DocumentKind::from_param(Some(kind.as_str())), kind);
        }
    }

    #[test]
    fn test_filenames() {
        assert_eq!(DocumentKind::Brochure.filename(), "GICLUB_Brochure.pdf");
        assert_eq!(DocumentKind::Income.filename(), "GICLUB_Income_Guide.pdf");
        assert_eq!(DocumentKind::Matrix.filename(), "GICLUB_Matrix_Guide.pdf");
        assert_eq!(DocumentKind::Flyer.filename(), "GICLUB_Flyer.pdf");
    }

    #[test]
    fn test_page_counts_match_templates() {
        for kind in DocumentKind::ALL {
            let mut surface = RecordingSurface::new(PageSize::A4);
            compose(&mut surface, kind, "https://giclub.online/register", &GICLUB);
            assert_eq!(surface.page_count(), kind.page_count(), "{}", kind);
            assert!(surface.is_balanced());
        }
    }

    #[test]
    fn test_build_is_pdf() {
        let pdf = build_document(DocumentKind::Flyer, "https://giclub.online/register").unwrap();
        assert!(pdf.starts_with(b"%PDF-1.7"));
        assert!(pdf.ends_with(b"%%EOF"));
    }

    #[test]
    fn test_title_in_info() {
        let pdf = build_document(DocumentKind::Matrix, "x").unwrap();
        let text = String::from_utf8_lossy(&pdf);
        assert!(text.contains("/Title (GICLUB Matrix Guide)"));
    }

    #[test]
    fn test_request_matches_direct_build() {
        let composer = Composer::new();
        let request = DocumentRequest::new(DocumentKind::Income, "https://giclub.online/register");
        assert_eq!(
            composer.build_request(&request).unwrap(),
            composer.build(DocumentKind::Income, "https://giclub.online/register").unwrap()
        );
    }
}
