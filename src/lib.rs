// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::should_implement_trait)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # promo_pdf
//!
//! Personalised GICLUB promotional PDFs, generated in memory.
//!
//! ## Features
//!
//! - **Brochure**: three A4 pages (cover, income streams, join guide and FAQ)
//! - **Flyer**: one A4 page
//! - **Referral link**: printed verbatim in the call-to-action panel
//! - **Deterministic output**: same arguments, same bytes
//! - **HTTP route**: `GET /api/promotion/pdf?wallet=..&type=..` served by a
//!   small `tiny_http` server
//!
//! ## Architecture
//!
//! - [`writer`]: PDF object serialization, content streams, Base-14 font
//!   metrics and document assembly
//! - [`canvas`]: the [`Surface`](canvas::Surface) drawing primitive with a
//!   PDF backend and a recording backend for layout tests
//! - [`composer`]: palette, copy, layout helpers and the two templates
//! - [`service`]: request handling, configuration and the HTTP server
//!
//! ## Quick Start
//!
//! ```ignore
//! use promo_pdf::{build_document, DocumentKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pdf = build_document(DocumentKind::Brochure, "https://giclub.online/register?ref=0xabc")?;
//! std::fs::write("GICLUB_Brochure.pdf", pdf)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// PDF object model
pub mod object;

// PDF writing
pub mod writer;

// Drawing surfaces
pub mod canvas;

// Document templates
pub mod composer;

// HTTP route and server
pub mod service;

// Re-exports
pub use canvas::{PdfCanvas, RecordingSurface, StateGuard, Surface};
pub use composer::{build_document, Composer, ComposerConfig, DocumentKind, DocumentRequest};
pub use error::{Error, Result};
pub use service::{PromoServer, PromoService, ServiceConfig};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
