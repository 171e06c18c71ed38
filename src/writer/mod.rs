//! PDF writing module for generating PDF files.
//!
//! ## Architecture
//!
//! ```text
//! Surface calls (canvas)
//!     ↓
//! [ContentStreamBuilder] (drawing operators → content stream bytes)
//!     ↓
//! [PdfWriter] (pages, resources, xref, trailer)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## Low-Level API (PdfWriter)
//!
//! ```ignore
//! use promo_pdf::writer::{PdfWriter, PdfWriterConfig};
//!
//! let mut writer = PdfWriter::with_config(PdfWriterConfig::default().with_title("GICLUB"));
//! let mut page = writer.add_page(595.0, 842.0);
//! page.set_font("Helvetica", 12.0);
//! page.content().text("Hello, World!", 72.0, 720.0);
//! let bytes = writer.finish()?;
//! ```

mod color;
mod content_stream;
mod font_manager;
mod graphics_state;
mod object_serializer;
mod page_size;
mod pdf_writer;
pub mod win_ansi;

pub use color::Color;
pub use content_stream::{ContentStreamBuilder, ContentStreamOp};
pub use font_manager::{FontInfo, FontManager, TextLayout};
pub use graphics_state::ExtGStateBuilder;
pub use object_serializer::ObjectSerializer;
pub use page_size::PageSize;
pub use pdf_writer::{PageBuilder, PdfWriter, PdfWriterConfig};
