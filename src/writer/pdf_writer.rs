//! PDF document writer.
//!
//! Assembles complete PDF documents with proper structure:
//! header, body, xref table, and trailer.

use super::content_stream::ContentStreamBuilder;
use super::graphics_state::ExtGStateBuilder;
use super::object_serializer::ObjectSerializer;
use crate::error::{Error, Result};
use crate::object::{Object, ObjectRef};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::io::Write;

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.7")
    pub version: String,
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// Whether to compress streams
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            title: None,
            subject: None,
            creator: Some(crate::NAME.to_string()),
            compress: false,
        }
    }
}

impl PdfWriterConfig {
    /// Set document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set document subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Enable or disable stream compression.
    ///
    /// When enabled, content streams are compressed using FlateDecode
    /// (zlib/deflate) to reduce file size.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Compress data using Flate/Deflate compression.
///
/// Returns compressed bytes suitable for FlateDecode filter.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// A page being built.
pub struct PageBuilder<'a> {
    writer: &'a mut PdfWriter,
    page_index: usize,
}

impl<'a> PageBuilder<'a> {
    /// Zero-based index of this page.
    pub fn index(&self) -> usize {
        self.page_index
    }

    /// Content stream of this page.
    pub fn content(&mut self) -> &mut ContentStreamBuilder {
        &mut self.writer.pages[self.page_index].content_builder
    }

    /// Select a Base-14 font, registering it as a page resource on first use.
    pub fn set_font(&mut self, base_font: &str, size: f32) -> &mut Self {
        let resource = self.writer.font_resource(base_font);
        self.content().set_font(&resource, size);
        self
    }

    /// Apply an ExtGState, registering it as a resource on first use.
    pub fn set_ext_gstate(&mut self, state: ExtGStateBuilder) -> &mut Self {
        let resource = self.writer.ext_gstate_resource(state);
        self.content().set_ext_gstate(&resource);
        self
    }
}

/// Internal page data.
struct PageData {
    width: f32,
    height: f32,
    content_builder: ContentStreamBuilder,
}

/// PDF document writer.
///
/// Builds a complete PDF document with pages, fonts, and content. Resource
/// names and object numbers are assigned in first-use order, so the same
/// sequence of calls always produces the same bytes.
pub struct PdfWriter {
    config: PdfWriterConfig,
    pages: Vec<PageData>,
    /// Fonts used (base font name -> resource name)
    fonts: IndexMap<String, String>,
    /// ExtGStates used, with their resource names
    ext_gstates: Vec<(ExtGStateBuilder, String)>,
}

impl PdfWriter {
    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            fonts: IndexMap::new(),
            ext_gstates: Vec::new(),
        }
    }

    /// Add a page with the given dimensions.
    pub fn add_page(&mut self, width: f32, height: f32) -> PageBuilder<'_> {
        let page_index = self.pages.len();
        self.pages.push(PageData {
            width,
            height,
            content_builder: ContentStreamBuilder::new(),
        });
        PageBuilder {
            writer: self,
            page_index,
        }
    }

    /// The most recently added page, or a new page of the given size when
    /// the document is still empty.
    pub fn current_page(&mut self, width: f32, height: f32) -> PageBuilder<'_> {
        if self.pages.is_empty() {
            return self.add_page(width, height);
        }
        PageBuilder {
            page_index: self.pages.len() - 1,
            writer: self,
        }
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Resource name for a Base-14 font (`F1`, `F2`, ... in first-use order).
    pub fn font_resource(&mut self, base_font: &str) -> String {
        if let Some(name) = self.fonts.get(base_font) {
            return name.clone();
        }
        let name = format!("F{}", self.fonts.len() + 1);
        self.fonts.insert(base_font.to_string(), name.clone());
        name
    }

    /// Resource name for an ExtGState (`GS1`, `GS2`, ...); equal states share
    /// one resource.
    pub fn ext_gstate_resource(&mut self, state: ExtGStateBuilder) -> String {
        if let Some((_, name)) = self.ext_gstates.iter().find(|(s, _)| *s == state) {
            return name.clone();
        }
        let name = format!("GS{}", self.ext_gstates.len() + 1);
        self.ext_gstates.push((state, name.clone()));
        name
    }

    /// Build the complete PDF document.
    ///
    /// Fails with [`Error::Render`] when there are no pages or a page's
    /// content stream is malformed; nothing is returned in that case.
    pub fn finish(self) -> Result<Vec<u8>> {
        if self.pages.is_empty() {
            return Err(Error::Render("document has no pages".to_string()));
        }

        let serializer = ObjectSerializer::new();
        let mut output = Vec::new();
        let mut xref_offsets: Vec<(u32, usize)> = Vec::new();

        // Object numbering: catalog, pages, fonts, ExtGStates, page/content
        // pairs, info.
        let catalog_id = 1u32;
        let pages_id = 2u32;
        let mut next_id = 3u32;
        let mut alloc = || {
            let id = next_id;
            next_id += 1;
            id
        };

        let font_ids: Vec<u32> = self.fonts.iter().map(|_| alloc()).collect();
        let gstate_ids: Vec<u32> = self.ext_gstates.iter().map(|_| alloc()).collect();
        let page_ids: Vec<(u32, u32)> = self.pages.iter().map(|_| (alloc(), alloc())).collect();
        let info_id = alloc();
        let size = next_id;

        // Shared resource dictionary
        let font_resources: HashMap<String, Object> = self
            .fonts
            .values()
            .zip(&font_ids)
            .map(|(name, id)| (name.clone(), Object::Reference(ObjectRef::new(*id, 0))))
            .collect();
        let mut resource_entries = vec![("Font", Object::Dictionary(font_resources))];
        if !self.ext_gstates.is_empty() {
            let gstate_resources: HashMap<String, Object> = self
                .ext_gstates
                .iter()
                .zip(&gstate_ids)
                .map(|((_, name), id)| (name.clone(), Object::Reference(ObjectRef::new(*id, 0))))
                .collect();
            resource_entries.push(("ExtGState", Object::Dictionary(gstate_resources)));
        }
        let resources = ObjectSerializer::dict(resource_entries);

        // PDF Header
        writeln!(output, "%PDF-{}", self.config.version)?;
        // Binary marker (recommended for binary content)
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        // Catalog
        let catalog_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Catalog")),
            ("Pages", ObjectSerializer::reference(pages_id)),
        ]);
        xref_offsets.push((catalog_id, output.len()));
        serializer.write_indirect(&mut output, catalog_id, &catalog_obj)?;

        // Pages
        let page_refs: Vec<Object> = page_ids
            .iter()
            .map(|(page_id, _)| ObjectSerializer::reference(*page_id))
            .collect();
        let pages_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            ("Kids", Object::Array(page_refs)),
            ("Count", ObjectSerializer::integer(self.pages.len() as i64)),
        ]);
        xref_offsets.push((pages_id, output.len()));
        serializer.write_indirect(&mut output, pages_id, &pages_obj)?;

        // Font objects
        for (base_font, id) in self.fonts.keys().zip(&font_ids) {
            let font_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Font")),
                ("Subtype", ObjectSerializer::name("Type1")),
                ("BaseFont", ObjectSerializer::name(base_font)),
                ("Encoding", ObjectSerializer::name("WinAnsiEncoding")),
            ]);
            xref_offsets.push((*id, output.len()));
            serializer.write_indirect(&mut output, *id, &font_obj)?;
        }

        // ExtGState objects
        for ((state, _), id) in self.ext_gstates.iter().zip(&gstate_ids) {
            xref_offsets.push((*id, output.len()));
            serializer.write_indirect(&mut output, *id, &state.build())?;
        }

        // Page and content objects
        for (page_data, (page_id, content_id)) in self.pages.iter().zip(&page_ids) {
            let raw_content = page_data.content_builder.build()?;

            let (content_bytes, is_compressed) = if self.config.compress {
                match compress_data(&raw_content) {
                    Ok(compressed) => (compressed, true),
                    Err(e) => {
                        log::warn!("content stream compression failed, writing uncompressed: {}", e);
                        (raw_content, false)
                    },
                }
            } else {
                (raw_content, false)
            };

            let mut content_dict = HashMap::new();
            content_dict.insert("Length".to_string(), Object::Integer(content_bytes.len() as i64));
            if is_compressed {
                content_dict.insert("Filter".to_string(), Object::Name("FlateDecode".to_string()));
            }

            let page_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Page")),
                ("Parent", ObjectSerializer::reference(pages_id)),
                ("MediaBox", ObjectSerializer::media_box(page_data.width, page_data.height)),
                ("Contents", ObjectSerializer::reference(*content_id)),
                ("Resources", resources.clone()),
            ]);
            xref_offsets.push((*page_id, output.len()));
            serializer.write_indirect(&mut output, *page_id, &page_obj)?;

            let content_obj = Object::Stream {
                dict: content_dict,
                data: bytes::Bytes::from(content_bytes),
            };
            xref_offsets.push((*content_id, output.len()));
            serializer.write_indirect(&mut output, *content_id, &content_obj)?;
        }

        // Info object
        let mut info_entries = Vec::new();
        if let Some(title) = &self.config.title {
            info_entries.push(("Title", ObjectSerializer::string(title)));
        }
        if let Some(subject) = &self.config.subject {
            info_entries.push(("Subject", ObjectSerializer::string(subject)));
        }
        if let Some(creator) = &self.config.creator {
            info_entries.push(("Creator", ObjectSerializer::string(creator)));
            info_entries.push(("Producer", ObjectSerializer::string(creator)));
        }
        let info_obj = ObjectSerializer::dict(info_entries);
        xref_offsets.push((info_id, output.len()));
        serializer.write_indirect(&mut output, info_id, &info_obj)?;

        // Write xref table
        let xref_start = output.len();
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", size)?;

        // Object 0 is always free
        writeln!(output, "0000000000 65535 f ")?;

        xref_offsets.sort_by_key(|(id, _)| *id);
        for (_, offset) in &xref_offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        // Write trailer
        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(size as i64)),
            ("Root", ObjectSerializer::reference(catalog_id)),
            ("Info", ObjectSerializer::reference(info_id)),
        ]);

        writeln!(output, "trailer")?;
        serializer.write(&mut output, &trailer)?;
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        write!(output, "%%EOF")?;

        Ok(output)
    }
}
