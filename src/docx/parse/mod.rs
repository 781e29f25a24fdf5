//! Package parsing: populate a [`Document`] from an extracted part tree.
//!
//! Parsing is tolerant where the input is merely odd and strict where it
//! is structurally broken: a missing `word/document.xml` fails the whole
//! document, a malformed attribute only skips the element carrying it, a
//! missing optional part falls back to defaults.

mod body;
mod notes;
mod numbering;
mod properties;
mod rels;
mod styles;

use quick_xml::events::BytesStart;

use crate::common::error::{DocxError, Result};
use crate::docx::document::Document;
use crate::docx::image::{ImageFormat, ImageRef};
use crate::docx::styles::Styles;
use crate::opc::constants::{part, reltype};
use crate::opc::package::PartTree;

use rels::Relationship;

/// Build a document from a package part tree.
pub fn parse_package(parts: &PartTree) -> Result<Document> {
    let document_xml = parts
        .get(part::DOCUMENT)
        .ok_or_else(|| DocxError::PartNotFound(part::DOCUMENT.to_string()))?;

    let mut doc = Document::new();

    let relationships = match parts.get(part::DOCUMENT_RELS) {
        Some(bytes) => rels::parse_relationships(part_str(part::DOCUMENT_RELS, bytes)?)?,
        None => Vec::new(),
    };
    for rel in &relationships {
        doc.rel_ids.observe(&rel.id);
    }

    if let Some(bytes) = parts.get(part::STYLES) {
        doc.styles = styles::parse_styles(part_str(part::STYLES, bytes)?)?;
        if doc.styles.styles.is_empty() {
            doc.styles = Styles::default();
        }
    }
    if let Some(bytes) = parts.get(part::NUMBERING) {
        doc.numbering = numbering::parse_numbering(part_str(part::NUMBERING, bytes)?)?;
    }
    if let Some(bytes) = parts.get(part::COMMENTS) {
        doc.comments = notes::parse_comments(part_str(part::COMMENTS, bytes)?)?;
    }
    if let Some(bytes) = parts.get(part::FOOTNOTES) {
        doc.footnotes = notes::parse_footnotes(part_str(part::FOOTNOTES, bytes)?)?;
    }
    if let Some(bytes) = parts.get(part::ENDNOTES) {
        doc.endnotes = notes::parse_endnotes(part_str(part::ENDNOTES, bytes)?)?;
    }

    let parsed = body::parse_document(part_str(part::DOCUMENT, document_xml)?)?;
    doc.body = parsed.body;
    doc.section = parsed.section;

    wire_relationships(&mut doc, &relationships, parts)?;
    doc.resume_id_counters();
    Ok(doc)
}

/// Resolve each dynamic relationship into the collection it feeds.
fn wire_relationships(
    doc: &mut Document,
    relationships: &[Relationship],
    parts: &PartTree,
) -> Result<()> {
    for rel in relationships {
        match rel.reltype.as_str() {
            t if t == reltype::IMAGE => {
                let path = resolve_target(&rel.target);
                // media part may be absent in a damaged package; keep the
                // entry with empty bytes rather than failing the document
                let data = parts.get(&path).map(|d| d.to_vec()).unwrap_or_default();
                let format = ImageFormat::detect_from_bytes(&data);
                let file_name = rel
                    .target
                    .rsplit('/')
                    .next()
                    .unwrap_or(rel.target.as_str())
                    .to_string();
                doc.images.push(ImageRef {
                    rel_id: rel.id.clone(),
                    file_name,
                    data,
                    format,
                });
            }
            t if t == reltype::HYPERLINK => {
                doc.hyperlinks.push(crate::docx::hyperlink::HyperlinkRef {
                    rel_id: rel.id.clone(),
                    url: rel.target.clone(),
                });
            }
            t if t == reltype::HEADER => {
                let path = resolve_target(&rel.target);
                if let Some(bytes) = parts.get(&path) {
                    let index = part_number(&rel.target, "header");
                    let paragraphs =
                        body::parse_block_paragraphs(part_str(&path, bytes)?)?;
                    doc.headers.push(crate::docx::header_footer::HeaderFooter {
                        kind: crate::docx::header_footer::HeaderFooterKind::Header,
                        index,
                        rel_id: rel.id.clone(),
                        paragraphs,
                    });
                }
            }
            t if t == reltype::FOOTER => {
                let path = resolve_target(&rel.target);
                if let Some(bytes) = parts.get(&path) {
                    let index = part_number(&rel.target, "footer");
                    let paragraphs =
                        body::parse_block_paragraphs(part_str(&path, bytes)?)?;
                    doc.footers.push(crate::docx::header_footer::HeaderFooter {
                        kind: crate::docx::header_footer::HeaderFooterKind::Footer,
                        index,
                        rel_id: rel.id.clone(),
                        paragraphs,
                    });
                }
            }
            t if t == reltype::COMMENTS => doc.comments_rel_id = Some(rel.id.clone()),
            t if t == reltype::FOOTNOTES => doc.footnotes_rel_id = Some(rel.id.clone()),
            t if t == reltype::ENDNOTES => doc.endnotes_rel_id = Some(rel.id.clone()),
            _ => {}
        }
    }
    doc.headers.sort_by_key(|h| h.index);
    doc.footers.sort_by_key(|f| f.index);

    if let Some(bytes) = parts.get(part::CORE_PROPS) {
        properties::parse_core_props(part_str(part::CORE_PROPS, bytes)?, &mut doc.properties)?;
    }
    if let Some(bytes) = parts.get(part::APP_PROPS) {
        properties::parse_app_props(part_str(part::APP_PROPS, bytes)?, &mut doc.properties)?;
    }
    Ok(())
}

/// Document-part-relative target to package path (`media/image1.png` to
/// `word/media/image1.png`).
fn resolve_target(target: &str) -> String {
    if target.starts_with('/') {
        target.trim_start_matches('/').to_string()
    } else {
        format!("word/{}", target)
    }
}

/// Trailing number of `header3.xml` style targets; 1 when absent.
fn part_number(target: &str, stem: &str) -> u32 {
    target
        .rsplit('/')
        .next()
        .and_then(|name| name.strip_suffix(".xml"))
        .and_then(|name| name.strip_prefix(stem))
        .and_then(|n| n.parse().ok())
        .unwrap_or(1)
}

/// Decode a part as UTF-8, attributing failures to the part.
fn part_str<'a>(path: &str, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|e| DocxError::Parse {
        part: path.to_string(),
        detail: format!("not valid UTF-8: {}", e),
    })
}

/// Attribute value by local name, entity-decoded. Malformed attributes
/// are skipped.
pub(crate) fn attr(e: &BytesStart, name: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == name.as_bytes())
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

/// Numeric attribute by local name.
pub(crate) fn attr_num<T: std::str::FromStr>(e: &BytesStart, name: &str) -> Option<T> {
    attr(e, name).and_then(|v| v.parse().ok())
}
