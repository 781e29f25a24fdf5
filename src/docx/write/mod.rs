//! Package serialization: turn a [`Document`] into a complete part tree.
//!
//! Every part is built by appending into a `String`; text content and
//! attribute values go through [`escape_xml`] on the way in. Output is
//! deterministic: serializing the same document twice yields byte-identical
//! parts.
//!
//! [`escape_xml`]: crate::common::xml::escape_xml

mod comment;
mod doc;
mod note;
mod numbering;
mod paragraph;
mod props;
mod run;
mod section;
mod style;
mod table;
mod templates;

use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::common::xml::escape_xml;
use crate::docx::document::Document;
use crate::opc::constants::{content_type as ct, part, reltype};
use crate::opc::package::PartTree;

/// XML declaration prefixed to every XML part.
pub(crate) const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n";

/// Serialize the document into a complete, schema-valid part tree.
///
/// Emits the main document part, the fixed satellite parts (styles,
/// settings, font table), conditional parts (numbering, comments, notes,
/// headers, footers, media), both relationship parts, the content-types
/// manifest, and the two property parts.
pub fn write_package(doc: &Document) -> Result<PartTree> {
    let mut parts = PartTree::new();

    parts.insert(part::DOCUMENT, doc::generate_document_xml(doc)?);
    parts.insert(part::STYLES, style::generate_styles_xml(doc)?);
    parts.insert(part::SETTINGS, templates::settings_xml());
    parts.insert(part::FONT_TABLE, templates::font_table_xml());

    if !doc.numbering.is_empty() {
        parts.insert(part::NUMBERING, numbering::generate_numbering_xml(doc)?);
    }
    if !doc.comments.is_empty() {
        parts.insert(part::COMMENTS, comment::generate_comments_xml(doc)?);
    }
    if !doc.footnotes.is_empty() {
        parts.insert(part::FOOTNOTES, note::generate_footnotes_xml(doc)?);
    }
    if !doc.endnotes.is_empty() {
        parts.insert(part::ENDNOTES, note::generate_endnotes_xml(doc)?);
    }
    for header in &doc.headers {
        parts.insert(header.part_path(), note::generate_header_footer_xml(header)?);
    }
    for footer in &doc.footers {
        parts.insert(footer.part_path(), note::generate_header_footer_xml(footer)?);
    }
    for image in &doc.images {
        parts.insert(image.part_path(), image.data.clone());
    }

    parts.insert(part::CORE_PROPS, props::generate_core_props_xml(doc)?);
    parts.insert(part::APP_PROPS, props::generate_app_props_xml(doc)?);

    parts.insert(part::CONTENT_TYPES, generate_content_types_xml(doc)?);
    parts.insert(part::PACKAGE_RELS, generate_package_rels_xml()?);
    parts.insert(part::DOCUMENT_RELS, generate_document_rels_xml(doc)?);

    Ok(parts)
}

/// `[Content_Types].xml`: extension defaults plus one override per part.
fn generate_content_types_xml(doc: &Document) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    write!(
        xml,
        "<Types xmlns=\"{}\">",
        crate::opc::constants::namespace::OPC_CONTENT_TYPES
    )?;
    xml.push_str("<Default Extension=\"rels\" ContentType=\"");
    xml.push_str(ct::OPC_RELATIONSHIPS);
    xml.push_str("\"/>");
    xml.push_str("<Default Extension=\"xml\" ContentType=\"");
    xml.push_str(ct::XML);
    xml.push_str("\"/>");

    // One default per distinct media extension, in part-tree order
    let mut seen_exts: Vec<&str> = Vec::new();
    for image in &doc.images {
        if let Some(ext) = image.extension() {
            if !seen_exts.contains(&ext) {
                seen_exts.push(ext);
                write!(
                    xml,
                    "<Default Extension=\"{}\" ContentType=\"{}\"/>",
                    escape_xml(ext),
                    image.content_type()
                )?;
            }
        }
    }

    let mut overrides: Vec<(String, &str)> = vec![
        (format!("/{}", part::DOCUMENT), ct::WML_DOCUMENT_MAIN),
        (format!("/{}", part::STYLES), ct::WML_STYLES),
        (format!("/{}", part::SETTINGS), ct::WML_SETTINGS),
        (format!("/{}", part::FONT_TABLE), ct::WML_FONT_TABLE),
        (format!("/{}", part::CORE_PROPS), ct::OPC_CORE_PROPERTIES),
        (format!("/{}", part::APP_PROPS), ct::OFC_EXTENDED_PROPERTIES),
    ];
    if !doc.numbering.is_empty() {
        overrides.push((format!("/{}", part::NUMBERING), ct::WML_NUMBERING));
    }
    if !doc.comments.is_empty() {
        overrides.push((format!("/{}", part::COMMENTS), ct::WML_COMMENTS));
    }
    if !doc.footnotes.is_empty() {
        overrides.push((format!("/{}", part::FOOTNOTES), ct::WML_FOOTNOTES));
    }
    if !doc.endnotes.is_empty() {
        overrides.push((format!("/{}", part::ENDNOTES), ct::WML_ENDNOTES));
    }
    for header in &doc.headers {
        overrides.push((format!("/{}", header.part_path()), ct::WML_HEADER));
    }
    for footer in &doc.footers {
        overrides.push((format!("/{}", footer.part_path()), ct::WML_FOOTER));
    }
    for (name, content_type) in overrides {
        write!(
            xml,
            "<Override PartName=\"{}\" ContentType=\"{}\"/>",
            name, content_type
        )?;
    }
    xml.push_str("</Types>");
    Ok(xml)
}

/// `_rels/.rels`: the three fixed package-level relationships.
fn generate_package_rels_xml() -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    write!(
        xml,
        "<Relationships xmlns=\"{}\">",
        crate::opc::constants::namespace::OPC_RELATIONSHIPS
    )?;
    write!(
        xml,
        "<Relationship Id=\"rId1\" Type=\"{}\" Target=\"{}\"/>",
        reltype::OFFICE_DOCUMENT,
        part::DOCUMENT
    )?;
    write!(
        xml,
        "<Relationship Id=\"rId2\" Type=\"{}\" Target=\"{}\"/>",
        reltype::CORE_PROPERTIES,
        part::CORE_PROPS
    )?;
    write!(
        xml,
        "<Relationship Id=\"rId3\" Type=\"{}\" Target=\"{}\"/>",
        reltype::EXTENDED_PROPERTIES,
        part::APP_PROPS
    )?;
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// `word/_rels/document.xml.rels`: the reserved part relationships plus
/// every dynamic entry, sorted by numeric ID for deterministic output.
fn generate_document_rels_xml(doc: &Document) -> Result<String> {
    struct Entry<'a> {
        id: &'a str,
        reltype: &'a str,
        target: String,
        external: bool,
    }

    let mut entries = vec![
        Entry {
            id: crate::docx::rels::RID_STYLES,
            reltype: reltype::STYLES,
            target: "styles.xml".to_string(),
            external: false,
        },
        Entry {
            id: crate::docx::rels::RID_SETTINGS,
            reltype: reltype::SETTINGS,
            target: "settings.xml".to_string(),
            external: false,
        },
        Entry {
            id: crate::docx::rels::RID_FONT_TABLE,
            reltype: reltype::FONT_TABLE,
            target: "fontTable.xml".to_string(),
            external: false,
        },
    ];
    if !doc.numbering.is_empty() {
        entries.push(Entry {
            id: crate::docx::rels::RID_NUMBERING,
            reltype: reltype::NUMBERING,
            target: "numbering.xml".to_string(),
            external: false,
        });
    }
    for image in &doc.images {
        entries.push(Entry {
            id: &image.rel_id,
            reltype: reltype::IMAGE,
            target: format!("media/{}", image.file_name),
            external: false,
        });
    }
    for link in &doc.hyperlinks {
        entries.push(Entry {
            id: &link.rel_id,
            reltype: reltype::HYPERLINK,
            target: link.url.clone(),
            external: true,
        });
    }
    for header in &doc.headers {
        entries.push(Entry {
            id: &header.rel_id,
            reltype: reltype::HEADER,
            target: header.rel_target(),
            external: false,
        });
    }
    for footer in &doc.footers {
        entries.push(Entry {
            id: &footer.rel_id,
            reltype: reltype::FOOTER,
            target: footer.rel_target(),
            external: false,
        });
    }
    if let Some(id) = &doc.comments_rel_id {
        entries.push(Entry {
            id,
            reltype: reltype::COMMENTS,
            target: "comments.xml".to_string(),
            external: false,
        });
    }
    if let Some(id) = &doc.footnotes_rel_id {
        entries.push(Entry {
            id,
            reltype: reltype::FOOTNOTES,
            target: "footnotes.xml".to_string(),
            external: false,
        });
    }
    if let Some(id) = &doc.endnotes_rel_id {
        entries.push(Entry {
            id,
            reltype: reltype::ENDNOTES,
            target: "endnotes.xml".to_string(),
            external: false,
        });
    }

    entries.sort_by_key(|e| {
        e.id.strip_prefix("rId")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(u32::MAX)
    });

    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    write!(
        xml,
        "<Relationships xmlns=\"{}\">",
        crate::opc::constants::namespace::OPC_RELATIONSHIPS
    )?;
    for entry in entries {
        write!(
            xml,
            "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"",
            entry.id,
            entry.reltype,
            escape_xml(&entry.target)
        )?;
        if entry.external {
            xml.push_str(" TargetMode=\"External\"");
        }
        xml.push_str("/>");
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_has_mandatory_parts() {
        let mut doc = Document::new();
        doc.insert_paragraph(0, "hello").unwrap();
        let parts = write_package(&doc).unwrap();
        for path in [
            part::CONTENT_TYPES,
            part::PACKAGE_RELS,
            part::DOCUMENT_RELS,
            part::DOCUMENT,
            part::STYLES,
            part::SETTINGS,
            part::FONT_TABLE,
            part::CORE_PROPS,
            part::APP_PROPS,
        ] {
            assert!(parts.contains(path), "missing {}", path);
        }
        // conditional parts absent on a minimal document
        assert!(!parts.contains(part::NUMBERING));
        assert!(!parts.contains(part::COMMENTS));
    }

    #[test]
    fn serialization_is_deterministic() {
        let mut doc = Document::new();
        doc.insert_paragraph(0, "same").unwrap();
        doc.insert_hyperlink(0, "link", "https://example.com").unwrap();
        doc.properties.created = Some("2024-01-01T00:00:00Z".to_string());
        doc.properties.modified = Some("2024-01-01T00:00:00Z".to_string());
        let a = write_package(&doc).unwrap();
        let b = write_package(&doc).unwrap();
        let paths_a: Vec<_> = a.paths().collect();
        let paths_b: Vec<_> = b.paths().collect();
        assert_eq!(paths_a, paths_b);
        for path in paths_a {
            assert_eq!(a.get(path), b.get(path), "part {} differs", path);
        }
    }

    #[test]
    fn hyperlink_rel_is_external() {
        let mut doc = Document::new();
        doc.insert_paragraph(0, "x").unwrap();
        doc.insert_hyperlink(0, "site", "https://example.com/?a=1&b=2")
            .unwrap();
        let xml = generate_document_rels_xml(&doc).unwrap();
        assert!(xml.contains("TargetMode=\"External\""));
        // URL is escaped as an attribute value
        assert!(xml.contains("https://example.com/?a=1&amp;b=2"));
    }

    #[test]
    fn reserved_rel_ids_come_first() {
        let doc = Document::new();
        let xml = generate_document_rels_xml(&doc).unwrap();
        let id1 = xml.find("\"rId1\"").unwrap();
        let id2 = xml.find("\"rId2\"").unwrap();
        let id3 = xml.find("\"rId3\"").unwrap();
        assert!(id1 < id2 && id2 < id3);
        assert!(xml.contains("Target=\"styles.xml\""));
    }

    #[test]
    fn media_extension_gets_content_type_default() {
        let mut doc = Document::new();
        doc.insert_paragraph(0, "").unwrap();
        let png = [0x89u8, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD.encode(png);
        doc.insert_image(0, "a.png", &encoded, 10, 10).unwrap();
        let xml = generate_content_types_xml(&doc).unwrap();
        assert!(xml.contains("Extension=\"png\" ContentType=\"image/png\""));
    }
}
