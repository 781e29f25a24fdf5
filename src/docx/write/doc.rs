//! The main document part, `word/document.xml`.
use crate::common::error::Result;
use crate::docx::document::{BodyChild, Document};
use crate::opc::constants::namespace;

use super::paragraph::write_paragraph;
use super::section::write_section_properties;
use super::table::write_table;
use super::XML_DECL;

/// Serialize the body: blocks in document order, then the trailing
/// section properties.
pub(crate) fn generate_document_xml(doc: &Document) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    xml.push_str("<w:document");
    push_namespaces(&mut xml);
    xml.push_str("><w:body>");
    for child in &doc.body.children {
        match child {
            BodyChild::Paragraph(para) => write_paragraph(&mut xml, para)?,
            BodyChild::Table(table) => write_table(&mut xml, table)?,
        }
    }
    write_section_properties(&mut xml, &doc.section)?;
    xml.push_str("</w:body></w:document>");
    Ok(xml)
}

/// Namespace declarations on the document root. The drawing namespaces
/// are always declared so image-bearing runs never need local
/// declarations.
fn push_namespaces(xml: &mut String) {
    xml.push_str(" xmlns:w=\"");
    xml.push_str(namespace::WML_MAIN);
    xml.push_str("\" xmlns:r=\"");
    xml.push_str(namespace::OFC_RELATIONSHIPS);
    xml.push_str("\" xmlns:wp=\"");
    xml.push_str(namespace::DML_WORDPROCESSING_DRAWING);
    xml.push_str("\" xmlns:m=\"http://schemas.openxmlformats.org/officeDocument/2006/math\"");
    xml.push_str(" xmlns:w14=\"http://schemas.microsoft.com/office/word/2010/wordml\"");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_preserves_block_order() {
        let mut doc = Document::new();
        doc.insert_paragraph(0, "before").unwrap();
        doc.insert_table(0, 1, 1).unwrap();
        doc.insert_paragraph(1, "after").unwrap();
        // "after" was inserted at paragraph index 1, which lands after the
        // table because the table was appended first
        let xml = generate_document_xml(&doc).unwrap();
        let before = xml.find("<w:t>before</w:t>").unwrap();
        let table = xml.find("<w:tbl>").unwrap();
        let after = xml.find("<w:t>after</w:t>").unwrap();
        assert!(before < table && table < after);
    }

    #[test]
    fn sect_pr_closes_the_body() {
        let doc = Document::new();
        let xml = generate_document_xml(&doc).unwrap();
        let sect = xml.find("<w:sectPr>").unwrap();
        let body_end = xml.find("</w:body>").unwrap();
        assert!(sect < body_end);
    }

    #[test]
    fn root_declares_drawing_namespaces() {
        let doc = Document::new();
        let xml = generate_document_xml(&doc).unwrap();
        assert!(xml.contains("xmlns:wp="));
        assert!(xml.contains("xmlns:r="));
    }
}
