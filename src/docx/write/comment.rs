//! The comments part, `word/comments.xml`.
use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::common::xml::escape_xml;
use crate::docx::document::Document;
use crate::opc::constants::namespace;

use super::paragraph::write_paragraph;
use super::XML_DECL;

pub(crate) fn generate_comments_xml(doc: &Document) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    write!(
        xml,
        "<w:comments xmlns:w=\"{}\" xmlns:r=\"{}\">",
        namespace::WML_MAIN,
        namespace::OFC_RELATIONSHIPS
    )?;
    for comment in &doc.comments {
        write!(
            xml,
            "<w:comment w:id=\"{}\" w:author=\"{}\" w:initials=\"{}\"",
            comment.id,
            escape_xml(&comment.author),
            escape_xml(&comment.initials)
        )?;
        if let Some(date) = &comment.date {
            write!(xml, " w:date=\"{}\"", escape_xml(date))?;
        }
        xml.push('>');
        for para in &comment.paragraphs {
            write_paragraph(&mut xml, para)?;
        }
        xml.push_str("</w:comment>");
    }
    xml.push_str("</w:comments>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_attributes_and_body() {
        let mut doc = Document::new();
        doc.insert_paragraph(0, "text").unwrap();
        let id = doc.insert_comment(0, "Ada Lovelace", "verify & fix").unwrap();
        let xml = generate_comments_xml(&doc).unwrap();
        assert!(xml.contains(&format!("<w:comment w:id=\"{}\"", id)));
        assert!(xml.contains("w:author=\"Ada Lovelace\""));
        assert!(xml.contains("w:initials=\"AL\""));
        assert!(xml.contains("verify &amp; fix"));
    }

    #[test]
    fn date_is_written_when_present() {
        let mut doc = Document::new();
        doc.insert_paragraph(0, "text").unwrap();
        doc.insert_comment(0, "R", "note").unwrap();
        doc.comments[0].date = Some("2024-06-01T12:00:00Z".to_string());
        let xml = generate_comments_xml(&doc).unwrap();
        assert!(xml.contains("w:date=\"2024-06-01T12:00:00Z\""));
    }
}
