//! Notes parts (`word/footnotes.xml`, `word/endnotes.xml`) and
//! header/footer parts.
use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::docx::document::Document;
use crate::docx::footnote::{Note, NoteKind};
use crate::docx::header_footer::HeaderFooter;
use crate::opc::constants::namespace;

use super::paragraph::write_paragraph;
use super::XML_DECL;

pub(crate) fn generate_footnotes_xml(doc: &Document) -> Result<String> {
    generate_notes_xml(&doc.footnotes, NoteKind::Footnote)
}

pub(crate) fn generate_endnotes_xml(doc: &Document) -> Result<String> {
    generate_notes_xml(&doc.endnotes, NoteKind::Endnote)
}

/// A notes part always opens with the separator (id 0) and continuation
/// separator (id 1) entries; real notes follow.
fn generate_notes_xml(notes: &[Note], kind: NoteKind) -> Result<String> {
    let (root, sep) = match kind {
        NoteKind::Footnote => ("w:footnotes", "w:footnote"),
        NoteKind::Endnote => ("w:endnotes", "w:endnote"),
    };
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    write!(
        xml,
        "<{root} xmlns:w=\"{ns}\" xmlns:r=\"{r}\">",
        root = root,
        ns = namespace::WML_MAIN,
        r = namespace::OFC_RELATIONSHIPS
    )?;
    write!(
        xml,
        "<{sep} w:type=\"separator\" w:id=\"0\">\
         <w:p><w:r><w:separator/></w:r></w:p></{sep}>",
        sep = sep
    )?;
    write!(
        xml,
        "<{sep} w:type=\"continuationSeparator\" w:id=\"1\">\
         <w:p><w:r><w:continuationSeparator/></w:r></w:p></{sep}>",
        sep = sep
    )?;
    for note in notes {
        write!(xml, "<{} w:id=\"{}\">", kind.element(), note.id)?;
        for (i, para) in note.paragraphs.iter().enumerate() {
            if i == 0 {
                // the first paragraph opens with the note's own reference mark
                let mut body = String::new();
                write_paragraph(&mut body, para)?;
                let with_ref = body.replacen(
                    "<w:p>",
                    &format!(
                        "<w:p><w:r><{}/></w:r>",
                        kind.reference_element()
                    ),
                    1,
                );
                xml.push_str(&with_ref);
            } else {
                write_paragraph(&mut xml, para)?;
            }
        }
        write!(xml, "</{}>", kind.element())?;
    }
    write!(xml, "</{}>", root)?;
    Ok(xml)
}

/// One header or footer part.
pub(crate) fn generate_header_footer_xml(part: &HeaderFooter) -> Result<String> {
    let root = part.kind.root_element();
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    write!(
        xml,
        "<{root} xmlns:w=\"{ns}\" xmlns:r=\"{r}\">",
        root = root,
        ns = namespace::WML_MAIN,
        r = namespace::OFC_RELATIONSHIPS
    )?;
    for para in &part.paragraphs {
        write_paragraph(&mut xml, para)?;
    }
    write!(xml, "</{}>", root)?;
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::header_footer::HeaderFooterKind;

    #[test]
    fn footnotes_part_opens_with_separators() {
        let mut doc = Document::new();
        doc.insert_paragraph(0, "text").unwrap();
        doc.insert_footnote(0, "a note").unwrap();
        let xml = generate_footnotes_xml(&doc).unwrap();
        let sep = xml.find("w:type=\"separator\" w:id=\"0\"").unwrap();
        let cont = xml
            .find("w:type=\"continuationSeparator\" w:id=\"1\"")
            .unwrap();
        let note = xml.find("<w:footnote w:id=\"2\">").unwrap();
        assert!(sep < cont && cont < note);
        assert!(xml.contains("<w:footnoteRef/>"));
        assert!(xml.contains("<w:t>a note</w:t>"));
    }

    #[test]
    fn endnotes_use_their_own_elements() {
        let mut doc = Document::new();
        doc.insert_paragraph(0, "text").unwrap();
        doc.insert_endnote(0, "closing").unwrap();
        let xml = generate_endnotes_xml(&doc).unwrap();
        assert!(xml.contains("<w:endnotes"));
        assert!(xml.contains("<w:endnote w:id=\"2\">"));
        assert!(xml.contains("<w:endnoteRef/>"));
    }

    #[test]
    fn header_part_root() {
        let hdr = HeaderFooter::new(HeaderFooterKind::Header, 1, "rId5", "Company");
        let xml = generate_header_footer_xml(&hdr).unwrap();
        assert!(xml.contains("<w:hdr "));
        assert!(xml.ends_with("</w:hdr>"));
        assert!(xml.contains("<w:t>Company</w:t>"));
    }
}
