//! The numbering part, `word/numbering.xml`.
use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::common::xml::escape_xml;
use crate::docx::document::Document;
use crate::docx::numbering::AbstractNum;
use crate::opc::constants::namespace;

use super::XML_DECL;

pub(crate) fn generate_numbering_xml(doc: &Document) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    write!(xml, "<w:numbering xmlns:w=\"{}\">", namespace::WML_MAIN)?;
    // abstract definitions first, instances after: schema order
    for abs in &doc.numbering.abstract_nums {
        write_abstract_num(&mut xml, abs)?;
    }
    for num in &doc.numbering.nums {
        write!(
            xml,
            "<w:num w:numId=\"{}\"><w:abstractNumId w:val=\"{}\"/></w:num>",
            num.id, num.abstract_id
        )?;
    }
    xml.push_str("</w:numbering>");
    Ok(xml)
}

fn write_abstract_num(xml: &mut String, abs: &AbstractNum) -> Result<()> {
    write!(xml, "<w:abstractNum w:abstractNumId=\"{}\">", abs.id)?;
    for level in &abs.levels {
        write!(xml, "<w:lvl w:ilvl=\"{}\">", level.level)?;
        write!(xml, "<w:start w:val=\"{}\"/>", level.start)?;
        write!(xml, "<w:numFmt w:val=\"{}\"/>", level.format.to_xml())?;
        write!(xml, "<w:lvlText w:val=\"{}\"/>", escape_xml(&level.text))?;
        xml.push_str("<w:lvlJc w:val=\"left\"/>");
        write!(
            xml,
            "<w:pPr><w:ind w:left=\"{}\" w:hanging=\"{}\"/></w:pPr>",
            level.indent_left.0, level.indent_hanging.0
        )?;
        if let Some(font) = &level.font {
            let escaped = escape_xml(font);
            write!(
                xml,
                "<w:rPr><w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\"/></w:rPr>",
                escaped
            )?;
        }
        xml.push_str("</w:lvl>");
    }
    xml.push_str("</w:abstractNum>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abstract_nums_precede_instances() {
        let mut doc = Document::new();
        doc.numbering.ensure_bullet();
        let xml = generate_numbering_xml(&doc).unwrap();
        let abs = xml.find("<w:abstractNum").unwrap();
        let num = xml.find("<w:num w:numId=").unwrap();
        assert!(abs < num);
        assert_eq!(xml.matches("<w:lvl ").count(), 9);
    }

    #[test]
    fn bullet_level_carries_symbol_font() {
        let mut doc = Document::new();
        doc.numbering.ensure_bullet();
        let xml = generate_numbering_xml(&doc).unwrap();
        assert!(xml.contains("<w:numFmt w:val=\"bullet\"/>"));
        assert!(xml.contains("w:ascii=\"Symbol\""));
    }

    #[test]
    fn decimal_level_text() {
        let mut doc = Document::new();
        doc.numbering.ensure_decimal();
        let xml = generate_numbering_xml(&doc).unwrap();
        assert!(xml.contains("<w:lvlText w:val=\"%1.\"/>"));
        assert!(xml.contains("<w:lvlText w:val=\"%9.\"/>"));
    }
}
