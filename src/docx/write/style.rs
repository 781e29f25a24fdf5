//! The styles part, `word/styles.xml`.
use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::common::xml::escape_xml;
use crate::docx::document::Document;
use crate::docx::styles::Style;
use crate::opc::constants::namespace;

use super::paragraph::write_paragraph_properties;
use super::run::write_run_properties;
use super::XML_DECL;

pub(crate) fn generate_styles_xml(doc: &Document) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    write!(xml, "<w:styles xmlns:w=\"{}\">", namespace::WML_MAIN)?;

    // document defaults precede the style definitions
    xml.push_str(
        "<w:docDefaults><w:rPrDefault><w:rPr>\
         <w:rFonts w:ascii=\"Calibri\" w:hAnsi=\"Calibri\"/>\
         <w:sz w:val=\"22\"/><w:szCs w:val=\"22\"/>\
         </w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults>",
    );

    for style in &doc.styles.styles {
        write_style(&mut xml, style)?;
    }

    // character style referenced by hyperlink display runs
    xml.push_str(
        "<w:style w:type=\"character\" w:styleId=\"Hyperlink\">\
         <w:name w:val=\"Hyperlink\"/>\
         <w:rPr><w:color w:val=\"0563C1\"/><w:u w:val=\"single\"/></w:rPr>\
         </w:style>",
    );

    xml.push_str("</w:styles>");
    Ok(xml)
}

fn write_style(xml: &mut String, style: &Style) -> Result<()> {
    write!(
        xml,
        "<w:style w:type=\"{}\" w:styleId=\"{}\">",
        style.style_type.to_xml(),
        escape_xml(&style.id)
    )?;
    write!(xml, "<w:name w:val=\"{}\"/>", escape_xml(&style.name))?;
    if let Some(based_on) = &style.based_on {
        write!(xml, "<w:basedOn w:val=\"{}\"/>", escape_xml(based_on))?;
    }
    if let Some(next) = &style.next {
        write!(xml, "<w:next w:val=\"{}\"/>", escape_xml(next))?;
    }
    write_paragraph_properties(xml, &style.paragraph)?;
    write_run_properties(xml, &style.run)?;
    xml.push_str("</w:style>");
    Ok(())
}
