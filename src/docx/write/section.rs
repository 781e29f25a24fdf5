//! Section properties serialization.
use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::docx::enums::PageOrientation;
use crate::docx::section::SectionProperties;

/// `w:sectPr`: header/footer references, page size, margins.
pub(crate) fn write_section_properties(
    xml: &mut String,
    sect: &SectionProperties,
) -> Result<()> {
    xml.push_str("<w:sectPr>");
    for rel_id in &sect.header_refs {
        write!(
            xml,
            "<w:headerReference w:type=\"default\" r:id=\"{}\"/>",
            rel_id
        )?;
    }
    for rel_id in &sect.footer_refs {
        write!(
            xml,
            "<w:footerReference w:type=\"default\" r:id=\"{}\"/>",
            rel_id
        )?;
    }
    write!(
        xml,
        "<w:pgSz w:w=\"{}\" w:h=\"{}\"",
        sect.page_width.0, sect.page_height.0
    )?;
    if sect.orientation == PageOrientation::Landscape {
        write!(xml, " w:orient=\"{}\"", sect.orientation.to_xml())?;
    }
    xml.push_str("/>");
    write!(
        xml,
        "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" \
         w:header=\"{}\" w:footer=\"{}\" w:gutter=\"0\"/>",
        sect.margin_top.0,
        sect.margin_right.0,
        sect.margin_bottom.0,
        sect.margin_left.0,
        sect.header_distance.0,
        sect.footer_distance.0
    )?;
    xml.push_str("</w:sectPr>");
    Ok(())
}
