//! Run serialization, including drawings and field sequences.
use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::common::xml::escape_xml;
use crate::docx::drawing::Drawing;
use crate::docx::field::FieldCode;
use crate::docx::run::{Run, RunContent, RunProperties};
use crate::opc::constants::namespace;

/// Append a run to `xml`.
///
/// Most content kinds produce a single `w:r`; a field expands into the
/// full `fldChar begin / instrText / separate / result / end` sequence of
/// runs, each carrying the same run properties.
pub(crate) fn write_run(xml: &mut String, run: &Run) -> Result<()> {
    match &run.content {
        RunContent::Field(field) => write_field_runs(xml, field, &run.properties),
        RunContent::RawMarkup(markup) => {
            // Captured verbatim at parse time, passed through verbatim
            xml.push_str(markup);
            Ok(())
        }
        content => {
            xml.push_str("<w:r>");
            write_run_properties(xml, &run.properties)?;
            match content {
                RunContent::Text(text) => write_text_element(xml, text)?,
                RunContent::Drawing(drawing) => write_drawing(xml, drawing)?,
                RunContent::Tab => xml.push_str("<w:tab/>"),
                RunContent::Break => xml.push_str("<w:br/>"),
                RunContent::PageBreak => xml.push_str("<w:br w:type=\"page\"/>"),
                RunContent::FootnoteReference(id) => {
                    write!(xml, "<w:footnoteReference w:id=\"{}\"/>", id)?;
                }
                RunContent::EndnoteReference(id) => {
                    write!(xml, "<w:endnoteReference w:id=\"{}\"/>", id)?;
                }
                RunContent::Field(_) | RunContent::RawMarkup(_) => unreachable!("handled above"),
            }
            xml.push_str("</w:r>");
            Ok(())
        }
    }
}

/// `w:t`, preserving significant leading/trailing whitespace.
fn write_text_element(xml: &mut String, text: &str) -> Result<()> {
    let needs_preserve = text.starts_with(char::is_whitespace)
        || text.ends_with(char::is_whitespace);
    if needs_preserve {
        xml.push_str("<w:t xml:space=\"preserve\">");
    } else {
        xml.push_str("<w:t>");
    }
    xml.push_str(&escape_xml(text));
    xml.push_str("</w:t>");
    Ok(())
}

/// `w:rPr` in schema order: rFonts, b, i, strike, color, sz, highlight, u.
pub(crate) fn write_run_properties(xml: &mut String, props: &RunProperties) -> Result<()> {
    if !props.has_properties() {
        return Ok(());
    }
    xml.push_str("<w:rPr>");
    if let Some(font) = &props.font_name {
        let escaped = escape_xml(font);
        write!(
            xml,
            "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\"/>",
            escaped
        )?;
    }
    match props.bold {
        Some(true) => xml.push_str("<w:b/>"),
        Some(false) => xml.push_str("<w:b w:val=\"0\"/>"),
        None => {}
    }
    match props.italic {
        Some(true) => xml.push_str("<w:i/>"),
        Some(false) => xml.push_str("<w:i w:val=\"0\"/>"),
        None => {}
    }
    match props.strike {
        Some(true) => xml.push_str("<w:strike/>"),
        Some(false) => xml.push_str("<w:strike w:val=\"0\"/>"),
        None => {}
    }
    if let Some(color) = &props.color {
        write!(xml, "<w:color w:val=\"{}\"/>", escape_xml(color))?;
    }
    if let Some(size) = props.font_size {
        write!(xml, "<w:sz w:val=\"{0}\"/><w:szCs w:val=\"{0}\"/>", size)?;
    }
    if let Some(highlight) = &props.highlight {
        write!(xml, "<w:highlight w:val=\"{}\"/>", escape_xml(highlight))?;
    }
    if let Some(underline) = props.underline {
        write!(xml, "<w:u w:val=\"{}\"/>", underline.to_xml())?;
    }
    xml.push_str("</w:rPr>");
    Ok(())
}

/// The `fldChar` run sequence for one field.
fn write_field_runs(xml: &mut String, field: &FieldCode, props: &RunProperties) -> Result<()> {
    let rpr = |xml: &mut String| -> Result<()> { write_run_properties(xml, props) };

    xml.push_str("<w:r>");
    rpr(xml)?;
    xml.push_str("<w:fldChar w:fldCharType=\"begin\"/></w:r>");

    xml.push_str("<w:r>");
    rpr(xml)?;
    write!(
        xml,
        "<w:instrText xml:space=\"preserve\"> {} </w:instrText></w:r>",
        escape_xml(&field.instruction_text())
    )?;

    xml.push_str("<w:r>");
    rpr(xml)?;
    xml.push_str("<w:fldChar w:fldCharType=\"separate\"/></w:r>");

    let placeholder = field.placeholder();
    if !placeholder.is_empty() {
        xml.push_str("<w:r>");
        rpr(xml)?;
        write!(xml, "<w:t>{}</w:t></w:r>", escape_xml(placeholder))?;
    }

    xml.push_str("<w:r>");
    rpr(xml)?;
    xml.push_str("<w:fldChar w:fldCharType=\"end\"/></w:r>");
    Ok(())
}

/// Inline picture drawing: `wp:inline` wrapping the DrawingML graphic.
fn write_drawing(xml: &mut String, drawing: &Drawing) -> Result<()> {
    let name = escape_xml(&drawing.name);
    // docPr needs a nonzero numeric ID; the rel suffix is unique per image
    let doc_pr_id = drawing
        .rel_id
        .strip_prefix("rId")
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(1);

    write!(
        xml,
        "<w:drawing><wp:inline distT=\"0\" distB=\"0\" distL=\"0\" distR=\"0\">\
         <wp:extent cx=\"{cx}\" cy=\"{cy}\"/>\
         <wp:docPr id=\"{id}\" name=\"{name}\"/>\
         <a:graphic xmlns:a=\"{a}\">\
         <a:graphicData uri=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">\
         <pic:pic xmlns:pic=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">\
         <pic:nvPicPr><pic:cNvPr id=\"{id}\" name=\"{name}\"/><pic:cNvPicPr/></pic:nvPicPr>\
         <pic:blipFill><a:blip r:embed=\"{rel}\"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>\
         <pic:spPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></pic:spPr>\
         </pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing>",
        cx = drawing.width.0,
        cy = drawing.height.0,
        id = doc_pr_id,
        name = name,
        rel = drawing.rel_id,
        a = namespace::DML_MAIN,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::enums::UnderlineStyle;

    fn render(run: &Run) -> String {
        let mut xml = String::new();
        write_run(&mut xml, run).unwrap();
        xml
    }

    #[test]
    fn plain_text_run() {
        assert_eq!(render(&Run::text("hi")), "<w:r><w:t>hi</w:t></w:r>");
    }

    #[test]
    fn text_is_escaped() {
        let xml = render(&Run::text("A & B <C>"));
        assert!(xml.contains("A &amp; B &lt;C&gt;"));
    }

    #[test]
    fn leading_whitespace_is_preserved() {
        let xml = render(&Run::text(" padded "));
        assert!(xml.contains("xml:space=\"preserve\""));
    }

    #[test]
    fn property_order_is_schema_valid() {
        let run = Run::text("x")
            .bold(true)
            .font_name("Arial")
            .font_size(24)
            .color("FF0000")
            .underline(UnderlineStyle::Single);
        let xml = render(&run);
        let fonts = xml.find("<w:rFonts").unwrap();
        let bold = xml.find("<w:b/>").unwrap();
        let color = xml.find("<w:color").unwrap();
        let size = xml.find("<w:sz ").unwrap();
        let underline = xml.find("<w:u ").unwrap();
        assert!(fonts < bold && bold < color && color < size && size < underline);
    }

    #[test]
    fn page_field_emits_fldchar_sequence() {
        let run = Run::with_content(RunContent::Field(FieldCode::Page));
        let xml = render(&run);
        let begin = xml.find("fldCharType=\"begin\"").unwrap();
        let instr = xml.find("<w:instrText").unwrap();
        let sep = xml.find("fldCharType=\"separate\"").unwrap();
        let end = xml.find("fldCharType=\"end\"").unwrap();
        assert!(begin < instr && instr < sep && sep < end);
        assert!(xml.contains("> PAGE <"));
    }

    #[test]
    fn drawing_references_image_rel() {
        let run = Run::with_content(RunContent::Drawing(Drawing::from_pixels(
            "rId7", "photo.png", 100, 50,
        )));
        let xml = render(&run);
        assert!(xml.contains("r:embed=\"rId7\""));
        assert!(xml.contains("cx=\"952500\""));
        assert!(xml.contains("cy=\"476250\""));
    }

    #[test]
    fn raw_markup_passes_through() {
        let run = Run::with_content(RunContent::RawMarkup("<m:oMath/>".to_string()));
        assert_eq!(render(&run), "<m:oMath/>");
    }

    #[test]
    fn page_break_run() {
        let xml = render(&Run::with_content(RunContent::PageBreak));
        assert_eq!(xml, "<w:r><w:br w:type=\"page\"/></w:r>");
    }
}
