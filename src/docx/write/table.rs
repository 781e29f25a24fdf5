//! Table serialization.
use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::common::xml::escape_xml;
use crate::docx::enums::BorderStyle;
use crate::docx::table::{Table, TableCell, TableRow};

use super::paragraph::write_paragraph;

/// Append a table to `xml`: `w:tblPr`, the grid, then rows.
pub(crate) fn write_table(xml: &mut String, table: &Table) -> Result<()> {
    xml.push_str("<w:tbl><w:tblPr>");
    if let Some(style_id) = &table.style_id {
        write!(xml, "<w:tblStyle w:val=\"{}\"/>", escape_xml(style_id))?;
    }
    match table.width {
        Some(width) => write!(xml, "<w:tblW w:w=\"{}\" w:type=\"dxa\"/>", width.0)?,
        None => xml.push_str("<w:tblW w:w=\"0\" w:type=\"auto\"/>"),
    }
    xml.push_str("<w:tblBorders>");
    let border = BorderStyle::Single.to_xml();
    for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        write!(
            xml,
            "<w:{} w:val=\"{}\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
            edge, border
        )?;
    }
    xml.push_str("</w:tblBorders>");
    xml.push_str("</w:tblPr>");

    xml.push_str("<w:tblGrid>");
    for _ in 0..table.column_count() {
        xml.push_str("<w:gridCol/>");
    }
    xml.push_str("</w:tblGrid>");

    for row in &table.rows {
        write_row(xml, row)?;
    }
    xml.push_str("</w:tbl>");
    Ok(())
}

fn write_row(xml: &mut String, row: &TableRow) -> Result<()> {
    xml.push_str("<w:tr>");
    if row.height.is_some() || row.is_header {
        xml.push_str("<w:trPr>");
        if let Some(height) = row.height {
            write!(xml, "<w:trHeight w:val=\"{}\"/>", height.0)?;
        }
        if row.is_header {
            xml.push_str("<w:tblHeader/>");
        }
        xml.push_str("</w:trPr>");
    }
    for cell in &row.cells {
        write_cell(xml, cell)?;
    }
    xml.push_str("</w:tr>");
    Ok(())
}

fn write_cell(xml: &mut String, cell: &TableCell) -> Result<()> {
    xml.push_str("<w:tc><w:tcPr>");
    if let Some(width) = cell.width {
        write!(xml, "<w:tcW w:w=\"{}\" w:type=\"dxa\"/>", width.0)?;
    }
    if cell.grid_span > 1 {
        write!(xml, "<w:gridSpan w:val=\"{}\"/>", cell.grid_span)?;
    }
    if let Some(merge) = cell.v_merge {
        write!(xml, "<w:vMerge w:val=\"{}\"/>", merge.to_xml())?;
    }
    if let Some(shading) = &cell.shading {
        write!(
            xml,
            "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>",
            escape_xml(shading)
        )?;
    }
    xml.push_str("</w:tcPr>");
    // OOXML requires at least one paragraph per cell; the model keeps
    // that invariant, but guard against hand-built cells anyway.
    if cell.paragraphs.is_empty() {
        xml.push_str("<w:p></w:p>");
    }
    for para in &cell.paragraphs {
        write_paragraph(xml, para)?;
    }
    xml.push_str("</w:tc>");
    Ok(())
}
