//! Paragraph serialization: properties, runs, and attachments.
use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::common::xml::escape_xml;
use crate::docx::content_control::ContentControl;
use crate::docx::hyperlink::Hyperlink;
use crate::docx::paragraph::{Paragraph, ParagraphProperties};
use crate::docx::revision::{Revision, RevisionKind};

use super::run::{write_run, write_run_properties};

/// Append a paragraph to `xml`.
///
/// Emission order inside `w:p`: bookmark starts, comment range starts,
/// `w:pPr`, runs, hyperlinks, content controls, comment range ends with
/// their reference runs, bookmark ends.
pub(crate) fn write_paragraph(xml: &mut String, para: &Paragraph) -> Result<()> {
    xml.push_str("<w:p>");
    for bookmark in &para.bookmarks {
        write!(
            xml,
            "<w:bookmarkStart w:id=\"{}\" w:name=\"{}\"/>",
            bookmark.id,
            escape_xml(&bookmark.name)
        )?;
    }
    for comment_id in &para.comment_ids {
        write!(xml, "<w:commentRangeStart w:id=\"{}\"/>", comment_id)?;
    }
    write_paragraph_properties(xml, &para.properties)?;
    for run in &para.runs {
        write_run(xml, run)?;
    }
    for link in &para.hyperlinks {
        write_hyperlink(xml, link)?;
    }
    for control in &para.content_controls {
        write_content_control(xml, control)?;
    }
    for revision in &para.revisions {
        write_revision(xml, revision)?;
    }
    for comment_id in &para.comment_ids {
        write!(
            xml,
            "<w:commentRangeEnd w:id=\"{0}\"/>\
             <w:r><w:commentReference w:id=\"{0}\"/></w:r>",
            comment_id
        )?;
    }
    for bookmark in &para.bookmarks {
        write!(xml, "<w:bookmarkEnd w:id=\"{}\"/>", bookmark.id)?;
    }
    xml.push_str("</w:p>");
    Ok(())
}

/// `w:pPr` in schema order: pStyle, keepNext, pageBreakBefore, numPr,
/// spacing, ind, jc.
pub(crate) fn write_paragraph_properties(
    xml: &mut String,
    props: &ParagraphProperties,
) -> Result<()> {
    if !props.has_properties() {
        return Ok(());
    }
    xml.push_str("<w:pPr>");
    if let Some(style_id) = &props.style_id {
        write!(xml, "<w:pStyle w:val=\"{}\"/>", escape_xml(style_id))?;
    }
    if props.keep_next {
        xml.push_str("<w:keepNext/>");
    }
    if props.page_break_before {
        xml.push_str("<w:pageBreakBefore/>");
    }
    if let Some(num_ref) = props.numbering {
        write!(
            xml,
            "<w:numPr><w:ilvl w:val=\"{}\"/><w:numId w:val=\"{}\"/></w:numPr>",
            num_ref.level, num_ref.num_id
        )?;
    }
    if props.space_before.is_some() || props.space_after.is_some() || props.line_spacing.is_some() {
        xml.push_str("<w:spacing");
        if let Some(before) = props.space_before {
            write!(xml, " w:before=\"{}\"", before.0)?;
        }
        if let Some(after) = props.space_after {
            write!(xml, " w:after=\"{}\"", after.0)?;
        }
        if let Some((line, rule)) = props.line_spacing {
            write!(xml, " w:line=\"{}\" w:lineRule=\"{}\"", line, rule.to_xml())?;
        }
        xml.push_str("/>");
    }
    if props.indent_left.is_some()
        || props.indent_right.is_some()
        || props.indent_first_line.is_some()
    {
        xml.push_str("<w:ind");
        if let Some(left) = props.indent_left {
            write!(xml, " w:left=\"{}\"", left.0)?;
        }
        if let Some(right) = props.indent_right {
            write!(xml, " w:right=\"{}\"", right.0)?;
        }
        if let Some(first) = props.indent_first_line {
            // negative first-line indent is written as a hanging indent
            if first.0 < 0 {
                write!(xml, " w:hanging=\"{}\"", -first.0)?;
            } else {
                write!(xml, " w:firstLine=\"{}\"", first.0)?;
            }
        }
        xml.push_str("/>");
    }
    if let Some(alignment) = props.alignment {
        write!(xml, "<w:jc w:val=\"{}\"/>", alignment.to_xml())?;
    }
    xml.push_str("</w:pPr>");
    Ok(())
}

fn write_hyperlink(xml: &mut String, link: &Hyperlink) -> Result<()> {
    xml.push_str("<w:hyperlink");
    if let Some(rel_id) = &link.rel_id {
        write!(xml, " r:id=\"{}\"", rel_id)?;
    }
    if let Some(anchor) = &link.anchor {
        write!(xml, " w:anchor=\"{}\"", escape_xml(anchor))?;
    }
    if let Some(tooltip) = &link.tooltip {
        write!(xml, " w:tooltip=\"{}\"", escape_xml(tooltip))?;
    }
    xml.push('>');
    for run in &link.runs {
        // Hyperlink display runs get the Hyperlink character style so hosts
        // render them link-colored and underlined.
        xml.push_str("<w:r><w:rPr><w:rStyle w:val=\"Hyperlink\"/>");
        // merge the run's own properties after the style reference
        if run.properties.has_properties() {
            let mut inner = String::new();
            write_run_properties(&mut inner, &run.properties)?;
            // strip the wrapping rPr tags, keeping only the children
            let children = inner
                .strip_prefix("<w:rPr>")
                .and_then(|s| s.strip_suffix("</w:rPr>"))
                .unwrap_or("");
            xml.push_str(children);
        }
        xml.push_str("</w:rPr>");
        write!(xml, "<w:t>{}</w:t></w:r>", escape_xml(run.plain_text()))?;
    }
    xml.push_str("</w:hyperlink>");
    Ok(())
}

fn write_revision(xml: &mut String, revision: &Revision) -> Result<()> {
    write!(
        xml,
        "<{} w:id=\"{}\" w:author=\"{}\"",
        revision.kind.element(),
        revision.id,
        escape_xml(&revision.author)
    )?;
    if let Some(date) = &revision.date {
        write!(xml, " w:date=\"{}\"", escape_xml(date))?;
    }
    xml.push('>');
    match revision.kind {
        RevisionKind::Insertion => {
            for run in &revision.runs {
                write_run(xml, run)?;
            }
        }
        // deleted text uses w:delText instead of w:t
        RevisionKind::Deletion => {
            for run in &revision.runs {
                xml.push_str("<w:r>");
                write_run_properties(xml, &run.properties)?;
                write!(
                    xml,
                    "<w:delText xml:space=\"preserve\">{}</w:delText>",
                    escape_xml(run.plain_text())
                )?;
                xml.push_str("</w:r>");
            }
        }
    }
    write!(xml, "</{}>", revision.kind.element())?;
    Ok(())
}

fn write_content_control(xml: &mut String, control: &ContentControl) -> Result<()> {
    xml.push_str("<w:sdt><w:sdtPr>");
    if let Some(title) = &control.title {
        write!(xml, "<w:alias w:val=\"{}\"/>", escape_xml(title))?;
    }
    if let Some(tag) = &control.tag {
        write!(xml, "<w:tag w:val=\"{}\"/>", escape_xml(tag))?;
    }
    if let Some(marker) = control.kind.marker_element() {
        write!(xml, "<{0}/>", marker)?;
    }
    xml.push_str("</w:sdtPr><w:sdtContent>");
    if let Some(raw) = &control.raw_content {
        xml.push_str(raw);
    } else {
        for run in &control.runs {
            write_run(xml, run)?;
        }
    }
    xml.push_str("</w:sdtContent></w:sdt>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::units::Twips;
    use crate::docx::bookmark::Bookmark;
    use crate::docx::enums::Alignment;
    use crate::docx::paragraph::NumberingRef;

    fn render(para: &Paragraph) -> String {
        let mut xml = String::new();
        write_paragraph(&mut xml, para).unwrap();
        xml
    }

    #[test]
    fn empty_paragraph_has_no_ppr() {
        assert_eq!(render(&Paragraph::new()), "<w:p></w:p>");
    }

    #[test]
    fn ppr_child_order_is_schema_valid() {
        let mut para = Paragraph::with_text("x");
        para.properties.style_id = Some("Heading1".to_string());
        para.properties.keep_next = true;
        para.properties.numbering = Some(NumberingRef { num_id: 1, level: 0 });
        para.properties.space_after = Some(Twips(120));
        para.properties.indent_left = Some(Twips(720));
        para.properties.alignment = Some(Alignment::Center);
        let xml = render(&para);
        let style = xml.find("<w:pStyle").unwrap();
        let keep = xml.find("<w:keepNext").unwrap();
        let num = xml.find("<w:numPr").unwrap();
        let spacing = xml.find("<w:spacing").unwrap();
        let ind = xml.find("<w:ind").unwrap();
        let jc = xml.find("<w:jc").unwrap();
        assert!(style < keep && keep < num && num < spacing && spacing < ind && ind < jc);
    }

    #[test]
    fn hanging_indent_from_negative_first_line() {
        let mut para = Paragraph::with_text("x");
        para.properties.indent_first_line = Some(Twips(-360));
        let xml = render(&para);
        assert!(xml.contains("w:hanging=\"360\""));
        assert!(!xml.contains("w:firstLine"));
    }

    #[test]
    fn bookmarks_wrap_content() {
        let mut para = Paragraph::with_text("marked");
        para.bookmarks.push(Bookmark {
            id: 3,
            name: "intro".to_string(),
        });
        let xml = render(&para);
        let start = xml.find("<w:bookmarkStart w:id=\"3\" w:name=\"intro\"/>").unwrap();
        let text = xml.find("<w:t>marked</w:t>").unwrap();
        let end = xml.find("<w:bookmarkEnd w:id=\"3\"/>").unwrap();
        assert!(start < text && text < end);
    }

    #[test]
    fn comment_anchor_triple() {
        let mut para = Paragraph::with_text("anchored");
        para.comment_ids.push(7);
        let xml = render(&para);
        let start = xml.find("<w:commentRangeStart w:id=\"7\"/>").unwrap();
        let end = xml.find("<w:commentRangeEnd w:id=\"7\"/>").unwrap();
        let reference = xml.find("<w:commentReference w:id=\"7\"/>").unwrap();
        assert!(start < end && end < reference);
    }

    #[test]
    fn hyperlink_rendering() {
        let mut para = Paragraph::new();
        para.hyperlinks.push(Hyperlink::external("rId8", "click"));
        let xml = render(&para);
        assert!(xml.contains("<w:hyperlink r:id=\"rId8\">"));
        assert!(xml.contains("<w:rStyle w:val=\"Hyperlink\"/>"));
        assert!(xml.contains("<w:t>click</w:t>"));
    }

    #[test]
    fn internal_hyperlink_uses_anchor() {
        let mut para = Paragraph::new();
        para.hyperlinks.push(Hyperlink::internal("sec2", "below"));
        let xml = render(&para);
        assert!(xml.contains("w:anchor=\"sec2\""));
        assert!(!xml.contains("r:id="));
    }

    #[test]
    fn tracked_deletion_uses_del_text() {
        let mut para = Paragraph::new();
        para.revisions
            .push(Revision::new(2, RevisionKind::Deletion, "editor", "gone"));
        let xml = render(&para);
        assert!(xml.contains("<w:del w:id=\"2\" w:author=\"editor\">"));
        assert!(xml.contains("<w:delText xml:space=\"preserve\">gone</w:delText>"));
        assert!(!xml.contains("<w:t>"));
    }

    #[test]
    fn tracked_insertion_wraps_plain_runs() {
        let mut para = Paragraph::new();
        let mut rev = Revision::new(1, RevisionKind::Insertion, "editor", "added");
        rev.date = Some("2024-01-01T00:00:00Z".to_string());
        para.revisions.push(rev);
        let xml = render(&para);
        assert!(xml.contains("<w:ins w:id=\"1\" w:author=\"editor\" w:date=\"2024-01-01T00:00:00Z\">"));
        assert!(xml.contains("<w:t>added</w:t>"));
    }

    #[test]
    fn content_control_markup() {
        let mut para = Paragraph::new();
        para.content_controls
            .push(ContentControl::rich_text("fill me").with_tag("field1"));
        let xml = render(&para);
        assert!(xml.contains("<w:sdt><w:sdtPr>"));
        assert!(xml.contains("<w:tag w:val=\"field1\"/>"));
        assert!(xml.contains("<w:sdtContent><w:r><w:t>fill me</w:t></w:r></w:sdtContent>"));
    }
}
