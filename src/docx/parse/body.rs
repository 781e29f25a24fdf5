//! Recursive-descent parsing of WordprocessingML block content.
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::common::error::Result;
use crate::common::units::Twips;
use crate::docx::content_control::{ContentControl, ContentControlKind};
use crate::docx::document::{Body, BodyChild};
use crate::docx::drawing::Drawing;
use crate::docx::enums::{
    Alignment, LineRule, PageOrientation, UnderlineStyle, VerticalMerge,
};
use crate::docx::field::FieldCode;
use crate::docx::hyperlink::Hyperlink;
use crate::docx::paragraph::{NumberingRef, Paragraph, ParagraphProperties};
use crate::docx::revision::{Revision, RevisionKind};
use crate::docx::run::{Run, RunContent, RunProperties};
use crate::docx::section::SectionProperties;
use crate::docx::table::{Table, TableCell, TableRow};

use super::{attr, attr_num};

pub(crate) struct ParsedDocument {
    pub body: Body,
    pub section: SectionProperties,
}

/// Parse `word/document.xml`: body blocks plus trailing section
/// properties.
pub(crate) fn parse_document(src: &str) -> Result<ParsedDocument> {
    let mut reader = Reader::from_str(src);
    let mut body = Body::default();
    let mut section = SectionProperties::default();
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"document" | b"body" => {}
                b"p" => {
                    let para = parse_paragraph(src, &mut reader)?;
                    body.children.push(BodyChild::Paragraph(para));
                }
                b"tbl" => {
                    let table = parse_table(src, &mut reader)?;
                    body.children.push(BodyChild::Table(table));
                }
                b"sectPr" => section = parse_section_properties(&mut reader)?,
                _ => skip_element(&mut reader, &e)?,
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(ParsedDocument { body, section })
}

/// Parse the paragraphs of a header or footer part, skipping tables.
pub(crate) fn parse_block_paragraphs(src: &str) -> Result<Vec<Paragraph>> {
    let mut reader = Reader::from_str(src);
    let mut paragraphs = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(parse_paragraph(src, &mut reader)?),
                b"hdr" | b"ftr" => {}
                _ => skip_element(&mut reader, &e)?,
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(paragraphs)
}

/// Skip an element and everything inside it.
fn skip_element(reader: &mut Reader<&[u8]>, e: &BytesStart) -> Result<()> {
    let end = e.to_end().into_owned();
    reader.read_to_end(end.name())?;
    Ok(())
}

/// Capture an element verbatim, start tag through end tag.
fn capture_raw(src: &str, reader: &mut Reader<&[u8]>, e: &BytesStart) -> Result<String> {
    let start_inner = String::from_utf8_lossy(e.as_ref()).into_owned();
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let end = e.to_end().into_owned();
    let span = reader.read_to_end(end.name())?;
    let inner = &src[span.start as usize..span.end as usize];
    Ok(format!("<{}>{}</{}>", start_inner, inner, name))
}

/// `true` unless the element carries `w:val="0"` or `"false"`.
fn flag_value(e: &BytesStart) -> bool {
    !matches!(attr(e, "val").as_deref(), Some("0") | Some("false"))
}

// --- paragraphs ---

/// One piece of content found inside a `w:r`.
enum RunItem {
    Text(String),
    Tab,
    Break,
    PageBreak,
    FootnoteRef(u32),
    EndnoteRef(u32),
    Drawing(Drawing),
    FldChar(String),
    InstrText(String),
}

/// Field reconstruction state across runs of one paragraph.
enum FieldState {
    None,
    /// Between `begin` and `separate`/`end`: accumulating instruction text
    Collecting(String),
    /// Between `separate` and `end`: skipping the cached result
    InResult(String),
}

/// Parse a paragraph, the start tag already consumed.
pub(crate) fn parse_paragraph(src: &str, reader: &mut Reader<&[u8]>) -> Result<Paragraph> {
    let mut para = Paragraph::new();
    let mut field = FieldState::None;
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"pPr" => para.properties = parse_paragraph_properties(reader)?,
                b"r" => {
                    let (props, items) = parse_run(reader)?;
                    push_run_items(&mut para, props, items, &mut field);
                }
                b"hyperlink" => {
                    let link = parse_hyperlink(reader, &e)?;
                    para.hyperlinks.push(link);
                }
                b"sdt" => {
                    if let Some(control) = parse_sdt(src, reader)? {
                        para.content_controls.push(control);
                    }
                }
                b"ins" => {
                    let rev = parse_revision(reader, &e, RevisionKind::Insertion)?;
                    para.revisions.push(rev);
                }
                b"del" => {
                    let rev = parse_revision(reader, &e, RevisionKind::Deletion)?;
                    para.revisions.push(rev);
                }
                b"oMath" | b"oMathPara" => {
                    let raw = capture_raw(src, reader, &e)?;
                    para.runs.push(Run::with_content(RunContent::RawMarkup(raw)));
                }
                _ => skip_element(reader, &e)?,
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"bookmarkStart" => {
                    if let (Some(id), Some(name)) = (attr_num(&e, "id"), attr(&e, "name")) {
                        para.bookmarks
                            .push(crate::docx::bookmark::Bookmark { id, name });
                    }
                }
                b"commentRangeStart" => {
                    if let Some(id) = attr_num(&e, "id") {
                        para.comment_ids.push(id);
                    }
                }
                b"pPr" => {}
                _ => {}
            },
            Event::End(e) if e.local_name().as_ref() == b"p" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(para)
}

/// Convert run items into paragraph runs, reconstructing field sequences
/// from their `fldChar` markers.
fn push_run_items(
    para: &mut Paragraph,
    props: RunProperties,
    items: Vec<RunItem>,
    field: &mut FieldState,
) {
    for item in items {
        match item {
            RunItem::FldChar(kind) => match kind.as_str() {
                "begin" => *field = FieldState::Collecting(String::new()),
                "separate" => {
                    if let FieldState::Collecting(instr) = std::mem::replace(field, FieldState::None)
                    {
                        *field = FieldState::InResult(instr);
                    }
                }
                "end" => {
                    let done = std::mem::replace(field, FieldState::None);
                    let instr = match done {
                        FieldState::Collecting(i) | FieldState::InResult(i) => i,
                        FieldState::None => continue,
                    };
                    let run = match FieldCode::from_instruction(&instr) {
                        Some(code) => Run {
                            content: RunContent::Field(code),
                            properties: props.clone(),
                            annotation: None,
                        },
                        // unrecognized instruction: keep the cached text
                        None => Run {
                            content: RunContent::Text(instr.trim().to_string()),
                            properties: props.clone(),
                            annotation: None,
                        },
                    };
                    para.runs.push(run);
                }
                _ => {}
            },
            RunItem::InstrText(text) => {
                if let FieldState::Collecting(instr) = field {
                    instr.push_str(&text);
                }
            }
            other => {
                // inside a field the cached result is skipped; the field
                // run itself is pushed at `end`
                if matches!(field, FieldState::InResult(_)) {
                    continue;
                }
                let content = match other {
                    RunItem::Text(text) => RunContent::Text(text),
                    RunItem::Tab => RunContent::Tab,
                    RunItem::Break => RunContent::Break,
                    RunItem::PageBreak => RunContent::PageBreak,
                    RunItem::FootnoteRef(id) => {
                        para.footnote_ids.push(id);
                        RunContent::FootnoteReference(id)
                    }
                    RunItem::EndnoteRef(id) => {
                        para.endnote_ids.push(id);
                        RunContent::EndnoteReference(id)
                    }
                    RunItem::Drawing(d) => RunContent::Drawing(d),
                    RunItem::FldChar(_) | RunItem::InstrText(_) => unreachable!(),
                };
                para.runs.push(Run {
                    content,
                    properties: props.clone(),
                    annotation: None,
                });
            }
        }
    }
}

/// Parse a `w:ins` or `w:del` wrapper into a tracked change. Fields and
/// notes inside revisions are flattened to text.
fn parse_revision(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart,
    kind: RevisionKind,
) -> Result<Revision> {
    let wrapper = e.local_name().as_ref().to_vec();
    let mut revision = Revision {
        id: attr_num(e, "id").unwrap_or(0),
        kind,
        author: attr(e, "author").unwrap_or_default(),
        date: attr(e, "date"),
        runs: Vec::new(),
    };
    loop {
        match reader.read_event()? {
            Event::Start(inner) if inner.local_name().as_ref() == b"r" => {
                let (props, items) = parse_run(reader)?;
                for item in items {
                    let content = match item {
                        RunItem::Text(text) => RunContent::Text(text),
                        RunItem::Tab => RunContent::Tab,
                        RunItem::Break => RunContent::Break,
                        RunItem::PageBreak => RunContent::PageBreak,
                        RunItem::InstrText(text) => RunContent::Text(text),
                        _ => continue,
                    };
                    revision.runs.push(Run {
                        content,
                        properties: props.clone(),
                        annotation: None,
                    });
                }
            }
            Event::Start(inner) => skip_element(reader, &inner)?,
            Event::End(end) if end.local_name().as_ref() == wrapper.as_slice() => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(revision)
}

/// Parse a `w:r`, the start tag already consumed. Returns the run's
/// properties and every content item found inside it.
fn parse_run(reader: &mut Reader<&[u8]>) -> Result<(RunProperties, Vec<RunItem>)> {
    let mut props = RunProperties::default();
    let mut items = Vec::new();
    let mut text_buf: Option<String> = None;
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"rPr" => props = parse_run_properties(reader)?,
                b"t" | b"delText" => text_buf = Some(String::new()),
                b"instrText" => text_buf = Some(String::new()),
                b"drawing" => {
                    if let Some(drawing) = parse_drawing(reader)? {
                        items.push(RunItem::Drawing(drawing));
                    }
                }
                _ => skip_element(reader, &e)?,
            },
            Event::Text(t) => {
                if let Some(buf) = &mut text_buf {
                    buf.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" | b"delText" => {
                    if let Some(text) = text_buf.take() {
                        items.push(RunItem::Text(text));
                    }
                }
                b"instrText" => {
                    if let Some(text) = text_buf.take() {
                        items.push(RunItem::InstrText(text));
                    }
                }
                b"r" => break,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => items.push(RunItem::Tab),
                b"br" => {
                    if attr(&e, "type").as_deref() == Some("page") {
                        items.push(RunItem::PageBreak);
                    } else {
                        items.push(RunItem::Break);
                    }
                }
                b"footnoteReference" => {
                    if let Some(id) = attr_num(&e, "id") {
                        items.push(RunItem::FootnoteRef(id));
                    }
                }
                b"endnoteReference" => {
                    if let Some(id) = attr_num(&e, "id") {
                        items.push(RunItem::EndnoteRef(id));
                    }
                }
                b"fldChar" => {
                    if let Some(kind) = attr(&e, "fldCharType") {
                        items.push(RunItem::FldChar(kind));
                    }
                }
                b"t" => items.push(RunItem::Text(String::new())),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok((props, items))
}

/// `w:pPr`, the start tag already consumed.
pub(crate) fn parse_paragraph_properties(
    reader: &mut Reader<&[u8]>,
) -> Result<ParagraphProperties> {
    let mut props = ParagraphProperties::default();
    let mut num_id: Option<u32> = None;
    let mut level: u8 = 0;
    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Start(e) | Event::Empty(e) => {
                let is_start = matches!(event, Event::Start(_));
                match e.local_name().as_ref() {
                    b"pStyle" => props.style_id = attr(e, "val"),
                    b"jc" => {
                        props.alignment = attr(e, "val").and_then(|v| Alignment::from_xml(&v));
                    }
                    b"ilvl" => level = attr_num(e, "val").unwrap_or(0),
                    b"numId" => num_id = attr_num(e, "val"),
                    b"spacing" => {
                        props.space_before = attr_num(e, "before").map(Twips);
                        props.space_after = attr_num(e, "after").map(Twips);
                        if let Some(line) = attr_num(e, "line") {
                            let rule = attr(e, "lineRule")
                                .and_then(|v| LineRule::from_xml(&v))
                                .unwrap_or_default();
                            props.line_spacing = Some((line, rule));
                        }
                    }
                    b"ind" => {
                        props.indent_left = attr_num(e, "left")
                            .or_else(|| attr_num(e, "start"))
                            .map(Twips);
                        props.indent_right = attr_num(e, "right")
                            .or_else(|| attr_num(e, "end"))
                            .map(Twips);
                        if let Some(hanging) = attr_num::<i64>(e, "hanging") {
                            props.indent_first_line = Some(Twips(-hanging));
                        } else if let Some(first) = attr_num(e, "firstLine") {
                            props.indent_first_line = Some(Twips(first));
                        }
                    }
                    b"pageBreakBefore" => props.page_break_before = flag_value(e),
                    b"keepNext" => props.keep_next = flag_value(e),
                    b"numPr" => {}
                    b"rPr" if is_start => {
                        // paragraph-mark run properties, not modeled
                        skip_element(reader, e)?;
                    }
                    _ if is_start => skip_element(reader, e)?,
                    _ => {}
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"pPr" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    if let Some(num_id) = num_id {
        props.numbering = Some(NumberingRef { num_id, level });
    }
    Ok(props)
}

/// `w:rPr`, the start tag already consumed.
pub(crate) fn parse_run_properties(reader: &mut Reader<&[u8]>) -> Result<RunProperties> {
    let mut props = RunProperties::default();
    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Start(e) | Event::Empty(e) => {
                let is_start = matches!(event, Event::Start(_));
                match e.local_name().as_ref() {
                    b"rFonts" => {
                        props.font_name = attr(e, "ascii").or_else(|| attr(e, "hAnsi"));
                    }
                    b"b" => props.bold = Some(flag_value(e)),
                    b"i" => props.italic = Some(flag_value(e)),
                    b"strike" => props.strike = Some(flag_value(e)),
                    b"color" => {
                        props.color = attr(e, "val").filter(|v| v != "auto");
                    }
                    b"sz" => props.font_size = attr_num(e, "val"),
                    b"highlight" => props.highlight = attr(e, "val"),
                    b"u" => {
                        props.underline =
                            attr(e, "val").and_then(|v| UnderlineStyle::from_xml(&v));
                    }
                    _ if is_start => skip_element(reader, e)?,
                    _ => {}
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"rPr" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(props)
}

/// `w:drawing`: pull the relationship ID, extent, and display name out of
/// the DrawingML subtree, skipping everything else.
fn parse_drawing(reader: &mut Reader<&[u8]>) -> Result<Option<Drawing>> {
    let mut rel_id = None;
    let mut name = String::new();
    let mut width = 0i64;
    let mut height = 0i64;
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"extent" | b"ext" => {
                    if let (Some(cx), Some(cy)) = (attr_num(&e, "cx"), attr_num(&e, "cy")) {
                        width = cx;
                        height = cy;
                    }
                }
                b"docPr" => {
                    if let Some(n) = attr(&e, "name") {
                        name = n;
                    }
                }
                b"blip" => rel_id = attr(&e, "embed"),
                _ => {}
            },
            Event::End(e) if e.local_name().as_ref() == b"drawing" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(rel_id.map(|rel_id| Drawing {
        rel_id,
        name,
        width: crate::common::units::Emu(width),
        height: crate::common::units::Emu(height),
    }))
}

/// `w:hyperlink`, the start tag consumed; collects display runs.
fn parse_hyperlink(reader: &mut Reader<&[u8]>, e: &BytesStart) -> Result<Hyperlink> {
    let mut link = Hyperlink {
        rel_id: attr(e, "id"),
        anchor: attr(e, "anchor"),
        runs: Vec::new(),
        tooltip: attr(e, "tooltip"),
    };
    loop {
        match reader.read_event()? {
            Event::Start(inner) if inner.local_name().as_ref() == b"r" => {
                let (props, items) = parse_run(reader)?;
                for item in items {
                    if let RunItem::Text(text) = item {
                        link.runs.push(Run {
                            content: RunContent::Text(text),
                            properties: props.clone(),
                            annotation: None,
                        });
                    }
                }
            }
            Event::Start(inner) => skip_element(reader, &inner)?,
            Event::End(end) if end.local_name().as_ref() == b"hyperlink" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(link)
}

/// `w:sdt`, the start tag consumed. Inline controls are decomposed into
/// runs; block-level content is captured verbatim.
fn parse_sdt(src: &str, reader: &mut Reader<&[u8]>) -> Result<Option<ContentControl>> {
    let mut control = ContentControl {
        kind: ContentControlKind::RichText,
        tag: None,
        title: None,
        runs: Vec::new(),
        raw_content: None,
    };
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"sdtPr" => parse_sdt_properties(reader, &mut control)?,
                b"sdtContent" => {
                    parse_sdt_content(src, reader, &mut control)?;
                }
                _ => skip_element(reader, &e)?,
            },
            Event::End(e) if e.local_name().as_ref() == b"sdt" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(Some(control))
}

fn parse_sdt_properties(
    reader: &mut Reader<&[u8]>,
    control: &mut ContentControl,
) -> Result<()> {
    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Start(e) | Event::Empty(e) => {
                let is_start = matches!(event, Event::Start(_));
                let local = e.local_name();
                match local.as_ref() {
                    b"tag" => control.tag = attr(e, "val"),
                    b"alias" => control.title = attr(e, "val"),
                    name => {
                        if let Ok(name) = std::str::from_utf8(name) {
                            if let Some(kind) = ContentControlKind::from_marker(name) {
                                control.kind = kind;
                            }
                        }
                        if is_start {
                            skip_element(reader, e)?;
                        }
                    }
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"sdtPr" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(())
}

fn parse_sdt_content(
    src: &str,
    reader: &mut Reader<&[u8]>,
    control: &mut ContentControl,
) -> Result<()> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"r" => {
                    let (props, items) = parse_run(reader)?;
                    for item in items {
                        if let RunItem::Text(text) = item {
                            control.runs.push(Run {
                                content: RunContent::Text(text),
                                properties: props.clone(),
                                annotation: None,
                            });
                        }
                    }
                }
                // block-level content: keep verbatim, do not decompose
                _ => {
                    let raw = capture_raw(src, reader, &e)?;
                    match &mut control.raw_content {
                        Some(existing) => existing.push_str(&raw),
                        None => control.raw_content = Some(raw),
                    }
                }
            },
            Event::End(e) if e.local_name().as_ref() == b"sdtContent" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(())
}

// --- tables ---

/// `w:tbl`, the start tag already consumed.
fn parse_table(src: &str, reader: &mut Reader<&[u8]>) -> Result<Table> {
    let mut table = Table::default();
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tblPr" => parse_table_properties(reader, &mut table)?,
                b"tr" => table.rows.push(parse_row(src, reader)?),
                _ => skip_element(reader, &e)?,
            },
            Event::End(e) if e.local_name().as_ref() == b"tbl" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(table)
}

fn parse_table_properties(reader: &mut Reader<&[u8]>, table: &mut Table) -> Result<()> {
    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Start(e) | Event::Empty(e) => {
                let is_start = matches!(event, Event::Start(_));
                match e.local_name().as_ref() {
                    b"tblStyle" => table.style_id = attr(e, "val"),
                    b"tblW" => {
                        if attr(e, "type").as_deref() == Some("dxa") {
                            table.width = attr_num(e, "w").map(Twips);
                        }
                    }
                    _ if is_start => skip_element(reader, e)?,
                    _ => {}
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"tblPr" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(())
}

fn parse_row(src: &str, reader: &mut Reader<&[u8]>) -> Result<TableRow> {
    let mut row = TableRow::default();
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"trPr" => loop {
                    let event = reader.read_event()?;
                    match &event {
                        Event::Start(inner) | Event::Empty(inner) => {
                            match inner.local_name().as_ref() {
                                b"trHeight" => row.height = attr_num(inner, "val").map(Twips),
                                b"tblHeader" => row.is_header = flag_value(inner),
                                _ => {
                                    if matches!(event, Event::Start(_)) {
                                        skip_element(reader, inner)?;
                                    }
                                }
                            }
                        }
                        Event::End(end) if end.local_name().as_ref() == b"trPr" => break,
                        Event::Eof => break,
                        _ => {}
                    }
                },
                b"tc" => row.cells.push(parse_cell(src, reader)?),
                _ => skip_element(reader, &e)?,
            },
            Event::End(e) if e.local_name().as_ref() == b"tr" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(row)
}

fn parse_cell(src: &str, reader: &mut Reader<&[u8]>) -> Result<TableCell> {
    let mut cell = TableCell {
        paragraphs: Vec::new(),
        ..TableCell::default()
    };
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tcPr" => parse_cell_properties(reader, &mut cell)?,
                b"p" => cell.paragraphs.push(parse_paragraph(src, reader)?),
                // nested tables are not modeled; their text is dropped
                b"tbl" => skip_element(reader, &e)?,
                _ => skip_element(reader, &e)?,
            },
            Event::End(e) if e.local_name().as_ref() == b"tc" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    cell.normalize();
    Ok(cell)
}

fn parse_cell_properties(reader: &mut Reader<&[u8]>, cell: &mut TableCell) -> Result<()> {
    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Start(e) | Event::Empty(e) => {
                let is_start = matches!(event, Event::Start(_));
                match e.local_name().as_ref() {
                    b"tcW" => {
                        if attr(e, "type").as_deref() == Some("dxa") {
                            cell.width = attr_num(e, "w").map(Twips);
                        }
                    }
                    b"gridSpan" => cell.grid_span = attr_num(e, "val").unwrap_or(1),
                    b"vMerge" => {
                        // a bare w:vMerge means continue
                        cell.v_merge = Some(
                            attr(e, "val")
                                .and_then(|v| VerticalMerge::from_xml(&v))
                                .unwrap_or(VerticalMerge::Continue),
                        );
                    }
                    b"shd" => cell.shading = attr(e, "fill").filter(|f| f != "auto"),
                    _ if is_start => skip_element(reader, e)?,
                    _ => {}
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"tcPr" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(())
}

// --- section properties ---

/// `w:sectPr`, the start tag already consumed.
fn parse_section_properties(reader: &mut Reader<&[u8]>) -> Result<SectionProperties> {
    let mut sect = SectionProperties::default();
    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Start(e) | Event::Empty(e) => {
                let is_start = matches!(event, Event::Start(_));
                match e.local_name().as_ref() {
                    b"pgSz" => {
                        if let Some(w) = attr_num(e, "w") {
                            sect.page_width = Twips(w);
                        }
                        if let Some(h) = attr_num(e, "h") {
                            sect.page_height = Twips(h);
                        }
                        if let Some(orient) =
                            attr(e, "orient").and_then(|v| PageOrientation::from_xml(&v))
                        {
                            sect.orientation = orient;
                        }
                    }
                    b"pgMar" => {
                        if let Some(v) = attr_num(e, "top") {
                            sect.margin_top = Twips(v);
                        }
                        if let Some(v) = attr_num(e, "bottom") {
                            sect.margin_bottom = Twips(v);
                        }
                        if let Some(v) = attr_num(e, "left") {
                            sect.margin_left = Twips(v);
                        }
                        if let Some(v) = attr_num(e, "right") {
                            sect.margin_right = Twips(v);
                        }
                        if let Some(v) = attr_num(e, "header") {
                            sect.header_distance = Twips(v);
                        }
                        if let Some(v) = attr_num(e, "footer") {
                            sect.footer_distance = Twips(v);
                        }
                    }
                    b"headerReference" => {
                        if let Some(id) = attr(e, "id") {
                            sect.header_refs.push(id);
                        }
                    }
                    b"footerReference" => {
                        if let Some(id) = attr(e, "id") {
                            sect.footer_refs.push(id);
                        }
                    }
                    _ if is_start => skip_element(reader, e)?,
                    _ => {}
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"sectPr" => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(sect)
}
