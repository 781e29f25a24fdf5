//! Comments and notes part parsing.
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::common::error::Result;
use crate::docx::comment::Comment;
use crate::docx::footnote::{Note, NoteKind};
use crate::docx::paragraph::Paragraph;
use crate::docx::run::RunContent;

use super::body::parse_paragraph;
use super::{attr, attr_num};

pub(crate) fn parse_comments(src: &str) -> Result<Vec<Comment>> {
    let mut reader = Reader::from_str(src);
    let mut comments = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"comment" => {
                let Some(id) = attr_num(&e, "id") else {
                    let end = e.to_end().into_owned();
                    reader.read_to_end(end.name())?;
                    continue;
                };
                let author = attr(&e, "author").unwrap_or_default();
                let initials = attr(&e, "initials").unwrap_or_default();
                let date = attr(&e, "date");
                let paragraphs = parse_note_paragraphs(src, &mut reader, b"comment")?;
                comments.push(Comment {
                    id,
                    author,
                    initials,
                    date,
                    paragraphs,
                });
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(comments)
}

pub(crate) fn parse_footnotes(src: &str) -> Result<Vec<Note>> {
    parse_notes(src, NoteKind::Footnote, b"footnote")
}

pub(crate) fn parse_endnotes(src: &str) -> Result<Vec<Note>> {
    parse_notes(src, NoteKind::Endnote, b"endnote")
}

/// Separator and continuation-separator entries are structural; only the
/// real notes populate the model.
fn parse_notes(src: &str, kind: NoteKind, element: &[u8]) -> Result<Vec<Note>> {
    let mut reader = Reader::from_str(src);
    let mut notes = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == element => {
                let note_type = attr(&e, "type");
                let id = attr_num(&e, "id");
                if matches!(
                    note_type.as_deref(),
                    Some("separator") | Some("continuationSeparator")
                ) || id.is_none()
                {
                    let end = e.to_end().into_owned();
                    reader.read_to_end(end.name())?;
                    continue;
                }
                let mut paragraphs = parse_note_paragraphs(src, &mut reader, element)?;
                strip_reference_marks(&mut paragraphs);
                notes.push(Note {
                    id: id.unwrap_or(0),
                    kind,
                    paragraphs,
                });
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(notes)
}

/// Paragraphs up to the wrapper's end tag.
fn parse_note_paragraphs(
    src: &str,
    reader: &mut Reader<&[u8]>,
    wrapper: &[u8],
) -> Result<Vec<Paragraph>> {
    let mut paragraphs = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"p" => {
                paragraphs.push(parse_paragraph(src, reader)?);
            }
            Event::Start(e) => {
                let end = e.to_end().into_owned();
                reader.read_to_end(end.name())?;
            }
            Event::End(e) if e.local_name().as_ref() == wrapper => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(paragraphs)
}

/// The note body's own reference-mark run duplicates information the
/// model derives; drop runs that carry no content.
fn strip_reference_marks(paragraphs: &mut [Paragraph]) {
    for para in paragraphs {
        para.runs.retain(|run| match &run.content {
            RunContent::Text(t) => !t.is_empty(),
            _ => true,
        });
    }
}
