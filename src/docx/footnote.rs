/// Footnotes and endnotes.
use crate::docx::paragraph::Paragraph;

/// Whether a note renders at the page bottom or the document end.
///
/// The two kinds live in separate parts (`word/footnotes.xml`,
/// `word/endnotes.xml`) with separate ID spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    Footnote,
    Endnote,
}

impl NoteKind {
    /// The XML element name for one note of this kind.
    pub const fn element(self) -> &'static str {
        match self {
            Self::Footnote => "w:footnote",
            Self::Endnote => "w:endnote",
        }
    }

    /// The reference element emitted inside the anchoring run.
    pub const fn reference_element(self) -> &'static str {
        match self {
            Self::Footnote => "w:footnoteRef",
            Self::Endnote => "w:endnoteRef",
        }
    }
}

/// A footnote or endnote body.
///
/// IDs 0 and 1 are reserved for the separator and continuation-separator
/// entries every notes part carries; real notes start at ID 2.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: u32,
    pub kind: NoteKind,
    pub paragraphs: Vec<Paragraph>,
}

impl Note {
    /// First real note ID; 0 and 1 are the separator entries.
    pub const FIRST_ID: u32 = 2;

    /// Create a note with a single text paragraph.
    pub fn new(id: u32, kind: NoteKind, text: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            paragraphs: vec![Paragraph::with_text(text)],
        }
    }

    /// Concatenated plain text across paragraphs, newline-joined.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_ids_start_after_separators() {
        assert_eq!(Note::FIRST_ID, 2);
    }

    #[test]
    fn elements_by_kind() {
        assert_eq!(NoteKind::Footnote.element(), "w:footnote");
        assert_eq!(NoteKind::Endnote.reference_element(), "w:endnoteRef");
    }

    #[test]
    fn note_text() {
        let note = Note::new(2, NoteKind::Footnote, "see appendix");
        assert_eq!(note.text(), "see appendix");
    }
}
