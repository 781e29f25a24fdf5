/// Headers and footers, each living in its own package part.
use crate::docx::paragraph::Paragraph;

/// Whether a part is a header or a footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderFooterKind {
    Header,
    Footer,
}

impl HeaderFooterKind {
    /// Root element of the part (`w:hdr` / `w:ftr`).
    pub const fn root_element(self) -> &'static str {
        match self {
            Self::Header => "w:hdr",
            Self::Footer => "w:ftr",
        }
    }

    /// The sectPr reference element pointing at the part.
    pub const fn reference_element(self) -> &'static str {
        match self {
            Self::Header => "w:headerReference",
            Self::Footer => "w:footerReference",
        }
    }

    /// Part path prefix under `word/`.
    pub const fn part_stem(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
        }
    }
}

/// A header or footer part.
///
/// Headers and footers are numbered independently (`header1.xml`,
/// `footer1.xml`, ...) and each carries its own relationship ID referenced
/// from the body's section properties.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFooter {
    pub kind: HeaderFooterKind,
    /// 1-based index within its kind, fixed at creation
    pub index: u32,
    /// Relationship ID in `document.xml.rels`
    pub rel_id: String,
    pub paragraphs: Vec<Paragraph>,
}

impl HeaderFooter {
    pub fn new(kind: HeaderFooterKind, index: u32, rel_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            rel_id: rel_id.into(),
            paragraphs: vec![Paragraph::with_text(text)],
        }
    }

    /// Plain text of all paragraphs, newline-joined.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Package path, e.g. `word/header1.xml`.
    pub fn part_path(&self) -> String {
        format!("word/{}{}.xml", self.kind.part_stem(), self.index)
    }

    /// Part-relative target used in the document's relationship entry.
    pub fn rel_target(&self) -> String {
        format!("{}{}.xml", self.kind.part_stem(), self.index)
    }
}
