/// Hyperlinks: inline links and their document-level relationship entries.
use crate::docx::run::Run;

/// A hyperlink inside a paragraph.
///
/// External links carry the relationship ID of a [`HyperlinkRef`] entry in
/// the document's hyperlink table; internal links carry a bookmark anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperlink {
    /// Relationship ID for external links (`r:id`)
    pub rel_id: Option<String>,
    /// Bookmark anchor for internal links (`w:anchor`)
    pub anchor: Option<String>,
    /// Display runs
    pub runs: Vec<Run>,
    /// Tooltip text (`w:tooltip`)
    pub tooltip: Option<String>,
}

impl Hyperlink {
    /// Create an external hyperlink with a single display run.
    pub fn external(rel_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            rel_id: Some(rel_id.into()),
            anchor: None,
            runs: vec![Run::text(text)],
            tooltip: None,
        }
    }

    /// Create an internal hyperlink targeting a bookmark.
    pub fn internal(anchor: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            rel_id: None,
            anchor: Some(anchor.into()),
            runs: vec![Run::text(text)],
            tooltip: None,
        }
    }

    /// Concatenated display text.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.plain_text()).collect()
    }
}

/// A document-level external hyperlink target.
///
/// Each entry owns a unique relationship ID emitted as an external
/// relationship in `word/_rels/document.xml.rels`. Every hyperlink gets its
/// own entry even when several point at the same URL, matching what Word
/// itself produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperlinkRef {
    /// Relationship ID (`rId...`), allocated at insertion time
    pub rel_id: String,
    /// Target URL
    pub url: String,
}
