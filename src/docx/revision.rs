/// Tracked changes (`w:ins` / `w:del`).
use crate::docx::run::Run;

/// The kind of a tracked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevisionKind {
    Insertion,
    Deletion,
}

impl RevisionKind {
    pub const fn element(self) -> &'static str {
        match self {
            Self::Insertion => "w:ins",
            Self::Deletion => "w:del",
        }
    }
}

/// A tracked insertion or deletion wrapping one or more runs.
///
/// Deleted text is emitted as `w:delText` instead of `w:t` inside the
/// wrapped runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Revision {
    /// Numeric ID, unique within the document
    pub id: u32,
    pub kind: RevisionKind,
    pub author: String,
    /// Timestamp, ISO-8601 (`w:date`)
    pub date: Option<String>,
    pub runs: Vec<Run>,
}

impl Revision {
    pub fn new(id: u32, kind: RevisionKind, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            author: author.into(),
            date: None,
            runs: vec![Run::text(text)],
        }
    }

    /// Concatenated text of the wrapped runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.plain_text()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_by_kind() {
        assert_eq!(RevisionKind::Insertion.element(), "w:ins");
        assert_eq!(RevisionKind::Deletion.element(), "w:del");
    }

    #[test]
    fn revision_text() {
        let rev = Revision::new(1, RevisionKind::Insertion, "editor", "added");
        assert_eq!(rev.text(), "added");
    }
}
