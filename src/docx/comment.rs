/// Comments stored in `word/comments.xml`.
use crate::docx::paragraph::Paragraph;

/// A comment with author metadata and paragraph content.
///
/// The comment body lives in the comments part; the anchored paragraph in
/// the document body emits the `commentRangeStart` / `commentRangeEnd` /
/// `commentReference` triple carrying this comment's ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Numeric ID, unique within the document
    pub id: u32,
    pub author: String,
    /// Author initials (`w:initials`); derived from the author name when
    /// not given explicitly
    pub initials: String,
    /// Creation timestamp, ISO-8601 (`w:date`)
    pub date: Option<String>,
    pub paragraphs: Vec<Paragraph>,
}

impl Comment {
    /// Create a comment with a single text paragraph.
    pub fn new(id: u32, author: impl Into<String>, text: impl Into<String>) -> Self {
        let author = author.into();
        let initials = derive_initials(&author);
        Self {
            id,
            author,
            initials,
            date: None,
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

/// First letter of each whitespace-separated word, uppercased.
fn derive_initials(author: &str) -> String {
    author
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_initials_from_author() {
        let comment = Comment::new(1, "Ada Lovelace", "check this");
        assert_eq!(comment.initials, "AL");
        assert_eq!(comment.text(), "check this");
    }

    #[test]
    fn initials_handle_single_word() {
        assert_eq!(derive_initials("reviewer"), "R");
        assert_eq!(derive_initials(""), "");
    }
}
