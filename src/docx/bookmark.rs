/// Bookmarks: named anchors wrapping paragraph content.
use crate::common::error::{DocxError, Result};

/// A bookmark, serialized as a `bookmarkStart`/`bookmarkEnd` pair wrapping
/// its paragraph's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    /// Numeric ID, unique within the document
    pub id: u32,
    /// Bookmark name, unique within the document
    pub name: String,
}

impl Bookmark {
    /// Validate a bookmark name.
    ///
    /// Word requires names to start with a letter or underscore, contain no
    /// whitespace, and stay within 40 characters.
    pub fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() || name.len() > 40 {
            return Err(DocxError::InvalidParameter(format!(
                "bookmark name must be 1-40 characters, got {}",
                name.len()
            )));
        }
        let mut chars = name.chars();
        let first = chars.next().expect("non-empty");
        if !(first.is_alphabetic() || first == '_') {
            return Err(DocxError::InvalidParameter(format!(
                "bookmark name must start with a letter or underscore: {:?}",
                name
            )));
        }
        if name.chars().any(|c| c.is_whitespace()) {
            return Err(DocxError::InvalidParameter(format!(
                "bookmark name must not contain whitespace: {:?}",
                name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_names() {
        assert!(Bookmark::validate_name("_intro").is_ok());
        assert!(Bookmark::validate_name("Chapter1").is_ok());
    }

    #[test]
    fn rejects_invalid_names() {
        assert!(Bookmark::validate_name("").is_err());
        assert!(Bookmark::validate_name("1section").is_err());
        assert!(Bookmark::validate_name("has space").is_err());
        assert!(Bookmark::validate_name(&"x".repeat(41)).is_err());
    }
}
