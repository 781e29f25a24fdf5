/// Error types for document model and transcoding operations.
use thiserror::Error;

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocxError>;

/// Error type covering the document model, parser, and serializer.
///
/// Variants fall into two classes: recoverable user-input failures on
/// mutation operations (`InvalidIndex`, `InvalidParameter`, `InvalidFormat`)
/// which leave the document unchanged, and structural failures fatal to a
/// parse or serialize call (`InvalidDocx`, `Parse`, `Xml`, `PartNotFound`).
#[derive(Error, Debug)]
pub enum DocxError {
    /// A logical index was out of range for its collection
    #[error("invalid {what} index {index} (collection has {len})")]
    InvalidIndex {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// A parameter failed validation (duplicate ID, malformed name, ...)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Content in an unusable format (bad base64, unknown image signature, ...)
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// The package is not a recognizable .docx document
    #[error("invalid docx: {0}")]
    InvalidDocx(String),

    /// A mandatory part failed to parse
    #[error("parse error in {part}: {detail}")]
    Parse { part: String, detail: String },

    /// XML reading or writing error
    #[error("XML error: {0}")]
    Xml(String),

    /// A required package part is missing
    #[error("part not found: {0}")]
    PartNotFound(String),

    /// Container (pack/unpack) error
    #[error("package error: {0}")]
    Pack(#[from] PackError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for DocxError {
    fn from(err: quick_xml::Error) -> Self {
        DocxError::Xml(err.to_string())
    }
}

impl From<std::fmt::Error> for DocxError {
    fn from(err: std::fmt::Error) -> Self {
        DocxError::Xml(err.to_string())
    }
}

/// Result type for container operations.
pub type PackResult<T> = std::result::Result<T, PackError>;

/// Error type for the pack/unpack container collaborator.
#[derive(Error, Debug)]
pub enum PackError {
    /// The byte stream is not a valid archive
    #[error("not a valid archive: {0}")]
    NotAnArchive(String),

    /// Archive entry could not be read or written
    #[error("archive entry error: {0}")]
    Entry(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for PackError {
    fn from(err: zip::result::ZipError) -> Self {
        PackError::NotAnArchive(err.to_string())
    }
}
