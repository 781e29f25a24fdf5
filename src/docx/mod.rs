/// Word (.docx) document model and transcoding.
///
/// This module owns the in-memory document graph and the two directions of
/// the transcoding engine:
///
/// - [`Document`]: the aggregate holding body content, styles, numbering,
///   section properties, headers/footers, media, comments, and notes, with
///   a typed mutation API
/// - [`parse`]: populate a `Document` from an extracted package tree
/// - [`write`]: emit a complete package tree from a `Document`
///
/// # Example
///
/// ```rust
/// use vellum::docx::Document;
///
/// let mut doc = Document::new();
/// doc.insert_paragraph(0, "First paragraph")?;
/// doc.insert_table(0, 2, 2)?;
/// doc.update_cell(0, 0, 0, "top-left")?;
///
/// let parts = vellum::docx::write::write_package(&doc)?;
/// assert!(parts.contains("word/document.xml"));
/// # Ok::<(), vellum::DocxError>(())
/// ```
pub mod annotate;
pub mod bookmark;
pub mod comment;
pub mod content_control;
pub mod document;
pub mod drawing;
pub mod enums;
pub mod field;
pub mod footnote;
pub mod header_footer;
pub mod hyperlink;
pub mod image;
pub mod numbering;
pub mod paragraph;
pub mod parse;
pub mod rels;
pub mod revision;
pub mod run;
pub mod section;
pub mod styles;
pub mod table;
pub mod write;

pub use annotate::{AnnotationSource, SemanticAnnotation, SemanticType};
pub use bookmark::Bookmark;
pub use comment::Comment;
pub use content_control::{ContentControl, ContentControlKind};
pub use document::{Body, BodyChild, Document, DocumentProperties};
pub use drawing::Drawing;
pub use field::FieldCode;
pub use footnote::{Note, NoteKind};
pub use header_footer::{HeaderFooter, HeaderFooterKind};
pub use hyperlink::{Hyperlink, HyperlinkRef};
pub use image::{ImageFormat, ImageRef};
pub use numbering::{AbstractNum, Num, Numbering, NumberingLevel};
pub use paragraph::{Paragraph, ParagraphProperties};
pub use revision::{Revision, RevisionKind};
pub use run::{Run, RunContent, RunProperties};
pub use section::SectionProperties;
pub use styles::{Style, Styles};
pub use table::{Table, TableCell, TableRow};
