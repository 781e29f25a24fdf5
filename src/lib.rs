//! # Vellum
//!
//! A word-processing document model with bidirectional OOXML (.docx)
//! transcoding. The crate owns an in-memory document graph (paragraphs, runs,
//! tables, styles, numbering, headers/footers, comments, notes, drawings,
//! fields, content controls), a parser that populates it from an extracted
//! package tree, and a serializer that emits a complete, schema-ordered
//! package tree ready for the container layer.
//!
//! # Architecture
//!
//! - [`docx::Document`]: the owned aggregate and its typed mutation API
//! - [`docx::parse`]: package tree → `Document`
//! - [`docx::write`]: `Document` → package tree
//! - [`opc`]: part paths, content types, and the pack/unpack container contract
//! - [`common`]: units, XML escaping, error types
//!
//! # Example
//!
//! ```rust
//! use vellum::docx::Document;
//!
//! let mut doc = Document::new();
//! doc.insert_paragraph(0, "Hello, world")?;
//! let parts = vellum::docx::write::write_package(&doc)?;
//! let back = vellum::docx::parse::parse_package(&parts)?;
//! assert_eq!(back.paragraph_count(), 1);
//! # Ok::<(), vellum::DocxError>(())
//! ```

pub mod common;
pub mod docx;
pub mod opc;

pub use common::error::{DocxError, PackError, Result};
pub use docx::Document;
