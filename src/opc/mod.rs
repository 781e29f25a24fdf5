//! Open Packaging Convention support: part names, content types, and the
//! pack/unpack container contract.
//!
//! The container itself (ZIP compression, filesystem handling) is an
//! external collaborator; this module defines the part-tree data structure
//! both sides of that contract exchange, plus a default `zip`-backed
//! implementation for hosts that want one.

pub mod constants;
pub mod package;

pub use package::{Container, PartTree, ZipContainer};
