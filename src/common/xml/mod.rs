//! XML helpers shared by the parser and serializer.

mod escape;

pub use escape::{escape_xml, unescape_xml};
