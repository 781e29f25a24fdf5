//! Shared utilities: error types, XML escaping, and measurement units.

pub mod error;
pub mod units;
pub mod xml;
