//! Coverage Report Formatters
//!
//! XML (lcovtools-compatible) and JSON generators for report export.

mod json;
mod xml;

pub use json::JsonFormatter;
pub use xml::XmlFormatter;
