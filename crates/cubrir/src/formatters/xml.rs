//! lcovtools XML Report Formatter
//!
//! Generates the nested-tag report format consumed by existing lcovtools
//! tooling: one container tagged with the tool version, one entry per file
//! in ascending path order, one leaf per executed line in ascending order.
//!
//! ## Format
//!
//! ```xml
//! <lcovtools version="0.2.0">
//! <file name="src/game.lua">
//!     <line number="10"/>
//!     <line number="15"/>
//! </file>
//! </lcovtools>
//! ```

use crate::report::CoverageReport;
use crate::result::CubrirResult;
use std::fmt::Write;
use std::path::Path;

/// lcovtools XML format report generator
#[derive(Debug)]
pub struct XmlFormatter<'a> {
    report: &'a CoverageReport,
    version: String,
}

impl<'a> XmlFormatter<'a> {
    /// Create a new XML formatter over a report snapshot
    #[must_use]
    pub fn new(report: &'a CoverageReport) -> Self {
        Self {
            report,
            version: crate::VERSION.to_string(),
        }
    }

    /// Set the tool version embedded in the container tag
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Generate the XML report as a string
    #[must_use]
    pub fn generate(&self) -> String {
        let mut xml = String::new();

        let _ = writeln!(
            xml,
            r#"<lcovtools version="{}">"#,
            escape_attr(&self.version)
        );

        for file in self.report.files() {
            let _ = writeln!(xml, r#"<file name="{}">"#, escape_attr(&file.path));
            for line in &file.lines {
                let _ = writeln!(xml, "\t<line number=\"{line}\"/>");
            }
            xml.push_str("</file>\n");
        }

        xml.push_str("</lcovtools>\n");
        xml
    }

    /// Save the XML report to a file
    ///
    /// # Errors
    ///
    /// Returns error if file write fails
    pub fn save(&self, path: &Path) -> CubrirResult<()> {
        std::fs::write(path, self.generate())?;
        Ok(())
    }
}

/// Escape the XML attribute-value metacharacters. Source paths come from the
/// host runtime and may contain any of them.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
