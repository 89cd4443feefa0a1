//! JSON Report Formatter
//!
//! Serde-based JSON export of a report snapshot, for tooling that prefers a
//! structured format over the lcovtools XML.

use crate::report::CoverageReport;
use crate::result::CubrirResult;
use std::path::Path;

/// JSON format report generator
#[derive(Debug)]
pub struct JsonFormatter<'a> {
    report: &'a CoverageReport,
    pretty: bool,
}

impl<'a> JsonFormatter<'a> {
    /// Create a new JSON formatter over a report snapshot
    #[must_use]
    pub fn new(report: &'a CoverageReport) -> Self {
        Self {
            report,
            pretty: true,
        }
    }

    /// Emit compact JSON instead of pretty-printed
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Generate the JSON report as a string
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn generate(&self) -> CubrirResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(self.report)?
        } else {
            serde_json::to_string(self.report)?
        };
        Ok(json)
    }

    /// Save the JSON report to a file
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails
    pub fn save(&self, path: &Path) -> CubrirResult<()> {
        std::fs::write(path, self.generate()?)?;
        Ok(())
    }
}
