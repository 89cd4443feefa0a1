//! Coverage Report Snapshot
//!
//! An owned (path, sorted line numbers) view of a collection session, taken
//! at export time so formatters never read live registry state. Files appear
//! in ascending path order and lines ascend within each file, exactly the
//! pairs a lossless export needs.

use serde::{Deserialize, Serialize};

/// Executed lines for one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCoverage {
    /// Source path, as the runtime reported it
    pub path: String,
    /// Executed line numbers, ascending, no duplicates
    pub lines: Vec<u32>,
}

/// Snapshot of all coverage recorded in a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    files: Vec<FileCoverage>,
}

impl CoverageReport {
    /// Create a report from per-file coverage, already in ascending path
    /// order.
    #[must_use]
    pub fn new(files: Vec<FileCoverage>) -> Self {
        Self { files }
    }

    /// Per-file coverage, ascending by path.
    #[must_use]
    pub fn files(&self) -> &[FileCoverage] {
        &self.files
    }

    /// Number of files in the report.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total distinct executed lines across all files.
    #[must_use]
    pub fn total_lines_covered(&self) -> usize {
        self.files.iter().map(|f| f.lines.len()).sum()
    }

    /// Whether the report contains no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Executed lines for one file, if it was tracked.
    #[must_use]
    pub fn lines_for(&self, path: &str) -> Option<&[u32]> {
        self.files
            .binary_search_by(|f| f.path.as_str().cmp(path))
            .ok()
            .map(|idx| self.files[idx].lines.as_slice())
    }
}
