//! Coverage Collector
//!
//! The per-event entry point. The host runtime's instrumentation calls
//! [`CoverageCollector::on_line_executed`] once per executed source line,
//! synchronously, on the same execution context as the measured program.
//! The collector owns the registry, so one session is one value: tests and
//! embedders can run independent sessions without process-global state.

use crate::registry::{FileRecord, FileRegistry};
use crate::report::{CoverageReport, FileCoverage};
use crate::result::{CubrirError, CubrirResult};
use serde::{Deserialize, Serialize};

/// Coverage collection configuration
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Highest line number accepted per event; events above it are rejected
    pub max_line: u32,
    /// Number of distinct files to pre-reserve registry slots for
    pub expected_files: usize,
}

impl CollectorConfig {
    /// Create a builder for collector config
    #[must_use]
    pub fn builder() -> CollectorConfigBuilder {
        CollectorConfigBuilder::default()
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_line: u32::MAX,
            expected_files: 0,
        }
    }
}

/// Builder for collector configuration
#[derive(Debug)]
pub struct CollectorConfigBuilder {
    max_line: u32,
    expected_files: usize,
}

impl Default for CollectorConfigBuilder {
    fn default() -> Self {
        let config = CollectorConfig::default();
        Self {
            max_line: config.max_line,
            expected_files: config.expected_files,
        }
    }
}

impl CollectorConfigBuilder {
    /// Set the highest accepted line number
    #[must_use]
    pub fn max_line(mut self, max_line: u32) -> Self {
        self.max_line = max_line;
        self
    }

    /// Set the number of files to pre-reserve for
    #[must_use]
    pub fn expected_files(mut self, files: usize) -> Self {
        self.expected_files = files;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> CollectorConfig {
        CollectorConfig {
            max_line: self.max_line,
            expected_files: self.expected_files,
        }
    }
}

/// Read-only collection statistics for diagnostics surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorStats {
    /// Number of distinct files tracked
    pub files: usize,
    /// Approximate bytes held by the registry and its bitmaps
    pub estimated_memory_bytes: usize,
}

/// Line-coverage collector for one measurement session.
///
/// Events are applied strictly in arrival order and to completion before the
/// call returns. Steady-state events in already-tracked territory are
/// constant time: a cache-hit lookup plus one bit set, with no allocation.
#[derive(Debug)]
pub struct CoverageCollector {
    config: CollectorConfig,
    registry: FileRegistry,
}

impl CoverageCollector {
    /// Create a new collector with the given configuration
    #[must_use]
    pub fn new(config: CollectorConfig) -> Self {
        let registry = FileRegistry::with_capacity(config.expected_files);
        Self { config, registry }
    }

    /// Record that `line` in the file at `path` was just executed.
    ///
    /// Idempotent: re-recording an already-set line is a no-op. Invalid
    /// input is rejected before any state mutation.
    ///
    /// # Errors
    ///
    /// [`CubrirError::EmptyPath`] if `path` is empty,
    /// [`CubrirError::LineOutOfRange`] if `line` exceeds the configured
    /// ceiling.
    #[inline]
    pub fn on_line_executed(&mut self, path: &str, line: u32) -> CubrirResult<()> {
        if path.is_empty() {
            return Err(CubrirError::EmptyPath { line });
        }
        if line > self.config.max_line {
            return Err(CubrirError::LineOutOfRange {
                path: path.to_string(),
                line,
                max_line: self.config.max_line,
            });
        }

        self.registry.lookup_or_create(path).bitmap_mut().set(line);
        Ok(())
    }

    /// Discard all recorded coverage and start the session over.
    pub fn reset(&mut self) {
        self.registry.reset();
    }

    /// Traverse tracked files in ascending path order.
    pub fn files(&self) -> impl Iterator<Item = &FileRecord> {
        self.registry.iter()
    }

    /// Look up one file's record without creating it. `None` means no line
    /// of that file has executed.
    #[must_use]
    pub fn get_file(&self, path: &str) -> Option<&FileRecord> {
        self.registry.get(path)
    }

    /// Number of distinct files tracked so far.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.registry.file_count()
    }

    /// Approximate bytes held by this session's registry.
    #[must_use]
    pub fn estimated_memory_bytes(&self) -> usize {
        self.registry.estimated_memory_bytes()
    }

    /// Current collection statistics.
    #[must_use]
    pub fn stats(&self) -> CollectorStats {
        CollectorStats {
            files: self.registry.file_count(),
            estimated_memory_bytes: self.registry.estimated_memory_bytes(),
        }
    }

    /// Take an owned, ordered snapshot of the recorded coverage, decoupled
    /// from further mutation. Formatters consume this.
    #[must_use]
    pub fn report(&self) -> CoverageReport {
        let files = self
            .registry
            .iter()
            .map(|record| FileCoverage {
                path: record.path().to_string(),
                lines: record.bitmap().iter_set_lines().collect(),
            })
            .collect();
        CoverageReport::new(files)
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }
}

impl Default for CoverageCollector {
    fn default() -> Self {
        Self::new(CollectorConfig::default())
    }
}
