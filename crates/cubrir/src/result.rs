//! Result and error types for Cubrir.

use thiserror::Error;

/// Result type for Cubrir operations
pub type CubrirResult<T> = Result<T, CubrirError>;

/// Errors that can occur in Cubrir
///
/// Invalid-input errors carry the offending call-site data so instrumentation
/// bugs can be attributed to a specific event. They are rejected before any
/// state mutation. Allocation exhaustion is not represented here: growth that
/// cannot allocate aborts the process rather than continuing with coverage
/// data that silently lost bits.
#[derive(Debug, Error)]
pub enum CubrirError {
    /// A line event arrived without a source path
    #[error("line {line} reported with an empty source path")]
    EmptyPath {
        /// Line number carried by the rejected event
        line: u32,
    },

    /// A line event exceeded the configured line ceiling
    #[error("line {line} in {path} exceeds the configured ceiling of {max_line}")]
    LineOutOfRange {
        /// Source path carried by the rejected event
        path: String,
        /// Line number carried by the rejected event
        line: u32,
        /// Ceiling the collector was configured with
        max_line: u32,
    },

    /// Report serialization failed
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing a report to disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
