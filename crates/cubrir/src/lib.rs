//! Cubrir: Line-Coverage Accumulation Engine
//!
//! Cubrir (Spanish: "to cover") records which source lines of an
//! instrumented program executed at least once, and reports them. The host
//! runtime feeds it one event per executed line; Cubrir accumulates the
//! events into compact per-file bitmaps and exports them as a sorted,
//! deterministic report.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     CUBRIR Architecture                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   line event ──► CoverageCollector ──► FileRegistry             │
//! │   (path, line)        │                  │ sorted, cached       │
//! │                       │                  ▼                      │
//! │                       │               LineBitmap (per file)     │
//! │                       ▼                                         │
//! │                 CoverageReport ──► XmlFormatter / JsonFormatter │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The hot path is one event per executed line, potentially millions per
//! run, so lookup is two-tier: a single-slot last-hit cache collapses runs
//! of events from the currently-executing file to a string compare, with a
//! binary search over the sorted file table as the fallback.
//!
//! # Example
//!
//! ```
//! use cubrir::{CoverageCollector, XmlFormatter};
//!
//! let mut collector = CoverageCollector::default();
//! collector.on_line_executed("game.lua", 1)?;
//! collector.on_line_executed("game.lua", 5)?;
//!
//! let report = collector.report();
//! let xml = XmlFormatter::new(&report).generate();
//! assert!(xml.contains(r#"<file name="game.lua">"#));
//! # Ok::<(), cubrir::CubrirError>(())
//! ```

#![warn(missing_docs)]

mod bitmap;
mod collector;
pub mod formatters;
mod registry;
mod report;
mod result;

pub use bitmap::LineBitmap;
pub use collector::{CollectorConfig, CollectorConfigBuilder, CollectorStats, CoverageCollector};
pub use formatters::{JsonFormatter, XmlFormatter};
pub use registry::{FileRecord, FileRegistry};
pub use report::{CoverageReport, FileCoverage};
pub use result::{CubrirError, CubrirResult};

/// Tool version embedded in exported reports.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
