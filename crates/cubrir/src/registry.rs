//! Sorted File Registry
//!
//! Maps source paths to per-file bitmaps. The record table stays sorted by
//! bytewise path order so export is deterministic, lookup is a binary search,
//! and a single-slot last-hit cache collapses the dominant access pattern
//! (thousands of consecutive events from the currently-executing file) to a
//! string compare.

use crate::bitmap::LineBitmap;

/// Initial per-file bitmap sizing: small scripts never trigger growth.
const INITIAL_LINES: u32 = 1024;

/// One tracked source file: immutable path identity plus its line bitmap.
///
/// Paths are compared byte-for-byte; the registry performs no normalization.
#[derive(Debug, Clone)]
pub struct FileRecord {
    path: String,
    bitmap: LineBitmap,
}

impl FileRecord {
    fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            bitmap: LineBitmap::with_capacity_lines(INITIAL_LINES),
        }
    }

    /// Source path as given by the instrumentation, unmodified.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Executed-line bitmap for this file.
    #[must_use]
    pub fn bitmap(&self) -> &LineBitmap {
        &self.bitmap
    }

    pub(crate) fn bitmap_mut(&mut self) -> &mut LineBitmap {
        &mut self.bitmap
    }
}

/// Sorted collection of [`FileRecord`]s with lookup-or-create semantics.
///
/// At most one record exists per distinct path. Records are never removed
/// individually; [`FileRegistry::reset`] discards everything at once. The
/// relative order of existing records never changes, so traversal order is
/// stable across the registry's lifetime.
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    /// Records in ascending bytewise path order.
    files: Vec<FileRecord>,
    /// Index of the most recently returned record. Validated by path
    /// equality before use, so a stale slot can never resolve wrongly.
    last_hit: Option<usize>,
}

impl FileRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry pre-sized for `files` records.
    #[must_use]
    pub fn with_capacity(files: usize) -> Self {
        Self {
            files: Vec::with_capacity(files),
            last_hit: None,
        }
    }

    /// Return the record for `path`, creating and inserting it in sorted
    /// position if this is the first time the path is seen.
    ///
    /// The last-hit cache is checked before searching and updated on every
    /// return path. It is a pure optimization: disabling it yields
    /// bit-for-bit identical registry state.
    pub fn lookup_or_create(&mut self, path: &str) -> &mut FileRecord {
        if let Some(idx) = self.last_hit {
            if self.files[idx].path == path {
                return &mut self.files[idx];
            }
        }

        match self
            .files
            .binary_search_by(|record| record.path.as_str().cmp(path))
        {
            Ok(idx) => {
                self.last_hit = Some(idx);
                &mut self.files[idx]
            }
            Err(idx) => {
                tracing::debug!(path, "tracking new source file");
                self.files.insert(idx, FileRecord::new(path));
                self.last_hit = Some(idx);
                &mut self.files[idx]
            }
        }
    }

    /// Read-only lookup. `None` means zero lines executed for that file,
    /// never an error.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FileRecord> {
        self.files
            .binary_search_by(|record| record.path.as_str().cmp(path))
            .ok()
            .map(|idx| &self.files[idx])
    }

    /// Discard all records and their bitmaps and clear the lookup cache.
    /// Safe to call at any time, including on an empty registry.
    pub fn reset(&mut self) {
        tracing::debug!(files = self.files.len(), "registry reset");
        self.files.clear();
        self.last_hit = None;
    }

    /// Traverse records in ascending path order. Lazy and restartable; the
    /// order exactly matches insertion-sort order.
    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter()
    }

    /// Number of distinct files currently tracked.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Whether any file has been tracked since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Approximate bytes held by the registry: table slack, per-record
    /// overhead, path bytes, and bitmap storage. A diagnostic estimate that
    /// scales with actual allocation, not an exact accounting.
    #[must_use]
    pub fn estimated_memory_bytes(&self) -> usize {
        let mut bytes = self.files.capacity() * std::mem::size_of::<FileRecord>();
        for record in &self.files {
            bytes += record.path.capacity();
            bytes += record.bitmap.storage_bytes();
        }
        bytes
    }
}
