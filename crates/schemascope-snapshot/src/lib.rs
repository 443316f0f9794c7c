//! Snapshot ingestion for Schemascope.
//!
//! Reads a JSON snapshot of already-introspected schema metadata and maps it
//! into the core [`Database`](schemascope_core::Database) aggregate. How the
//! snapshot was produced is out of scope; any source that emits the documented
//! format works (export scripts, fixtures, hand-written files).

pub mod error;
pub mod mapper;
pub mod model;
pub mod options;

use std::path::Path;

pub use error::{Result, SnapshotError};
pub use mapper::build_database;
pub use model::{
    RawColumn, RawForeignKey, RawRoutine, RawTable, RawView, SnapshotFile, SNAPSHOT_VERSION,
};
pub use options::SnapshotOptions;

/// Reads and parses a snapshot document from disk.
pub fn load_snapshot(path: &Path) -> Result<SnapshotFile> {
    let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Convenience wrapper: load a snapshot and map it with default options.
pub fn load_database(path: &Path) -> Result<schemascope_core::Database> {
    let snapshot = load_snapshot(path)?;
    build_database(&snapshot, &SnapshotOptions::default())
}
