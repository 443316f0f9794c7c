use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or mapping a snapshot document.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("foreign key {foreign_key} references unknown parent table {table}")]
    UnknownParentTable { foreign_key: String, table: String },
    #[error(transparent)]
    Core(#[from] schemascope_core::Error),
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
