use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing report files.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("file '{0}' already exists; pass overwrite to replace it")]
    FileExists(PathBuf),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
