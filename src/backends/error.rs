//! Import errors: everything that can go wrong between a file path and a model

use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a [`ModelTraits`](crate::domain::ModelTraits) from a file.
///
/// A failed import never yields a partially built model.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("not a file: {0}")]
    NotAFile(PathBuf),

    #[error("failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("unsupported format in {path}: {reason}")]
    UnsupportedFormat { path: PathBuf, reason: String },

    #[error("unknown backend: {0}")]
    UnknownBackend(String),

    #[error("backend {backend} cannot read {path}: native reader not available")]
    BackendUnavailable { backend: String, path: PathBuf },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
