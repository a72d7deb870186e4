//! Errors raised while locating table files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no CSV tables found in {path}")]
    NoTables { path: PathBuf },
    #[error("not a CSV table: {path}")]
    NotCsv { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
