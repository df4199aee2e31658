//! Application-level error type shared by the library and the binary.

use std::path::PathBuf;

use thiserror::Error;

use crate::notebook::NotebookError;
use crate::text::SubstitutionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ::config::ConfigError),
    #[error(transparent)]
    Substitution(#[from] SubstitutionError),
    #[error("notebook directory {path} does not exist or is not a directory")]
    NotADirectory { path: PathBuf },
    #[error("failed to list notebooks in {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid notebook {path}: {source}")]
    Notebook {
        path: PathBuf,
        #[source]
        source: NotebookError,
    },
}
