//! Error types for authlog-parser

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for authlog-parser
#[derive(Error, Debug)]
pub enum AuthlogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No input file given. Exiting.")]
    NoInput,

    #[error("Invalid argument: {0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, AuthlogError>;
