//! Error types for loading content and running the application.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a question bank from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} must contain at least one question")]
    Empty { path: PathBuf },
    #[error("{path}: question {index} has correct_answer {answer}, expected 0..=3")]
    InvalidAnswer {
        path: PathBuf,
        index: usize,
        answer: usize,
    },
}

/// Top-level error for the academy application.
#[derive(Debug, Error)]
pub enum AcademyError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] log::SetLoggerError),
}
