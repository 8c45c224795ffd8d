//! Error types shared by every pipeline stage.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("No seed words left after normalization")]
    EmptyInput,
    #[error("Failed to write wordlist to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Candidate set exceeded the limit of {limit} entries")]
    CandidateLimitExceeded { limit: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[cfg(feature = "async")]
    #[error("Wordlist generation cancelled")]
    Cancelled,
    #[cfg(feature = "async")]
    #[error("Worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl WordlistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WordlistError::Io {
            path: path.into(),
            source,
        }
    }
}
