//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionError;

/// Errors emitted while fetching or decoding the question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question bank is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("question #{index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
}
