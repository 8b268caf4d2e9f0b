//! Failure modes of a single search request.

use reqwest::StatusCode;
use thiserror::Error;

/// Why a search request produced no usable JSON body.
///
/// An empty-but-valid result set is not an error; it is handled by the feed
/// when normalization yields nothing.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed (DNS, connect, TLS, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("search API returned {status}: {body_preview}")]
    Status {
        status: StatusCode,
        body_preview: String,
    },

    /// The body was not valid JSON.
    #[error("malformed JSON body: {source} (body: {body_preview})")]
    Decode {
        #[source]
        source: serde_json::Error,
        body_preview: String,
    },

    /// The `results` array held a `null` entry.
    #[error("search results entry {index} is null")]
    NullResult { index: usize },
}

impl FetchError {
    /// Short name of the failure, for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode { .. } => "decode",
            FetchError::NullResult { .. } => "null_result",
        }
    }
}
