//! Error types returned by the AfterShip client.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while talking to the AfterShip API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A payload failed local validation before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request URL could not be built from the base URL and path.
    #[error("invalid request URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client failed to build or the network call failed.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The call context was cancelled while the request was in flight.
    #[error("request cancelled")]
    Cancelled,

    /// The call context deadline elapsed before the request completed.
    #[error("request deadline exceeded")]
    DeadlineExceeded,

    /// The service answered with a status the operation did not expect.
    #[error(transparent)]
    UnexpectedStatus(#[from] UnexpectedStatus),

    /// A successful response carried a body that could not be decoded.
    #[error("failed to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),
}

impl Error {
    /// Returns true when the service rejected the request.
    pub fn is_unexpected_status(&self) -> bool {
        matches!(self, Error::UnexpectedStatus(_))
    }

    /// Returns true when the call was aborted by its context.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Error::Cancelled | Error::DeadlineExceeded)
    }

    /// Returns true for failures below the HTTP status level.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::InvalidUrl { .. } | Error::Transport(_) | Error::Cancelled | Error::DeadlineExceeded
        )
    }

    /// HTTP status of an API-level rejection.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::UnexpectedStatus(unexpected) => Some(unexpected.status),
            _ => None,
        }
    }
}

/// The service returned a status code the operation did not expect.
///
/// `detail` is either `"{type}: {message}"` taken from the service's error
/// envelope, or the HTTP status line when no envelope was available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected response status: {detail}")]
pub struct UnexpectedStatus {
    pub status: StatusCode,
    pub detail: String,
    pub meta: Option<ErrorMeta>,
}

/// The `meta` object of an AfterShip error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMeta {
    pub code: i64,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}
