//! Turning unexpected responses into [`Error::UnexpectedStatus`].

use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{Error, ErrorMeta, Result, UnexpectedStatus};
use crate::http::RawResponse;

#[derive(Deserialize)]
struct ErrorEnvelope {
    meta: ErrorMeta,
}

/// Passes the response through when it has the expected status, otherwise
/// converts it into an error.
pub(crate) fn expect_status(response: RawResponse, expected: StatusCode) -> Result<RawResponse> {
    if response.status == expected {
        Ok(response)
    } else {
        Err(normalize(&response))
    }
}

/// Builds an `UnexpectedStatus` error from a response.
///
/// JSON bodies are read as the service's `{"meta": {...}}` envelope and the
/// detail becomes `"{type}: {message}"`. Anything else, including JSON that
/// does not match the envelope, falls back to the status line.
pub(crate) fn normalize(response: &RawResponse) -> Error {
    let (detail, meta) = if response.is_json() {
        match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
            Ok(ErrorEnvelope { meta }) if meta.kind.is_empty() && meta.message.is_empty() => {
                debug!("Error envelope for {} has no type or message", response.status);
                (response.status_line(), Some(meta))
            }
            Ok(ErrorEnvelope { meta }) => (format!("{}: {}", meta.kind, meta.message), Some(meta)),
            Err(err) => {
                debug!(
                    "Error body for {} is not a valid error envelope: {}",
                    response.status, err
                );
                (response.status_line(), None)
            }
        }
    } else {
        (response.status_line(), None)
    };

    debug!("Unexpected response status {}: {}", response.status, detail);

    Error::UnexpectedStatus(UnexpectedStatus {
        status: response.status,
        detail,
        meta,
    })
}
