//! Transport abstraction between the API client and the network.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// A fully prepared request: URL resolved, headers set, body encoded.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ApiRequest {
    /// Human-readable rendering for logs. Sensitive header values are replaced
    /// with `[REDACTED]`.
    pub fn describe(&self) -> String {
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| {
                let value = if value.is_sensitive() {
                    "[REDACTED]"
                } else {
                    value.to_str().unwrap_or("<binary>")
                };
                format!("{}: {}", name, value)
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{} {} [{}] {}",
            self.method,
            self.url,
            headers,
            String::from_utf8_lossy(&self.body)
        )
    }
}

/// A response whose body has been read to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, content_type: Option<&str>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_owned),
            body: body.into(),
        }
    }

    /// A response with `Content-Type: application/json`.
    pub fn json_body(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self::new(status, Some("application/json"), body)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|value| value.starts_with("application/json"))
    }

    /// Status line such as `500 Internal Server Error`.
    pub fn status_line(&self) -> String {
        self.status.to_string()
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::Decoding)
    }

    pub(crate) fn from_parts(status: StatusCode, headers: &HeaderMap, body: Bytes) -> Self {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        Self {
            status,
            content_type,
            body,
        }
    }
}

/// Sends prepared requests. The production implementation is
/// [`HttpClient`](super::HttpClient); tests substitute their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse>;
}
