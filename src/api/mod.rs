//! AfterShip API client.

mod status;
mod trackings;

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};
use serde::Serialize;
use url::ParseError;

use crate::config::{API_KEY_HEADER, ClientConfig};
use crate::context::CallContext;
use crate::error::{Error, Result};
use crate::http::{ApiRequest, HttpClient, RawResponse, Transport};
use crate::model::{CreateTracking, Tracking};

/// Tracking operations, abstracted so callers can substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackingApi: Send + Sync {
    /// Creates a tracking. Expects `201 Created`.
    async fn create_tracking(
        &self,
        ctx: &CallContext,
        payload: &CreateTracking,
    ) -> Result<Tracking>;

    /// Deletes a tracking by carrier slug and number. Expects `200 OK`.
    async fn delete_tracking(
        &self,
        ctx: &CallContext,
        slug: &str,
        tracking_number: &str,
    ) -> Result<()>;
}

/// Client for the AfterShip tracking API.
///
/// Cheap to clone; clones share the same transport and connection pool.
#[derive(Clone)]
pub struct AfterShip {
    api_key: HeaderValue,
    base_url: Url,
    debug_requests: bool,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for AfterShip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AfterShip")
            .field("base_url", &self.base_url.as_str())
            .field("debug_requests", &self.debug_requests)
            .finish_non_exhaustive()
    }
}

impl AfterShip {
    /// Creates a client backed by a reqwest [`HttpClient`].
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpClient::from_config(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = Url::parse(config.base_url()).map_err(|source| Error::InvalidUrl {
            url: config.base_url().to_string(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl {
                url: config.base_url().to_string(),
                source: ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }

        let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            Error::InvalidInput("API key contains characters not allowed in a header".to_string())
        })?;
        api_key.set_sensitive(true);

        debug!("Using AfterShip API at {}", base_url);

        Ok(Self {
            api_key,
            base_url,
            debug_requests: config.debug_requests,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves path segments against the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl {
                url: self.base_url.to_string(),
                source: ParseError::RelativeUrlWithCannotBeABaseBase,
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Encodes `body` (absent bodies become `null`) and attaches the
    /// authentication and content headers.
    fn prepare<T>(&self, method: Method, segments: &[&str], body: Option<&T>) -> Result<ApiRequest>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(&body).map_err(Error::Serialization)?;

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), self.api_key.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let request = ApiRequest {
            method,
            url: self.endpoint(segments)?,
            headers,
            body: body.into(),
        };

        if self.debug_requests {
            debug!("Sending request: {}", request.describe());
        }

        Ok(request)
    }

    /// Sends one request and returns the raw response without looking at the
    /// status.
    async fn call<T>(
        &self,
        ctx: &CallContext,
        method: Method,
        segments: &[&str],
        body: Option<&T>,
    ) -> Result<RawResponse>
    where
        T: Serialize + Sync + ?Sized,
    {
        let request = self.prepare(method, segments, body)?;
        ctx.run(self.transport.execute(request)).await
    }
}
