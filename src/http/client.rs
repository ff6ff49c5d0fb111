//! reqwest-backed transport.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::transport::{ApiRequest, RawResponse, Transport};
use crate::config::ClientConfig;
use crate::error::Result;

/// HTTP transport sharing one reqwest connection pool across all calls.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a reqwest Client with the configured timeout and user agent.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let timeout = config.effective_timeout();
        debug!("Creating HTTP client with {}ms timeout", timeout.as_millis());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.effective_user_agent())
            .build()?;

        Ok(Self::new(client))
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!("Received {} ({} bytes)", status, body.len());

        Ok(RawResponse::from_parts(status, &headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use bytes::Bytes;
    use reqwest::header::{HeaderMap, HeaderValue};
    use reqwest::{Method, StatusCode, Url};

    fn request(method: Method, url: &str, body: &'static [u8]) -> ApiRequest {
        let mut headers = HeaderMap::new();
        headers.insert("aftership-api-key", HeaderValue::from_static("test-key"));
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/json"),
        );
        ApiRequest {
            method,
            url: Url::parse(url).unwrap(),
            headers,
            body: Bytes::from_static(body),
        }
    }

    #[tokio::test]
    async fn test_execute_sends_headers_and_body() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("POST", "/trackings")
            .match_header("aftership-api-key", "test-key")
            .match_header("content-type", "application/json")
            .match_body(r#"{"tracking":{}}"#)
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let response = client
            .execute(request(
                Method::POST,
                &format!("{}/trackings", url),
                br#"{"tracking":{}}"#,
            ))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert!(response.is_json());
        assert_eq!(response.body, Bytes::from_static(br#"{"ok": true}"#));
    }

    #[tokio::test]
    async fn test_execute_does_not_interpret_status() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("DELETE", "/trackings/ups/1Z")
            .with_status(500)
            .with_header("content-type", "text/plain")
            .with_body("boom")
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let response = client
            .execute(request(
                Method::DELETE,
                &format!("{}/trackings/ups/1Z", url),
                b"null",
            ))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.content_type.as_deref(), Some("text/plain"));
        assert!(!response.is_json());
    }

    #[tokio::test]
    async fn test_execute_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new(Client::new());
        let result = client
            .execute(request(Method::GET, &format!("http://{}/", addr), b"null"))
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.is_transport());
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig::new("key").with_user_agent("custom-agent");
        assert!(HttpClient::from_config(&config).is_ok());
    }
}
