//! HTTP transport seam.
//!
//! The client hands a fully built request to a [`Transport`] and gets back
//! the status and raw body. [`ReqwestTransport`] is the production
//! implementation; tests substitute their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use url::Url;

use crate::ArenaError;

/// A single outgoing request.
#[derive(Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    /// Bearer token to send, if any.
    pub bearer: Option<String>,
}

impl std::fmt::Debug for TransportRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// A framed HTTP response.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Perform the request. Fails with [`ArenaError::Http`] when no usable
    /// HTTP response was received.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ArenaError>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing reqwest client (custom TLS, proxies, ...).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Build a client that gives up on a request after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ArenaError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ArenaError> {
        let mut builder = self.http.request(request.method, request.url);
        if let Some(token) = request.bearer {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                ArenaError::Http {
                    status: None,
                    message: format!("invalid bearer token: {e}"),
                }
            })?;
            builder = builder.header(AUTHORIZATION, value);
        }

        // Transport-level failures never carry a status.
        let resp = builder.send().await.map_err(|e| ArenaError::Http {
            status: None,
            message: e.to_string(),
        })?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| ArenaError::Http {
            status: None,
            message: e.to_string(),
        })?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        let ok = TransportResponse {
            status: 204,
            body: Vec::new(),
        };
        let not_found = TransportResponse {
            status: 404,
            body: Vec::new(),
        };
        assert!(ok.is_success());
        assert!(!not_found.is_success());
    }

    #[test]
    fn request_debug_hides_bearer() {
        let request = TransportRequest {
            method: Method::GET,
            url: Url::parse("https://api.are.na/v2/me").unwrap(),
            bearer: Some("secret-bearer".into()),
        };
        let printed = format!("{request:?}");
        assert!(printed.contains("/v2/me"));
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("secret-bearer"));
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error_without_status() {
        // Port 9 (discard) on localhost is closed in test environments.
        let transport = ReqwestTransport::with_timeout(Duration::from_secs(5)).unwrap();
        let request = TransportRequest {
            method: Method::GET,
            url: Url::parse("http://127.0.0.1:9/v2/me").unwrap(),
            bearer: None,
        };

        let err = transport.send(request).await.unwrap_err();
        assert!(matches!(err, ArenaError::Http { status: None, .. }));
    }
}
