use reqwest::Method;
use serde::de::DeserializeOwned;

use super::*;
use crate::transport::TransportRequest;

/// Build `base` with its path replaced by `path` and the query set to
/// `query`, in order.
///
/// Names and values are percent-encoded (a space becomes `%20`, not `+`).
pub fn build_url(base: &str, path: &str, query: &[(&str, String)]) -> Result<Url, ArenaError> {
    let mut url = Url::parse(base)?;
    if url.cannot_be_a_base() {
        return Err(ArenaError::InvalidUrl(format!("{base} cannot carry a path")));
    }

    url.set_path(path);
    url.set_fragment(None);
    if query.is_empty() {
        url.set_query(None);
    } else {
        let encoded = query
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&encoded));
    }
    Ok(url)
}

impl ArenaClient {
    /// Perform a request and decode the JSON body into `T`.
    ///
    /// `base_url` defaults to the configured API host. The stored token, if
    /// any, is sent as a bearer credential; without one the request goes out
    /// unauthenticated. Unless strict status checking is configured the body
    /// is decoded whatever the HTTP status.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        base_url: Option<&str>,
        path: &str,
        method: Method,
        query: &[(&str, String)],
    ) -> Result<T, ArenaError> {
        let base = base_url.unwrap_or(self.config.api_base_url.as_str());
        let url = build_url(base, path, query)?;
        let bearer = self.storage.get();

        tracing::debug!(%method, path, authenticated = bearer.is_some(), "Sending Are.na request");
        let resp = self
            .transport
            .send(TransportRequest {
                method,
                url,
                bearer,
            })
            .await?;
        tracing::debug!(status = resp.status, path, "Received Are.na response");

        if self.config.strict_status && !resp.is_success() {
            return Err(ArenaError::Http {
                status: Some(resp.status),
                message: String::from_utf8_lossy(&resp.body).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&resp.body)?)
    }

    /// GET against the API host.
    pub(super) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ArenaError> {
        self.execute(None, path, Method::GET, query).await
    }
}
