use crate::error::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Gateway to the upstream API.
///
/// Every request carries the configured `User-Agent` (the upstream rejects
/// default-looking clients) and logical paths such as `/entry/1/history/`
/// are rewritten into the upstream namespace by prefixing the base URL.
/// Nothing is cached or retried here.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upstream URL for a logical endpoint path.
    pub fn upstream_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }

    pub async fn get_text(&self, endpoint: &str) -> Result<String> {
        let url = self.upstream_url(endpoint);
        debug!(%url, "GET");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        self.handle_response(endpoint, resp).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let body = self.get_text(endpoint).await?;
        serde_json::from_str(&body).map_err(|e| Error::parse(format!("JSON parse {endpoint}: {e}")))
    }

    async fn handle_response(&self, endpoint: &str, resp: reqwest::Response) -> Result<String> {
        let status = resp.status();

        match status {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => {
                resp.text().await.map_err(|e| Error::http(e.to_string()))
            }
            _ => Err(Error::upstream(endpoint, status.as_u16())),
        }
    }
}
