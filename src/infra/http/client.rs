use std::time::Duration;

use anyhow::{Context, Result};
use futures_util::future::BoxFuture;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::usecase::ports::api::{FetchError, RegistryApi};

/// Registry backend reached over plain HTTP GETs.
pub struct HttpRegistryApi {
    client: Client,
    base_url: String,
}

impl HttpRegistryApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str, query: &[(String, String)]) -> Result<String, FetchError> {
        let query = serde_urlencoded::to_string(query)
            .map_err(|err| FetchError::Shape(format!("failed to serialize params: {err}")))?;
        let url = if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        };
        Ok(url)
    }
}

impl RegistryApi for HttpRegistryApi {
    fn get_json<'a>(
        &'a self,
        path: &'a str,
        query: &'a [(String, String)],
    ) -> BoxFuture<'a, Result<Value, FetchError>> {
        Box::pin(async move {
            let url = self.url_for(path, query)?;
            debug!(%url, "GET");
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|err| FetchError::Transport(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                debug!(%url, %status, "non-success status");
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response
                .text()
                .await
                .map_err(|err| FetchError::Transport(err.to_string()))?;
            Ok(serde_json::from_str(&body)?)
        })
    }
}
