use crate::core::{ConfigProvider, FetchOutcome, FetchResult, JsonSource, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};

/// Issues a single GET against a fixed endpoint. No retries, no timeout.
#[derive(Debug, Clone)]
pub struct HttpJsonSource {
    client: Client,
    endpoint: String,
}

impl HttpJsonSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl JsonSource for HttpJsonSource {
    async fn fetch_json(&self) -> Result<FetchOutcome> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            return Ok(FetchOutcome::Failure {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        Ok(FetchOutcome::Success(FetchResult::new(body)))
    }
}
