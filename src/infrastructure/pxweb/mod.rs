use crate::domain::dataset::DatasetPayload;
use crate::domain::error::{AppError, Result};
use crate::domain::query::QueryPayload;
use async_trait::async_trait;
use reqwest::Client;

/// Seam between the pipeline and the statistics service, so tests can feed
/// canned datasets instead of going over the network.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch_dataset(&self, url: &str, query: &QueryPayload) -> Result<DatasetPayload>;
}

/// Posts PxWeb query bodies and decodes the JSON-Stat2 response.
pub struct PxWebClient {
    client: Client,
}

impl PxWebClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Default for PxWebClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatasetSource for PxWebClient {
    async fn fetch_dataset(&self, url: &str, query: &QueryPayload) -> Result<DatasetPayload> {
        tracing::info!(url, "posting PxWeb query");

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(query)
            .send()
            .await
            .map_err(|e| AppError::LoadError(format!("POST {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(AppError::LoadError(format!(
                "POST {} failed: {}",
                url,
                response.status()
            )));
        }

        response
            .json::<DatasetPayload>()
            .await
            .map_err(|e| AppError::FormatError(format!("Unexpected JSON-Stat2 response: {}", e)))
    }
}
