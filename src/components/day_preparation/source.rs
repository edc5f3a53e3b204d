use super::models::DayPreparation;
use crate::config::Config;
use crate::error::{request_error, BrodyResult};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Something that can produce a day preparation
#[async_trait]
pub trait DayPreparationSource: Send + Sync {
    /// Fetch the day preparation; every failure is reported as a request error
    async fn fetch(&self) -> BrodyResult<DayPreparation>;
}

/// Source backed by the planning endpoint over HTTP
#[derive(Clone)]
pub struct HttpDayPreparationSource {
    config: Arc<RwLock<Config>>,
    client: Client,
}

impl HttpDayPreparationSource {
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl DayPreparationSource for HttpDayPreparationSource {
    async fn fetch(&self) -> BrodyResult<DayPreparation> {
        let (url, timeout) = {
            let config_read = self.config.read().await;
            (config_read.endpoint_url(), config_read.request_timeout())
        };
        let url = url.map_err(|e| request_error(&e.to_string()))?;

        debug!("GET request to: {}", url);

        let mut request = self.client.get(url.clone());
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| request_error(&format!("Failed to reach {}: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(request_error(&format!(
                "Failed to prepare day: HTTP {} - {}",
                status, error_body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| request_error(&format!("Failed to read response body: {}", e)))?;

        serde_json::from_str::<DayPreparation>(&body)
            .map_err(|e| request_error(&format!("Failed to parse day preparation: {}", e)))
    }
}
