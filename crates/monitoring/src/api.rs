//! REST client for the monitoring service HTTP endpoints.
//!
//! Wraps enable/disable/detail calls using [`reqwest`] with a bounded
//! connect timeout and a per-read timeout.

use std::time::Duration;

use async_trait::async_trait;
use sensorhub_core::sensor::SensorId;

use crate::error::MonitoringError;
use crate::models::MonitoringStatus;
use crate::MonitoringClient;

/// Time allowed to establish a connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Time allowed between reads once connected.
pub const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the monitoring service.
#[derive(Debug, Clone)]
pub struct MonitoringApi {
    client: reqwest::Client,
    base_url: String,
}

impl MonitoringApi {
    /// Create a client with the standard 3s connect / 5s read timeouts.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:8082`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeouts(base_url, CONNECT_TIMEOUT, READ_TIMEOUT)
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeouts(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn enable_url(&self, id: SensorId) -> String {
        format!("{}/api/sensors/{id}/monitoring/enable", self.base_url)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`MonitoringError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, MonitoringError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MonitoringError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl MonitoringClient for MonitoringApi {
    async fn enable_monitoring(&self, id: SensorId) -> Result<(), MonitoringError> {
        let response = self.client.put(self.enable_url(id)).send().await?;
        Self::ensure_success(response).await?;
        tracing::debug!(sensor_id = %id, "Monitoring enabled");
        Ok(())
    }

    async fn disable_monitoring(&self, id: SensorId) -> Result<(), MonitoringError> {
        let response = self.client.delete(self.enable_url(id)).send().await?;
        Self::ensure_success(response).await?;
        tracing::debug!(sensor_id = %id, "Monitoring disabled");
        Ok(())
    }

    async fn get_detail(&self, id: SensorId) -> Result<MonitoringStatus, MonitoringError> {
        let response = self
            .client
            .get(format!("{}/api/sensors/{id}/monitoring", self.base_url))
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<MonitoringStatus>().await?)
    }
}
