//! Client for the external monitoring service.
//!
//! The registry tells the monitoring service to start or stop watching a
//! sensor and can read back its monitoring status. Every failure, whether
//! transport-level or a non-2xx answer, surfaces as a [`MonitoringError`].

pub mod api;
pub mod error;
pub mod models;

use async_trait::async_trait;
use sensorhub_core::sensor::SensorId;

pub use api::MonitoringApi;
pub use error::{GatewayFailure, MonitoringError, TransportKind};
pub use models::MonitoringStatus;

/// Operations the registry needs from the monitoring service.
#[async_trait]
pub trait MonitoringClient: Send + Sync {
    /// `PUT /api/sensors/{id}/monitoring/enable`
    async fn enable_monitoring(&self, id: SensorId) -> Result<(), MonitoringError>;

    /// `DELETE /api/sensors/{id}/monitoring/enable`
    async fn disable_monitoring(&self, id: SensorId) -> Result<(), MonitoringError>;

    /// `GET /api/sensors/{id}/monitoring`
    async fn get_detail(&self, id: SensorId) -> Result<MonitoringStatus, MonitoringError>;
}
