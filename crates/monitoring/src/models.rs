use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sensorhub_core::sensor::SensorId;

/// Monitoring state reported by the monitoring service for one sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringStatus {
    pub id: SensorId,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub last_temperature: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
