use std::sync::Arc;

use sensorhub_db::store::SensorStore;

use crate::config::ServerConfig;
use crate::service::SensorService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Sensor record store, also probed by the health check.
    pub store: Arc<dyn SensorStore>,
    /// Sensor lifecycle operations.
    pub sensors: SensorService,
}
