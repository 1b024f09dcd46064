#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sensorhub_core::sensor::{Sensor, SensorId, SensorInput};
use sensorhub_core::ids::{IdConfig, IdGenerator};
use sensorhub_db::store::{MemorySensorStore, SensorStore};
use sensorhub_monitoring::{MonitoringClient, MonitoringError, MonitoringStatus, TransportKind};
use tower::ServiceExt;

use sensorhub_api::config::ServerConfig;
use sensorhub_api::router::build_app_router;
use sensorhub_api::service::SensorService;
use sensorhub_api::state::AppState;

// ---------------------------------------------------------------------------
// Monitoring double
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitoringCall {
    Enable(SensorId),
    Disable(SensorId),
    Detail(SensorId),
}

/// How the recording client answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    Succeed,
    Unreachable,
    ErrorStatus,
}

/// Records every call and answers according to its [`Behaviour`].
#[derive(Debug)]
pub struct RecordingMonitoring {
    calls: Mutex<Vec<MonitoringCall>>,
    behaviour: Behaviour,
}

impl RecordingMonitoring {
    pub fn new(behaviour: Behaviour) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            behaviour,
        }
    }

    pub fn calls(&self) -> Vec<MonitoringCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: MonitoringCall) -> Result<(), MonitoringError> {
        self.calls.lock().unwrap().push(call);
        match self.behaviour {
            Behaviour::Succeed => Ok(()),
            Behaviour::Unreachable => Err(MonitoringError::Transport {
                kind: TransportKind::ConnectionRefused,
                message: "Connection refused".into(),
            }),
            Behaviour::ErrorStatus => Err(MonitoringError::Status {
                status: 500,
                body: String::new(),
            }),
        }
    }
}

#[async_trait]
impl MonitoringClient for RecordingMonitoring {
    async fn enable_monitoring(&self, id: SensorId) -> Result<(), MonitoringError> {
        self.record(MonitoringCall::Enable(id))
    }

    async fn disable_monitoring(&self, id: SensorId) -> Result<(), MonitoringError> {
        self.record(MonitoringCall::Disable(id))
    }

    async fn get_detail(&self, id: SensorId) -> Result<MonitoringStatus, MonitoringError> {
        self.record(MonitoringCall::Detail(id))?;
        Ok(MonitoringStatus {
            id,
            enabled: true,
            last_temperature: Some(22.5),
            updated_at: None,
        })
    }
}

// ---------------------------------------------------------------------------
// App harness
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        monitoring_url: "http://localhost:8082".to_string(),
        ids: IdConfig::default(),
    }
}

/// Everything a test needs to drive the app and inspect its collaborators.
pub struct TestApp {
    pub store: Arc<MemorySensorStore>,
    pub monitoring: Arc<RecordingMonitoring>,
    pub ids: Arc<IdGenerator>,
    pub service: SensorService,
    state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_behaviour(Behaviour::Succeed)
    }

    pub fn with_behaviour(behaviour: Behaviour) -> Self {
        let config = test_config();
        let store = Arc::new(MemorySensorStore::new());
        let monitoring = Arc::new(RecordingMonitoring::new(behaviour));
        let ids = Arc::new(IdGenerator::new(config.ids).unwrap());
        let service = SensorService::new(store.clone(), monitoring.clone(), ids.clone());

        let state = AppState {
            config: Arc::new(config),
            store: store.clone(),
            sensors: service.clone(),
        };

        Self {
            store,
            monitoring,
            ids,
            service,
            state,
        }
    }

    /// The full application router, built the same way `main.rs` builds it.
    pub fn router(&self) -> Router {
        build_app_router(self.state.clone(), &test_config())
    }

    /// Insert a sensor directly into the store, bypassing the API.
    pub async fn seed(&self, enabled: bool) -> Sensor {
        let mut sensor = Sensor::new(self.ids.generate(), sample_input());
        if enabled {
            sensor.enable();
        }
        self.store.save(&sensor).await.unwrap()
    }

    pub async fn stored(&self, id: SensorId) -> Option<Sensor> {
        self.store.find_by_id(id).await.unwrap()
    }

    /// An id that was generated but never stored.
    pub fn unused_id(&self) -> SensorId {
        self.ids.generate()
    }
}

pub fn sample_input() -> SensorInput {
    SensorInput {
        name: "Sensor 1".to_string(),
        ip: "192.168.1.100".to_string(),
        location: "Sala A".to_string(),
        protocol: "MQTT".to_string(),
        model: "S-100".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, "GET", uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, "PUT", uri, Some(body)).await
}

pub async fn put(app: Router, uri: &str) -> Response<Body> {
    send(app, "PUT", uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, "DELETE", uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
