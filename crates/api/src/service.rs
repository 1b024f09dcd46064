//! Sensor lifecycle orchestration.
//!
//! Every mutation requires the sensor to exist. Enable, disable and delete
//! persist the local change first and then notify the monitoring service;
//! a failed notification is returned to the caller but the local change
//! stays in place.

use std::sync::Arc;

use sensorhub_core::error::CoreError;
use sensorhub_core::pagination::{Page, PageRequest};
use sensorhub_core::sensor::{Sensor, SensorId, SensorInput, SENSOR_ENTITY};
use sensorhub_core::ids::IdGenerator;
use sensorhub_db::store::SensorStore;
use sensorhub_monitoring::{MonitoringClient, MonitoringStatus};
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// A sensor together with what the monitoring service reports for it.
#[derive(Debug, Clone, Serialize)]
pub struct SensorDetail {
    pub sensor: Sensor,
    pub monitoring: MonitoringStatus,
}

#[derive(Clone)]
pub struct SensorService {
    store: Arc<dyn SensorStore>,
    monitoring: Arc<dyn MonitoringClient>,
    ids: Arc<IdGenerator>,
}

impl SensorService {
    pub fn new(
        store: Arc<dyn SensorStore>,
        monitoring: Arc<dyn MonitoringClient>,
        ids: Arc<IdGenerator>,
    ) -> Self {
        Self {
            store,
            monitoring,
            ids,
        }
    }

    pub async fn list(&self, page: &PageRequest) -> AppResult<Page<Sensor>> {
        Ok(self.store.find_page(page).await?)
    }

    pub async fn get(&self, id: SensorId) -> AppResult<Sensor> {
        self.find_existing(id).await
    }

    /// Register a new, disabled sensor under a fresh id.
    pub async fn create(&self, input: SensorInput) -> AppResult<Sensor> {
        let sensor = Sensor::new(self.ids.generate(), input);
        let sensor = self.store.save(&sensor).await?;
        tracing::info!(sensor_id = %sensor.id, name = %sensor.name, "Sensor created");
        Ok(sensor)
    }

    /// Replace the descriptive fields. Monitoring is reset to disabled.
    pub async fn edit(&self, id: SensorId, input: SensorInput) -> AppResult<Sensor> {
        let existing = self.find_existing(id).await?;
        let sensor = self.store.save(&existing.replace_details(input)).await?;
        tracing::info!(sensor_id = %id, "Sensor updated");
        Ok(sensor)
    }

    pub async fn delete(&self, id: SensorId) -> AppResult<()> {
        self.find_existing(id).await?;
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(sensor_id = %id, "Sensor deleted");

        self.monitoring.disable_monitoring(id).await?;
        Ok(())
    }

    pub async fn enable(&self, id: SensorId) -> AppResult<()> {
        let mut sensor = self.find_existing(id).await?;
        sensor.enable();
        self.store.save(&sensor).await?;
        tracing::info!(sensor_id = %id, "Sensor enabled");

        self.monitoring.enable_monitoring(id).await?;
        Ok(())
    }

    pub async fn disable(&self, id: SensorId) -> AppResult<()> {
        let mut sensor = self.find_existing(id).await?;
        sensor.disable();
        self.store.save(&sensor).await?;
        tracing::info!(sensor_id = %id, "Sensor disabled");

        self.monitoring.disable_monitoring(id).await?;
        Ok(())
    }

    /// The sensor plus its monitoring status.
    pub async fn detail(&self, id: SensorId) -> AppResult<SensorDetail> {
        let sensor = self.find_existing(id).await?;
        let monitoring = self.monitoring.get_detail(id).await?;
        Ok(SensorDetail { sensor, monitoring })
    }

    async fn find_existing(&self, id: SensorId) -> AppResult<Sensor> {
        self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: SensorId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: SENSOR_ENTITY,
        id: id.to_string(),
    })
}
