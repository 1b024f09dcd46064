//! Record-store seam for sensors.
//!
//! [`SensorStore`] is the narrow interface the service layer needs: lookup,
//! one paginated query, save and delete. [`PgSensorStore`] backs it with
//! Postgres; [`MemorySensorStore`] keeps everything in a map and is used by
//! tests and local runs without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sensorhub_core::pagination::{Page, PageRequest};
use sensorhub_core::sensor::{Sensor, SensorId};
use tokio::sync::RwLock;

use crate::repositories::SensorRepo;
use crate::DbPool;

#[async_trait]
pub trait SensorStore: Send + Sync {
    async fn find_by_id(&self, id: SensorId) -> Result<Option<Sensor>, sqlx::Error>;

    async fn find_page(&self, page: &PageRequest) -> Result<Page<Sensor>, sqlx::Error>;

    /// Persist the sensor (insert or full overwrite) and return what was stored.
    async fn save(&self, sensor: &Sensor) -> Result<Sensor, sqlx::Error>;

    /// Returns `true` if a sensor was removed.
    async fn delete(&self, id: SensorId) -> Result<bool, sqlx::Error>;

    /// Cheap reachability probe for health checks.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

// ---------------------------------------------------------------------------
// Postgres
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PgSensorStore {
    pool: DbPool,
}

impl PgSensorStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SensorStore for PgSensorStore {
    async fn find_by_id(&self, id: SensorId) -> Result<Option<Sensor>, sqlx::Error> {
        SensorRepo::find_by_id(&self.pool, id).await
    }

    async fn find_page(&self, page: &PageRequest) -> Result<Page<Sensor>, sqlx::Error> {
        let content = SensorRepo::list(&self.pool, page).await?;
        let total = SensorRepo::count(&self.pool).await?;
        Ok(Page::new(content, page, total))
    }

    async fn save(&self, sensor: &Sensor) -> Result<Sensor, sqlx::Error> {
        SensorRepo::save(&self.pool, sensor).await
    }

    async fn delete(&self, id: SensorId) -> Result<bool, sqlx::Error> {
        SensorRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Map-backed store ordered by id, which is creation order for v7 UUIDs.
#[derive(Debug, Default)]
pub struct MemorySensorStore {
    sensors: RwLock<BTreeMap<SensorId, Sensor>>,
}

impl MemorySensorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sensors.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sensors.read().await.is_empty()
    }
}

#[async_trait]
impl SensorStore for MemorySensorStore {
    async fn find_by_id(&self, id: SensorId) -> Result<Option<Sensor>, sqlx::Error> {
        Ok(self.sensors.read().await.get(&id).cloned())
    }

    async fn find_page(&self, page: &PageRequest) -> Result<Page<Sensor>, sqlx::Error> {
        let sensors = self.sensors.read().await;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(page.size()).unwrap_or(usize::MAX);
        let content = sensors.values().skip(offset).take(size).cloned().collect();
        Ok(Page::new(content, page, sensors.len() as i64))
    }

    async fn save(&self, sensor: &Sensor) -> Result<Sensor, sqlx::Error> {
        self.sensors.write().await.insert(sensor.id, sensor.clone());
        Ok(sensor.clone())
    }

    async fn delete(&self, id: SensorId) -> Result<bool, sqlx::Error> {
        Ok(self.sensors.write().await.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
