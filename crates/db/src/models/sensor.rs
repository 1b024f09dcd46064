//! Row struct for the `sensors` table.

use sensorhub_core::sensor::{Sensor, SensorId};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `sensors` table.
#[derive(Debug, Clone, FromRow)]
pub struct SensorRow {
    #[sqlx(try_from = "Uuid")]
    pub id: SensorId,
    pub name: String,
    pub ip: String,
    pub protocol: String,
    pub location: String,
    pub model: String,
    pub enabled: bool,
}

impl From<SensorRow> for Sensor {
    fn from(row: SensorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            ip: row.ip,
            protocol: row.protocol,
            location: row.location,
            model: row.model,
            enabled: row.enabled,
        }
    }
}
