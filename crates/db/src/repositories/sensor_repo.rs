//! Repository for the `sensors` table.
//!
//! Plain SQL over a [`PgPool`]; the caller owns lifecycle rules such as
//! resetting `enabled` on edit.

use sensorhub_core::pagination::PageRequest;
use sensorhub_core::sensor::{Sensor, SensorId};
use sqlx::PgPool;

use crate::models::sensor::SensorRow;

/// Column list for `sensors` queries.
const COLUMNS: &str = "id, name, ip, protocol, location, model, enabled";

/// Provides data access for sensors.
pub struct SensorRepo;

impl SensorRepo {
    /// Find a sensor by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: SensorId) -> Result<Option<Sensor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sensors WHERE id = $1");
        let row = sqlx::query_as::<_, SensorRow>(&query)
            .bind(id.as_uuid())
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Sensor::from))
    }

    /// List one page of sensors in id (creation) order.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Sensor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sensors \
             ORDER BY id \
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, SensorRow>(&query)
            .bind(page.size())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Sensor::from).collect())
    }

    /// Total number of sensors.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM sensors")
            .fetch_one(pool)
            .await
    }

    /// Insert a sensor, or overwrite every column of an existing one.
    pub async fn save(pool: &PgPool, sensor: &Sensor) -> Result<Sensor, sqlx::Error> {
        let query = format!(
            "INSERT INTO sensors (id, name, ip, protocol, location, model, enabled) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 ip = EXCLUDED.ip, \
                 protocol = EXCLUDED.protocol, \
                 location = EXCLUDED.location, \
                 model = EXCLUDED.model, \
                 enabled = EXCLUDED.enabled, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SensorRow>(&query)
            .bind(sensor.id.as_uuid())
            .bind(&sensor.name)
            .bind(&sensor.ip)
            .bind(&sensor.protocol)
            .bind(&sensor.location)
            .bind(&sensor.model)
            .bind(sensor.enabled)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Delete a sensor by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: SensorId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sensors WHERE id = $1")
            .bind(id.as_uuid())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
