//! The sensor entity and its lifecycle transitions.
//!
//! A sensor is created disabled, may be edited (which always disables it
//! again) and toggled between enabled and disabled any number of times.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Entity name used in [`CoreError::NotFound`].
pub const SENSOR_ENTITY: &str = "Sensor";

// ---------------------------------------------------------------------------
// SensorId
// ---------------------------------------------------------------------------

/// Primary key of a sensor. Equal when the wrapped UUIDs are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorId(Uuid);

impl SensorId {
    pub const fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for SensorId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SensorId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| CoreError::Validation(format!("'{s}' is not a valid sensor id")))
    }
}

// ---------------------------------------------------------------------------
// Sensor
// ---------------------------------------------------------------------------

/// Descriptive fields accepted on create and edit. Copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorInput {
    pub name: String,
    pub ip: String,
    pub location: String,
    pub protocol: String,
    pub model: String,
}

/// A registered sensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: SensorId,
    pub name: String,
    pub ip: String,
    pub protocol: String,
    pub location: String,
    pub model: String,
    pub enabled: bool,
}

impl Sensor {
    /// A fresh, disabled sensor.
    pub fn new(id: SensorId, input: SensorInput) -> Self {
        Self {
            id,
            name: input.name,
            ip: input.ip,
            protocol: input.protocol,
            location: input.location,
            model: input.model,
            enabled: false,
        }
    }

    /// Replace every descriptive field and reset monitoring to disabled.
    /// The id is kept.
    pub fn replace_details(self, input: SensorInput) -> Self {
        Self::new(self.id, input)
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }
}
