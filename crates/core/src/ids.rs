//! Source of sensor identifiers.
//!
//! Ids are version 7 UUIDs: a 48-bit Unix millisecond timestamp followed by
//! a counter that is reseeded every millisecond, padded with random bits.
//! One [`IdGenerator`] hands out strictly increasing values, so ids sort by
//! creation time both as bytes and in their hyphenated text form.

use std::sync::Mutex;

use uuid::{ContextV7, Timestamp, Uuid};

use crate::error::CoreError;
use crate::sensor::SensorId;

/// Upper bound on [`IdConfig::precision_bits`] (the width of `rand_a`).
pub const MAX_PRECISION_BITS: u8 = 12;

/// Settings for an [`IdGenerator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdConfig {
    /// Leading counter bits given over to sub-millisecond time. Raising
    /// this keeps ids from several instances closer to wall-clock order.
    pub precision_bits: u8,
}

impl IdConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.precision_bits > MAX_PRECISION_BITS {
            return Err(CoreError::Validation(format!(
                "id precision must be between 0 and {MAX_PRECISION_BITS} bits, got {}",
                self.precision_bits
            )));
        }
        Ok(())
    }
}

/// Thread-safe generator of time-ordered sensor ids.
#[derive(Debug)]
pub struct IdGenerator {
    context: Mutex<ContextV7>,
}

impl IdGenerator {
    pub fn new(config: IdConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let context = ContextV7::new()
            .with_additional_precision_bits(usize::from(config.precision_bits));
        Ok(Self {
            context: Mutex::new(context),
        })
    }

    /// Issue the next id. Counter overflow within a millisecond borrows
    /// from the next one, so ordering holds under bursts.
    pub fn generate(&self) -> SensorId {
        SensorId::from(Uuid::new_v7(Timestamp::now(&self.context)))
    }
}
