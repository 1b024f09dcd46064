//! Domain building blocks for the sensor registry.
//!
//! Pure types with no I/O: the identifier source, the sensor entity
//! and its lifecycle transitions, pagination, and the shared error type.

pub mod error;
pub mod ids;
pub mod pagination;
pub mod sensor;
