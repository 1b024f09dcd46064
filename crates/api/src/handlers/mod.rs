//! Request handlers.
//!
//! Handlers parse path/query/body input, delegate to the service held in
//! [`crate::state::AppState`], and map errors via [`crate::error::AppError`].

pub mod sensor;
