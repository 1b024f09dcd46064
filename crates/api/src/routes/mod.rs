pub mod health;
pub mod sensor;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sensors                                   list, create
/// /sensors/{id}                              get, update, delete
/// /sensors/{id}/enable                       enable (PUT), disable (DELETE)
/// /sensors/{id}/detail                       sensor + monitoring status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/sensors", sensor::router())
}
