//! Route definitions for sensors.

use axum::routing::get;
use axum::Router;

use crate::handlers::sensor;
use crate::state::AppState;

/// Sensor routes mounted at `/api/sensors`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// PUT    /{id}/enable       -> enable
/// DELETE /{id}/enable       -> disable
/// GET    /{id}/detail       -> detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sensor::list).post(sensor::create))
        .route(
            "/{id}",
            get(sensor::get_by_id)
                .put(sensor::update)
                .delete(sensor::delete),
        )
        .route(
            "/{id}/enable",
            axum::routing::put(sensor::enable).delete(sensor::disable),
        )
        .route("/{id}/detail", get(sensor::detail))
}
