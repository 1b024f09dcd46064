use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use sensorhub_core::error::CoreError;
use sensorhub_monitoring::{GatewayFailure, MonitoringError};
use serde::Serialize;

/// Problem `type` tags. Stable so clients can branch on them.
pub const TYPE_NOT_FOUND: &str = "/errors/not-found";
pub const TYPE_BAD_REQUEST: &str = "/errors/bad-request";
pub const TYPE_INTERNAL: &str = "/errors/internal";
pub const TYPE_GATEWAY_TIMEOUT: &str = "/errors/gateway-timeout";
pub const TYPE_BAD_GATEWAY: &str = "/errors/bad-gateway";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, database and monitoring-client
/// failures, and adds a variant for rejected request input. Implements
/// [`IntoResponse`] to produce `application/problem+json` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sensorhub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The monitoring service could not be reached or answered with an error.
    #[error(transparent)]
    Monitoring(#[from] MonitoringError),

    /// A request body or query string that could not be read as expected.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// RFC 7807 problem body.
#[derive(Debug, Serialize)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub detail: String,
}

impl ProblemDetail {
    fn new(status: StatusCode, kind: &'static str, detail: String) -> Self {
        Self {
            kind,
            title: status.canonical_reason().unwrap_or("Error"),
            status: status.as_u16(),
            detail,
        }
    }

    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            TYPE_INTERNAL,
            "An internal error occurred".to_string(),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let problem = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => ProblemDetail::new(
                    StatusCode::NOT_FOUND,
                    TYPE_NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    ProblemDetail::new(StatusCode::BAD_REQUEST, TYPE_BAD_REQUEST, msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Monitoring service ---
            AppError::Monitoring(err) => classify_monitoring_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                ProblemDetail::new(StatusCode::BAD_REQUEST, TYPE_BAD_REQUEST, msg.clone())
            }
        };

        let status =
            StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, axum::Json(problem)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Map a monitoring failure to a gateway problem.
///
/// Both families answer 504; the `type` tag tells an unreachable service
/// (`gateway-timeout`) apart from one that answered badly (`bad-gateway`).
fn classify_monitoring_error(err: &MonitoringError) -> ProblemDetail {
    tracing::error!(error = %err, "Monitoring service call failed");
    let (kind, title) = match err.failure() {
        GatewayFailure::Timeout => (TYPE_GATEWAY_TIMEOUT, "Gateway Timeout"),
        GatewayFailure::BadGateway => (TYPE_BAD_GATEWAY, "Bad Gateway"),
    };
    ProblemDetail {
        kind,
        title,
        status: StatusCode::GATEWAY_TIMEOUT.as_u16(),
        detail: err.to_string(),
    }
}

/// Classify a sqlx error into a problem body.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> ProblemDetail {
    match err {
        sqlx::Error::RowNotFound => ProblemDetail::new(
            StatusCode::NOT_FOUND,
            TYPE_NOT_FOUND,
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            ProblemDetail::internal()
        }
    }
}
