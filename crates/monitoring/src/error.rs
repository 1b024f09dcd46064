//! Monitoring client errors and their gateway classification.

use std::fmt;

/// Low-level reason a request never produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Connect or read deadline exceeded.
    Timeout,
    /// The TCP connection could not be established.
    ConnectionRefused,
    /// The connection dropped before a complete response arrived.
    ChannelClosed,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransportKind::Timeout => "timed out",
            TransportKind::ConnectionRefused => "connection refused",
            TransportKind::ChannelClosed => "connection closed",
        })
    }
}

/// How a monitoring failure is reported to the registry's own callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayFailure {
    /// The monitoring service could not be reached in time.
    Timeout,
    /// The monitoring service answered, but not successfully.
    BadGateway,
}

#[derive(Debug, thiserror::Error)]
pub enum MonitoringError {
    /// The HTTP exchange failed below the status-line level.
    #[error("Monitoring service unreachable ({kind}): {message}")]
    Transport { kind: TransportKind, message: String },

    /// The monitoring service returned a non-2xx status code.
    #[error("Monitoring service responded with HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response whose body could not be decoded.
    #[error("Invalid monitoring service response: {0}")]
    Decode(String),
}

impl MonitoringError {
    pub fn failure(&self) -> GatewayFailure {
        match self {
            MonitoringError::Transport { .. } => GatewayFailure::Timeout,
            MonitoringError::Status { .. } | MonitoringError::Decode(_) => {
                GatewayFailure::BadGateway
            }
        }
    }
}

impl From<reqwest::Error> for MonitoringError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return MonitoringError::Decode(err.to_string());
        }
        if let Some(status) = err.status() {
            return MonitoringError::Status {
                status: status.as_u16(),
                body: String::new(),
            };
        }

        let kind = if err.is_timeout() {
            TransportKind::Timeout
        } else if err.is_connect() {
            TransportKind::ConnectionRefused
        } else {
            TransportKind::ChannelClosed
        };
        MonitoringError::Transport {
            kind,
            message: err.to_string(),
        }
    }
}
