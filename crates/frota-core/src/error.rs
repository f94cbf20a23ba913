// ── Core error types ──
//
// User-facing errors from frota-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<frota_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to server at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Invalid credentials: {message}")]
    InvalidCredentials { message: String },

    #[error("Not authenticated -- run login first")]
    NotAuthenticated,

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Operation failed: {message}")]
    OperationFailed { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Returns `true` when the session token was rejected and the user
    /// has to authenticate again.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated | Self::InvalidCredentials { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<frota_api::Error> for CoreError {
    fn from(err: frota_api::Error) -> Self {
        match err {
            frota_api::Error::Authentication { message } => {
                CoreError::InvalidCredentials { message }
            }
            frota_api::Error::Unauthorized => CoreError::NotAuthenticated,
            frota_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else if e.status().map(|s| s.as_u16()) == Some(404) {
                    CoreError::NotFound {
                        entity_type: "resource".into(),
                        identifier: e.url().map(|u| u.path().to_string()).unwrap_or_default(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            frota_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            frota_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            frota_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            frota_api::Error::Api { message, status } => match status {
                404 => CoreError::NotFound {
                    entity_type: "resource".into(),
                    identifier: message,
                },
                400 | 422 => CoreError::ValidationFailed { message },
                _ => CoreError::Api {
                    message,
                    status: Some(status),
                },
            },
            frota_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_becomes_not_authenticated() {
        let err = CoreError::from(frota_api::Error::Unauthorized);
        assert!(matches!(err, CoreError::NotAuthenticated));
        assert!(err.is_auth());
    }

    #[test]
    fn backend_404_becomes_not_found() {
        let err = CoreError::from(frota_api::Error::Api {
            message: "Vehicle not found".into(),
            status: 404,
        });
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn backend_400_becomes_validation() {
        let err = CoreError::from(frota_api::Error::Api {
            message: "year out of range".into(),
            status: 400,
        });
        assert!(matches!(err, CoreError::ValidationFailed { .. }));
    }
}
