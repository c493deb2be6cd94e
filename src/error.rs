// SPDX-License-Identifier: MIT

//! Application error types with classification helpers.
//!
//! Every remote operation funnels into [`AppError`]; the retry wrapper and
//! the auth layer classify errors by inspecting the backend's numeric code
//! and error type string.

/// Application error type for all backend and local operations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Error reported by the backend service (parsed error envelope).
    #[error("Backend error {code} ({kind}): {message}")]
    Api {
        /// HTTP-ish numeric code reported by the service (e.g. 429)
        code: u16,
        /// Machine-readable error type (e.g. "user_invalid_credentials")
        kind: String,
        /// Human-readable message
        message: String,
    },

    /// Transport-level failure (connection, TLS, body decode).
    #[error("Request failed: {0}")]
    Http(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Settings storage error: {0}")]
    Settings(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether this error is a transient rate limit that the retry wrapper
    /// should absorb: numeric code 429 or a "rate limit" message.
    pub fn is_rate_limit(&self) -> bool {
        match self {
            AppError::Api {
                code,
                kind,
                message,
            } => {
                *code == 429
                    || kind.contains("rate_limit")
                    || message.to_lowercase().contains("rate limit")
            }
            _ => false,
        }
    }

    /// Whether this error means "no active session" rather than a real
    /// failure. The backend reports these as missing-scope / unauthorized
    /// errors when an account call is made without a session.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            AppError::Api {
                code,
                kind,
                message,
            } => {
                *code == 401
                    || kind.contains("general_unauthorized")
                    || message.contains("missing scope")
            }
            _ => false,
        }
    }

    /// Machine-readable error type, when the backend supplied one.
    pub fn api_kind(&self) -> Option<&str> {
        match self {
            AppError::Api { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Numeric code, when the backend supplied one.
    pub fn api_code(&self) -> Option<u16> {
        match self {
            AppError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Http(err.to_string())
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
