//! Error types for dx-client.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for dx-client.
#[derive(Debug, Error)]
pub enum Error {
    // ── Arguments / configuration ────────────────────────────────────────────
    /// The `resource` argument was empty.
    #[error("resource argument is required")]
    MissingResource,

    /// No security context is set - provide one before making requests.
    #[error("security context must be set - provide a token via builder, credentials file, or DX_SECURITY_CONTEXT")]
    MissingSecurityContext,

    /// The security context string was not valid JSON.
    #[error("invalid security context JSON: {0}")]
    InvalidSecurityContext(#[source] serde_json::Error),

    /// Credentials file I/O error.
    #[error("credentials I/O error at {path}: {message}")]
    CredentialsIo {
        /// Path that caused the error.
        path: PathBuf,
        /// Error description.
        message: String,
    },

    /// Other configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    // ── API ──────────────────────────────────────────────────────────────────
    /// API server returned a non-200 response.
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    // ── Infrastructure ───────────────────────────────────────────────────────
    /// Network/HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the HTTP status code for API errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this error indicates missing or rejected credentials.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Error::MissingSecurityContext
                | Error::InvalidSecurityContext(_)
                | Error::Api { status: 401, .. }
                | Error::Api { status: 403, .. }
        )
    }

    /// Creates a credentials I/O error.
    #[must_use]
    pub fn credentials_io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::CredentialsIo {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Convenience type alias.
pub type Result<T> = std::result::Result<T, Error>;
