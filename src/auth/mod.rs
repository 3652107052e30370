//! Security context: the credential bundle authenticating API requests.

pub mod credentials;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Credential bundle used to authenticate API requests.
///
/// Rendered into the `Authorization` header as `"{type} {token}"` on every
/// request. Deserializes from the JSON shape the platform hands out:
///
/// ```json
/// {"auth_token_type": "Bearer", "auth_token": "abc123"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityContext {
    /// Token type, normally `Bearer`.
    pub auth_token_type: String,
    /// The token value itself.
    pub auth_token: String,
}

impl SecurityContext {
    /// Create a security context from explicit parts.
    pub fn new(auth_token_type: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            auth_token_type: auth_token_type.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Create a `Bearer` security context from a token.
    pub fn bearer(auth_token: impl Into<String>) -> Self {
        Self::new("Bearer", auth_token)
    }

    /// Parse a security context from its JSON encoding.
    ///
    /// Malformed JSON fails here, at configuration time, rather than at
    /// request time.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::InvalidSecurityContext)
    }

    /// The `Authorization` header value, `"{type} {token}"`.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.auth_token_type, self.auth_token)
    }
}
