//! Bearer token type.

use std::fmt;

/// Scheme label prepended to raw tokens read from durable storage.
pub const BEARER_PREFIX: &str = "Bearer ";

/// An already-issued API token.
///
/// The token is opaque: it is never parsed, validated or inspected.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Create a new token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token value.
    ///
    /// # Security
    ///
    /// Use only when persisting the token or building a header.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token formatted as a bearer authorization value.
    pub fn bearer(&self) -> String {
        format!("{}{}", BEARER_PREFIX, self.0)
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AuthToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

// Hide token value in Debug output
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}
