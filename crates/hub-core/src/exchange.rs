//! Completed HTTP exchanges handed to the validator.

use serde::Deserialize;

/// Message used when a failed response carries no usable description.
///
/// A single space rather than an empty string; callers compare against it to
/// tell "no message" from an explicitly empty description.
pub const BLANK_MESSAGE: &str = " ";

/// Error body returned by the Hub API.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub description: Option<String>,
}

/// Status code and raw body of one request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeOutcome {
    status: u16,
    body: Option<Vec<u8>>,
}

impl ExchangeOutcome {
    /// An outcome with no body.
    pub fn new(status: u16) -> Self {
        Self { status, body: None }
    }

    /// Attach a raw body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a JSON document as the body.
    pub fn with_json(self, body: &serde_json::Value) -> Self {
        self.with_body(body.to_string())
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Check if the status is in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Extract the `description` field from the body.
    ///
    /// Returns [`BLANK_MESSAGE`] when there is no body, the body is not a JSON
    /// object, or `description` is missing or not a string.
    pub fn message(&self) -> String {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_slice::<ErrorBody>(body).ok())
            .and_then(|body| body.description)
            .unwrap_or_else(|| BLANK_MESSAGE.to_string())
    }
}
