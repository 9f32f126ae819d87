//! Errors from the reqwest integration.

use thiserror::Error;

/// Failures when sending a request through [`crate::HubClient`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// The response was classified as a failure, or the credential could
    /// not be read.
    #[error(transparent)]
    Hub(#[from] hub_core::Error),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The stored credential contains characters not allowed in a header.
    #[error("stored credential is not a valid header value")]
    InvalidCredential(#[from] reqwest::header::InvalidHeaderValue),
}

impl HttpError {
    /// Returns the taxonomy error, if the failure came from validation or
    /// storage.
    pub fn as_hub(&self) -> Option<&hub_core::Error> {
        match self {
            HttpError::Hub(err) => Some(err),
            _ => None,
        }
    }
}
