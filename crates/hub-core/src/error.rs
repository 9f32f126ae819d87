//! Error types for the Hub client core.
//!
//! [`Error`] is a closed taxonomy: one variant per failure signal a caller can
//! branch on after validating a response, plus [`Error::Storage`] for failures
//! persisting or reading the credential.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Fixed message carried by [`Error::Server`].
pub const SERVER_MAINTENANCE_MESSAGE: &str = "Server under maintenance, try again later.";

/// The unified error type for Hub client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The server rejected the request as malformed (400).
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// The credential was missing, expired or invalid (401).
    #[error("authentication failed")]
    Authentication,

    /// The credential is valid but lacks permission (403).
    #[error("not authorized")]
    Authorization,

    /// The requested resource does not exist (404).
    #[error("{}", ResourceNotFoundDisplay(message.as_deref()))]
    ResourceNotFound { message: Option<String> },

    /// The resource is locked (423).
    #[error("resource locked")]
    Locked,

    /// Request quota exceeded (429).
    #[error("over limit")]
    OverLimit,

    /// Upstream gateway failure (502).
    #[error("bad gateway")]
    BadGateway,

    /// Upstream gateway timed out (504).
    #[error("gateway timeout")]
    GatewayTimeout,

    /// Any other 5xx status.
    #[error("server error: {message}")]
    Server { message: String },

    /// A status outside every known case.
    #[error("{message}")]
    UnexpectedStatusCode { status: u16, message: String },

    /// The credential could not be persisted or read.
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

struct ResourceNotFoundDisplay<'a>(Option<&'a str>);

impl fmt::Display for ResourceNotFoundDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(message) => write!(f, "resource not found: {}", message),
            None => write!(f, "resource not found"),
        }
    }
}

/// Discriminant of [`Error`] for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    Authentication,
    Authorization,
    ResourceNotFound,
    Locked,
    OverLimit,
    BadGateway,
    GatewayTimeout,
    Server,
    UnexpectedStatusCode,
    StorageFailure,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BadRequest { .. } => ErrorKind::BadRequest,
            Error::Authentication => ErrorKind::Authentication,
            Error::Authorization => ErrorKind::Authorization,
            Error::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
            Error::Locked => ErrorKind::Locked,
            Error::OverLimit => ErrorKind::OverLimit,
            Error::BadGateway => ErrorKind::BadGateway,
            Error::GatewayTimeout => ErrorKind::GatewayTimeout,
            Error::Server { .. } => ErrorKind::Server,
            Error::UnexpectedStatusCode { .. } => ErrorKind::UnexpectedStatusCode,
            Error::Storage(_) => ErrorKind::StorageFailure,
        }
    }

    /// Check if this error means the stored credential is unusable.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication | Error::Authorization)
    }

    /// Returns the server-supplied or fixed message, if this error carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::BadRequest { message }
            | Error::Server { message }
            | Error::UnexpectedStatusCode { message, .. } => Some(message),
            Error::ResourceNotFound { message } => message.as_deref(),
            _ => None,
        }
    }
}

/// Failures of the credential storage tiers.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No home directory to anchor the default token path.
    #[error("could not determine home directory")]
    NoHomeDir,

    /// The session tier cannot hold this variable name or value.
    #[error("cannot set session variable {name:?}: {reason}")]
    InvalidSessionEntry { name: String, reason: &'static str },

    /// The token file's parent directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The token file could not be written.
    #[error("failed to write token file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The token file exists but could not be read.
    #[error("failed to read token file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The token file could not be removed.
    #[error("failed to remove token file {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
