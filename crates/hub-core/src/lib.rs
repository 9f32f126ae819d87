//! hub-core - Credential types, error taxonomy and response validation.
//!
//! Callers fetch an authorization value from a credential store before sending
//! a request, then hand the completed exchange to a [`ResponseValidator`].
//!
//! # Example
//!
//! ```
//! use hub_core::{ErrorKind, ExchangeOutcome, ResponseValidator};
//!
//! let outcome = ExchangeOutcome::new(429);
//! let err = ResponseValidator::new().validate(&outcome).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OverLimit);
//! ```

pub mod error;
pub mod exchange;
pub mod tokens;
pub mod traits;
pub mod validator;

pub use error::{Error, ErrorKind, StorageError};
pub use exchange::{BLANK_MESSAGE, ExchangeOutcome};
pub use tokens::{AuthToken, BEARER_PREFIX};
pub use traits::SessionEnv;
pub use validator::{BadRequestPolicy, ResponseValidator, Verdict, validate};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
