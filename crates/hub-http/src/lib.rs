//! hub-http - reqwest glue for the Hub client core.
//!
//! Attaches the stored credential to outgoing requests and runs completed
//! responses through the [`hub_core::ResponseValidator`]. Retries and request
//! construction stay with the caller.

pub mod client;
pub mod error;

pub use client::{HubClient, authorize, read_outcome};
pub use error::HttpError;
