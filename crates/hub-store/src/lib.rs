//! hub-store - Credential storage for the Hub API client.
//!
//! A [`CredentialStore`] keeps one token in two places: an environment
//! variable for the current process and a file that survives restarts.
//!
//! ```no_run
//! use hub_core::AuthToken;
//! use hub_store::CredentialStore;
//!
//! # fn example() -> hub_core::Result<()> {
//! let store = CredentialStore::open_default()?;
//! store.store(&AuthToken::new("my-api-token"))?;
//! let header = store.authorization_header()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod env;
pub mod store;

pub use config::{DEFAULT_ENV_VAR, StoreConfig};
pub use env::{MemoryEnv, ProcessEnv};
pub use store::{CredentialState, CredentialStore};
