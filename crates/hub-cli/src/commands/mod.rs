//! Subcommand implementations.

pub mod auth;
pub mod check;
pub mod get;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use hub_store::{CredentialStore, StoreConfig};

/// Open the credential store, honoring a `--token-path` override.
pub fn open_store(token_path: Option<&Path>) -> Result<CredentialStore> {
    let store = match token_path {
        Some(path) => CredentialStore::new(hub_store::ProcessEnv, StoreConfig::new(path)),
        None => CredentialStore::open_default().context("Failed to locate token file")?,
    };
    debug!(path = %store.config().token_path.display(), "Using token file");
    Ok(store)
}
