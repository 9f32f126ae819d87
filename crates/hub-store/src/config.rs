//! Storage locations for the credential tiers.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use hub_core::{Result, StorageError};

/// Environment variable holding the session-tier token.
pub const DEFAULT_ENV_VAR: &str = "HUB_AUTH_TOKEN";

/// Directory under the home directory holding the durable token.
const TOKEN_DIR: &str = ".activeloop";

/// File name of the durable token.
const TOKEN_FILE: &str = "token";

/// Where each credential tier lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Name of the session-tier environment variable.
    pub env_var: String,
    /// Path of the durable-tier token file.
    pub token_path: PathBuf,
}

impl StoreConfig {
    /// Config with an explicit token path and the default variable name.
    pub fn new(token_path: impl AsRef<Path>) -> Self {
        Self {
            env_var: DEFAULT_ENV_VAR.to_string(),
            token_path: token_path.as_ref().to_path_buf(),
        }
    }

    /// Config rooted at `~/.activeloop/token`.
    pub fn default_paths() -> Result<Self> {
        let dirs = BaseDirs::new().ok_or(StorageError::NoHomeDir)?;
        Ok(Self::new(
            dirs.home_dir().join(TOKEN_DIR).join(TOKEN_FILE),
        ))
    }

    pub fn with_token_path(mut self, token_path: impl AsRef<Path>) -> Self {
        self.token_path = token_path.as_ref().to_path_buf();
        self
    }

    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }
}
