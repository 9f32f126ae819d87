//! Two-tier credential storage.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, instrument};

use hub_core::{AuthToken, BEARER_PREFIX, Result, SessionEnv, StorageError};

use crate::config::StoreConfig;
use crate::env::ProcessEnv;

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// Which tiers currently hold a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialState {
    /// Neither tier holds a token.
    Absent,
    /// Only the session tier holds a token.
    PresentSessionOnly,
    /// The durable tier holds a token; the session tier may as well.
    PresentDurable,
}

/// Persists one API token across a session tier and a durable file tier.
///
/// Reads prefer the session tier. Its value is returned verbatim, on the
/// assumption that whoever set it already formatted it as a header value.
/// The durable tier stores the raw token and is prefixed with `"Bearer "` on
/// read.
///
/// Anything occupying the token path counts as a durable token. A directory
/// or unreadable file there is reported as a storage failure rather than
/// skipped.
///
/// No file locking is performed. Concurrent writers, in this process or
/// another sharing the path, may interleave.
pub struct CredentialStore<E = ProcessEnv> {
    env: E,
    config: StoreConfig,
}

impl CredentialStore<ProcessEnv> {
    /// Store backed by the process environment and `~/.activeloop/token`.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(ProcessEnv, StoreConfig::default_paths()?))
    }
}

impl<E: SessionEnv> CredentialStore<E> {
    pub fn new(env: E, config: StoreConfig) -> Self {
        Self { env, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the session-tier backend.
    pub fn env(&self) -> &E {
        &self.env
    }

    fn token_path(&self) -> &Path {
        &self.config.token_path
    }

    fn durable_present(&self) -> bool {
        self.token_path().exists()
    }

    /// Write `token` to both tiers, replacing any previous value.
    ///
    /// The session tier is updated first. If it rejects the token nothing is
    /// written. If writing the file fails the session tier keeps the new
    /// token for the rest of the process.
    #[instrument(skip(self, token), fields(path = %self.token_path().display()))]
    pub fn store(&self, token: &AuthToken) -> Result<()> {
        self.env.set(&self.config.env_var, token.as_str())?;

        let path = self.token_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let write_error = |source: io::Error| StorageError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(path).map_err(write_error)?;

        // A pre-existing file keeps its old mode on open; tighten it before
        // the token lands.
        #[cfg(unix)]
        {
            let mut perms = file.metadata().map_err(write_error)?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                file.set_permissions(perms).map_err(write_error)?;
            }
        }

        file.write_all(token.as_str().as_bytes()).map_err(write_error)?;

        debug!("Stored token in session and durable tiers");
        Ok(())
    }

    /// Returns the value to send as the `Authorization` header.
    ///
    /// - session tier set: its value, unprefixed
    /// - else token file present: `"Bearer "` followed by the file contents
    /// - else `None`
    #[instrument(skip(self), fields(path = %self.token_path().display()))]
    pub fn authorization_header(&self) -> Result<Option<String>> {
        if let Some(value) = self.env.get(&self.config.env_var) {
            debug!("Using session-tier token");
            return Ok(Some(value));
        }

        match self.read_durable()? {
            Some(token) => {
                debug!("Using durable-tier token");
                Ok(Some(format!("{}{}", BEARER_PREFIX, token)))
            }
            None => {
                debug!("No token configured");
                Ok(None)
            }
        }
    }

    /// Remove the token from both tiers. Does nothing if none is stored.
    #[instrument(skip(self), fields(path = %self.token_path().display()))]
    pub fn clear(&self) -> Result<()> {
        if self.env.get(&self.config.env_var).is_some() {
            self.env.unset(&self.config.env_var);
            debug!("Cleared session-tier token");
        }

        let path = self.token_path();
        if self.durable_present() {
            match fs::remove_file(path) {
                Ok(()) => debug!("Removed durable-tier token"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(StorageError::Remove {
                        path: path.to_path_buf(),
                        source,
                    }
                    .into());
                }
            }
        }

        Ok(())
    }

    /// Report which tiers currently hold a token.
    pub fn state(&self) -> CredentialState {
        if self.durable_present() {
            CredentialState::PresentDurable
        } else if self.env.get(&self.config.env_var).is_some() {
            CredentialState::PresentSessionOnly
        } else {
            CredentialState::Absent
        }
    }

    fn read_durable(&self) -> Result<Option<String>> {
        let path = self.token_path();
        if !self.durable_present() {
            return Ok(None);
        }

        match fs::read_to_string(path) {
            Ok(token) => Ok(Some(token)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            }
            .into()),
        }
    }
}

// Custom Debug impl that never reaches into the session tier
impl<E> fmt::Debug for CredentialStore<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("env_var", &self.config.env_var)
            .field("token_path", &self.config.token_path)
            .finish()
    }
}
