//! Session-tier backends.

use std::collections::HashMap;
use std::sync::RwLock;

use hub_core::{SessionEnv, StorageError};

/// Reject names and values the process environment cannot hold.
///
/// Both backends apply the same rules so tests against [`MemoryEnv`] see the
/// failures [`ProcessEnv`] would report.
fn check_entry(name: &str, value: &str) -> Result<(), StorageError> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.contains('=') {
        Some("name contains '='")
    } else if name.contains('\0') {
        Some("name contains a NUL byte")
    } else if value.contains('\0') {
        Some("value contains a NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(StorageError::InvalidSessionEntry {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl SessionEnv for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }

    fn set(&self, name: &str, value: &str) -> Result<(), StorageError> {
        check_entry(name, value)?;
        // SAFETY: the credential store is single-threaded; callers that share
        // the process environment across threads must serialize externally.
        unsafe { std::env::set_var(name, value) };
        Ok(())
    }

    fn unset(&self, name: &str) {
        // An invalid name can never have been set.
        if check_entry(name, "").is_err() {
            return;
        }
        // SAFETY: see `set`.
        unsafe { std::env::remove_var(name) }
    }
}

/// In-memory environment for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionEnv for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
    }

    fn set(&self, name: &str, value: &str) -> Result<(), StorageError> {
        check_entry(name, value)?;
        self.vars
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn unset(&self, name: &str) {
        self.vars
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(name);
    }
}
