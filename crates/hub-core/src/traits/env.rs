//! Session-tier key-value capability.

use crate::error::StorageError;

/// Key-value store backing the session credential tier.
///
/// The production implementation wraps the process environment; tests use an
/// in-memory map. Implementations take `&self` so a store can be shared
/// behind a plain reference.
pub trait SessionEnv {
    /// Returns the value for `name`, if set.
    ///
    /// A set value is always returned, even if it has to be converted lossily.
    fn get(&self, name: &str) -> Option<String>;

    /// Sets `name` to `value`, replacing any previous value.
    ///
    /// Fails without modifying anything if the name or value cannot be
    /// represented by the backend.
    fn set(&self, name: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `name`. Does nothing if it is not set.
    fn unset(&self, name: &str);
}

impl<T: SessionEnv + ?Sized> SessionEnv for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(name, value)
    }

    fn unset(&self, name: &str) {
        (**self).unset(name)
    }
}
