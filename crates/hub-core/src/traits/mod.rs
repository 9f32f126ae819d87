//! Core traits for credential storage.

mod env;

pub use env::SessionEnv;
