//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use hub_store::CredentialStore;

use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub fn run(_args: LogoutArgs, store: &CredentialStore) -> Result<()> {
    store.clear().context("Failed to remove token")?;
    output::success("Logged out");
    Ok(())
}
