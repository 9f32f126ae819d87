//! Header command implementation.

use anyhow::{Context, Result};
use clap::Args;

use hub_store::CredentialStore;

#[derive(Args, Debug)]
pub struct HeaderArgs {}

pub fn run(_args: HeaderArgs, store: &CredentialStore) -> Result<()> {
    let header = store
        .authorization_header()
        .context("Failed to read token")?
        .context("No token configured. Run 'hub auth login' first.")?;

    println!("{}", header);
    Ok(())
}
