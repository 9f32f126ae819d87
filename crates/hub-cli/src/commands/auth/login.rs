//! Login command implementation.
//!
//! Stores a token obtained elsewhere; no request is made.

use anyhow::{Context, Result};
use clap::Args;

use hub_core::AuthToken;
use hub_store::CredentialStore;

use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// API token to store
    #[arg(long)]
    pub token: String,
}

pub fn run(args: LoginArgs, store: &CredentialStore) -> Result<()> {
    store
        .store(&AuthToken::new(args.token))
        .context("Failed to save token")?;

    output::success("Token saved");
    output::field(
        "Token file",
        &store.config().token_path.display().to_string(),
    );

    Ok(())
}
