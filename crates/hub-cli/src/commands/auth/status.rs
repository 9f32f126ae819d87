//! Status command implementation.

use anyhow::Result;
use clap::Args;

use hub_store::{CredentialState, CredentialStore};

use crate::output;

#[derive(Args, Debug)]
pub struct StatusArgs {}

pub fn run(_args: StatusArgs, store: &CredentialStore) -> Result<()> {
    let state = match store.state() {
        CredentialState::Absent => "absent",
        CredentialState::PresentSessionOnly => "session only",
        CredentialState::PresentDurable => "stored",
    };

    output::field("Token", state);
    output::field("Variable", &store.config().env_var);
    output::field(
        "Token file",
        &store.config().token_path.display().to_string(),
    );

    Ok(())
}
