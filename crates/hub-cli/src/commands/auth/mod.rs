//! Token management subcommands.

mod header;
mod login;
mod logout;
mod status;

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use super::open_store;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Store an already-issued API token
    Login(login::LoginArgs),

    /// Remove the stored token
    Logout(logout::LogoutArgs),

    /// Show which storage tiers hold a token
    Status(status::StatusArgs),

    /// Print the Authorization header value
    Header(header::HeaderArgs),
}

pub fn handle(cmd: AuthCommand, token_path: Option<&Path>) -> Result<()> {
    let store = open_store(token_path)?;
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args, &store),
        AuthSubcommand::Logout(args) => logout::run(args, &store),
        AuthSubcommand::Status(args) => status::run(args, &store),
        AuthSubcommand::Header(args) => header::run(args, &store),
    }
}
