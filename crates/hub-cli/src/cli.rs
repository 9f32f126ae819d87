//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::{check, get};

/// Hub API token management and response checking.
#[derive(Parser, Debug)]
#[command(name = "hub")]
#[command(author, version = env!("HUB_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Token file location (defaults to ~/.activeloop/token)
    #[arg(long, env = "HUB_TOKEN_PATH", global = true)]
    pub token_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the stored API token
    Auth(AuthCommand),

    /// Classify a status code and body the way the client would
    Check(check::CheckArgs),

    /// Fetch a URL with the stored token and validate the response
    Get(get::GetArgs),
}
