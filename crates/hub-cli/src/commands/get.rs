//! Get command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use hub_core::{BadRequestPolicy, ResponseValidator};
use hub_http::HubClient;

use super::open_store;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// URL to fetch
    pub url: String,

    /// Report 400 responses as errors instead of exiting
    #[arg(long)]
    pub strict: bool,
}

pub async fn run(args: GetArgs, token_path: Option<&Path>) -> Result<()> {
    let store = open_store(token_path)?;

    let mut validator = ResponseValidator::new();
    if args.strict {
        validator = validator.with_bad_request_policy(BadRequestPolicy::Fail);
    }

    let client = HubClient::new(store)
        .context("Failed to build HTTP client")?
        .with_validator(validator);

    eprintln!("{}", format!("GET {}", args.url).dimmed());

    let body = client
        .get(args.url.as_str())
        .await
        .context("Request failed")?;

    output::body(&body)
}
