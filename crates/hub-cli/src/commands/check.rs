//! Check command implementation.
//!
//! Runs a status code and optional body through the response validator
//! without making a request.

use anyhow::{Result, bail};
use clap::Args;

use hub_core::{BadRequestPolicy, ExchangeOutcome, ResponseValidator};

use crate::output;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// HTTP status code
    pub status: u16,

    /// Response body (usually JSON with a "description" field)
    #[arg(long)]
    pub body: Option<String>,

    /// Report 400 responses as errors instead of exiting
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let mut outcome = ExchangeOutcome::new(args.status);
    if let Some(body) = args.body {
        outcome = outcome.with_body(body);
    }

    let validator = if args.strict {
        ResponseValidator::new().with_bad_request_policy(BadRequestPolicy::Fail)
    } else {
        ResponseValidator::new()
    };

    match validator.validate(&outcome) {
        Ok(()) => {
            output::success(&format!("{} accepted", args.status));
            Ok(())
        }
        Err(err) => {
            output::field("Kind", &format!("{:?}", err.kind()));
            output::error(&err.to_string());
            bail!("response rejected")
        }
    }
}
