#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI with an isolated token file and no session-tier token.
pub fn run_cli_with_token_path(args: &[&str], token_path: &Path) -> Output {
    cli_command(args, token_path)
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI with an isolated token file and a session-tier token.
pub fn run_cli_with_session(args: &[&str], token_path: &Path, token: &str) -> Output {
    cli_command(args, token_path)
        .env("HUB_AUTH_TOKEN", token)
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], token_path: &Path) -> String {
    let output = run_cli_with_token_path(args, token_path);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn cli_command(args: &[&str], token_path: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hub"));
    cmd.args(args);
    cmd.env("HUB_TOKEN_PATH", token_path);
    cmd.env_remove("HUB_AUTH_TOKEN");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}
