//! CLI integration tests for token storage.

mod common;

use tempfile::TempDir;

use common::{run_cli_success, run_cli_with_session, run_cli_with_token_path};

#[test]
fn test_login_writes_raw_token_file() {
    let temp_dir = TempDir::new().unwrap();
    let token_path = temp_dir.path().join("config").join("token");

    run_cli_success(&["auth", "login", "--token", "abc123"], &token_path);

    let contents = std::fs::read_to_string(&token_path).unwrap();
    assert_eq!(contents, "abc123");
}

#[test]
fn test_header_from_durable_tier_is_bearer() {
    let temp_dir = TempDir::new().unwrap();
    let token_path = temp_dir.path().join("token");

    run_cli_success(&["auth", "login", "--token", "abc123"], &token_path);

    // A fresh process has no session-tier token.
    let stdout = run_cli_success(&["auth", "header"], &token_path);
    assert_eq!(stdout.trim_end(), "Bearer abc123");
}

#[test]
fn test_header_from_session_tier_is_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let token_path = temp_dir.path().join("token");

    run_cli_success(&["auth", "login", "--token", "durable"], &token_path);

    let output = run_cli_with_session(&["auth", "header"], &token_path, "session-token");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "session-token");
}

#[test]
fn test_header_without_token_fails() {
    let temp_dir = TempDir::new().unwrap();
    let token_path = temp_dir.path().join("token");

    let output = run_cli_with_token_path(&["auth", "header"], &token_path);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No token configured"));
}

#[test]
fn test_logout_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let token_path = temp_dir.path().join("token");

    run_cli_success(&["auth", "login", "--token", "abc123"], &token_path);
    run_cli_success(&["auth", "logout"], &token_path);
    assert!(!token_path.exists());

    run_cli_success(&["auth", "logout"], &token_path);

    let output = run_cli_with_token_path(&["auth", "header"], &token_path);
    assert!(!output.status.success());
}

#[test]
fn test_status_reports_tiers() {
    let temp_dir = TempDir::new().unwrap();
    let token_path = temp_dir.path().join("token");

    let stdout = run_cli_success(&["auth", "status"], &token_path);
    assert!(stdout.contains("absent"));

    let output = run_cli_with_session(&["auth", "status"], &token_path, "session-token");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("session only"));

    run_cli_success(&["auth", "login", "--token", "abc123"], &token_path);
    let stdout = run_cli_success(&["auth", "status"], &token_path);
    assert!(stdout.contains("stored"));
}
