//! Build script that stamps the binary with a git-derived version.
//!
//! `HUB_VERSION` feeds `hub --version`. Outside a git checkout it falls back
//! to the crate version.

use std::process::Command;

fn main() {
    // Re-run when HEAD moves or a tag is added.
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let version = describe_head().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=HUB_VERSION={}", version);
}

/// `git describe --tags --always`, with a leading `v` dropped.
fn describe_head() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    if described.is_empty() {
        return None;
    }

    Some(described.trim_start_matches('v').to_string())
}
