//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde_json::Value;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a response body, pretty-printing it when it is JSON.
pub fn body(bytes: &[u8]) -> Result<()> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}", String::from_utf8_lossy(bytes)),
    }
    Ok(())
}
