//! # Output Formatting
//!
//! JSON results go to stdout; errors go to stderr, colored when stderr is a
//! terminal.

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use serde_json::Value;

/// Print a JSON value, pretty-printed, followed by a newline
pub fn print_json(value: &Value) -> Result<()> {
  let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON output")?;
  println!("{rendered}");
  Ok(())
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = "✗";
  eprintln!(
    "{} {}",
    cross.if_supports_color(Stream::Stderr, |text| text.red()),
    message
  );
}
