//! Helpers for reading credentials stored in `.netrc` files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Represents credentials for a machine entry
#[derive(Clone)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use jira_cloud::netrc::get_netrc_path;
///
/// let home = Path::new("/home/user");
/// let path = get_netrc_path(home);
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// Both single-line (`machine host login user password pass`) and multi-line
/// entries are understood. A missing machine, or one without both `login` and
/// `password`, yields `Ok(None)`; a missing file is an error.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let file = File::open(path).context("Failed to open .netrc file")?;
  let reader = BufReader::new(file);

  let mut current_machine: Option<String> = None;
  let mut username = String::new();
  let mut password = String::new();

  for line in reader.lines() {
    let line = line.context("Failed to read line from .netrc")?;
    let mut tokens = line.split_whitespace();

    while let Some(token) = tokens.next() {
      match token {
        "machine" => {
          if let Some(creds) = completed_entry(current_machine.as_deref(), target_machine, &username, &password) {
            return Ok(Some(creds));
          }
          username.clear();
          password.clear();
          current_machine = tokens.next().map(str::to_string);
        }
        "default" => {
          if let Some(creds) = completed_entry(current_machine.as_deref(), target_machine, &username, &password) {
            return Ok(Some(creds));
          }
          username.clear();
          password.clear();
          current_machine = None;
        }
        "login" => {
          if let Some(value) = tokens.next() {
            username = value.to_string();
          }
        }
        "password" => {
          if let Some(value) = tokens.next() {
            password = value.to_string();
          }
        }
        _ => {}
      }
    }
  }

  Ok(completed_entry(
    current_machine.as_deref(),
    target_machine,
    &username,
    &password,
  ))
}

fn completed_entry(machine: Option<&str>, target_machine: &str, username: &str, password: &str) -> Option<Credentials> {
  if machine == Some(target_machine) && !username.is_empty() && !password.is_empty() {
    Some(Credentials {
      username: username.to_string(),
      password: password.to_string(),
    })
  } else {
    None
  }
}

/// Normalizes a host URL by removing protocol prefixes and trailing slashes.
///
/// ```
/// use jira_cloud::netrc::normalize_host;
///
/// assert_eq!(normalize_host("https://acme.atlassian.net/"), "acme.atlassian.net");
/// assert_eq!(normalize_host("http://jira.example.com"), "jira.example.com");
/// assert_eq!(normalize_host("acme.atlassian.net"), "acme.atlassian.net");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  raw_host
    .trim_start_matches("https://")
    .trim_start_matches("http://")
    .trim_end_matches('/')
    .to_string()
}
