//! Authentication helpers for the Jira client.
//!
//! These helpers centralize credential lookup and runtime construction so that
//! synchronous callers such as the CLI can build an authenticated client in
//! one step.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::client::site_url;
use crate::consts::ATLASSIAN_DOMAIN;
use crate::netrc::{Credentials, get_netrc_path, normalize_host, parse_netrc_file};
use crate::{JiraClient, create_jira_client};

/// Retrieve Jira credentials from `.netrc` under `home`.
///
/// The machine is the site hostname (`acme` resolves to
/// `acme.atlassian.net`); an `atlassian.net` entry is used as a fallback.
pub fn get_jira_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  let machine = normalize_host(&site_url(jira_host)?);
  let netrc_path = get_netrc_path(home);

  if netrc_path.exists() {
    for candidate in [machine.as_str(), ATLASSIAN_DOMAIN] {
      if let Some(creds) = parse_netrc_file(&netrc_path, candidate)? {
        debug!("Using .netrc credentials for machine '{}'", candidate);
        return Ok(creds);
      }
    }
  }

  Err(anyhow::anyhow!(
    "Jira credentials not found in .netrc file. Please add credentials for machine '{machine}' or '{ATLASSIAN_DOMAIN}'."
  ))
}

/// Check if Jira credentials are available for the provided host.
pub fn check_jira_credentials(home: &Path, jira_host: &str) -> Result<bool> {
  Ok(get_jira_credentials(home, jira_host).is_ok())
}

/// Creates an authenticated Jira client using credentials from .netrc.
pub fn create_jira_client_from_netrc(home: &Path, jira_host: &str, api_version: Option<u32>) -> Result<JiraClient> {
  let credentials = get_jira_credentials(home, jira_host).context("Failed to get credentials")?;

  create_jira_client(
    jira_host,
    &credentials.username,
    &credentials.password,
    api_version,
  )
}

/// Creates a tokio runtime and an authenticated Jira client.
pub fn create_jira_runtime_and_client(
  home: &Path,
  jira_host: &str,
  api_version: Option<u32>,
) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_jira_client_from_netrc(home, jira_host, api_version)?;
  Ok((rt, client))
}
