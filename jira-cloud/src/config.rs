//! # Configuration
//!
//! Resolves the host, credentials and API version a client is built from.
//!
//! Sources are layered, highest precedence first: explicit overrides (such as
//! command-line flags), environment variables, the `jira.toml` file in the
//! XDG config directory, and finally `.netrc` for the username and token.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::get_jira_credentials;
use crate::consts::DEFAULT_API_VERSION;
use crate::{JiraClient, create_jira_client};

/// Environment variable storing the Jira host
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";
/// Environment variable storing the Jira username
pub const ENV_JIRA_USER: &str = "JIRA_USER";
/// Environment variable storing the Jira API token
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";
/// Environment variable storing the REST API version
pub const ENV_JIRA_API_VERSION: &str = "JIRA_API_VERSION";

/// File name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "jira.toml";

/// One layer of partially-specified settings.
///
/// This is also the on-disk shape of `jira.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JiraConfig {
  pub host: Option<String>,
  pub username: Option<String>,
  pub api_token: Option<String>,
  pub api_version: Option<u32>,
}

impl JiraConfig {
  /// Read the layer described by the `JIRA_*` environment variables
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build a layer from an arbitrary variable lookup.
  ///
  /// Empty values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let api_version = match get(ENV_JIRA_API_VERSION) {
      Some(raw) => Some(
        raw
          .trim()
          .parse::<u32>()
          .with_context(|| format!("{ENV_JIRA_API_VERSION} must be a positive integer, got '{raw}'"))?,
      ),
      None => None,
    };

    Ok(Self {
      host: get(ENV_JIRA_HOST),
      username: get(ENV_JIRA_USER),
      api_token: get(ENV_JIRA_API_TOKEN),
      api_version,
    })
  }

  /// Load a config file; a missing file is an empty layer.
  pub fn load(path: &Path) -> Result<Self> {
    if !path.exists() {
      debug!("No config file at {}", path.display());
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))
  }

  /// Fill every unset field from `lower`
  pub fn or(self, lower: Self) -> Self {
    Self {
      host: self.host.or(lower.host),
      username: self.username.or(lower.username),
      api_token: self.api_token.or(lower.api_token),
      api_version: self.api_version.or(lower.api_version),
    }
  }
}

/// Fully resolved settings for one Jira site
#[derive(Clone)]
pub struct JiraSettings {
  pub host: String,
  pub username: String,
  pub api_token: String,
  pub api_version: u32,
}

impl std::fmt::Debug for JiraSettings {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JiraSettings")
      .field("host", &self.host)
      .field("username", &self.username)
      .field("api_token", &"<redacted>")
      .field("api_version", &self.api_version)
      .finish()
  }
}

impl JiraSettings {
  /// Complete a merged layer, taking missing credentials from `.netrc` under
  /// `home`.
  pub fn resolve(config: JiraConfig, home: Option<&Path>) -> Result<Self> {
    let host = config.host.ok_or_else(|| {
      anyhow::anyhow!("Jira host not configured. Set {ENV_JIRA_HOST}, pass --host, or add 'host' to {CONFIG_FILE_NAME}")
    })?;

    let (username, api_token) = match (config.username, config.api_token) {
      (Some(username), Some(api_token)) => (username, api_token),
      (username, api_token) => {
        let home = home.context("Cannot look up .netrc credentials without a home directory")?;
        let creds = get_jira_credentials(home, &host)?;
        (
          username.unwrap_or(creds.username),
          api_token.unwrap_or(creds.password),
        )
      }
    };

    Ok(Self {
      host,
      username,
      api_token,
      api_version: config.api_version.unwrap_or(DEFAULT_API_VERSION),
    })
  }

  /// Build a client from these settings
  pub fn client(&self) -> Result<JiraClient> {
    create_jira_client(
      &self.host,
      &self.username,
      &self.api_token,
      Some(self.api_version),
    )
  }
}

/// Default location of `jira.toml` in the platform config directory
pub fn default_config_path() -> Result<PathBuf> {
  let proj_dirs = ProjectDirs::from("", "", "jira-cloud").context("Failed to determine project directories")?;
  Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Resolve settings from every source.
///
/// `overrides` wins over the environment, which wins over the file at
/// `config_path` (the default location when `None`).
pub fn load_settings(overrides: JiraConfig, config_path: Option<&Path>, home: Option<&Path>) -> Result<JiraSettings> {
  let path = match config_path {
    Some(path) => path.to_path_buf(),
    None => default_config_path()?,
  };

  let merged = overrides.or(JiraConfig::from_env()?).or(JiraConfig::load(&path)?);
  JiraSettings::resolve(merged, home)
}
