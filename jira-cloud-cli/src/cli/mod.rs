//! # Command Line Interface
//!
//! Defines the CLI structure and dispatches each subcommand to the matching
//! [`JiraClient`] method.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use directories::BaseDirs;
use jira_cloud::{JiraClient, JiraConfig, load_settings};
use serde_json::Value;
use tokio::runtime::Runtime;
use tracing::info;

use crate::output::print_json;

/// Top-level CLI command
#[derive(Parser)]
#[command(name = "jira")]
#[command(about = "Query the Jira Cloud REST API")]
#[command(
  long_about = "Query the Jira Cloud REST API and print the results as JSON.\n\n\
        The site, username and API token are read from --host/--user, the JIRA_HOST,\n\
        JIRA_USER and JIRA_API_TOKEN environment variables, jira.toml in the config\n\
        directory, and finally ~/.netrc, in that order."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Jira site: a bare name like `acme`, or a full URL
  #[arg(long, global = true)]
  pub host: Option<String>,

  /// Username (usually an email address)
  #[arg(long, global = true)]
  pub user: Option<String>,

  /// REST API version [default: 3]
  #[arg(long, global = true)]
  pub api_version: Option<u32>,

  /// Path to the configuration file
  #[arg(long, global = true)]
  pub config: Option<PathBuf>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the jira tool
#[derive(Subcommand)]
pub enum Commands {
  /// List the projects in a category
  Projects {
    /// Project category id
    #[arg(long, default_value_t = jira_cloud::consts::DEFAULT_CATEGORY_ID)]
    category_id: u64,
  },

  /// Show one project with its details expanded
  Project {
    /// The project key (e.g., PROJ)
    #[arg(required = true, index = 1)]
    project_key: String,
  },

  /// Search issues with JQL
  Search {
    /// The JQL query (e.g., "project = PROJ AND status = Done")
    #[arg(required = true, index = 1)]
    jql: String,

    /// Issue field to include; repeat for several
    #[arg(long = "field", short = 'f')]
    fields: Vec<String>,
  },

  /// List the actors holding a role in a project
  Roles {
    /// The project key (e.g., PROJ)
    #[arg(required = true, index = 1)]
    project_key: String,

    /// The role id (e.g., 10002)
    #[arg(required = true, index = 2)]
    role: String,
  },

  /// List the members of a group
  Users {
    /// The group name
    #[arg(required = true, index = 1)]
    groupname: String,
  },

  /// List project categories
  Categories,

  /// Check that the configured credentials are accepted
  Whoami,
}

/// Handle the parsed command line
pub fn handle_cli(cli: Cli) -> Result<()> {
  let overrides = JiraConfig {
    host: cli.host,
    username: cli.user,
    api_token: None,
    api_version: cli.api_version,
  };

  let base_dirs = BaseDirs::new();
  let home = base_dirs.as_ref().map(BaseDirs::home_dir);

  let settings = load_settings(overrides, cli.config.as_deref(), home)?;
  info!("Using Jira site {} (API v{})", settings.host, settings.api_version);

  let client = settings.client()?;
  let rt = Runtime::new().context("Failed to create async runtime")?;

  let value = rt.block_on(run_command(&client, cli.command))?;
  print_json(&value)
}

async fn run_command(client: &JiraClient, command: Commands) -> Result<Value> {
  let value = match command {
    Commands::Projects { category_id } => Value::Array(client.projects(Some(category_id)).await?),
    Commands::Project { project_key } => client.project(&project_key).await?,
    Commands::Search { jql, fields } => Value::Array(client.search(&jql, &fields).await?),
    Commands::Roles { project_key, role } => Value::Array(client.project_roles(&project_key, &role).await?),
    Commands::Users { groupname } => Value::Array(client.users_by_group(&groupname).await?),
    Commands::Categories => Value::Array(client.categories().await?),
    Commands::Whoami => {
      if !client.test_connection().await? {
        return Err(anyhow::anyhow!(
          "Jira at {} rejected the configured credentials",
          client.base_url()
        ));
      }
      serde_json::json!({ "connected": true, "baseUrl": client.base_url() })
    }
  };

  Ok(value)
}
