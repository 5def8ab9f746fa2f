//! # Jira Cloud API Client
//!
//! A thin client for the Jira Cloud REST API. Each method on [`JiraClient`]
//! issues exactly one request and returns the parsed body, or the array
//! nested under the field Jira wraps it in:
//!
//! | Method | Request | Returns |
//! |--------|---------|---------|
//! | [`JiraClient::projects`] | `GET project/search` | `values` |
//! | [`JiraClient::project`] | `GET project/{key}` | body |
//! | [`JiraClient::search`] | `POST search` | `issues` |
//! | [`JiraClient::project_roles`] | `GET project/{key}/role/{role}` | `actors` |
//! | [`JiraClient::users_by_group`] | `GET group/member` | `values` |
//! | [`JiraClient::categories`] | `GET projectCategory` | body |
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! let client = jira_cloud::create_jira_client("acme", "me@example.com", "api-token", None)?;
//! let issues = client.search("project = OPS", &["summary".to_string()]).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
mod client;
pub mod config;
pub mod consts;
mod endpoints;
pub mod models;
pub mod netrc;

// Re-export the client
pub use client::{JiraClient, api_base_url, create_jira_client, site_url};
pub use config::{JiraConfig, JiraSettings, load_settings};
// Re-export models
pub use models::{JiraAuth, RoleActors, SearchRequest, SearchResponse, ValuesPage};
