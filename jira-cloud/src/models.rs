//! Request and response envelopes for the Jira REST API.
//!
//! Entities themselves (projects, issues, users, role actors, categories) are
//! left as [`serde_json::Value`]; only the wrapper objects the client unwraps
//! are typed here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

impl std::fmt::Debug for JiraAuth {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JiraAuth")
      .field("username", &self.username)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

/// A paged listing whose entries live under `values`
#[derive(Debug, Deserialize)]
pub struct ValuesPage {
  #[serde(default)]
  pub values: Vec<Value>,
}

/// Represents an issue search request payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
  pub jql: String,
  pub max_results: u32,
  pub fields: Vec<String>,
}

/// Represents an issue search response
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
  #[serde(default)]
  pub issues: Vec<Value>,
}

/// Represents the members of a project role
#[derive(Debug, Deserialize)]
pub struct RoleActors {
  #[serde(default)]
  pub actors: Vec<Value>,
}
