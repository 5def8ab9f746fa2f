//! # Jira Group Endpoints
//!
//! Group membership lookups.

use anyhow::Result;
use reqwest::Method;
use serde_json::Value;
use tracing::{info, instrument};

use crate::client::JiraClient;
use crate::consts::LIST_MAX_RESULTS;
use crate::models::ValuesPage;

impl JiraClient {
  /// List the members of a group, inactive users included.
  ///
  /// Returns the `values` of the first page of up to 200 users.
  #[instrument(skip(self), level = "debug")]
  pub async fn users_by_group(&self, groupname: &str) -> Result<Vec<Value>> {
    info!("Listing members of group {}", groupname);

    let request = self.request(Method::GET, &["group", "member"])?.query(&[
      ("groupname", groupname.to_string()),
      ("maxResults", LIST_MAX_RESULTS.to_string()),
      ("includeInactiveUsers", true.to_string()),
    ]);

    let page: ValuesPage = self.send_json(request, &format!("group {groupname}")).await?;
    Ok(page.values)
  }
}
