//! # Jira Project Endpoints
//!
//! Project listing by category, single project lookup, and the project
//! category catalogue.

use anyhow::Result;
use reqwest::Method;
use serde_json::Value;
use tracing::{info, instrument};

use crate::client::JiraClient;
use crate::consts::{DEFAULT_CATEGORY_ID, LIST_MAX_RESULTS, PROJECT_EXPAND};
use crate::models::ValuesPage;

impl JiraClient {
  /// List the projects in a category.
  ///
  /// Queries `project/search` for `category_id` (1000 when `None`) and returns
  /// the `values` of the first page of up to 200 projects.
  ///
  /// # Errors
  ///
  /// Returns an error if the request cannot be sent, authentication fails,
  /// the server answers with a non-success status, or the body is not JSON.
  #[instrument(skip(self), level = "debug")]
  pub async fn projects(&self, category_id: Option<u64>) -> Result<Vec<Value>> {
    let category_id = category_id.unwrap_or(DEFAULT_CATEGORY_ID);
    info!("Listing projects in category {}", category_id);

    let request = self.request(Method::GET, &["project", "search"])?.query(&[
      ("categoryId", category_id.to_string()),
      ("maxResults", LIST_MAX_RESULTS.to_string()),
    ]);

    let page: ValuesPage = self.send_json(request, "project list").await?;
    Ok(page.values)
  }

  /// Get a single project, with description, lead, issue types, URL, keys,
  /// permissions and insight expanded.
  #[instrument(skip(self), level = "debug")]
  pub async fn project(&self, project_key: &str) -> Result<Value> {
    let request = self
      .request(Method::GET, &["project", project_key])?
      .query(&[("expand", PROJECT_EXPAND)]);

    self.send_json(request, &format!("project {project_key}")).await
  }

  /// List every project category
  #[instrument(skip(self), level = "debug")]
  pub async fn categories(&self) -> Result<Vec<Value>> {
    let request = self.request(Method::GET, &["projectCategory"])?;
    self.send_json(request, "project categories").await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{basic_auth, header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::endpoints::test_support::mock_client;

  #[tokio::test]
  async fn test_projects_default_category() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/3/project/search"))
      .and(query_param("categoryId", "1000"))
      .and(query_param("maxResults", "200"))
      .and(basic_auth("test_user", "test_token"))
      .and(header("User-Agent", crate::consts::USER_AGENT))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0,
          "maxResults": 200,
          "total": 2,
          "isLast": true,
          "values": [
              { "id": "10000", "key": "ALPHA", "name": "Alpha" },
              { "id": "10001", "key": "BETA", "name": "Beta" }
          ]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let projects = client.projects(None).await?;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["key"], "ALPHA");
    assert_eq!(projects[1]["name"], "Beta");

    Ok(())
  }

  #[tokio::test]
  async fn test_projects_explicit_category() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/3/project/search"))
      .and(query_param("categoryId", "10042"))
      .and(query_param("maxResults", "200"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "values": [] })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let projects = client.projects(Some(10042)).await?;
    assert!(projects.is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn test_project_returns_full_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    let body = json!({
        "id": "10000",
        "key": "TEST",
        "name": "Test Project",
        "description": "A project for tests",
        "lead": { "displayName": "Project Lead" },
        "issueTypes": [{ "id": "1", "name": "Bug" }]
    });

    Mock::given(method("GET"))
      .and(path("/rest/api/3/project/TEST"))
      .and(query_param(
        "expand",
        "description,lead,issueTypes,url,projectKeys,permissions,insight",
      ))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
      .expect(1)
      .mount(&mock_server)
      .await;

    let project = client.project("TEST").await?;
    assert_eq!(project, body);

    Ok(())
  }

  #[tokio::test]
  async fn test_project_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/3/project/NOPE"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "errorMessages": ["No project could be found with key 'NOPE'."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.project("NOPE").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("project NOPE not found"));

    Ok(())
  }

  #[tokio::test]
  async fn test_categories() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/3/projectCategory"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
          { "id": "1000", "name": "Engineering", "description": "Product teams" },
          { "id": "1001", "name": "Operations", "description": "Ops teams" }
      ])))
      .expect(1)
      .mount(&mock_server)
      .await;

    let categories = client.categories().await?;
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["id"], "1000");
    assert_eq!(categories[1]["name"], "Operations");

    Ok(())
  }

  #[tokio::test]
  async fn test_projects_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/3/project/search"))
      .respond_with(ResponseTemplate::new(401).set_body_json(json!({
          "errorMessages": ["Authentication failed"],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.projects(None).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Authentication failed"));

    Ok(())
  }
}
