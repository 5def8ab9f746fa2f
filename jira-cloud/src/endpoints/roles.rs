//! # Jira Project Role Endpoints
//!
//! Lookup of the users and groups holding a role in a project.

use anyhow::Result;
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use crate::client::JiraClient;
use crate::models::RoleActors;

impl JiraClient {
  /// Get the actors (users and groups) holding a role in a project.
  ///
  /// `role` is the numeric role id as Jira reports it, e.g. `"10002"`.
  #[instrument(skip(self), level = "debug")]
  pub async fn project_roles(&self, project_key: &str, role: &str) -> Result<Vec<Value>> {
    let request = self.request(Method::GET, &["project", project_key, "role", role])?;

    let role_actors: RoleActors = self
      .send_json(request, &format!("role {role} in project {project_key}"))
      .await?;
    Ok(role_actors.actors)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::endpoints::test_support::mock_client;

  #[tokio::test]
  async fn test_project_roles() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/3/project/TEST/role/10002"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": 10002,
          "name": "Developers",
          "actors": [
              {
                  "id": 10240,
                  "displayName": "Jane Doe",
                  "type": "atlassian-user-role-actor",
                  "actorUser": { "accountId": "abc123" }
              },
              {
                  "id": 10241,
                  "displayName": "jira-developers",
                  "type": "atlassian-group-role-actor"
              }
          ]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let actors = client.project_roles("TEST", "10002").await?;
    assert_eq!(actors.len(), 2);
    assert_eq!(actors[0]["displayName"], "Jane Doe");
    assert_eq!(actors[1]["type"], "atlassian-group-role-actor");

    Ok(())
  }

  #[tokio::test]
  async fn test_project_roles_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/3/project/TEST/role/99999"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    let result = client.project_roles("TEST", "99999").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));

    Ok(())
  }

  #[tokio::test]
  async fn test_project_roles_rejects_parent_segment() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Developers": "url" })))
      .expect(0)
      .mount(&mock_server)
      .await;

    let result = client.project_roles("TEST", "..").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid path segment"));

    Ok(())
  }
}
