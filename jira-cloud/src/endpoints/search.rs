//! # Jira Issue Search
//!
//! JQL search over issues.

use anyhow::Result;
use reqwest::Method;
use serde_json::Value;
use tracing::{info, instrument};

use crate::client::JiraClient;
use crate::consts::SEARCH_MAX_RESULTS;
use crate::models::{SearchRequest, SearchResponse};

impl JiraClient {
  /// Search issues with JQL, returning the `issues` of the first page of up
  /// to 100 results.
  ///
  /// `fields` restricts which issue fields Jira includes; an empty slice is
  /// sent as an empty list and leaves the choice to the server.
  ///
  /// # Errors
  ///
  /// Returns an error if the request cannot be sent, authentication fails,
  /// the server rejects the query, or the body is not JSON.
  #[instrument(skip(self, fields), level = "debug")]
  pub async fn search(&self, jql: &str, fields: &[String]) -> Result<Vec<Value>> {
    info!("Searching issues: {}", jql);

    let payload = SearchRequest {
      jql: jql.to_string(),
      max_results: SEARCH_MAX_RESULTS,
      fields: fields.to_vec(),
    };

    let request = self.request(Method::POST, &["search"])?.json(&payload);

    let response: SearchResponse = self.send_json(request, "issue search").await?;
    Ok(response.issues)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{basic_auth, body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::endpoints::test_support::mock_client;

  #[tokio::test]
  async fn test_search() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("POST"))
      .and(path("/rest/api/3/search"))
      .and(basic_auth("test_user", "test_token"))
      .and(body_json(json!({
          "jql": "project = TEST AND status = \"In Progress\"",
          "maxResults": 100,
          "fields": ["summary", "assignee"]
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0,
          "maxResults": 100,
          "total": 1,
          "issues": [
              {
                  "id": "10000",
                  "key": "TEST-1",
                  "fields": {
                      "summary": "First issue",
                      "assignee": null
                  }
              }
          ]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let fields = vec!["summary".to_string(), "assignee".to_string()];
    let issues = client
      .search("project = TEST AND status = \"In Progress\"", &fields)
      .await?;

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["key"], "TEST-1");
    assert_eq!(issues[0]["fields"]["summary"], "First issue");

    Ok(())
  }

  #[tokio::test]
  async fn test_search_without_fields() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("POST"))
      .and(path("/rest/api/3/search"))
      .and(body_json(json!({
          "jql": "assignee = currentUser()",
          "maxResults": 100,
          "fields": []
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "issues": [] })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let issues = client.search("assignee = currentUser()", &[]).await?;
    assert!(issues.is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn test_search_invalid_jql() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("POST"))
      .and(path("/rest/api/3/search"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({
          "errorMessages": ["Error in the JQL Query: Expecting operator but got 'TEST'."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.search("project TEST", &[]).await;
    let error = result.unwrap_err().to_string();
    assert!(error.contains("HTTP 400"));
    assert!(error.contains("Error in the JQL Query"));

    Ok(())
  }
}
