//! # Jira HTTP Client
//!
//! HTTP client implementation for Jira Cloud, handling base URL resolution,
//! basic authentication, request building, and response status handling for
//! the REST API endpoints.

use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use crate::consts::{ACCEPT, ATLASSIAN_DOMAIN, DEFAULT_API_VERSION, USER_AGENT};
use crate::models::JiraAuth;

/// Represents a Jira API client
#[derive(Clone, Debug)]
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client rooted at an already-resolved REST API URL,
  /// e.g. `https://acme.atlassian.net/rest/api/3`.
  pub fn new(base_url: &str, auth: JiraAuth) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  /// The REST API root every endpoint path is appended to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Test the Jira connection by fetching the current user
  pub async fn test_connection(&self) -> Result<bool> {
    let response = self
      .request(Method::GET, &["myself"])?
      .send()
      .await
      .context("Failed to connect to Jira")?;

    Ok(response.status().is_success())
  }

  /// Build the URL for an endpoint below the API root.
  ///
  /// Each segment is percent-encoded on its own. Empty, `.` and `..`
  /// segments are errors.
  pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
    if let Some(segment) = segments.iter().find(|s| s.is_empty() || **s == "." || **s == "..") {
      return Err(anyhow::anyhow!("Invalid path segment '{segment}' in Jira API request"));
    }

    let mut url = Url::parse(&self.base_url).with_context(|| format!("Invalid Jira API URL '{}'", self.base_url))?;
    url
      .path_segments_mut()
      .map_err(|()| anyhow::anyhow!("Jira API URL '{}' cannot be used as a base", self.base_url))?
      .pop_if_empty()
      .extend(segments);
    Ok(url)
  }

  /// Start an authenticated request against an endpoint below the API root
  pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
    let url = self.endpoint(segments)?;
    debug!("{} {}", method, url);

    Ok(
      self
        .client
        .request(method, url)
        .header(header::ACCEPT, ACCEPT)
        .header(header::USER_AGENT, USER_AGENT)
        .basic_auth(&self.auth.username, Some(&self.auth.api_token)),
    )
  }

  /// Send a request and decode a successful JSON body.
  ///
  /// `what` names the resource in error messages, e.g. `"project TEST"`.
  pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> Result<T> {
    let response = request
      .send()
      .await
      .with_context(|| format!("Failed to fetch {what}"))?;

    let status = response.status();
    debug!("Jira API response status: {}", status);

    match status {
      status if status.is_success() => {
        let body = response.text().await.context("Failed to read response body")?;
        trace!("Received {} bytes for {}", body.len(), what);
        serde_json::from_str::<T>(&body).with_context(|| format!("Failed to parse {what}"))
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
        warn!("Authentication failed when accessing Jira API");
        Err(anyhow::anyhow!(
          "Authentication failed. Please check your Jira credentials."
        ))
      }
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Jira {} not found", what)),
      _ => {
        let body = response.text().await.unwrap_or_default();
        let detail = error_messages(&body).unwrap_or(body);
        warn!("Unexpected Jira API error: HTTP {} - {}", status, detail);
        Err(anyhow::anyhow!("Unexpected error: HTTP {status} - {detail}"))
      }
    }
  }
}

/// Pull the `errorMessages` array out of a Jira error body, if there is one
fn error_messages(body: &str) -> Option<String> {
  let json = serde_json::from_str::<serde_json::Value>(body).ok()?;
  let messages: Vec<&str> = json
    .get("errorMessages")?
    .as_array()?
    .iter()
    .filter_map(|m| m.as_str())
    .collect();

  if messages.is_empty() {
    None
  } else {
    Some(messages.join("; "))
  }
}

/// Resolve the site URL for a Jira Cloud host.
///
/// A bare site name such as `acme` expands to `https://acme.atlassian.net`.
/// Anything that already looks like a hostname or URL (contains a dot, a port
/// or a scheme) is used as the site itself, defaulting to https.
pub fn site_url(host: &str) -> Result<String> {
  let trimmed = host.trim().trim_end_matches('/');
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Jira host cannot be empty"));
  }

  let candidate = if trimmed.contains("://") {
    trimmed.to_string()
  } else if trimmed.contains('.') || trimmed.contains(':') {
    format!("https://{trimmed}")
  } else {
    format!("https://{trimmed}.{ATLASSIAN_DOMAIN}")
  };

  let url = Url::parse(&candidate).with_context(|| format!("Invalid Jira host '{host}'"))?;
  if url.host_str().is_none() || url.query().is_some() || url.fragment().is_some() {
    return Err(anyhow::anyhow!("Invalid Jira host '{host}'"));
  }

  Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Build the REST API root, `{site}/rest/api/{version}`, for a Jira host
pub fn api_base_url(host: &str, api_version: u32) -> Result<String> {
  Ok(format!("{}/rest/api/{}", site_url(host)?, api_version))
}

/// Create a Jira client from a host and credentials.
///
/// `api_version` defaults to 3.
pub fn create_jira_client(host: &str, username: &str, api_token: &str, api_version: Option<u32>) -> Result<JiraClient> {
  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };
  let base_url = api_base_url(host, api_version.unwrap_or(DEFAULT_API_VERSION))?;

  Ok(JiraClient::new(&base_url, auth))
}
