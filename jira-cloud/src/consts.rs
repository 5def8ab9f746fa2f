//! Constants for the jira-cloud client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the Jira REST API
pub const ACCEPT: &str = "application/json";

/// Domain that bare site names are expanded under
pub const ATLASSIAN_DOMAIN: &str = "atlassian.net";

/// REST API version used when none is given
pub const DEFAULT_API_VERSION: u32 = 3;

/// Project category queried by `projects` when the caller has no preference
pub const DEFAULT_CATEGORY_ID: u64 = 1000;

/// Page size for `project/search` and `group/member`
pub const LIST_MAX_RESULTS: u32 = 200;

/// Page size for issue search
pub const SEARCH_MAX_RESULTS: u32 = 100;

/// Fields expanded when fetching a single project
pub const PROJECT_EXPAND: &str = "description,lead,issueTypes,url,projectKeys,permissions,insight";
