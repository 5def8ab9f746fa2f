//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by Jira resource: projects and their
//! categories, project roles, group membership, and issue search.

pub mod groups;
pub mod projects;
pub mod roles;
pub mod search;
