//! Test utilities shared across the jira-cloud workspace
//!
//! This crate provides common testing infrastructure including:
//! - Temporary home directories with a `.netrc` ([`NetrcGuard`])
//! - Temporary `jira.toml` files ([`ConfigFileGuard`])
//! - Scoped environment variable overrides ([`EnvVarGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod config;
pub mod env;
pub mod netrc;

// Re-export commonly used items
pub use config::ConfigFileGuard;
pub use env::EnvVarGuard;
pub use netrc::NetrcGuard;
