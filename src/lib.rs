//! GitHub API client library
//!
//! This library provides a small authenticated client for the GitHub REST
//! API, covering commit history and user profile retrieval.
//!
//! ## Modules
//!
//! - [`client`]: Core GitHub client implementation
//! - [`commits`]: Commit history retrieval
//! - [`users`]: User profile retrieval
//! - [`error`]: Request error types
//! - [`util`]: Utility functions for GitHub operations

mod client;
mod commits;
mod error;
mod users;
mod util;

// Re-export public API
pub use client::GitHubClient;
pub use commits::{Commit, CommitDetail, CommitSignature, UserSummary};
pub use error::RequestError;
pub use users::User;
pub use util::parse_repo_name;
