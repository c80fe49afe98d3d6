//! GitHub client implementation
//!
//! This module provides the main `GitHubClient` struct which serves as the
//! entry point for all GitHub API operations. The client encapsulates the
//! access token and HTTP client state; the individual API endpoints are
//! organized into separate modules that extend the client with `impl`
//! blocks:
//! - `commits.rs` - Commit history retrieval
//! - `users.rs` - User profile retrieval

use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::RequestError;

/// Base URL for the GitHub REST API
const GITHUB_API_BASE: &str = "https://api.github.com";

/// GitHub REST API version sent with every request
const API_VERSION: &str = "2022-11-28";

const DEFAULT_USER_AGENT: &str = "github-client";

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// GitHub API client for making authenticated requests
///
/// The client holds the access token and the underlying HTTP client; it has
/// no mutable state, so a single instance can be shared freely across tasks.
/// Clone is cheap - `reqwest::Client` uses Arc internally for connection
/// pooling.
///
/// ## Example
///
/// ```rust,no_run
/// use github_client::GitHubClient;
///
/// # async fn example() -> Result<(), github_client::RequestError> {
/// let client = GitHubClient::new("your_github_token");
///
/// let commits = client.get_commits("rust-lang/rust").await?;
/// let user = client.get_user("octocat").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    token: String,
    base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client with a personal access token
    ///
    /// No network activity happens at construction and the token is not
    /// validated; an empty or malformed token surfaces as an
    /// authentication failure on first use.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, GITHUB_API_BASE)
    }

    /// Create a client against a non-default API endpoint
    ///
    /// Useful for GitHub Enterprise instances and for pointing the client
    /// at a local test server.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the access token configured on this client
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Issue an authenticated GET request and decode the JSON response
    ///
    /// `resource` names what is being fetched and ends up in the
    /// `NotFound` error for 404 responses.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
    ) -> Result<T, RequestError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = "GET", url = %url, "sending GitHub API request");

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, url = %url, "GitHub API request failed");
            return Err(RequestError::from_status(status, resource, &body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| RequestError::MalformedResponse(err.to_string()))
    }
}
