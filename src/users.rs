//! User profile operations

use serde::Deserialize;

use crate::client::GitHubClient;
use crate::error::RequestError;
use crate::util::validate_username;

/// A user profile as returned by the `/users/{username}` API
#[derive(Deserialize, Debug, Clone)]
pub struct User {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: String,
}

impl GitHubClient {
    /// Get a user's profile by username
    ///
    /// # Errors
    /// Returns an error if the username is empty or contains `/` (no
    /// request is sent), the request fails, the token is rejected, the
    /// user does not exist, or the response cannot be parsed.
    pub async fn get_user(&self, username: &str) -> Result<User, RequestError> {
        validate_username(username)?;
        let path = format!("/users/{}", username);
        self.get_json(&path, &format!("user {}", username)).await
    }
}
