//! Commit history operations

use serde::Deserialize;

use crate::client::GitHubClient;
use crate::error::RequestError;
use crate::util::parse_repo_name;

/// A single commit as returned by the GitHub commits API
#[derive(Deserialize, Debug, Clone)]
pub struct Commit {
    pub sha: String,
    pub html_url: String,
    pub commit: CommitDetail,
    /// GitHub account of the author, absent when the commit is not linked
    /// to an account
    pub author: Option<UserSummary>,
    pub committer: Option<UserSummary>,
}

/// The git-level portion of a commit
#[derive(Deserialize, Debug, Clone)]
pub struct CommitDetail {
    pub message: String,
    pub author: Option<CommitSignature>,
    pub committer: Option<CommitSignature>,
}

/// Name, email, and timestamp recorded in the git object
#[derive(Deserialize, Debug, Clone)]
pub struct CommitSignature {
    pub name: String,
    pub email: String,
    pub date: String,
}

/// Abbreviated user record embedded in commit responses
#[derive(Deserialize, Debug, Clone)]
pub struct UserSummary {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
}

impl GitHubClient {
    /// Get the commit history of a repository
    ///
    /// # Arguments
    /// * `repo_name` - Full repository name of the form `owner/repo`
    ///
    /// # Returns
    /// The first page of commits in the order the API returns them
    /// (most-recent-first). No pagination is performed.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `repo_name` is not of the form `owner/repo` (no request is sent)
    /// - The request fails or the token is rejected
    /// - The repository does not exist
    /// - The response cannot be parsed
    ///
    /// # Example
    /// ```rust,no_run
    /// use github_client::GitHubClient;
    ///
    /// # async fn example() -> Result<(), github_client::RequestError> {
    /// let client = GitHubClient::new("github_token");
    /// let commits = client.get_commits("octocat/Hello-World").await?;
    /// for commit in &commits {
    ///     println!("{} {}", commit.sha, commit.commit.message);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_commits(&self, repo_name: &str) -> Result<Vec<Commit>, RequestError> {
        let (owner, repo) = parse_repo_name(repo_name)?;
        let path = format!("/repos/{}/{}/commits", owner, repo);
        self.get_json(&path, &format!("repository {}", repo_name))
            .await
    }
}
