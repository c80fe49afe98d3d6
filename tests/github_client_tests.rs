//! Unit tests for GitHub client construction and input validation
//! Construction must not touch the network; bad repository names must fail
//! before any request is sent

use github_client::{GitHubClient, RequestError, parse_repo_name};

#[test]
fn test_construction_performs_no_network_io() {
    // No server exists at this address; construction still succeeds
    let client = GitHubClient::with_base_url("any-token", "http://127.0.0.1:1");
    assert_eq!(client.token(), "any-token");
}

#[test]
fn test_construction_accepts_empty_token() {
    // Token format is not validated up front; an empty token surfaces as
    // an authentication failure on first use
    let client = GitHubClient::new("");
    assert_eq!(client.token(), "");
}

#[test]
fn test_client_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GitHubClient>();
}

#[tokio::test]
async fn test_get_commits_rejects_bare_repo_name_without_request() {
    // Unroutable base URL: if validation did not short-circuit, this
    // would come back as a Network error instead
    let client = GitHubClient::with_base_url("test-token", "http://127.0.0.1:1");
    let err = client.get_commits("just-a-repo").await.unwrap_err();

    match err {
        RequestError::InvalidRepoName(name) => assert_eq!(name, "just-a-repo"),
        other => panic!("expected InvalidRepoName, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_user_rejects_empty_username_without_request() {
    // An empty segment would hit the list-users route on the real API
    let client = GitHubClient::with_base_url("test-token", "http://127.0.0.1:1");
    let err = client.get_user("").await.unwrap_err();

    assert!(matches!(err, RequestError::InvalidUsername(_)));
}

#[tokio::test]
async fn test_get_user_rejects_username_with_slash_without_request() {
    let client = GitHubClient::with_base_url("test-token", "http://127.0.0.1:1");
    let err = client.get_user("octocat/followers").await.unwrap_err();

    match err {
        RequestError::InvalidUsername(name) => assert_eq!(name, "octocat/followers"),
        other => panic!("expected InvalidUsername, got {other:?}"),
    }
}

#[test]
fn test_parse_repo_name_round_trip() {
    let (owner, repo) = parse_repo_name("rust-lang/rust").unwrap();
    assert_eq!(owner, "rust-lang");
    assert_eq!(repo, "rust");
}

#[test]
fn test_parse_repo_name_rejects_url_forms() {
    assert!(parse_repo_name("https://github.com/owner/repo").is_err());
    assert!(parse_repo_name("github.com/owner/repo").is_err());
}
