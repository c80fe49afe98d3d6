//! Utility functions for GitHub operations

use crate::error::RequestError;

/// Split a full repository name into owner and repository
///
/// # Arguments
/// * `repo_name` - Full repository name of the form `owner/repo`
///
/// # Returns
/// A tuple containing (owner, repository_name)
///
/// # Errors
/// Returns `RequestError::InvalidRepoName` if the name does not contain
/// exactly one `/` separating two non-empty components
pub fn parse_repo_name(repo_name: &str) -> Result<(String, String), RequestError> {
    let mut parts = repo_name.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(RequestError::InvalidRepoName(repo_name.to_string())),
    }
}

/// Check that a username is usable as a single path segment
///
/// An empty name would target the list-users endpoint and a `/` would
/// silently route to a different resource, so both are rejected before
/// any request is sent.
pub(crate) fn validate_username(username: &str) -> Result<(), RequestError> {
    if username.is_empty() || username.contains('/') {
        return Err(RequestError::InvalidUsername(username.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_name() {
        let (owner, repo) = parse_repo_name("octocat/Hello-World").unwrap();
        assert_eq!(owner, "octocat");
        assert_eq!(repo, "Hello-World");
    }

    #[test]
    fn test_parse_repo_name_missing_slash() {
        assert!(matches!(
            parse_repo_name("just-a-repo"),
            Err(RequestError::InvalidRepoName(_))
        ));
    }

    #[test]
    fn test_parse_repo_name_empty_components() {
        assert!(parse_repo_name("/repo").is_err());
        assert!(parse_repo_name("owner/").is_err());
        assert!(parse_repo_name("/").is_err());
    }

    #[test]
    fn test_parse_repo_name_too_many_components() {
        assert!(parse_repo_name("owner/repo/extra").is_err());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("octocat").is_ok());
        assert!(matches!(
            validate_username(""),
            Err(RequestError::InvalidUsername(_))
        ));
        assert!(matches!(
            validate_username("octocat/repos"),
            Err(RequestError::InvalidUsername(_))
        ));
    }
}
