//! Request error types

use reqwest::StatusCode;
use thiserror::Error;

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Failure modes for GitHub API requests
///
/// Every operation returns either a complete result or one of these
/// variants, never a mixture.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request never completed (DNS, connect, TLS, or timeout failure)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API rejected the access token (HTTP 401)
    #[error("authentication failed: token missing, invalid, or expired")]
    AuthenticationFailed,

    /// The token lacks permission for the resource (HTTP 403)
    #[error("access forbidden: {0}")]
    Forbidden(String),

    /// The requested repository or user does not exist (HTTP 404)
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The response body could not be decoded into the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The repository name was not of the form `owner/repo`
    #[error("invalid repository name '{0}', expected 'owner/repo'")]
    InvalidRepoName(String),

    /// The username was empty or contained a path separator
    #[error("invalid username '{0}'")]
    InvalidUsername(String),

    /// Any other non-success status returned by the API
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl RequestError {
    /// Map a non-success HTTP status to an error variant
    ///
    /// `resource` names what was requested and `body` is the raw response
    /// body, from which the GitHub error payload's `message` field is
    /// extracted when present.
    pub(crate) fn from_status(status: StatusCode, resource: &str, body: &str) -> Self {
        let message = api_message(body);
        match status.as_u16() {
            401 => RequestError::AuthenticationFailed,
            403 => RequestError::Forbidden(message),
            404 => RequestError::NotFound(resource.to_string()),
            _ => RequestError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Extract the `message` field from a GitHub error payload, falling back to
/// the truncated raw body
fn api_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = value["message"].as_str()
    {
        return message.to_string();
    }
    truncate_body(body)
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }
    // Back off to a char boundary; a fixed byte offset can land inside a
    // multibyte UTF-8 character
    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!(
        "{}... (truncated, {} total bytes)",
        &body[..end],
        body.len()
    )
}
