use reqwest::StatusCode;
use thiserror::Error;

/// Message shown to the user for every failed lookup, whatever the cause.
pub const USER_FACING_MESSAGE: &str = "User not found";

/// Why a profile lookup failed.
///
/// The variants exist for logging; the UI collapses all of them into
/// [`USER_FACING_MESSAGE`].
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("profile API answered {0}")]
    Status(StatusCode),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("malformed profile body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("cannot build a request URL for {query:?} against {base}")]
    InvalidQuery { base: String, query: String },
    #[error("profile carries an unusable avatar URL {0:?}")]
    InvalidAvatarUrl(String),
}

impl LookupError {
    /// The message presented in place of the underlying cause.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        USER_FACING_MESSAGE
    }

    /// True when the API itself reported that the user does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(status) if *status == StatusCode::NOT_FOUND)
    }
}

/// Failure to set up a [`GitHubClient`](crate::GitHubClient).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base URL {0:?}")]
    InvalidBaseUrl(String),
    #[error("user agent {0:?} is not a valid header value")]
    InvalidUserAgent(String),
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}
