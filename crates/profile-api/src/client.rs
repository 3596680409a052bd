use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::error::{ClientError, LookupError};
use crate::record::ProfileRecord;

/// Public endpoint queried when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
/// GitHub rejects anonymous requests that do not identify a client.
pub const DEFAULT_USER_AGENT: &str = concat!("profile-explorer/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Edge length, in pixels, requested from the avatar CDN.
pub const AVATAR_SIZE: u32 = 96;

const ACCEPT_JSON: &str = "application/vnd.github+json";

/// Anything that can resolve a username into a [`ProfileRecord`].
///
/// Lookups are blocking; callers run them off the UI thread.
pub trait ProfileSource: Send + Sync {
    fn fetch(&self, username: &str) -> Result<ProfileRecord, LookupError>;

    /// Raw image bytes for the record's avatar, when the source serves them.
    fn fetch_avatar(&self, _record: &ProfileRecord) -> Result<Option<Vec<u8>>, LookupError> {
        Ok(None)
    }
}

/// Connection settings for [`GitHubClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Unauthenticated client for `GET /users/{username}`.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base: Url,
}

impl GitHubClient {
    /// Build a client for the given options.
    pub fn new(options: &ClientOptions) -> Result<Self, ClientError> {
        let base = Url::parse(&options.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ClientError::InvalidBaseUrl(options.base_url.clone()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
        let agent = HeaderValue::from_str(&options.user_agent)
            .map_err(|_| ClientError::InvalidUserAgent(options.user_agent.clone()))?;
        headers.insert(USER_AGENT, agent);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { http, base })
    }

    /// URL of the profile resource for `username`.
    ///
    /// The username becomes a single path segment; characters that are not
    /// valid in a segment are percent-encoded.
    pub fn endpoint(&self, username: &str) -> Result<Url, LookupError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| LookupError::InvalidQuery {
                base: self.base.to_string(),
                query: username.to_string(),
            })?
            .pop_if_empty()
            .push("users")
            .push(username);
        Ok(url)
    }

    /// Avatar URL for `record`, asking the CDN for an [`AVATAR_SIZE`] square.
    pub fn avatar_endpoint(record: &ProfileRecord) -> Result<Url, LookupError> {
        let mut url = Url::parse(&record.avatar_url)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or_else(|| LookupError::InvalidAvatarUrl(record.avatar_url.clone()))?;
        url.query_pairs_mut().append_pair("s", &AVATAR_SIZE.to_string());
        Ok(url)
    }
}

impl ProfileSource for GitHubClient {
    fn fetch(&self, username: &str) -> Result<ProfileRecord, LookupError> {
        let url = self.endpoint(username)?;
        debug!(%url, "requesting profile");

        let response = self.http.get(url).send().map_err(LookupError::Transport)?;
        let status = response.status();
        let body = response.bytes().map_err(LookupError::Transport)?;
        debug!(%status, bytes = body.len(), "profile response received");

        interpret_response(status, &body)
    }

    fn fetch_avatar(&self, record: &ProfileRecord) -> Result<Option<Vec<u8>>, LookupError> {
        let url = Self::avatar_endpoint(record)?;
        debug!(%url, "requesting avatar");

        let response = self.http.get(url).send().map_err(LookupError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        let body = response.bytes().map_err(LookupError::Transport)?;
        debug!(bytes = body.len(), "avatar received");
        Ok(Some(body.to_vec()))
    }
}

/// Turn a raw response into a record, treating every non-2xx as failure.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<ProfileRecord, LookupError> {
    if !status.is_success() {
        return Err(LookupError::Status(status));
    }
    serde_json::from_slice(body).map_err(LookupError::Decode)
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use super::*;
    use crate::record::fixtures::{OCTOCAT, octocat};

    fn client_for(base_url: &str) -> GitHubClient {
        GitHubClient::new(&ClientOptions {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(2),
            ..ClientOptions::default()
        })
        .expect("client builds")
    }

    #[test]
    fn endpoint_places_username_under_users() {
        let client = client_for(DEFAULT_BASE_URL);
        let url = client.endpoint("octocat").expect("url");
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat");
    }

    #[test]
    fn endpoint_respects_base_path_and_trailing_slash() {
        let client = client_for("http://localhost:8080/api/v3/");
        let url = client.endpoint("octocat").expect("url");
        assert_eq!(url.as_str(), "http://localhost:8080/api/v3/users/octocat");
    }

    #[test]
    fn endpoint_keeps_username_in_one_segment() {
        let client = client_for(DEFAULT_BASE_URL);
        let url = client.endpoint("a/b c").expect("url");
        assert_eq!(url.as_str(), "https://api.github.com/users/a%2Fb%20c");
    }

    #[test]
    fn rejects_unusable_base_url() {
        let options = ClientOptions {
            base_url: "mailto:someone@example.com".to_string(),
            ..ClientOptions::default()
        };
        let err = GitHubClient::new(&options).expect_err("mailto cannot be a base");
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }

    #[test]
    fn rejects_user_agent_that_is_not_a_header_value() {
        let options = ClientOptions {
            user_agent: "explorer\u{e9}/1\n".to_string(),
            ..ClientOptions::default()
        };
        let err = GitHubClient::new(&options).expect_err("newline is not allowed");
        assert!(matches!(err, ClientError::InvalidUserAgent(agent) if agent.ends_with('\n')));
    }

    #[test]
    fn avatar_endpoint_requests_a_sized_square() {
        let url = GitHubClient::avatar_endpoint(&octocat()).expect("url");
        assert_eq!(
            url.as_str(),
            "https://avatars.githubusercontent.com/u/583231?v=4&s=96"
        );
    }

    #[test]
    fn avatar_endpoint_rejects_non_http_urls() {
        let mut record = octocat();
        record.avatar_url = "file:///etc/passwd".to_string();
        let err = GitHubClient::avatar_endpoint(&record).expect_err("file scheme");
        assert!(matches!(err, LookupError::InvalidAvatarUrl(_)));
    }

    #[test]
    fn success_body_decodes_into_record() {
        let record = interpret_response(StatusCode::OK, OCTOCAT.as_bytes()).expect("record");
        assert_eq!(record.login, "octocat");
        assert_eq!(record.followers, 17602);
    }

    #[test]
    fn not_found_is_a_status_failure() {
        let body = br#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#;
        let err = interpret_response(StatusCode::NOT_FOUND, body).expect_err("404 fails");
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "User not found");
    }

    #[test]
    fn malformed_success_body_is_a_decode_failure() {
        let err = interpret_response(StatusCode::OK, b"<html>").expect_err("not json");
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[test]
    fn unreachable_host_is_a_transport_failure() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };
        let client = client_for(&format!("http://127.0.0.1:{port}"));
        let err = client.fetch("octocat").expect_err("nothing is listening");
        assert!(matches!(err, LookupError::Transport(_)));
        assert_eq!(err.user_message(), "User not found");
    }
}
