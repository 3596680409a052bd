//! Data types and the lookup client behind `profile-explorer`.
//!
//! [`ProfileRecord`] mirrors the public `GET /users/{username}` response,
//! [`ProfileSource`] is the seam the UI talks to, and [`GitHubClient`] is the
//! HTTP implementation of it.

pub mod client;
pub mod error;
pub mod record;

pub use client::{
    AVATAR_SIZE, ClientOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, GitHubClient,
    ProfileSource, interpret_response,
};
pub use error::{ClientError, LookupError, USER_FACING_MESSAGE};
pub use record::{DetailKind, DetailRow, ProfileRecord};
pub use reqwest::StatusCode;
#[cfg(any(test, feature = "test-fixtures"))]
pub use record::fixtures;
