use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Snapshot of the fields returned by `GET /users/{username}`.
///
/// A record is replaced wholesale on every successful lookup; nothing here is
/// ever patched in place. Optional text fields treat an empty string the same
/// as a missing or `null` value, since the API reports an unset blog as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub login: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub name: Option<String>,
    pub avatar_url: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub blog: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub twitter_username: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub created_at: DateTime<Utc>,
    pub html_url: String,
}

/// Kind of an optional contact row shown beneath the profile statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailKind {
    Location,
    Company,
    Blog,
    Twitter,
}

impl DetailKind {
    /// Short label rendered in front of the row value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::Company => "Company",
            Self::Blog => "Blog",
            Self::Twitter => "Twitter",
        }
    }
}

/// One present optional field, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub kind: DetailKind,
    pub text: String,
    /// Link target when the row points somewhere.
    pub link: Option<String>,
}

impl ProfileRecord {
    /// The display name, falling back to the login for accounts without one.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }

    /// Profile link for the twitter handle, if the user published one.
    #[must_use]
    pub fn twitter_url(&self) -> Option<String> {
        self.twitter_username
            .as_deref()
            .map(|handle| format!("https://twitter.com/{handle}"))
    }

    /// Calendar date the account was created, as `YYYY-MM-DD`.
    #[must_use]
    pub fn joined_on(&self) -> String {
        self.created_at.date_naive().format("%Y-%m-%d").to_string()
    }

    /// Rows for the optional contact fields that are actually present.
    ///
    /// Absent fields produce no row at all.
    #[must_use]
    pub fn detail_rows(&self) -> Vec<DetailRow> {
        let mut rows = Vec::new();
        if let Some(location) = &self.location {
            rows.push(DetailRow {
                kind: DetailKind::Location,
                text: location.clone(),
                link: None,
            });
        }
        if let Some(company) = &self.company {
            rows.push(DetailRow {
                kind: DetailKind::Company,
                text: company.clone(),
                link: None,
            });
        }
        if let Some(blog) = &self.blog {
            rows.push(DetailRow {
                kind: DetailKind::Blog,
                text: blog.clone(),
                link: Some(blog.clone()),
            });
        }
        if let Some(handle) = &self.twitter_username {
            rows.push(DetailRow {
                kind: DetailKind::Twitter,
                text: format!("@{handle}"),
                link: self.twitter_url(),
            });
        }
        rows
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.is_empty()))
}

/// Captured API bodies shared by the tests of this crate and its dependents.
#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures {
    use super::ProfileRecord;

    /// Body captured from `GET https://api.github.com/users/octocat`, trimmed
    /// to the fields the explorer reads plus a few it ignores.
    pub const OCTOCAT: &str = r#"{
        "login": "octocat",
        "id": 583231,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "type": "User",
        "name": "The Octocat",
        "company": "@github",
        "blog": "https://github.blog",
        "location": "San Francisco",
        "email": null,
        "bio": null,
        "twitter_username": null,
        "public_repos": 8,
        "followers": 17602,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z"
    }"#;

    /// [`OCTOCAT`] decoded.
    ///
    /// # Panics
    ///
    /// Never for the bundled body.
    #[must_use]
    pub fn octocat() -> ProfileRecord {
        serde_json::from_str(OCTOCAT).expect("fixture decodes")
    }
}
