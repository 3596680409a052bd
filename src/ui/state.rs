use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use profile_api::{ProfileRecord, ProfileSource};
use ratatui_image::picker::Picker;
use serde::Serialize;
use thiserror::Error;
use throbber_widgets_tui::ThrobberState;

use super::avatar::AvatarImage;
use super::config::UiConfig;
use super::input::QueryInput;
use crate::theme::Theme;

mod lookup_runtime;

pub(crate) use lookup_runtime::LookupRuntime;

/// What the explorer is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(ProfileRecord),
    Failure(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn profile(&self) -> Option<&ProfileRecord> {
        match self {
            Self::Success(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// How responses that arrive out of order are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResponsePolicy {
    /// Only the response to the most recent search is shown; older ones are
    /// dropped when they arrive.
    #[default]
    Latest,
    /// Every response is shown as it arrives, so the slowest one wins.
    LastArrival,
}

impl ResponsePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::LastArrival => "last-arrival",
        }
    }
}

impl fmt::Display for ResponsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown response policy '{0}' (expected 'latest' or 'last-arrival')")]
pub struct ParsePolicyError(String);

impl FromStr for ResponsePolicy {
    type Err = ParsePolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "latest" => Ok(Self::Latest),
            "last-arrival" | "last" => Ok(Self::LastArrival),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}

/// Result handed back when the user leaves the explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplorerOutcome {
    pub query: String,
    /// The profile on screen at exit, if any.
    pub profile: Option<ProfileRecord>,
}

/// The single explorer component: query input, lookup state and renderer.
pub struct ProfileExplorer {
    pub query_input: QueryInput,
    pub state: RequestState,
    pub theme: Theme,
    /// Avatar of the displayed profile, when the terminal can draw it.
    pub(crate) avatar: Option<AvatarImage>,
    pub(crate) ui: UiConfig,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) lookups: LookupRuntime,
}

impl ProfileExplorer {
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self::with_policy(source, ResponsePolicy::default())
    }

    pub fn with_policy(source: Arc<dyn ProfileSource>, policy: ResponsePolicy) -> Self {
        let mut explorer = Self {
            query_input: QueryInput::default(),
            state: RequestState::Idle,
            theme: Theme::default(),
            avatar: None,
            ui: UiConfig::default(),
            throbber_state: ThrobberState::default(),
            lookups: LookupRuntime::new(source, policy),
        };
        explorer.restyle_input();
        explorer
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.restyle_input();
    }

    pub fn set_ui_config(&mut self, ui: UiConfig) {
        self.ui = ui;
        self.restyle_input();
    }

    /// Draw avatars with `picker`; lookups issued from now on fetch them.
    pub fn set_avatar_picker(&mut self, picker: Option<Picker>) {
        self.lookups.set_picker(picker);
    }

    fn restyle_input(&mut self) {
        self.query_input.apply_style(&self.ui.placeholder, &self.theme);
    }

    pub fn response_policy(&self) -> ResponsePolicy {
        self.lookups.policy()
    }

    pub fn query(&self) -> &str {
        self.query_input.text()
    }

    /// Number of lookups issued so far.
    pub fn issued_lookups(&self) -> u64 {
        self.lookups.issued_count()
    }

    pub fn outcome(&self) -> ExplorerOutcome {
        ExplorerOutcome {
            query: self.query().to_string(),
            profile: self.state.profile().cloned(),
        }
    }
}
