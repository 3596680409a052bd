use std::sync::Arc;

use anyhow::{Context, Result};
use profile_api::{ClientOptions, GitHubClient, ProfileSource};

use super::config::UiConfig;
use super::state::{ExplorerOutcome, ProfileExplorer, ResponsePolicy};
use crate::theme::Theme;

/// Builder for the interactive explorer.
///
/// Collects the lookup backend, labels, theme and initial query before the
/// terminal is taken over by [`ExplorerUi::run`].
pub struct ExplorerUi {
    source: Arc<dyn ProfileSource>,
    initial_query: Option<String>,
    ui_config: Option<UiConfig>,
    theme: Option<Theme>,
    policy: ResponsePolicy,
}

impl ExplorerUi {
    /// Explorer backed by an arbitrary profile source.
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self {
            source,
            initial_query: None,
            ui_config: None,
            theme: None,
            policy: ResponsePolicy::default(),
        }
    }

    /// Explorer backed by the GitHub API client.
    pub fn github(options: &ClientOptions) -> Result<Self> {
        let client = GitHubClient::new(options)
            .with_context(|| format!("failed to set up client for {}", options.base_url))?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = Some(query.into());
        self
    }

    pub fn with_ui_config(mut self, config: UiConfig) -> Self {
        self.ui_config = Some(config);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_response_policy(mut self, policy: ResponsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Assemble the explorer without starting the terminal loop.
    pub fn build(self) -> ProfileExplorer {
        let mut explorer = ProfileExplorer::with_policy(self.source, self.policy);
        if let Some(query) = self.initial_query {
            explorer.set_query(query);
        }
        if let Some(ui) = self.ui_config {
            explorer.set_ui_config(ui);
        }
        if let Some(theme) = self.theme {
            explorer.set_theme(theme);
        }
        explorer
    }

    /// Run the interactive explorer with the configured options.
    pub fn run(self) -> Result<ExplorerOutcome> {
        self.build().run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SOLARIZED;
    use crate::ui::RequestState;
    use crate::ui::test_support::ScriptedSource;

    #[test]
    fn build_applies_every_option() {
        let explorer = ExplorerUi::new(Arc::new(ScriptedSource::default()))
            .with_initial_query("octocat")
            .with_ui_config(UiConfig::default().with_title("Lookup"))
            .with_theme(SOLARIZED)
            .with_response_policy(ResponsePolicy::LastArrival)
            .build();

        assert_eq!(explorer.query(), "octocat");
        assert_eq!(explorer.ui.title, "Lookup");
        assert_eq!(explorer.theme, SOLARIZED);
        assert_eq!(explorer.response_policy(), ResponsePolicy::LastArrival);
        assert_eq!(explorer.state, RequestState::Idle);
        assert_eq!(explorer.issued_lookups(), 0);
    }

    #[test]
    fn theme_defaults_when_not_chosen() {
        let explorer = ExplorerUi::new(Arc::new(ScriptedSource::default())).build();
        assert_eq!(explorer.theme, Theme::default());
    }

    #[test]
    fn github_builder_rejects_bad_base_url() {
        let options = ClientOptions {
            base_url: "not a url".to_string(),
            ..ClientOptions::default()
        };
        let err = ExplorerUi::github(&options)
            .err()
            .expect("invalid base url");
        assert!(err.to_string().contains("not a url"));
    }
}
