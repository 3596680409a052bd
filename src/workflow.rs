use anyhow::{Context, Result, bail, ensure};
use profile_explorer::{
    ExplorerOutcome, ExplorerUi, GitHubClient, ProfileRecord, ProfileSource, ResponsePolicy, Theme,
    USER_FACING_MESSAGE, UiConfig,
};
use tracing::{info, warn};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive explorer.
pub(crate) struct ExplorerWorkflow {
    explorer_ui: ExplorerUi,
}

impl ExplorerWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let explorer_ui = ExplorerUiFactory::build(config)?;
        Ok(Self { explorer_ui })
    }

    pub(crate) fn run(self) -> Result<ExplorerOutcome> {
        self.explorer_ui.run()
    }
}

/// Helper for translating resolved configuration into a configured `ExplorerUi`.
struct ExplorerUiFactory {
    explorer_ui: ExplorerUi,
}

impl ExplorerUiFactory {
    fn build(config: ResolvedConfig) -> Result<ExplorerUi> {
        let ResolvedConfig {
            client,
            title,
            initial_query,
            theme,
            responses,
            ..
        } = config;

        let builder = Self {
            explorer_ui: ExplorerUi::github(&client)?,
        }
        .with_title(title)
        .with_initial_query(initial_query)
        .with_theme(theme)
        .with_response_policy(responses);

        Ok(builder.finish())
    }

    fn with_title(mut self, title: Option<String>) -> Self {
        if let Some(title) = title {
            self.explorer_ui = self
                .explorer_ui
                .with_ui_config(UiConfig::default().with_title(title));
        }
        self
    }

    fn with_initial_query(mut self, query: String) -> Self {
        if !query.is_empty() {
            self.explorer_ui = self.explorer_ui.with_initial_query(query);
        }
        self
    }

    fn with_theme(mut self, theme: Theme) -> Self {
        self.explorer_ui = self.explorer_ui.with_theme(theme);
        self
    }

    fn with_response_policy(mut self, policy: ResponsePolicy) -> Self {
        self.explorer_ui = self.explorer_ui.with_response_policy(policy);
        self
    }

    fn finish(self) -> ExplorerUi {
        self.explorer_ui
    }
}

/// One lookup without the terminal UI.
///
/// The error carries the same fixed message the explorer shows; the cause is
/// only logged.
pub(crate) fn lookup_once(config: &ResolvedConfig, username: &str) -> Result<ProfileRecord> {
    let client = GitHubClient::new(&config.client)
        .with_context(|| format!("failed to set up client for {}", config.client.base_url))?;
    lookup_with(&client, username)
}

fn lookup_with(source: &dyn ProfileSource, username: &str) -> Result<ProfileRecord> {
    ensure!(!username.is_empty(), "username must not be empty");
    match source.fetch(username) {
        Ok(record) => {
            info!(login = %record.login, "lookup succeeded");
            Ok(record)
        }
        Err(err) => {
            warn!(query = username, %err, "lookup failed");
            bail!(USER_FACING_MESSAGE)
        }
    }
}
