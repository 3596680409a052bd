use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow, bail, ensure};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use profile_explorer::{ClientOptions, ResponsePolicy, Theme, app_dirs, theme};

use crate::cli::{CliArgs, OutputFormat};

const ENV_PREFIX: &str = "profile_explorer";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    api: ApiSection,
    ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    base_url: Option<String>,
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    title: Option<String>,
    initial_query: Option<String>,
    theme: Option<String>,
    responses: Option<String>,
}

pub struct ResolvedConfig {
    pub client: ClientOptions,
    pub title: Option<String>,
    pub initial_query: String,
    pub theme_name: String,
    pub theme: Theme,
    pub responses: ResponsePolicy,
}

impl ResolvedConfig {
    /// Print the effective configuration. In JSON mode stdout carries only
    /// the payload, so the summary goes to `stderr`.
    pub(crate) fn print_summary(
        &self,
        format: OutputFormat,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> io::Result<()> {
        match format {
            OutputFormat::Plain => self.write_summary(stdout),
            OutputFormat::Json => self.write_summary(stderr),
        }
    }

    pub fn write_summary(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Effective configuration:")?;
        writeln!(out, "  API base URL: {}", self.client.base_url)?;
        writeln!(out, "  User agent: {}", self.client.user_agent)?;
        writeln!(out, "  Timeout: {}s", self.client.timeout.as_secs())?;
        writeln!(out, "  UI theme: {}", self.theme_name)?;
        writeln!(out, "  Responses: {}", self.responses)?;
        if let Some(title) = &self.title {
            writeln!(out, "  Title: {title}")?;
        }
        if !self.initial_query.is_empty() {
            writeln!(out, "  Initial query: {}", self.initial_query)?;
        }
        Ok(())
    }
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    load_with_environment(cli, environment())
}

fn load_with_environment(cli: &CliArgs, env: Environment) -> Result<ResolvedConfig> {
    let builder = build_config(cli, env)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn build_config(cli: &CliArgs, env: Environment) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(env);

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".profile-explorer.toml"));
        files.push(current_dir.join("profile-explorer.toml"));
    }

    files
}

impl RawConfig {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(url) = cli.api_url.clone() {
            self.api.base_url = Some(url);
        }
        if let Some(secs) = cli.timeout_secs {
            self.api.timeout_secs = Some(secs);
        }

        if let Some(title) = cli.title.clone() {
            self.ui.title = Some(title);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
        if let Some(responses) = cli.responses {
            self.ui.responses = Some(ResponsePolicy::from(responses).to_string());
        }
    }

    fn resolve(self) -> Result<ResolvedConfig> {
        let mut client = ClientOptions::default();
        if let Some(url) = self.api.base_url {
            let url = url.trim().to_string();
            ensure!(!url.is_empty(), "api.base_url must not be empty");
            client.base_url = url;
        }
        if let Some(agent) = self.api.user_agent {
            let agent = agent.trim().to_string();
            ensure!(!agent.is_empty(), "api.user_agent must not be empty");
            client.user_agent = agent;
        }
        if let Some(secs) = self.api.timeout_secs {
            ensure!(secs > 0, "api.timeout_secs must be at least 1");
            client.timeout = Duration::from_secs(secs);
        }

        let theme_name = self
            .ui
            .theme
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| theme::DEFAULT_NAME.to_string());
        let Some(theme) = theme::by_name(&theme_name) else {
            bail!(
                "unknown theme '{theme_name}' (available: {})",
                theme::names().join(", ")
            );
        };

        let responses = match self.ui.responses {
            Some(value) => value.parse::<ResponsePolicy>()?,
            None => ResponsePolicy::default(),
        };

        let title = self
            .ui
            .title
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty());

        Ok(ResolvedConfig {
            client,
            title,
            initial_query: self.ui.initial_query.unwrap_or_default(),
            theme_name,
            theme,
            responses,
        })
    }
}
