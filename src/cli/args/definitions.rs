use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, ResponsesArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `profile-explorer` binary.
#[derive(Parser, Debug)]
#[command(
    name = "profile-explorer",
    version,
    long_version = long_version(),
    about = "Look up public GitHub profiles from the terminal",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "PROFILE_EXPLORER_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "USER",
        help = "Search this username as soon as the explorer opens (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the title shown above the search bar (default: GitHub Profile Explorer)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "api-url",
        value_name = "URL",
        help = "Base URL of the GitHub API (default: https://api.github.com)"
    )]
    pub(crate) api_url: Option<String>,
    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "Request timeout in seconds (default: 10)"
    )]
    pub(crate) timeout_secs: Option<u64>,
    #[arg(
        long,
        value_enum,
        help = "How responses that arrive out of order are applied (default: latest)"
    )]
    pub(crate) responses: Option<ResponsesArg>,
    #[arg(
        short = 'l',
        long,
        value_name = "USER",
        help = "Look up one user without the interactive UI and print the result"
    )]
    pub(crate) lookup: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
    pub(crate) output: OutputFormat,
}
