use clap::{CommandFactory, Parser};

use super::options::ResponsesArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
    CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
    let parsed = CliArgs::try_parse_from(["profile-explorer"]).expect("parses");
    assert_eq!(parsed.output, OutputFormat::Plain);
    assert!(parsed.lookup.is_none());
    assert!(parsed.responses.is_none());
}

#[test]
fn config_flag_can_repeat() {
    let parsed = CliArgs::try_parse_from([
        "profile-explorer",
        "-c",
        "one.toml",
        "--config",
        "two.toml",
    ])
    .expect("parses");
    assert_eq!(parsed.config.len(), 2);
}

#[test]
fn lookup_mode_flags_parse() {
    let parsed = CliArgs::try_parse_from([
        "profile-explorer",
        "-l",
        "octocat",
        "-o",
        "json",
        "--timeout",
        "3",
        "--responses",
        "last-arrival",
    ])
    .expect("parses");
    assert_eq!(parsed.lookup.as_deref(), Some("octocat"));
    assert_eq!(parsed.output, OutputFormat::Json);
    assert_eq!(parsed.timeout_secs, Some(3));
    assert_eq!(parsed.responses, Some(ResponsesArg::LastArrival));
}

#[test]
fn unknown_response_policy_is_rejected() {
    assert!(CliArgs::try_parse_from(["profile-explorer", "--responses", "newest"]).is_err());
}
