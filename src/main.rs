mod cli;
mod settings;
mod workflow;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use cli::{OutputFormat, format_profile_plain, parse_cli, print_json, print_plain};
use profile_explorer::logging::{self, LogTarget};
use profile_explorer::{ExplorerOutcome, theme};
use settings::ResolvedConfig;
use workflow::ExplorerWorkflow;

fn main() -> Result<ExitCode> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in theme::names() {
            println!("{name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary(
            cli.output,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        )?;
    }

    match cli.lookup.as_deref() {
        Some(username) => run_lookup(cli.output, &resolved, username),
        None => run_explorer(cli.output, resolved),
    }
}

/// Look up a single user and print the profile; failures exit with status 1.
fn run_lookup(format: OutputFormat, settings: &ResolvedConfig, username: &str) -> Result<ExitCode> {
    logging::initialize(LogTarget::Stderr);

    let record = match workflow::lookup_once(settings, username) {
        Ok(record) => record,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    match format {
        OutputFormat::Plain => println!("{}", format_profile_plain(&record)),
        OutputFormat::Json => print_json(&ExplorerOutcome {
            query: username.to_string(),
            profile: Some(record),
        })?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Run the interactive explorer and print the outcome in the chosen format.
fn run_explorer(format: OutputFormat, settings: ResolvedConfig) -> Result<ExitCode> {
    logging::initialize(LogTarget::File);

    let workflow = ExplorerWorkflow::from_config(settings)?;
    let outcome = workflow.run()?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(ExitCode::SUCCESS)
}
