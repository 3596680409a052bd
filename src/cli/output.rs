use std::fmt::Write;

use anyhow::Result;
use profile_api::ProfileRecord;
use profile_explorer::ExplorerOutcome;
use serde_json::json;

/// Multi-line plain-text summary of a profile.
pub(crate) fn format_profile_plain(record: &ProfileRecord) -> String {
    let mut out = String::new();
    match &record.name {
        Some(name) => {
            let _ = writeln!(out, "{name} (@{})", record.login);
        }
        None => {
            let _ = writeln!(out, "@{}", record.login);
        }
    }
    let _ = writeln!(out, "{}", record.html_url);
    if let Some(bio) = &record.bio {
        let _ = writeln!(out, "{bio}");
    }
    let _ = writeln!(
        out,
        "Followers: {}  Following: {}  Public repositories: {}",
        record.followers, record.following, record.public_repos
    );
    for row in record.detail_rows() {
        let _ = writeln!(out, "{}: {}", row.kind.label(), row.text);
    }
    let _ = write!(out, "Joined GitHub: {}", record.joined_on());
    out
}

/// Print a plain-text representation of the explorer outcome.
pub(crate) fn print_plain(outcome: &ExplorerOutcome) {
    match &outcome.profile {
        Some(record) => println!("{}", format_profile_plain(record)),
        None => println!("No profile shown (query: '{}')", outcome.query),
    }
}

/// Format the explorer outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ExplorerOutcome) -> Result<String> {
    let payload = json!({
        "query": outcome.query,
        "profile": outcome.profile,
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the explorer outcome.
pub(crate) fn print_json(outcome: &ExplorerOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}
