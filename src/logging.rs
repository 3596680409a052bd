//! Structured logging setup.
//!
//! The interactive UI owns the terminal, so log lines go to a file in the
//! data directory. Headless lookups log to stderr instead. Verbosity comes
//! from `PROFILE_EXPLORER_LOG` using the usual `EnvFilter` syntax
//! (`debug`, `profile_api=trace`, ...).

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

pub const LOG_FILTER_ENV: &str = "PROFILE_EXPLORER_LOG";
const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_NAME: &str = "profile-explorer.log";

/// Where log output should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to the log file in the data directory.
    File,
    Stderr,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file used by [`LogTarget::File`].
pub fn log_file_path() -> Result<PathBuf> {
    Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Install the global subscriber. Calling this twice is harmless.
///
/// When the log file cannot be opened the explorer still runs, with log
/// output discarded.
pub fn initialize(target: LogTarget) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true);

    // A second initialisation (tests, embedding) keeps the first subscriber.
    match target {
        LogTarget::Stderr => {
            let _ = builder.with_writer(io::stderr).try_init();
        }
        LogTarget::File => {
            let builder = builder.with_ansi(false);
            match log_file_path().and_then(|path| open_log_file(&path)) {
                Ok(file) => {
                    let _ = builder.with_writer(Mutex::new(file)).try_init();
                }
                Err(err) => {
                    eprintln!("warning: {err:#}; logging is disabled");
                    let _ = builder.with_writer(io::sink).try_init();
                }
            }
        }
    }
}
