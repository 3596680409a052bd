//! Core crate exports for building and running the `profile-explorer`
//! terminal interface.
//!
//! The root module re-exports the UI builder and the lookup types from
//! `profile-api` so that embedders can configure the explorer without digging
//! through the module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod theme;
pub mod ui;

pub use profile_api::{
    ClientOptions, GitHubClient, LookupError, ProfileRecord, ProfileSource, USER_FACING_MESSAGE,
};
pub use theme::{Theme, default_theme};
pub use ui::{
    ExplorerOutcome, ExplorerUi, LinkTarget, ProfileExplorer, QueryInput, RequestState,
    ResponsePolicy, UiConfig, run,
};
