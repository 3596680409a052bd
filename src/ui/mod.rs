//! Interactive terminal UI for exploring GitHub profiles.
//!
//! [`ExplorerUi`] is the public builder. The remaining submodules implement
//! the event loop, lookup dispatch, state handling, rendering and the widgets
//! that make up the single explorer screen.

mod actions;
pub mod avatar;
mod builder;
pub mod components;
mod config;
pub mod input;
mod lookup;
mod render;
mod runtime;
mod search;
mod state;
#[cfg(test)]
mod test_support;

pub use actions::{LinkTarget, SUBMIT_KEY};
pub use builder::ExplorerUi;
pub use config::UiConfig;
pub use input::QueryInput;
pub use runtime::run;
pub use state::{ExplorerOutcome, ParsePolicyError, ProfileExplorer, RequestState, ResponsePolicy};
