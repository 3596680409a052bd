//! Widgets composing the explorer screen.

mod profile_card;
mod search_bar;
mod status;

pub use profile_card::render_profile_card;
pub use search_bar::{SearchBarContext, render_search_bar};
pub use status::{render_error, render_idle, render_loading};
