//! Colour themes for the explorer screen.

mod builtins;
mod types;

pub use builtins::{DEFAULT_NAME, LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
    SLATE
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let normalized = name.trim();
    BUILT_IN_DEFINITIONS
        .iter()
        .find(|definition| definition.matches(normalized))
        .map(|definition| definition.theme)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = BUILT_IN_DEFINITIONS
        .iter()
        .map(|definition| definition.name)
        .collect();
    names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
    names
}
