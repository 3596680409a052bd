use ratatui::style::{Color, Modifier, Style};

/// Styles for the elements of the explorer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Title bar and panel headings.
    pub header: Style,
    /// Prompt in front of the query input.
    pub prompt: Style,
    /// Emphasised values such as statistics and the login.
    pub accent: Style,
    /// Secondary text: hints, labels, the throbber.
    pub muted: Style,
    /// Error banner.
    pub error: Style,
    /// Panel borders.
    pub border: Style,
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header.add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        self.accent
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        self.muted
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        self.error
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        self.border
    }

    /// Style for link text, derived from the accent colour.
    #[must_use]
    pub fn link_style(&self) -> Style {
        Style::new()
            .fg(self.accent.fg.unwrap_or(Color::Reset))
            .add_modifier(Modifier::UNDERLINED)
    }
}

/// A named built-in theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub theme: Theme,
}

impl ThemeDefinition {
    #[must_use]
    pub const fn new(name: &'static str, theme: Theme) -> Self {
        Self {
            name,
            aliases: &[],
            theme,
        }
    }

    #[must_use]
    pub const fn with_aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    pub(super) fn matches(&self, normalized: &str) -> bool {
        self.name.eq_ignore_ascii_case(normalized)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(normalized))
    }
}
