use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(15, 23, 42)),
    prompt: Style::new().fg(Color::LightCyan),
    accent: Style::new()
        .fg(Color::Rgb(96, 165, 250))
        .add_modifier(Modifier::BOLD),
    muted: Style::new().fg(Color::DarkGray),
    error: Style::new()
        .fg(Color::Rgb(248, 113, 113))
        .bg(Color::Rgb(69, 10, 10)),
    border: Style::new().fg(Color::Rgb(51, 65, 85)),
};

pub const LIGHT: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(226, 232, 240)),
    prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
    accent: Style::new()
        .fg(Color::Rgb(37, 99, 235))
        .add_modifier(Modifier::BOLD),
    muted: Style::new().fg(Color::Rgb(100, 100, 100)),
    error: Style::new()
        .fg(Color::Rgb(153, 27, 27))
        .bg(Color::Rgb(254, 226, 226)),
    border: Style::new().fg(Color::Rgb(148, 163, 184)),
};

pub const SOLARIZED: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(253, 246, 227))
        .bg(Color::Rgb(7, 54, 66)),
    prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
    accent: Style::new()
        .fg(Color::Rgb(181, 137, 0))
        .add_modifier(Modifier::BOLD),
    muted: Style::new().fg(Color::Rgb(88, 110, 117)),
    error: Style::new()
        .fg(Color::Rgb(220, 50, 47))
        .bg(Color::Rgb(0, 43, 54)),
    border: Style::new().fg(Color::Rgb(88, 110, 117)),
};

pub const DEFAULT_NAME: &str = "slate";

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition::new(DEFAULT_NAME, SLATE).with_aliases(&["dark", "default"]),
    ThemeDefinition::new("light", LIGHT),
    ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];
