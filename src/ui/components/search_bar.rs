use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::theme::Theme;
use crate::ui::UiConfig;
use crate::ui::input::QueryInput;

/// Argument bundle for rendering the search bar.
pub struct SearchBarContext<'a> {
    pub input: &'a QueryInput,
    pub ui: &'a UiConfig,
    pub theme: &'a Theme,
    pub loading: bool,
    pub throbber_state: &'a ThrobberState,
}

/// Render the bordered input row: prompt, query text, and a spinner on the
/// right while a lookup is loading.
pub fn render_search_bar(frame: &mut Frame, area: Rect, context: SearchBarContext<'_>) {
    let SearchBarContext {
        input,
        ui,
        theme,
        loading,
        throbber_state,
    } = context;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prompt = format!("{} > ", ui.prompt);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(layout_constraints(prompt_width(&prompt), loading))
        .split(inner);

    frame.render_widget(
        Paragraph::new(prompt).style(theme.prompt_style()),
        horizontal[0],
    );
    input.render(frame, horizontal[1]);

    if loading && horizontal.len() > 2 {
        let spinner = Throbber::default()
            .style(theme.muted_style())
            .throbber_style(theme.accent_style());
        let line = Line::from(vec![
            spinner.to_symbol_span(throbber_state),
            Span::styled("Searching", theme.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(line), horizontal[2]);
    }
}

fn prompt_width(prompt: &str) -> u16 {
    u16::try_from(unicode_width::UnicodeWidthStr::width(prompt)).unwrap_or(u16::MAX)
}

fn layout_constraints(prompt_width: u16, loading: bool) -> Vec<Constraint> {
    let mut constraints = vec![Constraint::Length(prompt_width), Constraint::Min(1)];
    if loading {
        constraints.push(Constraint::Length(SPINNER_WIDTH));
    }
    constraints
}

const SPINNER_WIDTH: u16 = 12;
