use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Centre a box of at most `width` x `height` inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Muted hint shown before the first search.
pub fn render_idle(frame: &mut Frame, area: Rect, hint: &str, theme: &Theme) {
    let message = Paragraph::new(hint.to_string())
        .alignment(Alignment::Center)
        .style(theme.muted_style());
    frame.render_widget(message, centered(area, area.width, 1));
}

/// Spinner and label shown while a lookup is pending.
pub fn render_loading(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    throbber_state: &ThrobberState,
    theme: &Theme,
) {
    let spinner = Throbber::default()
        .style(theme.muted_style())
        .throbber_style(theme.accent_style());
    let line = Line::from(vec![
        spinner.to_symbol_span(throbber_state),
        Span::styled(label.to_string(), theme.muted_style()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(line), centered(area, area.width, 1));
}

/// Error banner carrying the user-facing failure message.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    const BANNER_HEIGHT: u16 = 3;
    let banner_area = centered(area, banner_width(message), BANNER_HEIGHT);

    let banner = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(theme.error_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.error_style()),
        );
    frame.render_widget(Clear, banner_area);
    frame.render_widget(banner, banner_area);
}

/// Banner width for `message`: its display width plus padding, at least 24.
fn banner_width(message: &str) -> u16 {
    u16::try_from(message.width())
        .unwrap_or(u16::MAX)
        .saturating_add(8)
        .max(24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_box_is_clamped_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let inner = centered(area, 40, 10);
        assert_eq!(inner, area);
    }

    #[test]
    fn banner_width_pads_short_messages() {
        assert_eq!(banner_width("User not found"), 24);
        assert_eq!(banner_width(&"x".repeat(30)), 38);
    }

    #[test]
    fn banner_width_saturates_on_huge_messages() {
        let message = "x".repeat(usize::from(u16::MAX) + 100);
        assert_eq!(banner_width(&message), u16::MAX);
    }

    #[test]
    fn centered_box_sits_in_the_middle() {
        let area = Rect::new(0, 0, 20, 5);
        let inner = centered(area, 10, 1);
        assert_eq!(inner, Rect::new(5, 2, 10, 1));
    }
}
