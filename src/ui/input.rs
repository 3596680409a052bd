use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::theme::Theme;

/// Single-line editor holding the query text.
///
/// Editing is delegated to [`TextArea`]; keys that would open a second line
/// never reach it.
#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    textarea: TextArea<'static>,
}

impl QueryInput {
    pub fn text(&self) -> &str {
        self.textarea.lines().first().map_or("", String::as_str)
    }

    /// Replace the whole text and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text: String = text.into().chars().filter(|ch| !is_line_break(*ch)).collect();
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }

    /// Cursor position as a character index into [`Self::text`].
    pub fn cursor(&self) -> usize {
        self.textarea.cursor().1
    }

    /// Apply an editing key. Returns `true` when the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if opens_line(&key) {
            return false;
        }
        self.textarea.input(key)
    }

    /// Restyle the editor for `theme` and show `placeholder` while empty.
    pub fn apply_style(&mut self, placeholder: &str, theme: &Theme) {
        self.textarea.set_placeholder_text(placeholder);
        self.textarea.set_placeholder_style(theme.muted_style());
        self.textarea.set_cursor_line_style(Style::default());
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        frame.render_widget(&self.textarea, area);
    }
}

fn opens_line(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(ch) => is_line_break(ch),
        _ => false,
    }
}

fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}
