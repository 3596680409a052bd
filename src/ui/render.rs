use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    text::Line,
    widgets::Paragraph,
};

use super::ProfileExplorer;
use super::components::{
    SearchBarContext, render_error, render_idle, render_loading, render_profile_card,
    render_search_bar,
};
use super::state::RequestState;

const HEADER_HEIGHT: u16 = 2;
const SEARCH_BAR_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;

impl ProfileExplorer {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.render_header(frame, layout[0]);
        render_search_bar(
            frame,
            layout[1],
            SearchBarContext {
                input: &self.query_input,
                ui: &self.ui,
                theme: &self.theme,
                loading: self.state.is_loading(),
                throbber_state: &self.throbber_state,
            },
        );
        self.render_body(frame, layout[2]);

        let hints = Paragraph::new(self.ui.key_hints.as_str())
            .alignment(Alignment::Center)
            .style(self.theme.muted_style());
        frame.render_widget(hints, layout[3]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(vec![
            Line::styled(self.ui.title.as_str(), self.theme.header_style()),
            Line::styled(self.ui.subtitle.as_str(), self.theme.muted_style()),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        match &self.state {
            RequestState::Idle => render_idle(frame, area, &self.ui.idle_hint, &self.theme),
            RequestState::Loading => render_loading(
                frame,
                area,
                &self.ui.loading_label,
                &self.throbber_state,
                &self.theme,
            ),
            RequestState::Failure(message) => render_error(frame, area, message, &self.theme),
            RequestState::Success(record) => {
                render_profile_card(frame, area, record, self.avatar.as_ref(), &self.theme);
            }
        }
    }
}
