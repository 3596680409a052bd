use profile_api::{DetailKind, ProfileRecord};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

use crate::theme::Theme;
use crate::ui::avatar::AvatarImage;

/// Render the two-column profile card: identity on the left, bio,
/// statistics and contact rows on the right.
///
/// Without an encoded avatar the identity panel lists the avatar URL instead.
pub fn render_profile_card(
    frame: &mut Frame,
    area: Rect,
    record: &ProfileRecord,
    avatar: Option<&AvatarImage>,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(inner);

    let identity_block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.border_style());
    let mut identity_area = identity_block.inner(columns[0]);
    frame.render_widget(identity_block, columns[0]);

    if let Some(avatar) = avatar {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(avatar.area().height), Constraint::Min(0)])
            .split(identity_area);
        avatar.render(frame, rows[0]);
        identity_area = rows[1];
    }

    let identity = Paragraph::new(identity_lines(record, avatar.is_none(), theme))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(identity, identity_area);

    let details = Paragraph::new(detail_lines(record, theme))
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(details, columns[1]);
}

/// Lines of the identity panel, led by the avatar URL when no image is drawn.
pub(crate) fn identity_lines(
    record: &ProfileRecord,
    with_avatar_url: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if with_avatar_url {
        lines.push(Line::from(Span::styled("Avatar", theme.muted_style())));
        lines.push(Line::from(Span::styled(
            record.avatar_url.clone(),
            theme.link_style(),
        )));
    }
    lines.push(Line::default());
    if let Some(name) = &record.name {
        lines.push(Line::from(Span::styled(name.clone(), theme.header_style())));
    }
    lines.push(Line::from(Span::styled(
        format!("@{}", record.login),
        theme.accent_style(),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("View Profile", theme.muted_style())));
    lines.push(Line::from(Span::styled(
        record.html_url.clone(),
        theme.link_style(),
    )));
    lines
}

/// Lines of the details panel. Optional fields that are absent produce no
/// line at all.
pub(crate) fn detail_lines(record: &ProfileRecord, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(bio) = &record.bio {
        lines.push(Line::from(bio.clone()));
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled(record.followers.to_string(), theme.accent_style()),
        Span::styled(" Followers", theme.muted_style()),
        Span::raw("    "),
        Span::styled(record.following.to_string(), theme.accent_style()),
        Span::styled(" Following", theme.muted_style()),
    ]));
    lines.push(Line::default());

    let rows = record.detail_rows();
    for row in &rows {
        let value_style = match row.kind {
            DetailKind::Blog | DetailKind::Twitter => theme.link_style(),
            DetailKind::Location | DetailKind::Company => Style::default(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", row.kind.label()), theme.muted_style()),
            Span::styled(row.text.clone(), value_style),
        ]));
    }
    if !rows.is_empty() {
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled("Public Repositories: ", theme.accent_style()),
        Span::raw(record.public_repos.to_string()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Joined GitHub: ", theme.accent_style()),
        Span::raw(record.joined_on()),
    ]));
    lines
}

#[cfg(test)]
mod tests {
    use profile_api::fixtures::octocat;

    use super::*;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn identity_shows_name_login_and_profile_link() {
        let text = text_of(&identity_lines(&octocat(), true, &Theme::default()));
        assert!(text.contains(&"The Octocat".to_string()));
        assert!(text.contains(&"@octocat".to_string()));
        assert!(text.contains(&"https://github.com/octocat".to_string()));
    }

    #[test]
    fn nameless_profile_skips_the_name_line() {
        let mut record = octocat();
        record.name = None;
        let text = text_of(&identity_lines(&record, true, &Theme::default()));
        assert!(!text.iter().any(|line| line == "The Octocat"));
        assert!(text.contains(&"@octocat".to_string()));
    }

    #[test]
    fn avatar_url_only_listed_without_an_image() {
        let record = octocat();
        let fallback = text_of(&identity_lines(&record, true, &Theme::default()));
        assert!(fallback.contains(&record.avatar_url));

        let drawn = text_of(&identity_lines(&record, false, &Theme::default()));
        assert!(!drawn.contains(&record.avatar_url));
        assert!(!drawn.iter().any(|line| line == "Avatar"));
        assert!(drawn.contains(&"@octocat".to_string()));
    }

    #[test]
    fn absent_optional_fields_have_no_rows() {
        let mut record = octocat();
        record.location = None;
        record.blog = None;
        let text = text_of(&detail_lines(&record, &Theme::default())).join("\n");

        assert!(!text.contains("Location"));
        assert!(!text.contains("Blog"));
        assert!(!text.contains("Twitter"));
        assert!(text.contains("Company   @github"));
        assert!(text.starts_with("17602 Followers"), "no bio line expected: {text}");
    }

    #[test]
    fn bio_and_counts_are_rendered() {
        let mut record = octocat();
        record.bio = Some("Mascot".to_string());
        let text = text_of(&detail_lines(&record, &Theme::default()));

        assert_eq!(text[0], "Mascot");
        assert!(text.contains(&"17602 Followers    9 Following".to_string()));
        assert!(text.contains(&"Public Repositories: 8".to_string()));
        assert!(text.contains(&"Joined GitHub: 2011-01-25".to_string()));
    }
}
