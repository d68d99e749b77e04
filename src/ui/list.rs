// Summary panel and member list rendering.
// Provides styled list views with an empty state.

use ratatui::{prelude::*, widgets::*};

use crate::analytics::Summary;
use crate::github::Member;

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(text, area);
}

/// Render a selectable list of members with their profile URLs.
pub fn render_member_list(
    frame: &mut Frame,
    members: &[Member],
    state: &mut ListState,
    title: &str,
    area: Rect,
) {
    if members.is_empty() {
        render_empty(frame, area, title, "None");
        return;
    }

    let items: Vec<ListItem> = members
        .iter()
        .enumerate()
        .map(|(i, member)| {
            let url = member.html_url.as_deref().unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>5}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(member.login.as_str(), Style::default().fg(Color::Cyan)),
                Span::styled(format!("  {}", url), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, state);
}

/// Render the summary statistics panel.
pub fn render_summary(frame: &mut Frame, summary: &Summary, area: Rect) {
    let stat = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    };
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::BOLD),
        ))
    };
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let join_date = summary.join_date.as_deref().unwrap_or("Unknown");

    let lines = vec![
        heading("Account Stats"),
        stat("  Followers:     ", summary.total_followers.to_string()),
        stat("  Following:     ", summary.total_following.to_string()),
        stat("  Follow Ratio:  ", format!("{:.2}", summary.follow_ratio)),
        stat("  Join Date:     ", join_date.to_string()),
        stat("  Account Age:   ", format!("{} days", summary.account_age_days)),
        stat("  Public Repos:  ", summary.public_repos.to_string()),
        stat("  Public Gists:  ", summary.public_gists.to_string()),
        Line::from(""),
        heading("Follow Analysis"),
        Line::from(vec![
            label("  Mutual Follows:          "),
            Span::styled(
                format!("{} ({:.1}%)", summary.mutual_count, summary.mutual_percentage),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            label("  Not Following You Back:  "),
            Span::styled(
                format!(
                    "{} ({:.1}%)",
                    summary.not_following_back_count, summary.percent_not_following_back
                ),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            label("  You're Not Following:    "),
            Span::styled(
                format!(
                    "{} ({:.1}%)",
                    summary.not_following_count, summary.percent_not_following
                ),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    let title = format!(" {} ({}) ", summary.username, summary.name);
    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::FollowerAnalytics;
    use crate::github::Profile;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_member_list_renders_logins() {
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let members = vec![Member::with_login("octocat"), Member::with_login("hubot")];
        let mut state = ListState::default();
        state.select(Some(0));

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_member_list(frame, &members, &mut state, " Mutual ", area)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("octocat"));
        assert!(text.contains("hubot"));
        assert!(text.contains("Mutual"));
    }

    #[test]
    fn test_summary_renders_counts() {
        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let profile = Profile {
            login: Some("octocat".into()),
            ..Profile::default()
        };
        let followers = vec![Member::with_login("a"), Member::with_login("b")];
        let following = vec![Member::with_login("b")];
        let summary = FollowerAnalytics::new(&profile, &followers, &following).summarize();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_summary(frame, &summary, area)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("octocat (Unknown)"));
        assert!(text.contains("2.00"));
        assert!(text.contains("1 (50.0%)"));
    }
}
