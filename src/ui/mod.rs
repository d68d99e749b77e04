// UI module for rendering the report browser.
// Contains widgets for the tab bar, summary panel, and member lists.

mod list;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);

    match app.active_tab {
        Tab::Summary => list::render_summary(frame, &app.report.summary, chunks[1]),
        tab => {
            let title = format!(" {} ", tab.title());
            if let Some((members, state)) = app.active_list() {
                list::render_member_list(frame, members, state, &title, chunks[1]);
            }
        }
    }

    draw_status_bar(frame, app, chunks[2]);
}

/// Draw the status bar with key hints and the selected count.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![
        Span::raw(" ←→/Tab "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
    ];

    if app.active_tab != Tab::Summary {
        hints.extend([
            Span::raw("  ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  Home/End "),
            Span::styled("Jump", Style::default().fg(Color::DarkGray)),
        ]);
    }

    hints.extend([
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ]);

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
