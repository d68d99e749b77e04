// Report browser state and main event loop.
// Manages the active tab, list selection, and keyboard input handling.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::ListState;

use crate::github::Member;
use crate::tracker::AnalysisReport;
use crate::ui;

/// Active tab in the report browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Summary,
    NotFollowingBack,
    NotFollowing,
    Mutual,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Summary,
        Tab::NotFollowingBack,
        Tab::NotFollowing,
        Tab::Mutual,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Summary => "Summary",
            Tab::NotFollowingBack => "Not Following Back",
            Tab::NotFollowing => "Not Following",
            Tab::Mutual => "Mutual",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Summary => Tab::NotFollowingBack,
            Tab::NotFollowingBack => Tab::NotFollowing,
            Tab::NotFollowing => Tab::Mutual,
            Tab::Mutual => Tab::Summary,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Summary => Tab::Mutual,
            Tab::NotFollowingBack => Tab::Summary,
            Tab::NotFollowing => Tab::NotFollowingBack,
            Tab::Mutual => Tab::NotFollowing,
        }
    }
}

/// Main application state.
pub struct App {
    pub report: AnalysisReport,
    /// Currently active tab.
    pub active_tab: Tab,
    pub not_following_back_state: ListState,
    pub not_following_state: ListState,
    pub mutual_state: ListState,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(report: AnalysisReport) -> Self {
        Self {
            not_following_back_state: initial_state(&report.not_following_back),
            not_following_state: initial_state(&report.not_following),
            mutual_state: initial_state(&report.mutual),
            report,
            active_tab: Tab::default(),
            should_quit: false,
        }
    }

    /// Members shown on `tab`, or `None` for the summary tab.
    pub fn members(&self, tab: Tab) -> Option<&[Member]> {
        match tab {
            Tab::Summary => None,
            Tab::NotFollowingBack => Some(self.report.not_following_back.as_slice()),
            Tab::NotFollowing => Some(self.report.not_following.as_slice()),
            Tab::Mutual => Some(self.report.mutual.as_slice()),
        }
    }

    /// Members and selection state of the active tab.
    pub fn active_list(&mut self) -> Option<(&[Member], &mut ListState)> {
        match self.active_tab {
            Tab::Summary => None,
            Tab::NotFollowingBack => Some((
                self.report.not_following_back.as_slice(),
                &mut self.not_following_back_state,
            )),
            Tab::NotFollowing => Some((
                self.report.not_following.as_slice(),
                &mut self.not_following_state,
            )),
            Tab::Mutual => Some((self.report.mutual.as_slice(), &mut self.mutual_state)),
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => self.active_tab = self.active_tab.next(),
            KeyCode::BackTab | KeyCode::Left => self.active_tab = self.active_tab.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Home | KeyCode::Char('g') => self.select_edge(false),
            KeyCode::End | KeyCode::Char('G') => self.select_edge(true),
            _ => {}
        }
    }

    /// Move the selection by `delta`, clamped to the list bounds.
    fn move_selection(&mut self, delta: isize) {
        if let Some((members, state)) = self.active_list() {
            if members.is_empty() {
                return;
            }
            let last = members.len() - 1;
            let current = state.selected().unwrap_or(0);
            let next = current.saturating_add_signed(delta).min(last);
            state.select(Some(next));
        }
    }

    fn select_edge(&mut self, end: bool) {
        if let Some((members, state)) = self.active_list() {
            if members.is_empty() {
                return;
            }
            state.select(Some(if end { members.len() - 1 } else { 0 }));
        }
    }
}

/// Select the first row of a non-empty list.
fn initial_state(list: &[Member]) -> ListState {
    let mut state = ListState::default();
    if !list.is_empty() {
        state.select(Some(0));
    }
    state
}
