//! Help screen: keybindings for the screen it was opened from, followed by
//! the keys that work everywhere.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

const PAGE: u16 = 10;

/// One row of the reference: the keys and what they do.
type KeyHint = (&'static str, &'static str);

static SURVEY_KEYS: &[KeyHint] = &[
    ("Tab / Shift-Tab", "next / previous question"),
    ("←/→", "move along an option row; cycle occupation"),
    ("Space", "pick the age group; tick a living arrangement"),
    ("Backspace / Del", "clear the occupation"),
    ("Enter", "post (new line inside the long answers)"),
    ("Ctrl+S", "post from any question"),
    ("Alt+F", "open the feed"),
    ("Esc", "quit"),
];

static FEED_KEYS: &[KeyHint] = &[
    ("↑/↓ or k/j", "previous / next card"),
    ("Home / End", "newest / oldest card"),
    ("q / Esc", "back to the survey"),
];

static HELP_KEYS: &[KeyHint] = &[
    ("↑/↓ or k/j", "scroll"),
    ("PgUp / PgDn", "scroll a page"),
    ("q / Esc", "close help"),
];

static ANYWHERE_KEYS: &[KeyHint] = &[("F1", "this help"), ("Ctrl+C", "quit")];

fn keys_for(screen: Screen) -> &'static [KeyHint] {
    match screen {
        Screen::Survey => SURVEY_KEYS,
        Screen::Feed => FEED_KEYS,
        Screen::Help => HELP_KEYS,
    }
}

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: Screen,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: Screen::Survey,
        }
    }

    /// Prepares the screen for a fresh visit from `origin`, scrolled to the top.
    pub fn open(&mut self, origin: Screen) {
        self.origin = origin;
        self.scroll = 0;
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// The screen help returns to when closed.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE),
            KeyCode::Char('q') | KeyCode::Esc => return Action::Navigate(self.origin),
            _ => {}
        }
        Action::None
    }
}

fn section(title: &str, keys: &[KeyHint]) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);

    std::iter::once(Line::from(Span::styled(title.to_string(), heading)))
        .chain(keys.iter().map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("  {keys:<18}"), key_style),
                Span::raw(*action),
            ])
        }))
        .chain(std::iter::once(Line::from("")))
        .collect()
}

/// Reference text for `origin`: its own keys first, then the global ones.
fn help_lines(origin: Screen) -> Vec<Line<'static>> {
    let mut lines = section(origin.label(), keys_for(origin));
    lines.extend(section("Anywhere", ANYWHERE_KEYS));
    lines
}

/// Renders the help screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" Keys: {} ", state.origin().label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let lines = help_lines(state.origin());
    let max_scroll = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(body_area.height);
    frame.render_widget(
        Paragraph::new(lines).scroll((state.scroll().min(max_scroll), 0)),
        body_area,
    );

    frame.render_widget(
        Paragraph::new("q/Esc: close help").style(Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}
