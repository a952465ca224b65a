use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::session::{Session, SubmitError};
use crate::tui::action::Action;
use crate::tui::screens::{
    FeedState, HelpState, SurveyState, draw_feed, draw_help, draw_survey,
};
use crate::tui::widgets::{StatusBarContext, draw_status_bar};

use super::error::AppError;

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Fill in and post the questionnaire.
    Survey,
    /// Browse posted answers, newest first.
    Feed,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Survey => "Survey",
            Self::Feed => "Feed",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    session: Session,
    survey: SurveyState,
    feed: FeedState,
    help: HelpState,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Survey`] screen with an
    /// empty session.
    pub fn new() -> Self {
        Self {
            screen: Screen::Survey,
            session: Session::new(),
            survey: SurveyState::new(),
            feed: FeedState::new(),
            help: HelpState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the status bar and the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn draw(&self, frame: &mut Frame) {
        let [status_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        draw_status_bar(&self.status_context(), frame, status_area);

        match self.screen {
            Screen::Survey => draw_survey(&self.survey, self.session.form(), frame, body_area),
            Screen::Feed => draw_feed(&self.feed, self.session.feed().all(), frame, body_area),
            Screen::Help => draw_help(&self.help, frame, body_area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.open(self.screen);
                self.navigate(Screen::Help);
            }
            return;
        }

        let action = match self.screen {
            Screen::Survey => self.survey.handle_key(key, self.session.form_mut()),
            Screen::Feed => self.feed.handle_key(key, self.session.feed().len()),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::Submit => self.submit(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn navigate(&mut self, screen: Screen) {
        tracing::debug!(from = self.screen.label(), to = screen.label(), "navigate");
        if screen == Screen::Feed && self.screen != Screen::Help {
            self.feed.reset();
        }
        self.screen = screen;
    }

    fn submit(&mut self) {
        match self.session.submit() {
            Ok(_) => {
                self.survey.on_submitted();
                self.feed.reset();
            }
            Err(SubmitError::Invalid(errors)) => self.survey.set_errors(errors),
        }
    }

    fn status_context(&self) -> StatusBarContext {
        let feed = self.session.feed();
        StatusBarContext {
            post_count: feed.len(),
            latest_name: feed.latest().map(|r| r.name().to_string()),
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the running session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the survey screen state.
    pub fn survey(&self) -> &SurveyState {
        &self.survey
    }

    /// Returns the feed screen state.
    pub fn feed(&self) -> &FeedState {
        &self.feed
    }
}
