//! Survey screen: the questionnaire the user fills in and posts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_textarea::TextArea;

use crate::model::{AgeGroup, Field, FormModel, LivingArrangement, Occupation, ValidationError};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::{ChoiceKind, dropdown_spans, field_block, option_spans};

/// Shown after a successful post.
pub const POSTED_MESSAGE: &str = "Posted! Your answers are at the top of the feed (Alt+F).";

/// One-line message under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// State for the survey screen.
///
/// Answers live in the session's [`FormModel`]; this holds focus, option
/// cursors, and the text editors whose contents mirror the form's text
/// fields.
pub struct SurveyState {
    focus: Field,
    age_cursor: usize,
    living_cursor: usize,
    name: TextArea<'static>,
    financial_issue: TextArea<'static>,
    learning_topic: TextArea<'static>,
    savings_goal: TextArea<'static>,
    errors: Vec<ValidationError>,
    notice: Option<Notice>,
}

impl Default for SurveyState {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyState {
    /// Creates a survey with empty editors and focus on the first question.
    pub fn new() -> Self {
        let mut state = Self {
            focus: Field::Name,
            age_cursor: 0,
            living_cursor: 0,
            name: new_editor(),
            financial_issue: new_editor(),
            learning_topic: new_editor(),
            savings_goal: new_editor(),
            errors: Vec::new(),
            notice: None,
        };
        state.sync_cursor_styles();
        state
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, form: &mut FormModel) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return Action::Submit;
        }
        if key.modifiers == KeyModifiers::ALT && key.code == KeyCode::Char('f') {
            return Action::Navigate(Screen::Feed);
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_step(true);
                Action::None
            }
            KeyCode::BackTab => {
                self.focus_step(false);
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            _ => match self.focus {
                Field::AgeGroup => self.handle_age_group(key, form),
                Field::Occupation => self.handle_occupation(key, form),
                Field::LivingArrangement => self.handle_living_arrangement(key, form),
                Field::Name | Field::FinancialIssue | Field::LearningTopic | Field::SavingsGoal => {
                    self.handle_text(key, form)
                }
            },
        }
    }

    /// Returns the focused question.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Moves focus to `field`.
    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
        self.sync_cursor_styles();
    }

    /// Index of the highlighted age band.
    pub fn age_cursor(&self) -> usize {
        self.age_cursor
    }

    /// Index of the highlighted living arrangement.
    pub fn living_cursor(&self) -> usize {
        self.living_cursor
    }

    /// Current text of a free-text editor, lines joined with `\n`.
    pub fn editor_text(&self, field: Field) -> String {
        self.editor(field)
            .map(|e| e.lines().join("\n"))
            .unwrap_or_default()
    }

    /// Errors from the last refused submit.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Error message for `field`, if it failed the last submit.
    pub fn error_for(&self, field: Field) -> Option<String> {
        self.errors
            .iter()
            .find(|e| e.field() == field)
            .map(ToString::to_string)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Flags every failing question and moves focus to the first one.
    pub fn set_errors(&mut self, errors: Vec<ValidationError>) {
        let fields: Vec<String> = errors.iter().map(|e| e.field().to_string()).collect();
        self.notice = Some(Notice::Error(format!(
            "Please fill in: {}",
            fields.join(", ")
        )));
        if let Some(first) = errors.first() {
            self.focus = first.field();
        }
        self.errors = errors;
        self.sync_cursor_styles();
    }

    /// Clears every editor after a successful post. The form itself has
    /// already been reset by the session.
    pub fn on_submitted(&mut self) {
        *self = Self::new();
        self.notice = Some(Notice::Info(POSTED_MESSAGE.to_string()));
    }

    fn handle_text(&mut self, key: KeyEvent, form: &mut FormModel) -> Action {
        let field = self.focus;
        // Only the name is single-line; the other editors take a newline.
        if field == Field::Name && is_newline(key) {
            return Action::Submit;
        }
        if let Some(editor) = self.editor_mut(field)
            && editor.input(key)
        {
            form.set_text(field, editor.lines().join("\n"));
        }
        Action::None
    }

    fn handle_age_group(&mut self, key: KeyEvent, form: &mut FormModel) -> Action {
        let all = AgeGroup::all();
        match key.code {
            KeyCode::Left => self.age_cursor = step(self.age_cursor, all.len(), false),
            KeyCode::Right => self.age_cursor = step(self.age_cursor, all.len(), true),
            KeyCode::Char(' ') => form.set_age_group(all[self.age_cursor]),
            KeyCode::Enter => return Action::Submit,
            _ => {}
        }
        Action::None
    }

    fn handle_occupation(&mut self, key: KeyEvent, form: &mut FormModel) -> Action {
        match key.code {
            KeyCode::Left => form.set_occupation(Occupation::cycle(form.occupation(), false)),
            KeyCode::Right | KeyCode::Char(' ') => {
                form.set_occupation(Occupation::cycle(form.occupation(), true));
            }
            KeyCode::Backspace | KeyCode::Delete => form.set_occupation(None),
            KeyCode::Enter => return Action::Submit,
            _ => {}
        }
        Action::None
    }

    fn handle_living_arrangement(&mut self, key: KeyEvent, form: &mut FormModel) -> Action {
        let all = LivingArrangement::all();
        match key.code {
            KeyCode::Left => self.living_cursor = step(self.living_cursor, all.len(), false),
            KeyCode::Right => self.living_cursor = step(self.living_cursor, all.len(), true),
            KeyCode::Char(' ') => form.toggle_living_arrangement(all[self.living_cursor]),
            KeyCode::Enter => return Action::Submit,
            _ => {}
        }
        Action::None
    }

    fn focus_step(&mut self, forward: bool) {
        let all = Field::all();
        let pos = all.iter().position(|&f| f == self.focus).unwrap_or(0);
        self.set_focus(all[step(pos, all.len(), forward)]);
    }

    fn editor(&self, field: Field) -> Option<&TextArea<'static>> {
        match field {
            Field::Name => Some(&self.name),
            Field::FinancialIssue => Some(&self.financial_issue),
            Field::LearningTopic => Some(&self.learning_topic),
            Field::SavingsGoal => Some(&self.savings_goal),
            Field::AgeGroup | Field::Occupation | Field::LivingArrangement => None,
        }
    }

    fn editor_mut(&mut self, field: Field) -> Option<&mut TextArea<'static>> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::FinancialIssue => Some(&mut self.financial_issue),
            Field::LearningTopic => Some(&mut self.learning_topic),
            Field::SavingsGoal => Some(&mut self.savings_goal),
            Field::AgeGroup | Field::Occupation | Field::LivingArrangement => None,
        }
    }

    /// Only the focused editor shows a cursor.
    fn sync_cursor_styles(&mut self) {
        let focus = self.focus;
        for &field in Field::all().iter().filter(|f| f.is_text()) {
            let style = if field == focus {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            if let Some(editor) = self.editor_mut(field) {
                editor.set_cursor_style(style);
            }
        }
    }
}

/// Enter, plus the Ctrl+M and Ctrl+J control codes the editor also treats as
/// a line break.
fn is_newline(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn new_editor() -> TextArea<'static> {
    let mut editor = TextArea::default();
    editor.set_cursor_line_style(Style::default());
    editor
}

/// Moves an index one step through `len` slots, wrapping around.
fn step(pos: usize, len: usize, forward: bool) -> usize {
    if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    }
}

/// Renders the survey screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_survey(state: &SurveyState, form: &FormModel, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Savings Startup Check Sheet ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [
        name_area,
        age_area,
        occupation_area,
        living_area,
        issue_area,
        topic_area,
        goal_area,
        _spacer,
        notice_area,
        footer_area,
    ] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    for (field, field_area) in [
        (Field::Name, name_area),
        (Field::FinancialIssue, issue_area),
        (Field::LearningTopic, topic_area),
        (Field::SavingsGoal, goal_area),
    ] {
        let error = state.error_for(field);
        let block = field_block(field, state.focus() == field, error.as_deref());
        let editor_area = block.inner(field_area);
        frame.render_widget(block, field_area);
        if let Some(editor) = state.editor(field) {
            frame.render_widget(editor, editor_area);
        }
    }

    let ages = AgeGroup::all();
    let age_labels: Vec<&'static str> = ages.iter().map(AgeGroup::label).collect();
    let age_focused = state.focus() == Field::AgeGroup;
    let age_spans = option_spans(
        ChoiceKind::Radio,
        &age_labels,
        |i| form.age_group() == Some(ages[i]),
        age_focused.then_some(state.age_cursor()),
    );
    draw_choice(state, Field::AgeGroup, Line::from(age_spans), frame, age_area);

    let occupation_spans = dropdown_spans(
        form.occupation().map(|o| o.label()),
        state.focus() == Field::Occupation,
    );
    draw_choice(
        state,
        Field::Occupation,
        Line::from(occupation_spans),
        frame,
        occupation_area,
    );

    let arrangements = LivingArrangement::all();
    let living_labels: Vec<&'static str> =
        arrangements.iter().map(LivingArrangement::label).collect();
    let living_focused = state.focus() == Field::LivingArrangement;
    let living_spans = option_spans(
        ChoiceKind::Checkbox,
        &living_labels,
        |i| form.has_living_arrangement(arrangements[i]),
        living_focused.then_some(state.living_cursor()),
    );
    draw_choice(
        state,
        Field::LivingArrangement,
        Line::from(living_spans),
        frame,
        living_area,
    );

    if let Some(notice) = state.notice() {
        let (text, color) = match notice {
            Notice::Info(text) => (text, Color::Green),
            Notice::Error(text) => (text, Color::Red),
        };
        let line = Line::from(Span::styled(text.as_str(), Style::default().fg(color)));
        frame.render_widget(Paragraph::new(line), notice_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab: next  ←/→: choose  Space: select  Ctrl+S: post  Alt+F: feed  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[mutants::skip]
fn draw_choice(state: &SurveyState, field: Field, line: Line, frame: &mut Frame, area: Rect) {
    let error = state.error_for(field);
    let block = field_block(field, state.focus() == field, error.as_deref());
    frame.render_widget(Paragraph::new(line).block(block), area);
}
