//! Feed screen: scrollable list of posted surveys, newest first.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{Card, Record};
use crate::tui::action::Action;
use crate::tui::app::Screen;

/// State for the feed screen.
#[derive(Debug, Clone)]
pub struct FeedState {
    /// Index of the highlighted card (0 = newest).
    selected: usize,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedState {
    /// Creates a new state with the cursor on the newest card.
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, post_count: usize) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if post_count > 0 {
                    self.selected = (self.selected + 1).min(post_count - 1);
                }
                Action::None
            }
            KeyCode::Home => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected = post_count.saturating_sub(1);
                Action::None
            }
            KeyCode::Esc | KeyCode::Char('q') => Action::Navigate(Screen::Survey),
            _ => Action::None,
        }
    }

    /// Returns the highlighted card index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the cursor back to the newest card.
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

/// Body lines of a card: a subtitle line, then one line per row.
///
/// Multi-line answers continue on indented lines under their label.
pub fn card_lines(card: &Card) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let label_style = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(vec![
        Span::styled(card.subtitle.clone(), dim),
        Span::styled(
            format!("  {}", card.submitted_at.format("%Y-%m-%d %H:%M")),
            dim,
        ),
    ])];

    for (label, value) in card.rows() {
        let mut parts = value.split('\n');
        let first = parts.next().unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), label_style),
            Span::raw(first.to_string()),
        ]));
        let indent = " ".repeat(label.len() + 2);
        for rest in parts {
            lines.push(Line::from(format!("{indent}{rest}")));
        }
    }
    lines
}

/// Renders the feed screen.
#[mutants::skip]
pub fn draw_feed(state: &FeedState, records: &[Record], frame: &mut Frame, area: Rect) {
    let [title_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let title = Paragraph::new(Line::from(format!("Feed ({} posts)", records.len())))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, title_area);

    if records.is_empty() {
        let empty = Paragraph::new("No posts yet. Fill in the survey and press Ctrl+S.")
            .alignment(Alignment::Center);
        frame.render_widget(empty, list_area);
    } else {
        // The highlighted card is always the first one drawn; cards above it
        // scroll out of view.
        let mut y = list_area.y;
        let bottom = list_area.y + list_area.height;
        for (i, record) in records.iter().enumerate().skip(state.selected()) {
            if y >= bottom {
                break;
            }
            let card = Card::from_record(record);
            let body = Paragraph::new(card_lines(&card)).wrap(Wrap { trim: false });
            let wrapped = body.line_count(list_area.width.saturating_sub(2));
            let wanted = u16::try_from(wrapped + 2).unwrap_or(u16::MAX);
            let height = wanted.min(bottom - y);
            let border = if i == state.selected() {
                Color::Yellow
            } else {
                Color::DarkGray
            };
            let block = Block::default()
                .title(format!(" {} {} ", card.icon.glyph(), card.name))
                .title_bottom(Line::from(format!(" {} ", card.icon.label())).right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border));
            let card_area = Rect {
                x: list_area.x,
                y,
                width: list_area.width,
                height,
            };
            frame.render_widget(body.block(block), card_area);
            y += height;
        }
    }

    let footer = Paragraph::new("↑↓: scroll  Home/End: newest/oldest  q/Esc: back to survey")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::{AgeGroup, FeedStore, IdGenerator, LivingArrangement, Occupation};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_record(
        ids: &mut IdGenerator,
        name: &str,
        occupation: Option<Occupation>,
        living: Vec<LivingArrangement>,
        learning_topic: &str,
    ) -> Record {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 15, 0).unwrap();
        Record::new(
            ids.next_id(at),
            name.to_string(),
            Some(AgeGroup::Thirties),
            occupation,
            living,
            "can't save money".to_string(),
            learning_topic.to_string(),
            "save 500000/year".to_string(),
            at,
        )
        .unwrap()
    }

    fn make_feed(names: &[&str]) -> FeedStore {
        let mut ids = IdGenerator::new();
        let mut feed = FeedStore::new();
        for name in names {
            feed.insert_front(make_record(
                &mut ids,
                name,
                None,
                vec![LivingArrangement::LivingAlone],
                "",
            ));
        }
        feed
    }

    mod construction {
        use super::*;

        #[test]
        fn new_starts_at_zero() {
            assert_eq!(FeedState::new().selected(), 0);
        }

        #[test]
        fn default_trait() {
            assert_eq!(FeedState::default().selected(), 0);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn down_increments_selected() {
            let mut state = FeedState::new();
            let action = state.handle_key(press(KeyCode::Down), 5);
            assert_eq!(action, Action::None);
            assert_eq!(state.selected(), 1);
        }

        #[test]
        fn j_and_k_scroll() {
            let mut state = FeedState::new();
            state.handle_key(press(KeyCode::Char('j')), 5);
            state.handle_key(press(KeyCode::Char('j')), 5);
            state.handle_key(press(KeyCode::Char('k')), 5);
            assert_eq!(state.selected(), 1);
        }

        #[test]
        fn up_at_top_saturates() {
            let mut state = FeedState::new();
            state.handle_key(press(KeyCode::Up), 5);
            assert_eq!(state.selected(), 0);
        }

        #[test]
        fn down_at_bottom_saturates() {
            let mut state = FeedState::new();
            state.selected = 4;
            state.handle_key(press(KeyCode::Down), 5);
            assert_eq!(state.selected(), 4);
        }

        #[test]
        fn down_with_empty_feed_stays_at_zero() {
            let mut state = FeedState::new();
            state.handle_key(press(KeyCode::Down), 0);
            assert_eq!(state.selected(), 0);
        }

        #[test]
        fn home_and_end() {
            let mut state = FeedState::new();
            state.handle_key(press(KeyCode::End), 5);
            assert_eq!(state.selected(), 4);
            state.handle_key(press(KeyCode::Home), 5);
            assert_eq!(state.selected(), 0);
        }

        #[test]
        fn end_with_empty_feed_stays_at_zero() {
            let mut state = FeedState::new();
            state.handle_key(press(KeyCode::End), 0);
            assert_eq!(state.selected(), 0);
        }

        #[test]
        fn reset_returns_to_newest() {
            let mut state = FeedState::new();
            state.selected = 3;
            state.reset();
            assert_eq!(state.selected(), 0);
        }
    }

    mod back_navigation {
        use super::*;

        #[test]
        fn esc_and_q_return_to_survey() {
            for code in [KeyCode::Esc, KeyCode::Char('q')] {
                let mut state = FeedState::new();
                let action = state.handle_key(press(code), 3);
                assert_eq!(action, Action::Navigate(Screen::Survey));
            }
        }

        #[test]
        fn unhandled_key_returns_none() {
            let mut state = FeedState::new();
            assert_eq!(state.handle_key(press(KeyCode::Char('x')), 3), Action::None);
        }
    }

    mod lines {
        use super::*;

        fn line_text(line: &Line) -> String {
            line.spans.iter().map(|s| s.content.as_ref()).collect()
        }

        #[test]
        fn omits_empty_learning_topic() {
            let mut ids = IdGenerator::new();
            let record = make_record(&mut ids, "Aki", None, vec![], "");
            let texts: Vec<String> = card_lines(&Card::from_record(&record))
                .iter()
                .map(line_text)
                .collect();
            assert_eq!(
                texts,
                vec![
                    "thirties / unanswered  2026-03-01 09:15".to_string(),
                    "Living arrangement: ".to_string(),
                    "Money worries: can't save money".to_string(),
                    "Savings goal: save 500000/year".to_string(),
                ]
            );
        }

        #[test]
        fn includes_learning_topic_when_present() {
            let mut ids = IdGenerator::new();
            let record = make_record(
                &mut ids,
                "Aki",
                Some(Occupation::Homemaker),
                vec![LivingArrangement::Couple],
                "index funds",
            );
            let texts: Vec<String> = card_lines(&Card::from_record(&record))
                .iter()
                .map(line_text)
                .collect();
            assert!(texts.contains(&"Wants to learn: index funds".to_string()));
            assert_eq!(texts[0], "thirties / homemaker  2026-03-01 09:15");
        }

        #[test]
        fn multi_line_answers_are_indented() {
            let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 15, 0).unwrap();
            let record = Record::new(
                IdGenerator::new().next_id(at),
                "Aki".to_string(),
                Some(AgeGroup::Teens),
                None,
                vec![],
                "line one\nline two".to_string(),
                String::new(),
                "goal".to_string(),
                at,
            )
            .unwrap();
            let texts: Vec<String> = card_lines(&Card::from_record(&record))
                .iter()
                .map(line_text)
                .collect();
            assert_eq!(texts[2], "Money worries: line one");
            assert_eq!(texts[3], "               line two");
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_feed(state: &FeedState, records: &[Record], width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_feed(state, records, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_empty_state() {
            let output = render_feed(&FeedState::new(), &[], 80, 10);
            assert!(output.contains("Feed (0 posts)"));
            assert!(output.contains("No posts yet"));
        }

        #[test]
        fn renders_cards_newest_first() {
            let feed = make_feed(&["Older", "Newer"]);
            let output = render_feed(&FeedState::new(), feed.all(), 80, 30);
            assert!(output.contains("Feed (2 posts)"));
            let newer = output.find("Newer").unwrap();
            let older = output.find("Older").unwrap();
            assert!(newer < older, "newest card should be drawn first");
        }

        #[test]
        fn renders_card_contents() {
            let feed = make_feed(&["Aki"]);
            let output = render_feed(&FeedState::new(), feed.all(), 80, 20);
            assert!(output.contains("thirties / unanswered"));
            assert!(output.contains("Living arrangement: living alone"));
            assert!(output.contains("Money worries: can't save money"));
            assert!(output.contains("Savings goal: save 500000/year"));
            assert!(!output.contains("Wants to learn"));
            assert!(output.contains("Solo"));
        }

        #[test]
        fn long_answers_wrap_inside_the_card() {
            let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 15, 0).unwrap();
            let issue = format!("{}ENDMARK", "spend too much on coffee ".repeat(5));
            assert!(issue.len() > 120);
            let record = Record::new(
                IdGenerator::new().next_id(at),
                "Aki".to_string(),
                Some(AgeGroup::Thirties),
                None,
                vec![LivingArrangement::LivingAlone],
                issue,
                String::new(),
                "save 500000/year".to_string(),
                at,
            )
            .unwrap();
            let output = render_feed(&FeedState::new(), &[record], 80, 24);
            assert!(output.contains("ENDMARK"), "wrapped tail missing:\n{output}");
            assert!(output.contains("Savings goal: save 500000/year"));
        }

        #[test]
        fn scrolled_cards_are_hidden() {
            let feed = make_feed(&["Older", "Newer"]);
            let mut state = FeedState::new();
            state.selected = 1;
            let output = render_feed(&state, feed.all(), 80, 30);
            assert!(output.contains("Older"));
            assert!(!output.contains("Newer"));
        }

        #[test]
        fn selected_card_has_yellow_border() {
            let feed = make_feed(&["Aki"]);
            let backend = TestBackend::new(80, 20);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_feed(&FeedState::new(), feed.all(), frame, frame.area()))
                .unwrap();
            // Title at y=0, first card's top border at y=1.
            let cell = &terminal.backend().buffer()[(0, 1)];
            assert_eq!(cell.fg, Color::Yellow);
        }

        #[test]
        fn renders_footer() {
            let output = render_feed(&FeedState::new(), &[], 80, 10);
            assert!(output.contains("q/Esc: back"));
        }
    }
}
