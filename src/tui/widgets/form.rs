//! Shared chrome for survey questions: bordered block, required marker,
//! focus/error colouring, and the hint or error line along the bottom edge.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::model::Field;

/// Border colour for a question. Errors win over focus.
pub fn border_color(focused: bool, has_error: bool) -> Color {
    if has_error {
        Color::Red
    } else if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    }
}

/// Title text for a question, with ` *` appended to required ones.
pub fn field_title(field: Field) -> String {
    if field.is_required() {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    }
}

/// Builds the bordered block framing one question.
///
/// The bottom edge carries the error message if there is one, otherwise
/// the question's hint.
pub fn field_block(field: Field, focused: bool, error: Option<&str>) -> Block<'static> {
    let mut block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused, error.is_some())));

    if let Some(err) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {err} "),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(hint) = field.hint() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {hint} "),
            Style::default().fg(Color::DarkGray),
        )));
    }
    block
}
