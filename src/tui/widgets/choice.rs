//! Option rows for the enumerated questions: radio buttons, checkboxes and
//! a cycling dropdown.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// How an option row marks its selected entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    /// At most one selected: `(•)` / `( )`.
    Radio,
    /// Any number selected: `[x]` / `[ ]`.
    Checkbox,
}

impl ChoiceKind {
    /// Marker drawn before an option label.
    pub fn marker(self, selected: bool) -> &'static str {
        match (self, selected) {
            (ChoiceKind::Radio, true) => "(•)",
            (ChoiceKind::Radio, false) => "( )",
            (ChoiceKind::Checkbox, true) => "[x]",
            (ChoiceKind::Checkbox, false) => "[ ]",
        }
    }
}

/// Placeholder shown by the occupation dropdown while unset.
pub const DROPDOWN_PLACEHOLDER: &str = "select an occupation";

/// Builds the spans for a row of options.
///
/// `cursor` is the highlighted option and is only passed while the row has
/// focus.
pub fn option_spans(
    kind: ChoiceKind,
    labels: &[&'static str],
    selected: impl Fn(usize) -> bool,
    cursor: Option<usize>,
) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if cursor == Some(i) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(
            format!("{} {label}", kind.marker(selected(i))),
            style,
        ));
    }
    spans
}

/// Builds the spans for a dropdown showing `value`, or the placeholder.
pub fn dropdown_spans(value: Option<&'static str>, focused: bool) -> Vec<Span<'static>> {
    let arrow_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_span = match value {
        Some(v) => Span::raw(v),
        None => Span::styled(DROPDOWN_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
    };
    vec![
        Span::styled("◀ ", arrow_style),
        value_span,
        Span::styled(" ▶", arrow_style),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn radio_marks_single_selection() {
        let spans = option_spans(
            ChoiceKind::Radio,
            &["teens", "twenties"],
            |i| i == 1,
            None,
        );
        assert_eq!(text(&spans), "( ) teens  (•) twenties");
    }

    #[test]
    fn checkbox_marks_every_selection() {
        let spans = option_spans(
            ChoiceKind::Checkbox,
            &["a", "b", "c"],
            |i| i != 1,
            None,
        );
        assert_eq!(text(&spans), "[x] a  [ ] b  [x] c");
    }

    #[test]
    fn cursor_option_is_highlighted() {
        let spans = option_spans(ChoiceKind::Checkbox, &["a", "b"], |_| false, Some(1));
        let highlighted: Vec<&str> = spans
            .iter()
            .filter(|s| s.style.fg == Some(Color::Yellow))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(highlighted, vec!["[ ] b"]);
    }

    #[test]
    fn no_cursor_no_highlight() {
        let spans = option_spans(ChoiceKind::Radio, &["a", "b"], |_| false, None);
        assert!(spans.iter().all(|s| s.style.fg.is_none()));
    }

    #[test]
    fn dropdown_shows_value() {
        assert_eq!(text(&dropdown_spans(Some("student"), true)), "◀ student ▶");
    }

    #[test]
    fn dropdown_shows_placeholder_when_unset() {
        assert_eq!(
            text(&dropdown_spans(None, false)),
            "◀ select an occupation ▶"
        );
    }
}
