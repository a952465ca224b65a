//! Status bar widget: persistent one-line session summary.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget; decoupled from `Session`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Number of records in the feed.
    pub post_count: usize,
    /// Name on the most recent record, if any.
    pub latest_name: Option<String>,
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned, Cyan):
/// - No posts: `Savings Startup Check  no posts yet`
/// - Posts:    `Savings Startup Check  3 posts  latest: Aki` (latest in Green)
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let green = Style::default().fg(Color::Green);

    let mut spans = vec![Span::styled("Savings Startup Check  ", cyan)];

    match (&ctx.latest_name, ctx.post_count) {
        (Some(name), count) if count > 0 => {
            let noun = if count == 1 { "post" } else { "posts" };
            spans.push(Span::styled(format!("{count} {noun}  "), cyan));
            spans.push(Span::styled(format!("latest: {name}"), green));
        }
        _ => spans.push(Span::styled("no posts yet", cyan)),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
