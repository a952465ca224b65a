//! Reusable TUI widgets.

pub mod choice;
pub mod form;
pub mod status_bar;

pub use choice::{ChoiceKind, dropdown_spans, option_spans};
pub use form::{border_color, field_block, field_title};
pub use status_bar::{StatusBarContext, draw_status_bar};
