//! TUI screen implementations.

pub mod feed;
pub mod help;
pub mod survey;

pub use feed::{FeedState, draw_feed};
pub use help::{HelpState, draw_help};
pub use survey::{Notice, SurveyState, draw_survey};
