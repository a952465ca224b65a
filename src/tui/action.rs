//! Actions returned by screen event handlers.

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update session state and navigate between
/// screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Submit the pending survey answers.
    Submit,
    /// Quit the application.
    Quit,
}
