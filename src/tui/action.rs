//! Actions returned by key handlers.

/// An action that a key handler returns to the [`App`](super::App).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No app-level state change needed.
    None,
    /// Quit the application.
    Quit,
}
