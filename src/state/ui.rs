//! Shell-level UI state: sidebar visibility and global loading/error.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the application shell.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub sidebar_open: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState {
    /// Flip sidebar visibility.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Set the shell-level error banner.
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Clear the shell-level error banner.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
