#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use appearance::theme::ThemeMode;

/// Theme state: the user's mode plus the current system preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub system_dark: bool,
}

impl ThemeState {
    /// Whether the dark class should currently apply.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self.mode.is_dark(self.system_dark)
    }
}
