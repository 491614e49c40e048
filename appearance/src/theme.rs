//! Light / dark / auto theme mode.
//!
//! Independent of the accent color: the mode only decides whether the dark
//! class applies, with `Auto` deferring to the system preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The user's theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    /// All modes, in the order the sidebar presents them.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Auto];

    /// The string stored in (and parsed back from) local storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Parse a stored value. Unknown strings are rejected so callers can
    /// fall back to the default.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// Whether the dark class should apply given the current system
    /// preference.
    #[must_use]
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::Auto => system_prefers_dark,
        }
    }
}
