//! The resolved light/dark appearance.

use serde::{Deserialize, Serialize};

/// The appearance applied to the page.
///
/// Never stored directly: it is derived from the stored preference or the
/// system color scheme each time the page loads. Its wire form is the
/// lowercase literal used as the stored preference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    Light,
    Dark,
}

impl ThemeState {
    /// Parses a stored preference value.
    ///
    /// Only the exact literals `"dark"` and `"light"` are recognized;
    /// anything else is treated as no preference at all.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio::ThemeState;
    ///
    /// assert_eq!(ThemeState::from_stored("dark"), Some(ThemeState::Dark));
    /// assert_eq!(ThemeState::from_stored("Dark"), None);
    /// ```
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemeState::Dark),
            "light" => Some(ThemeState::Light),
            _ => None,
        }
    }

    /// Maps the system "prefers dark" signal onto a state.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemeState::Dark
        } else {
            ThemeState::Light
        }
    }

    /// The literal written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeState::Dark => "dark",
            ThemeState::Light => "light",
        }
    }

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Dark => ThemeState::Light,
            ThemeState::Light => ThemeState::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeState::Dark
    }
}

impl std::fmt::Display for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
