use serde::{Deserialize, Serialize};

use crate::PageAdapter;
use crate::constants::{DEFAULT_THEME, KEYBOARD_NAV_CLASS, MONOTONE_CLASS, THEME_ATTRIBUTE};

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

/// User-selected accessibility preferences.
///
/// Serialized with the field names `theme`, `keyboardNav`, and `monotone`.
/// Fields missing from a stored record fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub keyboard_nav: bool,
    #[serde(default)]
    pub monotone: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keyboard_nav: false,
            monotone: false,
        }
    }
}

impl AccessibilitySettings {
    #[must_use]
    pub fn with_theme(self, theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_keyboard_nav(self, keyboard_nav: bool) -> Self {
        Self {
            keyboard_nav,
            ..self
        }
    }

    #[must_use]
    pub fn with_monotone(self, monotone: bool) -> Self {
        Self { monotone, ..self }
    }

    /// Reflect these settings onto the page root.
    ///
    /// Sets the theme attribute and adds or removes the monotone and
    /// keyboard-nav classes. Applying the same settings twice leaves the page
    /// in the same state.
    pub fn apply_to<P: PageAdapter + ?Sized>(&self, page: &P) {
        page.set_root_attribute(THEME_ATTRIBUTE, &self.theme);
        page.toggle_root_class(MONOTONE_CLASS, self.monotone);
        page.toggle_root_class(KEYBOARD_NAV_CLASS, self.keyboard_nav);
    }

    /// Encode as the persisted JSON record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a persisted JSON record.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of this shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
