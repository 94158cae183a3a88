//! Light/dark theme and its persisted encoding
//!
//! The preference is stored as a JSON boolean (`true` = dark). Anything else
//! found under the key, including a missing entry, means light mode.

use tracing::debug;

use crate::error::Result;

/// Default storage key for the dark-mode preference
pub const DEFAULT_STORAGE_KEY: &str = "darkMode";

/// Color scheme applied to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class placed on the app container
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Accessible label for the toggle button, describing what it will do
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

/// Encode the preference the way it is written to storage
pub fn encode_preference(dark_mode: bool) -> String {
    serde_json::Value::Bool(dark_mode).to_string()
}

/// Strictly decode a stored preference
pub fn decode_preference(raw: &str) -> Result<bool> {
    Ok(serde_json::from_str::<bool>(raw)?)
}

/// Decode a stored preference, falling back to light mode
pub fn parse_preference(raw: Option<&str>) -> bool {
    let Some(raw) = raw else {
        return false;
    };
    match decode_preference(raw) {
        Ok(dark_mode) => dark_mode,
        Err(e) => {
            debug!("Ignoring malformed theme preference {:?}: {}", raw, e);
            false
        }
    }
}
