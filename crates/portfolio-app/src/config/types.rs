//! Configuration types for the portfolio page

use portfolio_core::theme::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};

/// Page configuration (site.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSettings,

    #[serde(default)]
    pub scroll: ScrollSettings,

    #[serde(default)]
    pub theme: ThemeSettings,
}

/// Document-level settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteSettings {
    /// Browser tab title
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Scroll tracking settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScrollSettings {
    /// Scroll offset past which the nav switches to its "scrolled" style
    #[serde(default = "default_threshold_px")]
    pub threshold_px: f64,

    /// Distance below the viewport top a section must span to be active
    #[serde(default = "default_section_probe_px")]
    pub section_probe_px: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            threshold_px: default_threshold_px(),
            section_probe_px: default_section_probe_px(),
        }
    }
}

/// Theme persistence settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThemeSettings {
    /// localStorage key holding the JSON-encoded dark-mode flag
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

fn default_title() -> String {
    "Sravan's Portfolio".to_string()
}

fn default_threshold_px() -> f64 {
    50.0
}

fn default_section_probe_px() -> f64 {
    100.0
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
