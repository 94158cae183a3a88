//! Parser for site.toml

use portfolio_core::{Error, Result};
use tracing::{debug, warn};

use super::types::SiteConfig;

/// Parse a site config, reporting malformed TOML
pub fn parse_config(source: &str) -> Result<SiteConfig> {
    toml::from_str(source).map_err(|e| Error::config(e.to_string()))
}

/// Load a site config, falling back to defaults on any problem
pub fn load_config(source: &str) -> SiteConfig {
    if source.trim().is_empty() {
        debug!("Empty site config, using defaults");
        return SiteConfig::default();
    }

    match parse_config(source) {
        Ok(config) => {
            debug!("Loaded site config: {:?}", config);
            config
        }
        Err(e) => {
            warn!("Failed to parse site config: {}", e);
            SiteConfig::default()
        }
    }
}
