//! Configuration for the portfolio page
//!
//! - `types`: `SiteConfig` and its sections
//! - `settings`: parsing `site.toml`

mod settings;
mod types;

pub use settings::{load_config, parse_config};
pub use types::{ScrollSettings, SiteConfig, SiteSettings, ThemeSettings};
