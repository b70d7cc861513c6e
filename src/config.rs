//! Site configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields a working configuration.
//!
//! ```rust
//! use folio::config::{SiteConfig, StorageScope};
//!
//! let config = SiteConfig::from_json(r#"{ "theme": { "scope": "session" } }"#).unwrap();
//! assert_eq!(config.theme.scope, StorageScope::Session);
//! assert_eq!(config.theme.storage_key, "theme");
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::page::Affordance;
pub use crate::theme::StorageScope;

/// Error returned when a configuration file cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub typewriter: TypewriterConfig,
    pub scroll: ScrollConfig,
    pub filter: FilterConfig,
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// Theme preference settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key the explicit preference is stored under.
    pub storage_key: String,
    pub scope: StorageScope,
    /// File backing the persistent scope.
    pub storage_path: Option<PathBuf>,
    /// Shown by the toggle while the page is dark.
    pub dark_affordance: Affordance,
    /// Shown by the toggle while the page is light.
    pub light_affordance: Affordance,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            scope: StorageScope::Persistent,
            storage_path: None,
            dark_affordance: Affordance::new("\u{2600}", "Switch to light mode"),
            light_affordance: Affordance::new("\u{263E}", "Switch to dark mode"),
        }
    }
}

/// Typewriter phrases and per-step delays, in milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    /// Pause with the full phrase on screen.
    pub hold_delay_ms: u64,
    /// Pause on the empty line before the next phrase.
    pub restart_delay_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "Software Engineer".to_string(),
                "Open Source Contributor".to_string(),
                "Problem Solver".to_string(),
            ],
            type_delay_ms: 100,
            delete_delay_ms: 50,
            hold_delay_ms: 2000,
            restart_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offset past which the floating buttons may appear.
    pub threshold: f64,
    /// Distance from the end at which "to bottom" hides.
    pub bottom_margin: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: 300.0,
            bottom_margin: 100.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Category that matches every project.
    pub all_category: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            all_category: "all".to_string(),
        }
    }
}
