//! Configuration types for preset-search.
//!
//! [`Config::load`] reads `~/.config/preset-search/config.toml`, creating it
//! with hardcoded defaults if it does not yet exist. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in tests).

use crate::types::BoundingBox;
use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
# south,west,north,east
default_bbox     = "47.489939,-122.445140,47.735581,-121.992185"
completion_limit = 20

[catalog]
# Point both at an iD tagging schema checkout to replace the bundled sample.
# presets      = "/path/to/dist/presets.json"
# translations = "/path/to/dist/translations/en.json"
locale = "en"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/preset-search/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_bbox")]
    pub default_bbox: String,
    #[serde(default = "default_completion_limit")]
    pub completion_limit: usize,
}

fn default_bbox() -> String { "47.489939,-122.445140,47.735581,-121.992185".to_string() }
fn default_completion_limit() -> usize { 20 }

impl SearchConfig {
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::verbatim(self.default_bbox.clone())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_bbox: default_bbox(),
            completion_limit: default_completion_limit(),
        }
    }
}

/// `[catalog]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub presets: Option<PathBuf>,
    #[serde(default)]
    pub translations: Option<PathBuf>,
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String { "en".to_string() }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            presets: None,
            translations: None,
            locale: default_locale(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/preset-search/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("preset-search")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
