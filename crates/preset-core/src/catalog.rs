//! Preset catalog: feature definitions and their translations.
//!
//! The catalog uses the layout of the iD tagging schema distribution:
//!
//! - `presets.json`: `{ "<id>": { "geometry": [...], "tags": {...}, "searchable"?, "matchScore"? } }`
//! - `translations/<locale>.json`: `{ "<locale>": { "presets": { "presets": { "<id>": { "name"?, "terms"? } } } } }`
//!
//! A small sample of both files is embedded in the binary via
//! [`include_str!`] so [`Catalog::bundled`] works without anything on disk.
//! Object key order is preserved while parsing: tag order drives the
//! generated filters and translation order drives tie order in the index.

use crate::config::CatalogConfig;
use crate::types::{FeatureDefinition, GeometryKind, TagCondition, Translation, DEFAULT_MATCH_SCORE};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

const BUNDLED_PRESETS: &str = include_str!("../data/presets.json");
const BUNDLED_TRANSLATIONS_EN: &str = include_str!("../data/translations/en.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed preset file: {0}")]
    Presets(#[source] serde_json::Error),

    #[error("malformed translation file: {0}")]
    Translations(#[source] serde_json::Error),

    #[error("translation file has no presets for locale {0:?}")]
    MissingLocale(String),

    #[error("preset {id:?} declares no geometry")]
    EmptyGeometry { id: String },

    #[error("preset {id:?} has a non-string value for tag {key:?}")]
    InvalidTagValue { id: String, key: String },
}

// ---------------------------------------------------------------------------
// Raw (serde) types: mirror the JSON structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawPreset {
    geometry: Vec<GeometryKind>,
    #[serde(default)]
    tags: serde_json::Map<String, serde_json::Value>,
    #[serde(default = "default_searchable")]
    searchable: bool,
    #[serde(rename = "matchScore", default = "default_match_score")]
    match_score: f64,
}

fn default_searchable() -> bool { true }
fn default_match_score() -> f64 { DEFAULT_MATCH_SCORE }

impl RawPreset {
    fn into_definition(self, id: String) -> Result<FeatureDefinition, CatalogError> {
        if self.geometry.is_empty() {
            return Err(CatalogError::EmptyGeometry { id });
        }

        let mut tags = Vec::with_capacity(self.tags.len());
        for (key, value) in self.tags {
            let Some(value) = value.as_str() else {
                return Err(CatalogError::InvalidTagValue { id, key });
            };
            tags.push(TagCondition::new(key, value));
        }

        Ok(FeatureDefinition {
            id,
            geometry: self.geometry,
            tags,
            searchable: self.searchable,
            match_score: self.match_score,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawTranslation {
    name: Option<String>,
    terms: Option<String>,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Loaded, validated preset catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    definitions: HashMap<String, Arc<FeatureDefinition>>,
    translations: Vec<Translation>,
}

impl Catalog {
    pub fn new(
        definitions: impl IntoIterator<Item = FeatureDefinition>,
        translations: Vec<Translation>,
    ) -> Self {
        let definitions = definitions
            .into_iter()
            .map(|d| (d.id.clone(), Arc::new(d)))
            .collect();
        Self {
            definitions,
            translations,
        }
    }

    /// The sample catalog compiled into the binary (English).
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_PRESETS, BUNDLED_TRANSLATIONS_EN, "en")
    }

    /// Parse both files from memory.
    pub fn from_json(presets: &str, translations: &str, locale: &str) -> Result<Self, CatalogError> {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(presets).map_err(CatalogError::Presets)?;

        let mut definitions = HashMap::with_capacity(raw.len());
        for (id, value) in raw {
            let preset: RawPreset = serde_json::from_value(value).map_err(CatalogError::Presets)?;
            let definition = preset.into_definition(id.clone())?;
            definitions.insert(id, Arc::new(definition));
        }

        let translations = parse_translations(translations, locale)?;

        tracing::debug!(
            presets = definitions.len(),
            translations = translations.len(),
            locale,
            "catalog: loaded"
        );

        Ok(Self {
            definitions,
            translations,
        })
    }

    /// Read both files from disk.
    pub fn from_paths(presets: &Path, translations: &Path, locale: &str) -> Result<Self, CatalogError> {
        let presets = read(presets)?;
        let translations = read(translations)?;
        Self::from_json(&presets, &translations, locale)
    }

    /// Load the configured files, or the bundled catalog when either path is
    /// missing from the configuration.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        match (&config.presets, &config.translations) {
            (Some(presets), Some(translations)) => {
                Self::from_paths(presets, translations, &config.locale)
            }
            _ => Self::bundled(),
        }
    }

    pub fn definitions(&self) -> &HashMap<String, Arc<FeatureDefinition>> {
        &self.definitions
    }

    /// Translations in file order.
    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }
}

fn read(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_translations(src: &str, locale: &str) -> Result<Vec<Translation>, CatalogError> {
    let mut root: serde_json::Value =
        serde_json::from_str(src).map_err(CatalogError::Translations)?;

    let entries = root
        .get_mut(locale)
        .and_then(|l| l.get_mut("presets"))
        .and_then(|p| p.get_mut("presets"))
        .map(serde_json::Value::take)
        .ok_or_else(|| CatalogError::MissingLocale(locale.to_string()))?;

    let entries: serde_json::Map<String, serde_json::Value> =
        serde_json::from_value(entries).map_err(CatalogError::Translations)?;

    entries
        .into_iter()
        .map(|(id, value)| {
            let raw: RawTranslation =
                serde_json::from_value(value).map_err(CatalogError::Translations)?;
            Ok(Translation {
                id,
                name: raw.name,
                terms: raw.terms,
            })
        })
        .collect()
}
