//! Test builders: ergonomic constructors for presets, translations, and
//! small synthetic indexes.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use preset_core::{Catalog, FeatureDefinition, GeometryKind, TagCondition, TermIndex, Translation};

// ---------------------------------------------------------------------------
// PresetBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`FeatureDefinition`] test fixtures.
///
/// # Example
///
/// ```rust
/// let station = PresetBuilder::new("public_transport/station_light_rail")
///     .geometry(&[GeometryKind::Point, GeometryKind::Area])
///     .tag("public_transport", "station")
///     .tag("light_rail", "yes")
///     .build();
/// ```
pub struct PresetBuilder {
    id: String,
    geometry: Vec<GeometryKind>,
    tags: Vec<TagCondition>,
    searchable: bool,
    match_score: f64,
}

impl PresetBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            geometry: vec![GeometryKind::Point],
            tags: Vec::new(),
            searchable: true,
            match_score: 1.0,
        }
    }

    pub fn geometry(mut self, kinds: &[GeometryKind]) -> Self {
        self.geometry = kinds.to_vec();
        self
    }

    pub fn tag(mut self, key: &str, value: &str) -> Self {
        self.tags.push(TagCondition::new(key, value));
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.match_score = score;
        self
    }

    pub fn unsearchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    pub fn build(self) -> FeatureDefinition {
        let mut def = FeatureDefinition::new(self.id, self.geometry, self.tags);
        def.searchable = self.searchable;
        def.match_score = self.match_score;
        def
    }
}

/// Build a [`Translation`]; pass `None` to leave a field out.
pub fn translation(id: &str, name: Option<&str>, terms: Option<&str>) -> Translation {
    Translation {
        id: id.to_string(),
        name: name.map(str::to_string),
        terms: terms.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// CatalogBuilder
// ---------------------------------------------------------------------------

/// Collects presets and translations in encounter order.
///
/// ```rust
/// let index = CatalogBuilder::new()
///     .preset(PresetBuilder::new("a").score(1.0).build(), "Park", "green")
///     .preset(PresetBuilder::new("b").score(2.0).build(), "Garden", "green")
///     .index();
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    definitions: Vec<FeatureDefinition>,
    translations: Vec<Translation>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a preset together with its name and comma-separated synonyms.
    pub fn preset(mut self, def: FeatureDefinition, name: &str, terms: &str) -> Self {
        self.translations.push(translation(&def.id, Some(name), Some(terms)));
        self.definitions.push(def);
        self
    }

    /// Add a preset with no translation at all.
    pub fn untranslated(mut self, def: FeatureDefinition) -> Self {
        self.definitions.push(def);
        self
    }

    /// Add a translation that may not match any preset.
    pub fn translation(mut self, t: Translation) -> Self {
        self.translations.push(t);
        self
    }

    pub fn catalog(self) -> Catalog {
        Catalog::new(self.definitions, self.translations)
    }

    pub fn index(self) -> TermIndex {
        TermIndex::from_catalog(&self.catalog())
    }
}

/// Ids of the presets recorded for `term`, in index order. Empty when the
/// term is not recognized.
pub fn ids_for(index: &TermIndex, term: &str) -> Vec<String> {
    index
        .matches(term)
        .unwrap_or_default()
        .iter()
        .map(|d| d.id.clone())
        .collect()
}
