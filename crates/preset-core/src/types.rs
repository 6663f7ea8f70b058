//! Core types for preset-core.
//!
//! This module defines the value types shared across the index and the
//! compiler: the [`FeatureDefinition`] read from the preset catalog, its
//! [`Translation`], and the [`BoundingBox`] / [`CompiledQuery`] pair that
//! flows out of a lookup.

use serde::Deserialize;

/// Match score assumed when a preset does not declare one.
pub const DEFAULT_MATCH_SCORE: f64 = 1.0;

/// A tagged-object template from the preset catalog (e.g. "Light Rail
/// Station"). Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureDefinition {
    /// Catalog identifier, e.g. `public_transport/station_light_rail`.
    pub id: String,
    /// Geometry kinds this preset applies to. Never empty.
    pub geometry: Vec<GeometryKind>,
    /// Tag conditions in catalog order.
    pub tags: Vec<TagCondition>,
    /// Whether the preset may be found by name at all.
    pub searchable: bool,
    /// Ranking weight; higher beats lower for a shared term.
    pub match_score: f64,
}

impl FeatureDefinition {
    /// Build a searchable definition with the default match score.
    pub fn new(
        id: impl Into<String>,
        geometry: Vec<GeometryKind>,
        tags: Vec<TagCondition>,
    ) -> Self {
        Self {
            id: id.into(),
            geometry,
            tags,
            searchable: true,
            match_score: DEFAULT_MATCH_SCORE,
        }
    }
}

/// Geometry kind as named in the preset catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryKind {
    Point,
    Vertex,
    Line,
    Area,
    Relation,
}

impl GeometryKind {
    /// Element types a feature of this kind may be stored as.
    pub fn element_types(self) -> &'static [ElementType] {
        match self {
            GeometryKind::Point | GeometryKind::Vertex => &[ElementType::Node],
            GeometryKind::Line => &[ElementType::Way],
            GeometryKind::Area => &[ElementType::Way, ElementType::Relation],
            GeometryKind::Relation => &[ElementType::Relation],
        }
    }
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryKind::Point => write!(f, "point"),
            GeometryKind::Vertex => write!(f, "vertex"),
            GeometryKind::Line => write!(f, "line"),
            GeometryKind::Area => write!(f, "area"),
            GeometryKind::Relation => write!(f, "relation"),
        }
    }
}

/// Element type token of the query language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Node,
    Way,
    Relation,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementType::Node => write!(f, "node"),
            ElementType::Way => write!(f, "way"),
            ElementType::Relation => write!(f, "relation"),
        }
    }
}

/// One `key=value` requirement of a preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCondition {
    pub key: String,
    pub value: TagValue,
}

impl TagCondition {
    /// Parse a catalog tag pair; the literal `*` means "any value".
    pub fn new(key: impl Into<String>, value: &str) -> Self {
        let value = match value {
            "*" => TagValue::Any,
            other => TagValue::Exact(other.to_string()),
        };
        Self {
            key: key.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    /// The tag must exist; its value is unconstrained.
    Any,
    Exact(String),
}

/// Localized name and synonyms of one preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub id: String,
    pub name: Option<String>,
    /// Comma-separated synonym list, as shipped in the translation files.
    pub terms: Option<String>,
}

/// South/west/north/east rectangle in decimal degrees.
///
/// The text is passed through to the query verbatim. Range and ordering are
/// the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundingBox(String);

impl BoundingBox {
    /// Use `text` (already `south,west,north,east`) as-is.
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn from_edges(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self(format!("{south},{west},{north},{east}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BoundingBox {
    fn from(text: &str) -> Self {
        Self::verbatim(text)
    }
}

impl From<String> for BoundingBox {
    fn from(text: String) -> Self {
        Self::verbatim(text)
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A complete query in the query language's concrete syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery(String);

impl CompiledQuery {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
