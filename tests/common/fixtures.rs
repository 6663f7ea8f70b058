//! Static fixtures shared across harnesses.

use preset_core::{BoundingBox, Catalog, TermIndex};

/// Central Seattle, south,west,north,east.
pub const SEATTLE_BBOX: &str = "47.489939,-122.445140,47.735581,-121.992185";

/// A box the compiler never validates.
pub const DUMMY_BBOX: &str = "dummy bbox";

pub fn seattle() -> BoundingBox {
    BoundingBox::from(SEATTLE_BBOX)
}

/// Index over the catalog compiled into preset-core.
pub fn bundled_index() -> TermIndex {
    TermIndex::from_catalog(&Catalog::bundled().expect("bundled catalog must load"))
}

/// A two-preset catalog in the on-disk tagging schema layout.
pub const MINI_PRESETS: &str = r#"{
  "amenity/cafe": {"geometry": ["point", "area"], "tags": {"amenity": "cafe"}},
  "amenity/restaurant": {"geometry": ["point", "area"], "tags": {"amenity": "restaurant"}, "matchScore": 1.5}
}"#;

pub const MINI_TRANSLATIONS: &str = r#"{
  "en": {"presets": {"presets": {
    "amenity/cafe": {"name": "Cafe", "terms": "coffee,food"},
    "amenity/restaurant": {"name": "Restaurant", "terms": "food,dining"}
  }}}
}"#;

/// Search terms used by the bundled-catalog cases.
pub const BUNDLED_TERMS: &[&str] = &[
    "light rail station",
    "Church",
    "  lake  ",
    "STATION",
    "w.c.",
    "bus stop",
    "store",
];
