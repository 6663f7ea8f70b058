//! Public lookup: free-form term plus bounding box to a compiled query.

use crate::compiler;
use crate::index::TermIndex;
use crate::types::{BoundingBox, CompiledQuery, FeatureDefinition};

impl TermIndex {
    /// Compile a query for every preset recognized under `raw_term`.
    ///
    /// Returns `None` when the term is not recognized. That is the common
    /// outcome for free text and not an error.
    pub fn lookup(&self, raw_term: &str, bbox: &BoundingBox) -> Option<CompiledQuery> {
        let Some(matches) = self.matches(raw_term) else {
            tracing::debug!(term = raw_term, "lookup: unrecognized term");
            return None;
        };

        let definitions: Vec<&FeatureDefinition> = matches.iter().map(|d| d.as_ref()).collect();
        tracing::debug!(
            term = raw_term,
            presets = definitions.len(),
            %bbox,
            "lookup: compiling query"
        );
        Some(compiler::render(&definitions, bbox))
    }
}
