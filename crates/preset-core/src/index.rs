//! Term index: maps normalized search terms to the best-scoring presets.
//!
//! Every term keeps only the presets that share the highest match score
//! offered for it. A strictly better preset evicts everything recorded so far;
//! a tie is appended in encounter order. Terms that never receive a preset
//! (every candidate scored below the default) are not recognized.
//!
//! The recognized terms are also compiled into an [`fst::Set`] so that
//! autocomplete can run a prefix scan without touching the hash map.

use crate::catalog::Catalog;
use crate::types::{FeatureDefinition, Translation, DEFAULT_MATCH_SCORE};
use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Set, Streamer};
use std::collections::HashMap;
use std::sync::Arc;

/// Lower-case and trim a raw term.
pub fn normalize_term(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Presets recorded for one term, all at `score`.
#[derive(Debug, Clone)]
struct TermEntry {
    score: f64,
    matches: Vec<Arc<FeatureDefinition>>,
}

impl TermEntry {
    fn empty() -> Self {
        Self {
            score: DEFAULT_MATCH_SCORE,
            matches: Vec::new(),
        }
    }

    fn offer(&mut self, definition: &Arc<FeatureDefinition>) {
        let incoming = definition.match_score;
        if incoming < self.score {
            return;
        }
        if incoming > self.score {
            self.matches.clear();
            self.score = incoming;
        }
        if !self.matches.iter().any(|m| Arc::ptr_eq(m, definition)) {
            self.matches.push(Arc::clone(definition));
        }
    }
}

/// Immutable lookup from normalized term to matching presets.
pub struct TermIndex {
    entries: HashMap<String, TermEntry>,
    terms: Set<Vec<u8>>,
}

impl std::fmt::Debug for TermIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermIndex")
            .field("terms", &self.entries.len())
            .finish()
    }
}

impl TermIndex {
    /// Build the index from preset definitions and their translations.
    ///
    /// `translations` are visited in slice order, which fixes the order of
    /// tied presets. Entries without a searchable preset or without a name
    /// are skipped.
    pub fn build(
        definitions: &HashMap<String, Arc<FeatureDefinition>>,
        translations: &[Translation],
    ) -> Self {
        let mut entries: HashMap<String, TermEntry> = HashMap::new();
        let mut skipped = 0usize;

        for translation in translations {
            let Some(definition) = definitions.get(&translation.id) else {
                tracing::debug!(id = %translation.id, "index: no preset for translation, skipping");
                skipped += 1;
                continue;
            };
            if !definition.searchable {
                tracing::debug!(id = %translation.id, "index: preset is not searchable, skipping");
                skipped += 1;
                continue;
            }
            let Some(name) = translation.name.as_deref() else {
                tracing::debug!(id = %translation.id, "index: translation has no name, skipping");
                skipped += 1;
                continue;
            };

            let synonyms = translation.terms.as_deref().into_iter().flat_map(|t| t.split(','));
            for term in std::iter::once(name).chain(synonyms).map(normalize_term) {
                if term.is_empty() {
                    continue;
                }
                entries
                    .entry(term)
                    .or_insert_with(TermEntry::empty)
                    .offer(definition);
            }
        }

        entries.retain(|_, entry| !entry.matches.is_empty());

        let mut keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let terms = Set::from_iter(keys).expect("hash map keys are unique and sorted");

        tracing::info!(
            terms = entries.len(),
            definitions = definitions.len(),
            skipped,
            "index: built term index"
        );

        Self { entries, terms }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::build(catalog.definitions(), catalog.translations())
    }

    /// Presets for `raw_term`, or `None` if the term is not recognized.
    pub fn matches(&self, raw_term: &str) -> Option<&[Arc<FeatureDefinition>]> {
        self.entries
            .get(&normalize_term(raw_term))
            .map(|entry| entry.matches.as_slice())
    }

    /// Every recognized term, in lexicographic order.
    pub fn terms(&self) -> Vec<String> {
        self.terms.stream().into_strs().unwrap_or_default()
    }

    /// Up to `limit` recognized terms starting with `prefix`, in
    /// lexicographic order. The scan stops once `limit` terms are found.
    pub fn complete(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = normalize_term(prefix);
        let matcher = Str::new(&prefix).starts_with();
        let mut stream = self.terms.search(matcher).into_stream();
        let mut out = Vec::with_capacity(limit.min(64));
        while out.len() < limit {
            let Some(key) = stream.next() else { break };
            out.push(String::from_utf8_lossy(key).into_owned());
        }
        out
    }

    pub fn contains(&self, raw_term: &str) -> bool {
        self.terms.contains(normalize_term(raw_term))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
