//! Domain-specific assertion macros for preset-search harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* term or query shape was wrong.

use preset_core::{CompiledQuery, TermIndex};

/// Assert that `term` resolves to exactly these preset ids, in order.
///
/// ```rust
/// assert_term_ids!(index, "lake", ["natural/water/lake", "natural/water/pond"]);
/// ```
#[macro_export]
macro_rules! assert_term_ids {
    ($index:expr, $term:expr, [$($id:expr),* $(,)?]) => {{
        let index: &preset_core::TermIndex = &$index;
        let term: &str = $term;
        let expected: Vec<String> = vec![$($id.to_string()),*];
        let actual = $crate::common::ids_for(index, term);
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_term_ids! failed for term {:?}", term
        );
    }};
}

/// Assert that `term` is not recognized by the index.
#[macro_export]
macro_rules! assert_unrecognized {
    ($index:expr, $term:expr) => {{
        let index: &preset_core::TermIndex = &$index;
        let term: &str = $term;
        if let Some(found) = index.matches(term) {
            panic!(
                "assert_unrecognized! failed: {:?} resolved to {:?}",
                term,
                found.iter().map(|d| d.id.as_str()).collect::<Vec<_>>()
            );
        }
    }};
}

/// Check the frame every compiled query shares: bbox header, union, and
/// `out geom;` trailer.
pub fn assert_query_frame(query: &CompiledQuery, bbox: &str) {
    let text = query.as_str();
    let header = format!("[bbox:{bbox}][out:json];\n(\n");
    assert!(
        text.starts_with(&header),
        "query does not start with {header:?}:\n{text}"
    );
    assert!(text.ends_with("\n);\nout geom;"), "query has no trailer:\n{text}");
    for line in text.lines().skip(2).take_while(|l| *l != ");") {
        assert!(
            line.starts_with("node[") || line.starts_with("way[") || line.starts_with("relation["),
            "unexpected statement {line:?} in:\n{text}"
        );
        assert!(line.ends_with(';'), "statement {line:?} missing ';'");
    }
}

/// Every preset listed for a term shares one score.
pub fn assert_single_score_per_term(index: &TermIndex) {
    for term in index.terms() {
        let matches = index.matches(&term).expect("listed terms resolve");
        assert!(!matches.is_empty(), "term {term:?} has an empty preset list");
        let score = matches[0].match_score;
        assert!(
            matches.iter().all(|d| d.match_score == score),
            "term {term:?} mixes scores: {:?}",
            matches.iter().map(|d| (&d.id, d.match_score)).collect::<Vec<_>>()
        );
    }
}
