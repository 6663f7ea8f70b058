//! Escaping for Overpass QL string literals.
//!
//! See <https://wiki.openstreetmap.org/wiki/Overpass_API/Overpass_QL#Escaping>.

use std::borrow::Cow;

/// Replacement for `c` inside a quoted literal, or `None` if it passes through.
///
/// The rule set is closed: every character with a rule is listed here.
fn replacement(c: char) -> Option<&'static str> {
    match c {
        '\n' => Some("\\\n"),
        '\t' => Some("\\\t"),
        '"' => Some("\\\""),
        '\'' => Some("\\'"),
        '\\' => Some("\\\\"),
        _ => None,
    }
}

/// Escape `text` for embedding in a single- or double-quoted literal.
///
/// Borrows the input when nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c: char| replacement(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match replacement(c) {
            Some(rep) => out.push_str(rep),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}
