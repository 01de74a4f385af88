// crates/locator-core/src/text.rs

/// Convert a string into a folded key for loose comparison.
///
/// Transliterates Unicode to ASCII with `deunicode` and lowercases the result,
/// so `"Zürich"` and `"zurich"` fold to the same key.
///
/// Only diagnostic searches use folding. Resolution tiers compare dataset keys
/// exactly.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}
