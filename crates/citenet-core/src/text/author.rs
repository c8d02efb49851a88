//! Author name normalization
//!
//! OCR and reference lists do not accent cited authors' names
//! consistently, so node identity in the co-authorship graph is the
//! diacritic-stripped form of the name.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize an author name for use as a graph node identity.
///
/// Trims surrounding whitespace, then NFKD-decomposes the name and drops
/// combining diacritical marks ("Müller" becomes "Muller"). Case and
/// punctuation inside the name are preserved; deduplication downstream is
/// exact string equality on the result, never fuzzy. Total over any input.
pub fn normalize_author(raw: &str) -> String {
    raw.trim()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
