//! Document text normalization ahead of splitting
//!
//! Periods serve more roles than ending sentences. Both the reference
//! parser and the sentence segmenter split on period boundaries, so known
//! abbreviation periods are rewritten here first.

/// Abbreviation rewrites applied after line-wrap repair.
///
/// Lossy on purpose: the normalized text is only used for splitting,
/// never for display, so the original punctuation need not be
/// recoverable.
const ABBREVIATION_FIXES: [(&str, &str); 4] = [
    ("vs.", "vs"),
    ("e.g.", "e.g"),
    (").", ")"),
    ("i.e.", "i.e"),
];

/// Normalize raw document text for splitting.
///
/// Collapses line breaks to spaces, re-joins hyphenated line wraps,
/// squeezes duplicate spaces, and defuses abbreviation periods so they
/// cannot be mistaken for sentence terminators. Pure and deterministic.
pub fn normalize_text(raw: &str) -> String {
    let mut text = raw.replace('\n', " ").replace("- ", "").replace("  ", " ");
    for (from, to) in ABBREVIATION_FIXES {
        text = text.replace(from, to);
    }
    text
}
