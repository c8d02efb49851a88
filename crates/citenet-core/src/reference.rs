//! Reference section parsing
//!
//! Splits the normalized document at its REFERENCES heading and parses the
//! numbered entries after it into keyed author lists. Parsing is
//! best-effort per chunk: a chunk that does not look like "N] citation
//! text" is dropped with a warning and the rest of the list is kept.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{AnalysisError, Result, Warning};
use crate::text::normalize_author;

/// Literal heading separating the paper body from its reference list.
pub const REFERENCES_MARKER: &str = "REFERENCES";

/// A parsed entry from the references section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceRecord {
    /// Citation number as it appears in brackets, e.g. "12"
    pub key: String,
    /// Citation text after the "] " separator, unmodified
    pub raw: String,
    /// Normalized author names in list order
    pub authors: Vec<String>,
}

/// Split a normalized document into (body, references block).
///
/// The marker must appear exactly once; with zero or multiple occurrences
/// there is no unambiguous reference section and the document cannot be
/// processed at all.
pub fn split_on_references_marker(text: &str) -> Result<(&str, &str)> {
    let mut occurrences = text.match_indices(REFERENCES_MARKER);
    match (occurrences.next(), occurrences.next()) {
        (None, _) => Err(AnalysisError::MissingReferencesMarker),
        (Some((at, _)), None) => {
            Ok((&text[..at], &text[at + REFERENCES_MARKER.len()..]))
        }
        (Some(_), Some(_)) => Err(AnalysisError::AmbiguousReferencesMarker {
            count: text.matches(REFERENCES_MARKER).count(),
        }),
    }
}

/// Parse a references block into records keyed by citation number.
///
/// The block is split on '['; each chunk is expected to read
/// `N] citation text...`. Chunks without the "] " separator (boilerplate
/// before the first bracket, page noise) are dropped; non-empty dropped
/// chunks are recorded as warnings. A duplicate citation number
/// overwrites the earlier record, last-parsed wins.
pub fn parse_references(
    block: &str,
    warnings: &mut Vec<Warning>,
) -> BTreeMap<String, ReferenceRecord> {
    let mut records = BTreeMap::new();
    for chunk in block.split('[') {
        match parse_chunk(chunk) {
            Some(record) => {
                records.insert(record.key.clone(), record);
            }
            None => {
                if !chunk.trim().is_empty() {
                    warnings.push(Warning::MalformedReferenceChunk {
                        snippet: snippet_of(chunk),
                    });
                }
            }
        }
    }
    records
}

fn parse_chunk(chunk: &str) -> Option<ReferenceRecord> {
    let (key, citation) = chunk.split_once("] ")?;
    Some(ReferenceRecord {
        key: key.to_string(),
        raw: citation.to_string(),
        authors: parse_author_list(citation),
    })
}

/// Extract normalized author names from one citation's text.
///
/// The author list is the comma-separated text before the citation's
/// first period. A comma segment containing "and" joins two names and is
/// split again on " and ". Works for "A, B and C. Title." style entries;
/// initials written as "Smith, J." end the list at the initial's period.
fn parse_author_list(citation: &str) -> Vec<String> {
    let list = citation.split('.').next().unwrap_or(citation);
    let mut authors = Vec::new();
    for segment in list.split(',') {
        if segment.contains("and") {
            authors.extend(
                segment
                    .split(" and ")
                    .filter(|name| !name.is_empty())
                    .map(normalize_author),
            );
        } else {
            authors.push(normalize_author(segment));
        }
    }
    authors
}

fn snippet_of(chunk: &str) -> String {
    chunk.trim().chars().take(40).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_requires_marker() {
        assert_eq!(
            split_on_references_marker("no heading here"),
            Err(AnalysisError::MissingReferencesMarker)
        );
    }

    #[test]
    fn test_split_rejects_repeated_marker() {
        assert_eq!(
            split_on_references_marker("REFERENCES twice REFERENCES"),
            Err(AnalysisError::AmbiguousReferencesMarker { count: 2 })
        );
    }

    #[test]
    fn test_split_yields_body_and_block() {
        let (body, block) =
            split_on_references_marker("body text. REFERENCES [1] Smith. T.").unwrap();
        assert_eq!(body, "body text. ");
        assert_eq!(block, " [1] Smith. T.");
    }

    #[test]
    fn test_parse_single_reference() {
        let mut warnings = Vec::new();
        let records = parse_references(" [1] Smith and Doe. Some title. 2019.", &mut warnings);
        assert_eq!(records.len(), 1);
        assert_eq!(records["1"].key, "1");
        assert_eq!(records["1"].authors, vec!["Smith", "Doe"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_author_list_stops_at_first_period() {
        // An initialed name ends the author list early; the tail of the
        // list never becomes authors.
        let mut warnings = Vec::new();
        let records =
            parse_references(" [1] Smith, J. and Doe, A. Some title.", &mut warnings);
        assert_eq!(records["1"].authors, vec!["Smith", "J"]);
    }

    #[test]
    fn test_comma_segments_with_and_are_split_again() {
        let mut warnings = Vec::new();
        let records = parse_references(
            " [4] Garcia, Müller and Nakamura. Voice agents. 2020.",
            &mut warnings,
        );
        assert_eq!(records["4"].authors, vec!["Garcia", "Muller", "Nakamura"]);
    }

    #[test]
    fn test_name_containing_and_is_not_split() {
        let mut warnings = Vec::new();
        let records = parse_references(" [2] Anderson, Brand. Title.", &mut warnings);
        assert_eq!(records["2"].authors, vec!["Anderson", "Brand"]);
    }

    #[test]
    fn test_malformed_chunk_is_dropped_with_warning() {
        let mut warnings = Vec::new();
        let records = parse_references(
            " Proceedings boilerplate [1] Smith. T. [no-separator-here",
            &mut warnings,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(
            warnings,
            vec![
                Warning::MalformedReferenceChunk {
                    snippet: "Proceedings boilerplate".to_string()
                },
                Warning::MalformedReferenceChunk {
                    snippet: "no-separator-here".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_leading_whitespace_chunk_is_silent() {
        let mut warnings = Vec::new();
        parse_references("  [1] Smith. T.", &mut warnings);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_duplicate_key_last_parsed_wins() {
        let mut warnings = Vec::new();
        let records =
            parse_references(" [7] Early. T. [7] Late. T.", &mut warnings);
        assert_eq!(records.len(), 1);
        assert_eq!(records["7"].authors, vec!["Late"]);
    }

    #[test]
    fn test_empty_block_yields_no_records() {
        let mut warnings = Vec::new();
        let records = parse_references("", &mut warnings);
        assert!(records.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_authors_are_diacritic_normalized() {
        let mut warnings = Vec::new();
        let records = parse_references(" [3] Müller, García. Title.", &mut warnings);
        assert_eq!(records["3"].authors, vec!["Muller", "Garcia"]);
    }
}
