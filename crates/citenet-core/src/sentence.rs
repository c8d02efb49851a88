//! Sentence segmentation and citation linking
//!
//! Segmentation is a heuristic split on ". ", not a grammar-aware
//! tokenizer; the abbreviation rewrites in [`crate::text::normalize_text`]
//! are what keep "e.g." from ending a sentence here. Linking scans each
//! sentence for bracketed numeric markers like "[3]" or "[3, 7]" and
//! resolves them against the parsed reference records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Warning;
use crate::reference::ReferenceRecord;

/// Citation keys found in a sentence and the authors they resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceMetadata {
    /// Reference keys cited by the sentence, in order of appearance
    pub keys: Vec<String>,
    /// Authors of the cited records, concatenated across keys; duplicates
    /// across keys are kept
    pub authors: Vec<String>,
}

/// Split body text into sentences on ". " boundaries.
///
/// Empty segments are dropped; everything else is kept verbatim, indexed
/// by position in the returned sequence.
pub fn split_sentences(body: &str) -> Vec<String> {
    body.split(". ")
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scan sentences for citation markers and resolve them to authors.
///
/// Sentences without any marker get no entry. A key with no reference
/// record voids that one sentence's metadata; the skip is recorded as a
/// warning and the rest of the document is processed.
pub fn link_citations(
    sentences: &[String],
    records: &BTreeMap<String, ReferenceRecord>,
    warnings: &mut Vec<Warning>,
) -> BTreeMap<usize, SentenceMetadata> {
    let mut linked = BTreeMap::new();
    for (index, sentence) in sentences.iter().enumerate() {
        let keys = citation_keys(sentence);
        if keys.is_empty() {
            continue;
        }
        match resolve_keys(index, &keys, records) {
            Ok(authors) => {
                linked.insert(index, SentenceMetadata { keys, authors });
            }
            Err(warning) => warnings.push(warning),
        }
    }
    linked
}

/// Extract candidate citation keys from one sentence.
///
/// Each '[' opens a marker that runs to the next ']' (or the end of the
/// sentence when unclosed). Spaces are stripped; a marker that is purely
/// alphabetic is a bracketed word, not a citation, and is ignored.
fn citation_keys(sentence: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for fragment in sentence.split('[').skip(1) {
        let marker = fragment
            .split(']')
            .next()
            .unwrap_or("")
            .replace(' ', "");
        if !marker.is_empty() && marker.chars().all(char::is_alphabetic) {
            continue;
        }
        keys.extend(marker.split(',').map(str::to_string));
    }
    keys
}

fn resolve_keys(
    sentence_index: usize,
    keys: &[String],
    records: &BTreeMap<String, ReferenceRecord>,
) -> std::result::Result<Vec<String>, Warning> {
    let mut authors = Vec::new();
    for key in keys {
        match records.get(key) {
            Some(record) => authors.extend(record.authors.iter().cloned()),
            None => {
                return Err(Warning::UnresolvedCitationKey {
                    sentence_index,
                    key: key.clone(),
                })
            }
        }
    }
    Ok(authors)
}
