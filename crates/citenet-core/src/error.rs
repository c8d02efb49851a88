//! Error and warning types for the extraction pipeline

use serde::Serialize;
use thiserror::Error;

/// Result type alias for citenet operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Fatal errors that abort the whole pipeline.
///
/// Without an unambiguous REFERENCES marker the document cannot be split
/// into body and reference list, and nothing downstream can run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// No REFERENCES marker in the document
    #[error("no REFERENCES marker found in document")]
    MissingReferencesMarker,

    /// More than one REFERENCES marker; the split point is ambiguous
    #[error("REFERENCES marker appears {count} times, expected exactly one")]
    AmbiguousReferencesMarker { count: usize },
}

/// Per-item conditions recovered by skipping.
///
/// These are values, not errors: the pipeline drops the offending item,
/// records the warning on the result, and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Warning {
    /// A reference chunk without the "] " key separator was dropped
    MalformedReferenceChunk { snippet: String },

    /// A bracketed key matched no reference record; the sentence's
    /// citation metadata was skipped
    UnresolvedCitationKey { sentence_index: usize, key: String },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::MalformedReferenceChunk { snippet } => {
                write!(f, "dropped reference chunk without \"] \" separator: {snippet:?}")
            }
            Warning::UnresolvedCitationKey { sentence_index, key } => {
                write!(
                    f,
                    "sentence {sentence_index} cites unknown reference [{key}], metadata skipped"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let warning = Warning::UnresolvedCitationKey {
            sentence_index: 4,
            key: "12".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "sentence 4 cites unknown reference [12], metadata skipped"
        );
    }

    #[test]
    fn test_error_display() {
        let err = AnalysisError::AmbiguousReferencesMarker { count: 3 };
        assert_eq!(
            err.to_string(),
            "REFERENCES marker appears 3 times, expected exactly one"
        );
    }
}
