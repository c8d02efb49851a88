//! citenet-core: citation-authorship network extraction from paper text
//!
//! Takes the plain text of an academic paper (already extracted from PDF by
//! an external tool) and produces:
//! - numbered reference records with normalized author lists
//! - a co-authorship graph over those authors
//! - connected-component author clusters
//! - body sentences linked to the reference keys and clusters they cite
//!
//! The entry point is [`pipeline::analyze`]; everything underneath is a
//! pure, synchronous string-and-graph transform. Only bracketed numeric
//! citations ("[3]", "[3, 7]") are recognized.

pub mod cluster;
pub mod error;
pub mod export;
pub mod graph;
pub mod pipeline;
pub mod reference;
pub mod sentence;
pub mod text;

// Re-export main types for convenience
pub use cluster::{map_clusters_to_sentences, ClusterSentenceIndex};
pub use error::{AnalysisError, Result, Warning};
pub use export::write_pajek;
pub use graph::{AuthorCluster, CoauthorGraph};
pub use pipeline::{analyze, Analysis, Report};
pub use reference::{
    parse_references, split_on_references_marker, ReferenceRecord, REFERENCES_MARKER,
};
pub use sentence::{link_citations, split_sentences, SentenceMetadata};
pub use text::{normalize_author, normalize_text};
