//! End-to-end extraction pipeline
//!
//! One synchronous pass over the document: normalize, split at the
//! REFERENCES heading, parse records, build the co-authorship graph,
//! cluster it, segment the body, link citations, and map clusters to
//! sentences. Each stage consumes the complete output of its
//! predecessor; nothing streams and nothing is shared across invocations.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cluster::{map_clusters_to_sentences, ClusterSentenceIndex};
use crate::error::{Result, Warning};
use crate::graph::{AuthorCluster, CoauthorGraph};
use crate::reference::{parse_references, split_on_references_marker, ReferenceRecord};
use crate::sentence::{link_citations, split_sentences, SentenceMetadata};
use crate::text::normalize_text;

/// Everything extracted from one document.
#[derive(Debug)]
pub struct Analysis {
    /// The normalized text the whole pipeline ran on
    pub normalized_text: String,
    /// Reference records keyed by citation number
    pub references: BTreeMap<String, ReferenceRecord>,
    /// The global co-authorship graph
    pub graph: CoauthorGraph,
    /// Connected components of the graph; position is the cluster id
    pub clusters: Vec<AuthorCluster>,
    /// Body sentences in order
    pub sentences: Vec<String>,
    /// Citation metadata for sentences citing at least one record
    pub sentence_metadata: BTreeMap<usize, SentenceMetadata>,
    /// Cluster id to indices of sentences citing that cluster
    pub cluster_sentences: ClusterSentenceIndex,
    /// Sorted, deduplicated author names across all records
    pub authors: Vec<String>,
    /// Per-item skips encountered along the way
    pub warnings: Vec<Warning>,
}

/// Serializable view of an [`Analysis`] for report output.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub references: &'a BTreeMap<String, ReferenceRecord>,
    pub authors: &'a [String],
    pub clusters: &'a [AuthorCluster],
    pub sentences: &'a [String],
    pub sentence_metadata: &'a BTreeMap<usize, SentenceMetadata>,
    pub cluster_sentences: &'a ClusterSentenceIndex,
    pub warnings: &'a [Warning],
}

impl Analysis {
    pub fn report(&self) -> Report<'_> {
        Report {
            references: &self.references,
            authors: &self.authors,
            clusters: &self.clusters,
            sentences: &self.sentences,
            sentence_metadata: &self.sentence_metadata,
            cluster_sentences: &self.cluster_sentences,
            warnings: &self.warnings,
        }
    }
}

/// Run the full extraction over raw document text.
///
/// Fails only when the REFERENCES marker is missing or repeated; every
/// other defect degrades to a warning on the result. A document whose
/// references block parses to zero records yields a valid, empty
/// analysis: no clusters and an empty cluster-sentence index.
pub fn analyze(raw_text: &str) -> Result<Analysis> {
    let normalized = normalize_text(raw_text);
    let (body, references_block) = split_on_references_marker(&normalized)?;

    let mut warnings = Vec::new();
    let references = parse_references(references_block, &mut warnings);

    let graph = CoauthorGraph::from_records(references.values());
    let clusters = graph.clusters();

    let sentences = split_sentences(body);
    let sentence_metadata = link_citations(&sentences, &references, &mut warnings);
    let cluster_sentences = map_clusters_to_sentences(&clusters, &sentence_metadata);

    let mut authors: Vec<String> = references
        .values()
        .flat_map(|record| record.authors.iter().cloned())
        .collect();
    authors.sort();
    authors.dedup();

    Ok(Analysis {
        normalized_text: normalized,
        references,
        graph,
        clusters,
        sentences,
        sentence_metadata,
        cluster_sentences,
        authors,
        warnings,
    })
}
