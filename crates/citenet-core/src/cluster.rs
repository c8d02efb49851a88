//! Cluster-to-sentence mapping

use std::collections::BTreeMap;

use crate::graph::AuthorCluster;
use crate::sentence::SentenceMetadata;

/// Sentence indices citing each cluster, keyed by cluster id.
///
/// A cluster no sentence cites has no entry.
pub type ClusterSentenceIndex = BTreeMap<usize, Vec<usize>>;

/// Collect, per cluster, the sentences whose cited authors intersect it.
///
/// A sentence whose cited authors span more than one cluster appears
/// under every cluster it touches; such a sentence bridges citation
/// communities.
pub fn map_clusters_to_sentences(
    clusters: &[AuthorCluster],
    linked: &BTreeMap<usize, SentenceMetadata>,
) -> ClusterSentenceIndex {
    let mut index = ClusterSentenceIndex::new();
    for (cluster_id, cluster) in clusters.iter().enumerate() {
        for (&sentence_index, metadata) in linked {
            if metadata.authors.iter().any(|author| cluster.contains(author)) {
                index.entry(cluster_id).or_default().push(sentence_index);
            }
        }
    }
    index
}
