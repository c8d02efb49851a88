//! Co-authorship graph construction and clustering
//!
//! Nodes are normalized author names; an edge means two names co-appear in
//! at least one reference record's author list. Clustering is plain
//! connected components, so authors who never co-published still land in
//! one cluster when a chain of shared co-authors links them.

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::reference::ReferenceRecord;

/// A connected component of the co-authorship graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorCluster {
    /// Normalized author names in the component
    pub authors: BTreeSet<String>,
}

impl AuthorCluster {
    pub fn contains(&self, author: &str) -> bool {
        self.authors.contains(author)
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }
}

/// Undirected graph over normalized author names.
///
/// Node identity is the normalized name string: a name-to-index map is
/// consulted before every insertion, so "Smith" is one node no matter how
/// many records cite them. Edges carry no weight and no multiplicity;
/// co-appearing once is the same as co-appearing ten times.
#[derive(Debug, Default)]
pub struct CoauthorGraph {
    graph: UnGraph<String, ()>,
    nodes_by_name: HashMap<String, NodeIndex>,
}

impl CoauthorGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the global graph from an ordered record set.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ReferenceRecord>,
    {
        let mut graph = Self::new();
        for record in records {
            graph.add_record(record);
        }
        graph
    }

    /// Union one record's author clique into the graph.
    ///
    /// Every pair of authors in the list gets an edge, each author paired
    /// with themselves included; the self-loop is a connectivity no-op.
    pub fn add_record(&mut self, record: &ReferenceRecord) {
        let members: Vec<NodeIndex> = record
            .authors
            .iter()
            .map(|name| self.intern(name))
            .collect();
        for &a in &members {
            for &b in &members {
                self.graph.update_edge(a, b, ());
            }
        }
    }

    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.nodes_by_name.get(name) {
            return index;
        }
        let index = self.graph.add_node(name.to_string());
        self.nodes_by_name.insert(name.to_string(), index);
        index
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Author names in node-insertion order.
    pub fn nodes(&self) -> Vec<&str> {
        self.graph.node_weights().map(String::as_str).collect()
    }

    /// Unordered co-authorship pairs, one entry per edge, self-loops
    /// included. This is the node-and-edge view a graph file writer
    /// consumes.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_references()
            .map(|edge| {
                (
                    self.graph[edge.source()].as_str(),
                    self.graph[edge.target()].as_str(),
                )
            })
            .collect()
    }

    /// Connected components as author sets, numbered by discovery order.
    ///
    /// Discovery order follows node insertion order, so the numbering is
    /// stable for identical input but carries no meaning beyond that.
    pub fn clusters(&self) -> Vec<AuthorCluster> {
        let mut components = UnionFind::<usize>::new(self.graph.node_count());
        for edge in self.graph.edge_references() {
            components.union(edge.source().index(), edge.target().index());
        }

        let mut clusters: Vec<AuthorCluster> = Vec::new();
        let mut cluster_by_root: HashMap<usize, usize> = HashMap::new();
        for index in self.graph.node_indices() {
            let root = components.find(index.index());
            let slot = *cluster_by_root.entry(root).or_insert_with(|| {
                clusters.push(AuthorCluster::default());
                clusters.len() - 1
            });
            clusters[slot].authors.insert(self.graph[index].clone());
        }
        clusters
    }
}
