//! Pajek rendering of the co-authorship graph
//!
//! Pajek .net is the lowest common denominator for network viewers such
//! as VOSviewer: a numbered vertex list followed by an edge list.

use std::collections::HashMap;

use crate::graph::CoauthorGraph;

/// Render the graph in Pajek .net format.
///
/// Vertex ids are 1-based in node-insertion order, labels are quoted, and
/// the *Edges section lists each undirected edge once, self-loops
/// included.
pub fn write_pajek(graph: &CoauthorGraph) -> String {
    let nodes = graph.nodes();
    let ids: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(position, name)| (*name, position + 1))
        .collect();

    let mut out = String::new();
    out.push_str(&format!("*Vertices {}\n", nodes.len()));
    for (position, name) in nodes.iter().enumerate() {
        out.push_str(&format!("{} \"{}\"\n", position + 1, name));
    }
    out.push_str("*Edges\n");
    for (a, b) in graph.edges() {
        if let (Some(id_a), Some(id_b)) = (ids.get(a), ids.get(b)) {
            out.push_str(&format!("{id_a} {id_b}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceRecord;

    #[test]
    fn test_pajek_layout() {
        let records = [ReferenceRecord {
            key: "1".to_string(),
            raw: String::new(),
            authors: vec!["Smith".to_string(), "Doe".to_string()],
        }];
        let graph = CoauthorGraph::from_records(&records);

        assert_eq!(
            write_pajek(&graph),
            "*Vertices 2\n\
             1 \"Smith\"\n\
             2 \"Doe\"\n\
             *Edges\n\
             1 1\n\
             1 2\n\
             2 2\n"
        );
    }

    #[test]
    fn test_empty_graph_renders_empty_sections() {
        let graph = CoauthorGraph::new();
        assert_eq!(write_pajek(&graph), "*Vertices 0\n*Edges\n");
    }
}
