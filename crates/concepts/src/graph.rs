use crate::types::{ConceptualModel, GraphEdge, GraphNode};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Concept graph: nodes weighted by frequency, edges weighted by
/// co-occurrence strength.
///
/// Backed by a directed petgraph with a name index for fast lookup; export
/// order follows insertion order, so callers control determinism by
/// inserting deterministically.
pub struct ConceptGraph {
    graph: DiGraph<GraphNode, u32>,
    name_index: HashMap<String, NodeIndex>,
}

impl ConceptGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_index: HashMap::new(),
        }
    }

    /// Add a concept node; duplicate names are ignored
    pub fn add_concept(&mut self, name: &str, weight: u32) {
        if self.name_index.contains_key(name) {
            return;
        }
        let idx = self.graph.add_node(GraphNode {
            id: name.to_string(),
            label: name.to_string(),
            weight,
        });
        self.name_index.insert(name.to_string(), idx);
    }

    /// Add an edge between two existing concepts; silently skipped when
    /// either endpoint is not in the graph, which is what keeps every
    /// exported edge's endpoints inside the node set.
    pub fn add_relation(&mut self, source: &str, target: &str, weight: u32) {
        let (Some(&from), Some(&to)) = (self.name_index.get(source), self.name_index.get(target))
        else {
            return;
        };
        self.graph.add_edge(from, to, weight);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Export as plain node/edge lists for renderers
    pub fn to_model(&self) -> ConceptualModel {
        let nodes = self
            .graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx).cloned())
            .collect();

        let edges = self
            .graph
            .edge_indices()
            .filter_map(|idx| {
                let (from, to) = self.graph.edge_endpoints(idx)?;
                Some(GraphEdge {
                    source: self.graph.node_weight(from)?.id.clone(),
                    target: self.graph.node_weight(to)?.id.clone(),
                    weight: *self.graph.edge_weight(idx)?,
                })
            })
            .collect();

        ConceptualModel { nodes, edges }
    }
}

impl Default for ConceptGraph {
    fn default() -> Self {
        Self::new()
    }
}
