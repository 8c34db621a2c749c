//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm
//! execution. Edge weights are not carried; PageRank ranks by link structure.

use std::collections::HashMap;
use std::hash::Hash;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// `K` is the caller's node key; algorithms only see dense indices and map
/// back through `index_to_node` when reporting results.
pub struct GraphView<K> {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to the node key
    pub index_to_node: Vec<K>,
    /// Mapping from node key to dense index
    pub node_to_index: HashMap<K, usize>,

    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,
}

impl<K: Clone + Eq + Hash> GraphView<K> {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        &self.in_sources[self.in_offsets[idx]..self.in_offsets[idx + 1]]
    }

    /// Build a view from node keys and `(source, target)` pairs.
    ///
    /// Edges whose endpoints are not in `nodes` are skipped.
    pub fn from_edges<I>(nodes: Vec<K>, edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K)>,
    {
        let node_count = nodes.len();
        let node_to_index: HashMap<K, usize> = nodes
            .iter()
            .enumerate()
            .map(|(idx, key)| (key.clone(), idx))
            .collect();

        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];

        for (source, target) in edges {
            if let (Some(&u), Some(&v)) = (node_to_index.get(&source), node_to_index.get(&target)) {
                outgoing[u].push(v);
                incoming[v].push(u);
            }
        }

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        out_offsets.push(0);
        for targets in outgoing {
            out_targets.extend(targets);
            out_offsets.push(out_targets.len());
        }

        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::new();
        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            index_to_node: nodes,
            node_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_projection() {
        // a -> b -> c, plus an edge to an unknown node that must be dropped
        let view = GraphView::from_edges(
            vec!["a", "b", "c"],
            vec![("a", "b"), ("b", "c"), ("c", "zz")],
        );

        assert_eq!(view.node_count, 3);
        assert_eq!(view.out_targets.len(), 2);
        let a = view.node_to_index["a"];
        let b = view.node_to_index["b"];
        let c = view.node_to_index["c"];

        assert_eq!(view.predecessors(b), &[a]);
        assert_eq!(view.predecessors(c), &[b]);
        assert_eq!(view.out_degree(a), 1);
        assert_eq!(view.out_degree(c), 0);
    }
}
