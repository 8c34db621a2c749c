//! Graph algorithms module
//!
//! Algorithms are implemented in `wellgraph-algorithms`. This module
//! projects the store into the dense view they run on.

use crate::graph::{EdgeType, GraphStore, NodeId, NodeType};
use std::collections::HashMap;
use wellgraph_algorithms::GraphView;

pub use wellgraph_algorithms::PageRankConfig;

/// Build a GraphView from the store, optionally restricted to one node
/// type and one edge type. Edge direction is kept, weights are not.
pub fn build_view(
    store: &GraphStore,
    node_type: Option<NodeType>,
    edge_type: Option<EdgeType>,
) -> GraphView<NodeId> {
    let nodes: Vec<NodeId> = match node_type {
        Some(t) => store.nodes_of_type(t).iter().map(|n| n.id.clone()).collect(),
        None => store.all_nodes().map(|n| n.id.clone()).collect(),
    };

    let edges = store
        .all_edges()
        .filter(|edge| edge_type.map_or(true, |t| edge.edge_type == t))
        .map(|edge| (edge.source.clone(), edge.target.clone()));

    GraphView::from_edges(nodes, edges)
}

/// Iterative PageRank over the directed graph. Every edge counts the
/// same regardless of weight.
///
/// Separate from the one-hop `communityRank` analytics metric, which keeps
/// its own formula.
pub fn page_rank(
    store: &GraphStore,
    node_type: Option<NodeType>,
    edge_type: Option<EdgeType>,
    config: &PageRankConfig,
) -> HashMap<NodeId, f64> {
    let view = build_view(store, node_type, edge_type);
    wellgraph_algorithms::page_rank(&view, config)
}
