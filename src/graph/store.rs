//! In-memory graph storage
//!
//! Nodes and edges live in insertion-ordered maps so that iteration order
//! is stable across runs. Two derived indices are kept in sync on every
//! edge insertion:
//! - adjacency: NodeId -> neighbor set, populated in both directions
//! - node_edges: NodeId -> ids of edges touching the node

use super::edge::Edge;
use super::node::Node;
use super::property::PropertyValue;
use super::types::{EdgeId, NodeId, NodeType};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("Invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(NodeId),

    #[error("Invalid edge: {0} cannot connect to itself")]
    SelfLoop(NodeId),

    #[error("Node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("Node {id} is a {actual}, expected a {expected}")]
    WrongNodeType {
        id: NodeId,
        expected: NodeType,
        actual: NodeType,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Node and edge counts, broken down by type
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_type: BTreeMap<String, usize>,
    pub edges_by_type: BTreeMap<String, usize>,
}

/// In-memory graph storage
///
/// - nodes: NodeId -> Node (O(1) lookup)
/// - edges: EdgeId -> Edge (O(1) lookup, upsert by derived id)
/// - adjacency: NodeId -> neighbors (bidirectional)
/// - node_edges: NodeId -> edge ids touching the node (O(deg) connections)
/// - type_index: NodeType -> node ids
#[derive(Debug, Default, Clone)]
pub struct GraphStore {
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeId, Edge>,
    adjacency: FxHashMap<NodeId, FxHashSet<NodeId>>,
    node_edges: FxHashMap<NodeId, IndexSet<EdgeId>>,
    type_index: FxHashMap<NodeType, IndexSet<NodeId>>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a node by id, returning the replaced node.
    ///
    /// Overwriting replaces all properties; callers merge manually if
    /// they want a partial update. Edges touching the id are kept.
    pub fn add_node(&mut self, node: Node) -> Option<Node> {
        let id = node.id.clone();
        let node_type = node.node_type;
        let previous = self.nodes.insert(id.clone(), node);

        if let Some(prev) = &previous {
            if prev.node_type != node_type {
                if let Some(ids) = self.type_index.get_mut(&prev.node_type) {
                    ids.shift_remove(&id);
                }
            }
        }
        self.type_index.entry(node_type).or_default().insert(id);

        previous
    }

    /// Insert a node whose id must not be taken yet
    pub fn try_add_node(&mut self, node: Node) -> GraphResult<()> {
        if self.has_node(&node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        self.add_node(node);
        Ok(())
    }

    /// Insert or overwrite an edge by its derived id, returning the replaced edge.
    ///
    /// Both endpoints must already exist and differ. The adjacency index
    /// is updated in both directions.
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<Option<Edge>> {
        if edge.source == edge.target {
            return Err(GraphError::SelfLoop(edge.source));
        }
        if !self.has_node(&edge.source) {
            return Err(GraphError::InvalidEdgeSource(edge.source));
        }
        if !self.has_node(&edge.target) {
            return Err(GraphError::InvalidEdgeTarget(edge.target));
        }

        self.adjacency
            .entry(edge.source.clone())
            .or_default()
            .insert(edge.target.clone());
        self.adjacency
            .entry(edge.target.clone())
            .or_default()
            .insert(edge.source.clone());

        self.node_edges
            .entry(edge.source.clone())
            .or_default()
            .insert(edge.id.clone());
        self.node_edges
            .entry(edge.target.clone())
            .or_default()
            .insert(edge.id.clone());

        Ok(self.edges.insert(edge.id.clone(), edge))
    }

    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a node, requiring it to be of `node_type`
    pub fn get_typed_node(&self, id: &NodeId, node_type: NodeType) -> GraphResult<&Node> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))?;
        if node.node_type != node_type {
            return Err(GraphError::WrongNodeType {
                id: id.clone(),
                expected: node_type,
                actual: node.node_type,
            });
        }
        Ok(node)
    }

    pub fn has_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Set a single property on an existing node
    pub fn set_node_property(
        &mut self,
        id: &NodeId,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> GraphResult<Option<PropertyValue>> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))?;
        Ok(node.set_property(key, value))
    }

    pub fn get_edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Mutable edge access. Endpoints and type must not be changed, they
    /// are baked into the id and the indices.
    pub(crate) fn get_edge_mut(&mut self, id: &EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    /// All edges where the node is either endpoint, in insertion order
    pub fn get_node_connections(&self, id: &NodeId) -> Vec<&Edge> {
        self.node_edges
            .get(id)
            .map(|edge_ids| edge_ids.iter().filter_map(|eid| self.edges.get(eid)).collect())
            .unwrap_or_default()
    }

    /// Directly connected nodes, ignoring edge direction
    pub fn neighbors(&self, id: &NodeId) -> Option<&FxHashSet<NodeId>> {
        self.adjacency.get(id)
    }

    /// Number of neighbors two nodes have in common
    pub fn mutual_connection_count(&self, a: &NodeId, b: &NodeId) -> usize {
        match (self.adjacency.get(a), self.adjacency.get(b)) {
            (Some(na), Some(nb)) => {
                let (small, large) = if na.len() <= nb.len() { (na, nb) } else { (nb, na) };
                small.iter().filter(|n| large.contains(*n)).count()
            }
            _ => 0,
        }
    }

    /// Nodes of one type, in insertion order
    pub fn nodes_of_type(&self, node_type: NodeType) -> Vec<&Node> {
        self.type_index
            .get(&node_type)
            .map(|ids| ids.iter().filter_map(|id| self.nodes.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn statistics(&self) -> GraphStatistics {
        let mut stats = GraphStatistics {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            ..Default::default()
        };
        for (node_type, ids) in &self.type_index {
            if !ids.is_empty() {
                stats.nodes_by_type.insert(node_type.to_string(), ids.len());
            }
        }
        for edge in self.edges.values() {
            *stats.edges_by_type.entry(edge.edge_type.to_string()).or_default() += 1;
        }
        stats
    }

    /// Clear all data from the graph
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
        self.node_edges.clear();
        self.type_index.clear();
    }
}
