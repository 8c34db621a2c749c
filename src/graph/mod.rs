//! Core social graph implementation
//!
//! Typed nodes (user, content, group, activity, interest) joined by typed,
//! weighted, directed edges. Traversal treats edges as undirected through
//! a bidirectional adjacency index.

pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::{Edge, ACTIVITY_EDGE_WEIGHT, MAX_WEIGHT, REINFORCEMENT_STEP};
pub use node::{keys, Node};
pub use property::{PropertyMap, PropertyValue};
pub use store::{GraphError, GraphResult, GraphStatistics, GraphStore};
pub use types::{EdgeId, EdgeType, NodeId, NodeType};
