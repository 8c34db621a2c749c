//! Wellgraph
//!
//! In-memory social graph and recommendation engine for a wellness
//! platform. Users, content, groups, activities and interests are nodes;
//! follows, likes, memberships and the like are weighted edges.
//!
//! # Layout
//!
//! - [`graph`]: the store, with a bidirectional adjacency index and
//!   upsert-by-key edges
//! - [`loader`]: builds a store from an external [`DataSource`]
//! - [`recommend`]: similar users, content and group recommendations
//! - [`analytics`]: per-user network metrics and activity updates
//! - [`service`]: the shared, lock-guarded [`SocialGraph`]
//! - [`http`]: JSON API over the service
//!
//! ## Example Usage
//!
//! ```rust
//! use wellgraph::graph::{keys, Edge, EdgeType, GraphStore, Node, NodeType};
//! use wellgraph::recommend::find_similar_users;
//!
//! let mut store = GraphStore::new();
//! store.add_node(
//!     Node::new("a", NodeType::User)
//!         .with_property(keys::INTERESTS, vec!["fitness", "nutrition"])
//!         .with_property(keys::LEVEL, 5i64),
//! );
//! store.add_node(
//!     Node::new("b", NodeType::User)
//!         .with_property(keys::INTERESTS, vec!["fitness", "sports"])
//!         .with_property(keys::LEVEL, 3i64),
//! );
//! store.add_edge(Edge::new("a", "b", EdgeType::Follows, 0.5)).unwrap();
//!
//! let similar = find_similar_users(&store, &"a".into(), 10);
//! assert_eq!(similar[0].target_id.as_str(), "b");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod analytics;
pub mod config;
pub mod graph;
pub mod http;
pub mod loader;
pub mod recommend;
pub mod service;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeId, EdgeType, GraphError, GraphResult, GraphStatistics, GraphStore, Node, NodeId,
    NodeType, PropertyMap, PropertyValue,
};

pub use loader::{DataSource, Dataset, GraphBuilder, LoadError, LoadResult};

pub use recommend::{Recommendation, RecommendationKind};

pub use analytics::{ActivityOutcome, NetworkAnalytics};

pub use config::{ConfigError, LoaderConfig, ServerConfig, SourceConfig, WellgraphConfig};

pub use service::{ServiceError, ServiceResult, SocialGraph};

pub use http::HttpServer;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
