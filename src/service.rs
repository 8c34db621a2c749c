//! Shared social graph service
//!
//! One [`SocialGraph`] is built at startup and cloned into every consumer.
//! Queries take the read lock and may run side by side; mutations hold the
//! write lock for their whole read-modify-write, so bidirectional adjacency
//! updates and weight reinforcement never interleave. Recommendation
//! scoring fans out on rayon, so it runs on the blocking pool with an
//! owned read guard instead of on an async worker.

use crate::algo::{self, PageRankConfig};
use crate::analytics::{self, ActivityOutcome, NetworkAnalytics};
use crate::config::LoaderConfig;
use crate::graph::{
    Edge, EdgeId, EdgeType, GraphError, GraphStatistics, GraphStore, Node, NodeId, NodeType,
};
use crate::loader::{DataSource, GraphBuilder, LoadError};
use crate::recommend::{self, Recommendation};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use wellgraph_algorithms::{rank_top_k, Scored};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Graph load failed: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Process-wide social graph
#[derive(Clone, Default)]
pub struct SocialGraph {
    store: Arc<RwLock<GraphStore>>,
    builder: GraphBuilder,
}

impl SocialGraph {
    /// Empty graph that loads with the given settings
    pub fn new(loader: LoaderConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(GraphStore::new())),
            builder: GraphBuilder::new(loader),
        }
    }

    /// Wrap an already built store
    pub fn with_store(store: GraphStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            builder: GraphBuilder::default(),
        }
    }

    /// Shared handle to the underlying store
    pub fn store(&self) -> Arc<RwLock<GraphStore>> {
        Arc::clone(&self.store)
    }

    /// Build the graph from `source` and replace the live graph with it.
    ///
    /// The new graph is built off-lock. On any failure the live graph is
    /// left exactly as it was; on success it is swapped in whole, dropping
    /// edges that runtime activity added since the last load.
    pub async fn initialize(&self, source: &dyn DataSource) -> ServiceResult<GraphStatistics> {
        let staging = self.builder.build(source).await?;
        let stats = staging.statistics();

        let mut live = self.store.write().await;
        *live = staging;
        info!(
            "Graph initialized: {} nodes, {} edges",
            stats.node_count, stats.edge_count
        );
        Ok(stats)
    }

    pub async fn add_node(&self, node: Node) -> Option<Node> {
        self.store.write().await.add_node(node)
    }

    pub async fn add_edge(&self, edge: Edge) -> ServiceResult<Option<Edge>> {
        Ok(self.store.write().await.add_edge(edge)?)
    }

    pub async fn get_node(&self, id: &NodeId) -> Option<Node> {
        self.store.read().await.get_node(id).cloned()
    }

    pub async fn get_edge(&self, id: &EdgeId) -> Option<Edge> {
        self.store.read().await.get_edge(id).cloned()
    }

    pub async fn get_node_connections(&self, id: &NodeId) -> Vec<Edge> {
        self.store
            .read()
            .await
            .get_node_connections(id)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn find_similar_users(&self, user_id: &NodeId, limit: usize) -> Vec<Recommendation> {
        let user_id = user_id.clone();
        self.query_blocking(move |store| recommend::find_similar_users(store, &user_id, limit))
            .await
    }

    pub async fn find_recommended_content(&self, user_id: &NodeId, limit: usize) -> Vec<Recommendation> {
        let user_id = user_id.clone();
        self.query_blocking(move |store| recommend::find_recommended_content(store, &user_id, limit))
            .await
    }

    pub async fn find_optimal_groups(&self, user_id: &NodeId, limit: usize) -> Vec<Recommendation> {
        let user_id = user_id.clone();
        self.query_blocking(move |store| recommend::find_optimal_groups(store, &user_id, limit))
            .await
    }

    /// Run a read-only query on the blocking pool. The read guard moves
    /// with it, so writers wait until the query is done.
    async fn query_blocking<T, F>(&self, query: F) -> T
    where
        F: FnOnce(&GraphStore) -> T + Send + 'static,
        T: Default + Send + 'static,
    {
        let store = Arc::clone(&self.store).read_owned().await;
        match tokio::task::spawn_blocking(move || query(&store)).await {
            Ok(result) => result,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => {
                warn!("Graph query cancelled: {}", e);
                T::default()
            }
        }
    }

    /// Analytics as of now
    pub async fn network_analytics(&self, user_id: &NodeId) -> Option<NetworkAnalytics> {
        self.network_analytics_at(user_id, chrono::Utc::now().timestamp_millis())
            .await
    }

    pub async fn network_analytics_at(&self, user_id: &NodeId, now_ms: i64) -> Option<NetworkAnalytics> {
        let store = self.store.read().await;
        analytics::network_analytics(&store, user_id, now_ms)
    }

    /// Record an activity as of now
    pub async fn update_user_activity(
        &self,
        user_id: &NodeId,
        activity_type: EdgeType,
        target_id: Option<&NodeId>,
    ) -> ServiceResult<ActivityOutcome> {
        let now = chrono::Utc::now().timestamp_millis();
        let mut store = self.store.write().await;
        let outcome = analytics::update_user_activity(&mut store, user_id, activity_type, target_id, now)?;
        debug!(
            "Activity {} by {} (count {})",
            activity_type, user_id, outcome.activity_count
        );
        Ok(outcome)
    }

    /// Highest PageRank users over the follow graph
    pub async fn top_influencers(&self, config: &PageRankConfig, limit: usize) -> Vec<Scored<NodeId>> {
        let ranks = self.page_rank(Some(NodeType::User), Some(EdgeType::Follows), config).await;
        let scored = ranks.into_iter().map(|(id, score)| Scored::new(id, score)).collect();
        rank_top_k(scored, limit)
    }

    pub async fn page_rank(
        &self,
        node_type: Option<NodeType>,
        edge_type: Option<EdgeType>,
        config: &PageRankConfig,
    ) -> std::collections::HashMap<NodeId, f64> {
        let store = self.store.read().await;
        algo::page_rank(&store, node_type, edge_type, config)
    }

    pub async fn statistics(&self) -> GraphStatistics {
        self.store.read().await.statistics()
    }
}
