//! Batch graph construction from a [`DataSource`]

use super::records::Dataset;
use super::{DataSource, LoadError, LoadResult};
use crate::config::LoaderConfig;
use crate::graph::{Edge, GraphStore, Node};
use std::future::Future;
use tracing::{debug, info, warn};

/// Fetches every collection and assembles a staging graph
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: LoaderConfig,
}

impl GraphBuilder {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Fetch all collections concurrently and build a new graph.
    ///
    /// Fails as a whole if any collection cannot be fetched within the
    /// retry budget or the records reference unknown nodes.
    pub async fn build(&self, source: &dyn DataSource) -> LoadResult<GraphStore> {
        info!("Loading graph from {} source", source.name());
        let dataset = self.fetch(source).await?;
        Self::assemble(&dataset)
    }

    /// Fetch every collection into one dataset.
    ///
    /// Single-document sources are read once; others are fetched
    /// collection by collection, concurrently.
    pub async fn fetch(&self, source: &dyn DataSource) -> LoadResult<Dataset> {
        let cfg = &self.config;
        let whole = fetch_with_retry("dataset", cfg, || async move {
            source.fetch_dataset().await.transpose()
        })
        .await?;
        if let Some(dataset) = whole {
            return Ok(dataset);
        }

        let (users, relationships, activities, interests, groups, content) = futures::try_join!(
            fetch_with_retry("users", cfg, || source.fetch_users()),
            fetch_with_retry("relationships", cfg, || source.fetch_relationships()),
            fetch_with_retry("activities", cfg, || source.fetch_activities()),
            fetch_with_retry("interests", cfg, || source.fetch_interests()),
            fetch_with_retry("groups", cfg, || source.fetch_groups()),
            fetch_with_retry("content", cfg, || source.fetch_content()),
        )?;

        Ok(Dataset {
            users,
            relationships,
            activities,
            interests,
            groups,
            content,
        })
    }

    /// Build a graph from already-fetched records.
    ///
    /// Each entity becomes one node, each relationship one edge. All nodes
    /// are inserted before any edge, so relationships may point at any
    /// collection. An id used twice, in one collection or across two, is
    /// an integrity error.
    pub fn assemble(dataset: &Dataset) -> LoadResult<GraphStore> {
        let mut store = GraphStore::new();

        for record in &dataset.users {
            store.try_add_node(Node::from(record))?;
        }
        for record in &dataset.activities {
            store.try_add_node(Node::from(record))?;
        }
        for record in &dataset.interests {
            store.try_add_node(Node::from(record))?;
        }
        for record in &dataset.groups {
            store.try_add_node(Node::from(record))?;
        }
        for record in &dataset.content {
            store.try_add_node(Node::from(record))?;
        }
        for record in &dataset.relationships {
            store.add_edge(Edge::from(record))?;
        }

        info!(
            "Graph assembled: {} nodes, {} edges",
            store.node_count(),
            store.edge_count()
        );
        Ok(store)
    }
}

/// Run one fetch under a timeout, retrying with linear backoff.
async fn fetch_with_retry<T, F, Fut>(
    collection: &'static str,
    config: &LoaderConfig,
    mut fetch: F,
) -> LoadResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = LoadResult<T>>,
{
    let timeout = config.fetch_timeout();
    let mut attempt = 0;

    loop {
        let err = match tokio::time::timeout(timeout, fetch()).await {
            Ok(Ok(records)) => {
                debug!("Fetched {} (attempt {})", collection, attempt + 1);
                return Ok(records);
            }
            Ok(Err(e)) => e,
            Err(_) => LoadError::Timeout { collection, timeout },
        };

        if attempt >= config.max_retries || !is_retryable(&err) {
            return Err(err);
        }

        attempt += 1;
        warn!(
            "Fetching {} failed ({}), retry {}/{}",
            collection, err, attempt, config.max_retries
        );
        tokio::time::sleep(config.retry_backoff() * attempt).await;
    }
}

/// Malformed data will not fix itself on retry
fn is_retryable(err: &LoadError) -> bool {
    matches!(
        err,
        LoadError::Source { .. } | LoadError::Timeout { .. } | LoadError::Io(_)
    )
}
