//! Graph loading from external sources
//!
//! A [`DataSource`] yields plain records; [`GraphBuilder`] fetches every
//! collection (concurrently, with timeout and bounded retry) and assembles
//! them into a fresh [`GraphStore`](crate::graph::GraphStore). The live
//! graph is never touched here, so a failed load cannot leave it half built.

pub mod builder;
pub mod records;
pub mod source;

use crate::graph::GraphError;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use builder::GraphBuilder;
pub use records::{
    ActivityRecord, ContentRecord, Dataset, GroupRecord, InterestRecord, RelationshipRecord,
    UserRecord,
};
pub use source::{HttpDataSource, JsonFileSource};

/// Errors raised while loading the graph
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Fetching {collection} failed: {message}")]
    Source {
        collection: &'static str,
        message: String,
    },

    #[error("Fetching {collection} timed out after {timeout:?}")]
    Timeout {
        collection: &'static str,
        timeout: Duration,
    },

    #[error("Could not decode source data: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source data is inconsistent: {0}")]
    Integrity(#[from] GraphError),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// External store the graph is built from.
///
/// Groups and content are optional collections; sources that do not carry
/// them keep the empty defaults.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    async fn fetch_users(&self) -> LoadResult<Vec<UserRecord>>;

    async fn fetch_relationships(&self) -> LoadResult<Vec<RelationshipRecord>>;

    async fn fetch_activities(&self) -> LoadResult<Vec<ActivityRecord>>;

    async fn fetch_interests(&self) -> LoadResult<Vec<InterestRecord>>;

    async fn fetch_groups(&self) -> LoadResult<Vec<GroupRecord>> {
        Ok(Vec::new())
    }

    async fn fetch_content(&self) -> LoadResult<Vec<ContentRecord>> {
        Ok(Vec::new())
    }

    /// Every collection in one read, for sources that keep them in a
    /// single document. `None` means fetch collection by collection.
    async fn fetch_dataset(&self) -> Option<LoadResult<Dataset>> {
        None
    }
}
