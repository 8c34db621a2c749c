//! Concrete data sources: in-memory, JSON file and HTTP

use super::records::{
    ActivityRecord, ContentRecord, Dataset, GroupRecord, InterestRecord, RelationshipRecord,
    UserRecord,
};
use super::{DataSource, LoadError, LoadResult};
use crate::config::{LoaderConfig, SourceConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
impl DataSource for Dataset {
    fn name(&self) -> &str {
        "in-memory"
    }

    async fn fetch_users(&self) -> LoadResult<Vec<UserRecord>> {
        Ok(self.users.clone())
    }

    async fn fetch_relationships(&self) -> LoadResult<Vec<RelationshipRecord>> {
        Ok(self.relationships.clone())
    }

    async fn fetch_activities(&self) -> LoadResult<Vec<ActivityRecord>> {
        Ok(self.activities.clone())
    }

    async fn fetch_interests(&self) -> LoadResult<Vec<InterestRecord>> {
        Ok(self.interests.clone())
    }

    async fn fetch_groups(&self) -> LoadResult<Vec<GroupRecord>> {
        Ok(self.groups.clone())
    }

    async fn fetch_content(&self) -> LoadResult<Vec<ContentRecord>> {
        Ok(self.content.clone())
    }
}

/// A single JSON document holding a [`Dataset`]. A build reads the file
/// once through [`DataSource::fetch_dataset`]; every build re-reads it so
/// a reload picks up edits.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> LoadResult<Dataset> {
        let raw = tokio::fs::read(&self.path).await?;
        debug!("Read {} bytes from {}", raw.len(), self.path.display());
        serde_json::from_slice(&raw).map_err(|e| LoadError::Decode(e.to_string()))
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn fetch_users(&self) -> LoadResult<Vec<UserRecord>> {
        Ok(self.read().await?.users)
    }

    async fn fetch_relationships(&self) -> LoadResult<Vec<RelationshipRecord>> {
        Ok(self.read().await?.relationships)
    }

    async fn fetch_activities(&self) -> LoadResult<Vec<ActivityRecord>> {
        Ok(self.read().await?.activities)
    }

    async fn fetch_interests(&self) -> LoadResult<Vec<InterestRecord>> {
        Ok(self.read().await?.interests)
    }

    async fn fetch_groups(&self) -> LoadResult<Vec<GroupRecord>> {
        Ok(self.read().await?.groups)
    }

    async fn fetch_content(&self) -> LoadResult<Vec<ContentRecord>> {
        Ok(self.read().await?.content)
    }

    async fn fetch_dataset(&self) -> Option<LoadResult<Dataset>> {
        Some(self.read().await)
    }
}

/// REST source: each collection is a JSON array at `{base_url}/{collection}`
pub struct HttpDataSource {
    client: Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new(base_url: impl Into<String>, loader: &LoaderConfig) -> LoadResult<Self> {
        let client = Client::builder()
            .timeout(loader.fetch_timeout())
            .build()
            .map_err(|e| LoadError::Source {
                collection: "client",
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, collection: &'static str) -> LoadResult<T> {
        let url = format!("{}/{}", self.base_url, collection);
        let source_error = |message: String| LoadError::Source { collection, message };

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| source_error(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(source_error(format!("{} returned {}", url, resp.status())));
        }

        resp.json().await.map_err(|e| LoadError::Decode(e.to_string()))
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_users(&self) -> LoadResult<Vec<UserRecord>> {
        self.get_json("users").await
    }

    async fn fetch_relationships(&self) -> LoadResult<Vec<RelationshipRecord>> {
        self.get_json("relationships").await
    }

    async fn fetch_activities(&self) -> LoadResult<Vec<ActivityRecord>> {
        self.get_json("activities").await
    }

    async fn fetch_interests(&self) -> LoadResult<Vec<InterestRecord>> {
        self.get_json("interests").await
    }

    async fn fetch_groups(&self) -> LoadResult<Vec<GroupRecord>> {
        self.get_json("groups").await
    }

    async fn fetch_content(&self) -> LoadResult<Vec<ContentRecord>> {
        self.get_json("content").await
    }
}

/// Build the data source described by configuration
pub fn open_source(source: &SourceConfig, loader: &LoaderConfig) -> LoadResult<Arc<dyn DataSource>> {
    Ok(match source {
        SourceConfig::Empty => Arc::new(Dataset::default()),
        SourceConfig::JsonFile { path } => Arc::new(JsonFileSource::new(path)),
        SourceConfig::Http { base_url } => Arc::new(HttpDataSource::new(base_url.as_str(), loader)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_json_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"users": [{{"id": "u1", "interests": ["yoga"], "level": 2}}],
                "interests": [{{"id": "i1", "category": "yoga", "popularity": 0.9}}]}}"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let dataset = source.fetch_dataset().await.unwrap().unwrap();
        assert_eq!(dataset.users.len(), 1);
        assert_eq!(dataset.interests.len(), 1);

        assert_eq!(source.fetch_users().await.unwrap().len(), 1);
        assert_eq!(source.fetch_interests().await.unwrap()[0].category, "yoga");
        assert!(source.fetch_relationships().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_json_file_source_errors() {
        let missing = JsonFileSource::new("/definitely/not/here.json");
        assert!(matches!(missing.fetch_users().await, Err(LoadError::Io(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let broken = JsonFileSource::new(file.path());
        assert!(matches!(broken.fetch_users().await, Err(LoadError::Decode(_))));
        assert!(matches!(broken.fetch_dataset().await, Some(Err(LoadError::Decode(_)))));
    }

    #[tokio::test]
    async fn test_open_empty_source() {
        let source = open_source(&SourceConfig::Empty, &LoaderConfig::default()).unwrap();
        assert_eq!(source.name(), "in-memory");
        assert!(source.fetch_users().await.unwrap().is_empty());
        assert!(source.fetch_dataset().await.is_none());
    }
}
