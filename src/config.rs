//! Service configuration
//!
//! Read from the YAML file named by `WELLGRAPH_CONFIG`; any section left
//! out falls back to its defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Environment variable holding the config file path
pub const CONFIG_ENV: &str = "WELLGRAPH_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellgraphConfig {
    pub server: ServerConfig,
    pub loader: LoaderConfig,
    pub source: SourceConfig,
}

/// HTTP bind settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

/// Timeouts and retry budget for source fetches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Per-attempt timeout for one collection fetch
    pub fetch_timeout_ms: u64,
    /// Retries after the first failed attempt
    pub max_retries: u32,
    /// Backoff unit; retry `n` waits `n * retry_backoff_ms`
    pub retry_backoff_ms: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: 10_000,
            max_retries: 3,
            retry_backoff_ms: 500,
        }
    }
}

impl LoaderConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

/// Where the graph is loaded from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Start with an empty graph
    #[default]
    Empty,
    /// One JSON document with every collection
    JsonFile { path: PathBuf },
    /// REST endpoints under a base URL
    Http { base_url: String },
}

impl WellgraphConfig {
    /// Parse a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_yaml(raw: &str) -> Result<Self, String> {
        serde_yaml::from_str(raw).map_err(|e| e.to_string())
    }

    /// Load from `WELLGRAPH_CONFIG` if set, defaults otherwise
    pub fn load() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                info!("Loading configuration from {:?}", path);
                Self::from_file(PathBuf::from(path))
            }
            None => {
                info!("{} not set, using default configuration", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = WellgraphConfig::default();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.loader.fetch_timeout(), Duration::from_secs(10));
        assert_eq!(config.source, SourceConfig::Empty);
    }

    #[test]
    fn test_partial_yaml() {
        let config = WellgraphConfig::from_yaml(
            "server:\n  port: 9000\nsource:\n  kind: json_file\n  path: /data/graph.json\n",
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.address, "127.0.0.1");
        assert_eq!(config.loader, LoaderConfig::default());
        assert_eq!(
            config.source,
            SourceConfig::JsonFile { path: PathBuf::from("/data/graph.json") }
        );
    }

    #[test]
    fn test_http_source_yaml() {
        let config = WellgraphConfig::from_yaml(
            "source:\n  kind: http\n  base_url: http://store.local/api\nloader:\n  max_retries: 1\n",
        )
        .unwrap();
        assert_eq!(config.loader.max_retries, 1);
        assert!(matches!(config.source, SourceConfig::Http { .. }));
    }

    #[test]
    fn test_from_file_errors() {
        assert!(matches!(
            WellgraphConfig::from_file("/no/such/wellgraph.yaml"),
            Err(ConfigError::Read { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "source:\n  kind: carrier_pigeon\n").unwrap();
        assert!(matches!(
            WellgraphConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
