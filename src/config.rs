//! Configuration types for study-catalog

use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::Path};
use utoipa::ToSchema;

use crate::error::{Error, Result};

/// Main configuration
///
/// Every field has a default, so an empty JSON object `{}` is a valid
/// configuration file.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Config {
    /// Catalog behavior (seeding, featured limit, search policy)
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// API and external server integration
    #[serde(default)]
    pub server: ServerIntegrationConfig,
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// Missing fields take their defaults. The loaded config is validated
    /// before it is returned.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw).map_err(|e| Error::Config {
            message: format!("failed to parse {}: {}", path.display(), e),
            key: None,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.catalog.featured_default_limit == 0 {
            return Err(Error::Config {
                message: "featured_default_limit must be at least 1".to_string(),
                key: Some("catalog.featured_default_limit".to_string()),
            });
        }

        if self.server.api.cors_enabled && self.server.api.cors_origins.is_empty() {
            return Err(Error::Config {
                message: "cors_origins must not be empty when CORS is enabled (use [\"*\"])"
                    .to_string(),
                key: Some("server.api.cors_origins".to_string()),
            });
        }

        Ok(())
    }
}

/// Catalog behavior configuration
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CatalogConfig {
    /// Load the bundled sample materials at startup (default: true)
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,

    /// Number of featured materials returned when `limit` is omitted (default: 4)
    #[serde(default = "default_featured_limit")]
    pub featured_default_limit: usize,

    /// Search queries shorter than this (after trimming) return no results (default: 3)
    #[serde(default = "default_min_search_length")]
    pub min_search_length: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            featured_default_limit: default_featured_limit(),
            min_search_length: default_min_search_length(),
        }
    }
}

/// API and external server integration configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ServerIntegrationConfig {
    /// REST API configuration
    #[serde(default)]
    pub api: ApiConfig,
}

/// REST API configuration
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[serde(default = "default_bind_address")]
    #[schema(value_type = String)]
    pub bind_address: SocketAddr,

    /// Enable CORS for browser access (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Enable Swagger UI at /swagger-ui (default: true)
    #[serde(default = "default_true")]
    pub swagger_ui: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_featured_limit() -> usize {
    4
}

fn default_min_search_length() -> usize {
    3
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_yields_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert!(config.catalog.seed_sample_data);
        assert_eq!(config.catalog.featured_default_limit, 4);
        assert_eq!(config.catalog.min_search_length, 3);
        assert_eq!(
            config.server.api.bind_address,
            "127.0.0.1:5000".parse::<SocketAddr>().unwrap()
        );
        assert!(config.server.api.cors_enabled);
        assert_eq!(config.server.api.cors_origins, vec!["*".to_string()]);
    }

    #[test]
    fn config_default_survives_json_round_trip() {
        let original = Config::default();

        let json = serde_json::to_string(&original).expect("Config must serialize to JSON");
        let restored: Config =
            serde_json::from_str(&json).expect("Config must deserialize from its own JSON");

        assert_eq!(
            restored.catalog.featured_default_limit,
            original.catalog.featured_default_limit
        );
        assert_eq!(
            restored.server.api.bind_address,
            original.server.api.bind_address
        );
        assert_eq!(restored.server.api.swagger_ui, original.server.api.swagger_ui);
    }

    #[test]
    fn from_file_applies_partial_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"catalog": {{"seed_sample_data": false}}, "server": {{"api": {{"bind_address": "0.0.0.0:8080"}}}}}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert!(!config.catalog.seed_sample_data);
        assert_eq!(config.catalog.featured_default_limit, 4);
        assert_eq!(config.server.api.bind_address.port(), 8080);
    }

    #[test]
    fn from_file_reports_parse_errors_as_config_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }), "got {err:?}");
    }

    #[test]
    fn from_file_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn validate_rejects_zero_featured_limit() {
        let mut config = Config::default();
        config.catalog.featured_default_limit = 0;

        match config.validate() {
            Err(Error::Config { key, .. }) => {
                assert_eq!(key.as_deref(), Some("catalog.featured_default_limit"))
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_cors_without_origins() {
        let mut config = Config::default();
        config.server.api.cors_origins.clear();
        assert!(config.validate().is_err());

        config.server.api.cors_enabled = false;
        assert!(config.validate().is_ok());
    }
}
