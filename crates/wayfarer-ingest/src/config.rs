//! Configuration for the wayfarer-ingest pipeline.

use std::path::PathBuf;

use serde::Deserialize;

use wayfarer_graph::GraphConfig;

use crate::error::{IngestError, Result};

/// Dataset file locations.
///
/// Loaded from the `[ingest]` section of `wayfarer.toml` or from
/// `WAYFARER__INGEST__` environment variables. All file names resolve
/// relative to `data_dir`.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    /// Directory holding the four CSV files (default: ".").
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Travellers dataset file name.
    #[serde(default = "default_users_file")]
    pub users_file: String,

    /// Hotels dataset file name.
    #[serde(default = "default_hotels_file")]
    pub hotels_file: String,

    /// Reviews dataset file name.
    #[serde(default = "default_reviews_file")]
    pub reviews_file: String,

    /// Visa requirements dataset file name.
    #[serde(default = "default_visa_file")]
    pub visa_file: String,
}

impl IngestConfig {
    pub fn users_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.users_file)
    }

    pub fn hotels_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.hotels_file)
    }

    pub fn reviews_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.reviews_file)
    }

    pub fn visa_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.visa_file)
    }
}

/// Extract the `[ingest]` section from loaded configuration.
///
/// An absent section means defaults; a present but unusable section is
/// reported before falling back, never discarded silently.
pub fn load_ingest_config(cfg: &config::Config) -> IngestConfig {
    match cfg.get::<IngestConfig>("ingest") {
        Ok(c) => c,
        Err(config::ConfigError::NotFound(_)) => IngestConfig::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Malformed [ingest] config section, using defaults");
            IngestConfig::default()
        }
    }
}

/// Build the Neo4j connection settings from loaded configuration.
///
/// Connection parameters are required; there are no usable defaults for
/// a store that needs credentials, so a missing key fails at startup.
pub fn load_graph_config(cfg: &config::Config) -> Result<GraphConfig> {
    let require = |key: &str| {
        cfg.get_string(key)
            .map_err(|_| IngestError::Config(format!("missing required key: {key}")))
    };

    Ok(GraphConfig {
        uri: require("neo4j.uri")?,
        user: require("neo4j.username")?,
        password: require("neo4j.password")?,
        ..Default::default()
    })
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_users_file() -> String {
    "users.csv".to_string()
}

fn default_hotels_file() -> String {
    "hotels.csv".to_string()
}

fn default_reviews_file() -> String {
    "reviews.csv".to_string()
}

fn default_visa_file() -> String {
    "visa.csv".to_string()
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            users_file: default_users_file(),
            hotels_file: default_hotels_file(),
            reviews_file: default_reviews_file(),
            visa_file: default_visa_file(),
        }
    }
}
