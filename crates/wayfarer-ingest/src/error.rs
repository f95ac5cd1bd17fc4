//! Error types for the wayfarer-ingest crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Data format error in {path}: {source}")]
    Data {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Graph error: {0}")]
    Graph(#[from] wayfarer_graph::GraphError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
