//! CLI entry point for the wayfarer-ingest graph builder.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use wayfarer_graph::GraphClient;

use wayfarer_ingest::config::{load_graph_config, load_ingest_config};
use wayfarer_ingest::datasets::Datasets;
use wayfarer_ingest::error::IngestError;
use wayfarer_ingest::pipeline::run_pipeline;

#[derive(Parser)]
#[command(name = "wayfarer-ingest")]
#[command(about = "Builds the Wayfarer travel knowledge graph from CSV datasets")]
struct Cli {
    /// Config file prefix (default: wayfarer).
    #[arg(short, long, default_value = "wayfarer")]
    config: String,

    /// Override the directory holding the CSV datasets.
    #[arg(short, long)]
    data_dir: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let cfg = build_config(&cli.config)?;

    let mut ingest_config = load_ingest_config(&cfg);
    if let Some(data_dir) = cli.data_dir {
        ingest_config.data_dir = data_dir;
    }

    let graph_config = load_graph_config(&cfg)?;
    let graph = GraphClient::connect(&graph_config).await?;

    let datasets = Datasets::load(&ingest_config)?;
    run_pipeline(&graph, &datasets).await?;

    Ok(())
}

/// Layer the config file under environment variables.
fn build_config(file_prefix: &str) -> Result<config::Config, IngestError> {
    config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("WAYFARER")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| IngestError::Config(e.to_string()))
}
