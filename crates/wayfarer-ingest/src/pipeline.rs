//! The graph build pipeline.
//!
//! A fixed linear sequence with no branching and no retries:
//! constraints → wipe → traveller nodes → hotel nodes → review nodes →
//! review relationships → visa relationships. One row, one mutation,
//! awaited in order. The first error aborts the run; because the wipe
//! has already happened by then, a failed run can leave the store
//! partially rebuilt until the next successful run.

use wayfarer_core::aggregate::hotel_average_scores;
use wayfarer_graph::{schema, GraphClient};

use crate::datasets::Datasets;
use crate::error::Result;

/// Rebuild the entire knowledge graph from the loaded datasets.
///
/// Re-running on identical inputs produces an identical end state: the
/// full wipe at the start eliminates any drift from earlier runs.
pub async fn run_pipeline(graph: &GraphClient, data: &Datasets) -> Result<()> {
    tracing::info!("Declaring uniqueness constraints");
    schema::ensure_constraints(graph).await?;

    tracing::info!("Wiping existing graph");
    graph.wipe().await?;

    let average_scores = hotel_average_scores(&data.reviews);

    tracing::info!(rows = data.travellers.len(), "Upserting traveller nodes");
    for row in &data.travellers {
        graph.upsert_traveller(row).await?;
    }

    tracing::info!(rows = data.hotels.len(), "Upserting hotel nodes");
    for row in &data.hotels {
        let average = average_scores.get(&row.hotel_id).copied().unwrap_or(0.0);
        graph.upsert_hotel(row, average).await?;
    }

    tracing::info!(rows = data.reviews.len(), "Upserting review nodes");
    for row in &data.reviews {
        graph.upsert_review(row).await?;
    }

    tracing::info!(rows = data.reviews.len(), "Linking review relationships");
    for row in &data.reviews {
        graph.link_review(row).await?;
    }

    let mut visa_edges = 0;
    for row in &data.visa {
        if row.requires_visa() {
            graph.link_visa(row).await?;
            visa_edges += 1;
        }
    }
    tracing::info!(
        rows = data.visa.len(),
        edges = visa_edges,
        "Linked visa requirements"
    );

    tracing::info!("Knowledge graph build completed");
    Ok(())
}
