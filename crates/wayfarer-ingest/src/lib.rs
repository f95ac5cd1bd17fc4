//! wayfarer-ingest: builds the Wayfarer travel knowledge graph from CSV.
//!
//! Loads the four source datasets (travellers, hotels, reviews, visa
//! requirements), then rebuilds the Neo4j graph from scratch: constraints,
//! full wipe, node upserts, and cross-entity relationships, in that order.

pub mod config;
pub mod datasets;
pub mod error;
pub mod pipeline;
