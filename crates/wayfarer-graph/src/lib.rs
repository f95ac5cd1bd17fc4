//! Wayfarer Graph — Neo4j client for the travel knowledge graph.
//!
//! This crate is the single mutation point for the Neo4j graph. All writes
//! flow through this crate so that the graph schema contract (node labels,
//! relationship types, property names) lives in exactly one place.

pub mod client;
pub mod mutations;
pub mod relationships;
pub mod schema;

pub use client::{GraphClient, GraphConfig, GraphError};
