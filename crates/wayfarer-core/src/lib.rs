//! wayfarer-core: Shared domain types for the Wayfarer travel knowledge graph.
//!
//! This crate provides the foundational pieces used across all Wayfarer
//! components:
//! - Typed row records for the four source datasets (travellers, hotels,
//!   reviews, visa requirements)
//! - Pure aggregation over review rows (per-hotel average score)

pub mod aggregate;
pub mod records;

pub use records::{HotelRow, ReviewRow, TravellerRow, VisaRow};
