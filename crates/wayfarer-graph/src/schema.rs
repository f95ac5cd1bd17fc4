//! Neo4j schema initialization (uniqueness constraints).

use neo4rs::query;

use crate::client::{GraphClient, GraphError};

/// Uniqueness constraints backing the merge-by-key semantics of every
/// node upsert. One per node label.
const CONSTRAINT_STATEMENTS: &[&str] = &[
    "CREATE CONSTRAINT traveller_user_id IF NOT EXISTS FOR (t:Traveller) REQUIRE t.user_id IS UNIQUE",
    "CREATE CONSTRAINT hotel_hotel_id IF NOT EXISTS FOR (h:Hotel) REQUIRE h.hotel_id IS UNIQUE",
    "CREATE CONSTRAINT city_name IF NOT EXISTS FOR (c:City) REQUIRE c.name IS UNIQUE",
    "CREATE CONSTRAINT country_name IF NOT EXISTS FOR (co:Country) REQUIRE co.name IS UNIQUE",
    "CREATE CONSTRAINT review_review_id IF NOT EXISTS FOR (r:Review) REQUIRE r.review_id IS UNIQUE",
];

/// Declare all uniqueness constraints.
///
/// Safe to run multiple times (IF NOT EXISTS). Must run before the first
/// upsert so that MERGE-by-key is backed by an index.
pub async fn ensure_constraints(client: &GraphClient) -> Result<(), GraphError> {
    for statement in CONSTRAINT_STATEMENTS {
        client.run(query(statement)).await?;
    }

    tracing::info!(
        constraints = CONSTRAINT_STATEMENTS.len(),
        "Uniqueness constraints ensured"
    );
    Ok(())
}
