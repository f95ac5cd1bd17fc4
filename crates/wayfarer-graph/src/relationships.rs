//! Cross-entity edge operations.
//!
//! Edges merge on endpoints and relationship type only. Within a single
//! run that makes a repeated call a no-op; across runs the pipeline's
//! full wipe is what prevents duplicates from accumulating.

use neo4rs::query;

use wayfarer_core::records::{ReviewRow, VisaRow};

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    /// Merge the WROTE, REVIEWED, and STAYED_AT edges for one review row.
    ///
    /// Matches the Traveller, Hotel, and Review nodes by key. The node
    /// upserts run earlier in the same pipeline pass, so all three are
    /// guaranteed to exist; if one is missing the MATCH finds nothing and
    /// the row's edges are silently absent, which the referential
    /// integrity of the source data rules out.
    pub async fn link_review(&self, row: &ReviewRow) -> Result<(), GraphError> {
        let q = query(
            "MATCH (t:Traveller {user_id: $user_id})
             MATCH (h:Hotel {hotel_id: $hotel_id})
             MATCH (r:Review {review_id: $review_id})
             MERGE (t)-[:WROTE]->(r)
             MERGE (r)-[:REVIEWED]->(h)
             MERGE (t)-[:STAYED_AT]->(h)",
        )
        .param("user_id", row.user_id.clone())
        .param("hotel_id", row.hotel_id.clone())
        .param("review_id", row.review_id.clone());

        self.run(q).await
    }

    /// Merge a NEEDS_VISA edge between two countries.
    ///
    /// Creates the Country nodes if the visa dataset mentions countries
    /// absent from the traveller and hotel datasets. `visa_type` is set
    /// after the merge rather than matched on, so two rows for the same
    /// country pair update one edge instead of creating two.
    ///
    /// Callers gate this on [`VisaRow::requires_visa`]; rows whose flag
    /// is not "yes" never reach the store.
    pub async fn link_visa(&self, row: &VisaRow) -> Result<(), GraphError> {
        let q = query(
            "MERGE (a:Country {name: $from})
             MERGE (b:Country {name: $to})
             MERGE (a)-[v:NEEDS_VISA]->(b)
             SET v.visa_type = $visa_type",
        )
        .param("from", row.from_country.clone())
        .param("to", row.to_country.clone())
        .param("visa_type", row.visa_type.clone());

        self.run(q).await
    }
}
