//! Node write operations for the travel knowledge graph.
//!
//! All upserts use MERGE (by unique key) with unconditional SET: the latest
//! row always wins, there is no partial update. City and Country nodes are
//! keyed solely by name, so the same country reached from the traveller,
//! hotel, and visa datasets merges into one node.

use neo4rs::query;

use wayfarer_core::records::{HotelRow, ReviewRow, TravellerRow};

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    /// Detach-delete every node and edge in the store.
    ///
    /// The pipeline rebuilds the full graph on every run; wiping first
    /// means stale or orphaned data can never survive a rerun.
    pub async fn wipe(&self) -> Result<(), GraphError> {
        self.run(query("MATCH (n) DETACH DELETE n")).await
    }

    /// Upsert a Traveller node, its Country, and the FROM_COUNTRY edge.
    pub async fn upsert_traveller(&self, row: &TravellerRow) -> Result<(), GraphError> {
        let q = query(
            "MERGE (t:Traveller {user_id: $user_id})
             SET t.age = $age,
                 t.type = $type,
                 t.gender = $gender
             MERGE (c:Country {name: $country})
             MERGE (t)-[:FROM_COUNTRY]->(c)",
        )
        .param("user_id", row.user_id.clone())
        .param("age", row.age_group.clone())
        .param("type", row.traveller_type.clone())
        .param("gender", row.user_gender.clone())
        .param("country", row.country.clone());

        self.run(q).await
    }

    /// Upsert a Hotel node plus its City, Country, and LOCATED_IN edges.
    ///
    /// `average_reviews_score` is the precomputed mean of this hotel's
    /// review scores; callers pass 0 for hotels with no reviews.
    pub async fn upsert_hotel(
        &self,
        row: &HotelRow,
        average_reviews_score: f64,
    ) -> Result<(), GraphError> {
        let q = query(
            "MERGE (h:Hotel {hotel_id: $hotel_id})
             SET h.name = $name,
                 h.star_rating = $star_rating,
                 h.cleanliness_base = $cleanliness_base,
                 h.comfort_base = $comfort_base,
                 h.facilities_base = $facilities_base,
                 h.average_reviews_score = $average_reviews_score
             MERGE (city:City {name: $city})
             MERGE (country:Country {name: $country})
             MERGE (city)-[:LOCATED_IN]->(country)
             MERGE (h)-[:LOCATED_IN]->(city)",
        )
        .param("hotel_id", row.hotel_id.clone())
        .param("name", row.hotel_name.clone())
        .param("star_rating", row.star_rating)
        .param("cleanliness_base", row.cleanliness_base)
        .param("comfort_base", row.comfort_base)
        .param("facilities_base", row.facilities_base)
        .param("average_reviews_score", average_reviews_score)
        .param("city", row.city.clone())
        .param("country", row.country.clone());

        self.run(q).await
    }

    /// Upsert a Review node with all seven sub-scores, text, and date.
    pub async fn upsert_review(&self, row: &ReviewRow) -> Result<(), GraphError> {
        let q = query(
            "MERGE (r:Review {review_id: $review_id})
             SET r.text = $text,
                 r.date = $date,
                 r.score_overall = $score_overall,
                 r.score_cleanliness = $score_cleanliness,
                 r.score_comfort = $score_comfort,
                 r.score_facilities = $score_facilities,
                 r.score_location = $score_location,
                 r.score_staff = $score_staff,
                 r.score_value_for_money = $score_value_for_money",
        )
        .param("review_id", row.review_id.clone())
        .param("text", row.review_text.clone())
        .param("date", row.review_date.to_string())
        .param("score_overall", row.score_overall)
        .param("score_cleanliness", row.score_cleanliness)
        .param("score_comfort", row.score_comfort)
        .param("score_facilities", row.score_facilities)
        .param("score_location", row.score_location)
        .param("score_staff", row.score_staff)
        .param("score_value_for_money", row.score_value_for_money);

        self.run(q).await
    }
}
