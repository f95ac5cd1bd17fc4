//! Per-hotel review score aggregation.

use std::collections::HashMap;

use crate::records::ReviewRow;

/// Compute the mean `score_overall` per hotel across all review rows.
///
/// Hotels with no reviews are simply absent from the map; the node
/// upsert substitutes 0 for those. Empty input yields an empty map.
pub fn hotel_average_scores(reviews: &[ReviewRow]) -> HashMap<String, f64> {
    let mut sums: HashMap<String, (f64, u64)> = HashMap::new();
    for review in reviews {
        let entry = sums.entry(review.hotel_id.clone()).or_insert((0.0, 0));
        entry.0 += review.score_overall;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(hotel_id, (sum, count))| (hotel_id, sum / count as f64))
        .collect()
}
