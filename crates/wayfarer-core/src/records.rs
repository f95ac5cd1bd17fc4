//! Typed row records for the four source datasets.
//!
//! Each record mirrors one row of its CSV file. All fields are required:
//! a missing column or an unparsable numeric/date value fails
//! deserialization, which aborts the whole ingest run. Identifier columns
//! stay as strings so the pipeline makes no assumptions about id formats.

use chrono::NaiveDate;
use serde::Deserialize;

/// One row of the travellers dataset (`users.csv`).
#[derive(Debug, Clone, Deserialize)]
pub struct TravellerRow {
    pub user_id: String,
    pub age_group: String,
    pub traveller_type: String,
    pub user_gender: String,
    pub country: String,
}

/// One row of the hotels dataset (`hotels.csv`).
#[derive(Debug, Clone, Deserialize)]
pub struct HotelRow {
    pub hotel_id: String,
    pub hotel_name: String,
    pub star_rating: f64,
    pub cleanliness_base: f64,
    pub comfort_base: f64,
    pub facilities_base: f64,
    pub city: String,
    pub country: String,
}

/// One row of the reviews dataset (`reviews.csv`).
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRow {
    pub review_id: String,
    pub user_id: String,
    pub hotel_id: String,
    pub review_text: String,
    pub review_date: NaiveDate,
    pub score_overall: f64,
    pub score_cleanliness: f64,
    pub score_comfort: f64,
    pub score_facilities: f64,
    pub score_location: f64,
    pub score_staff: f64,
    pub score_value_for_money: f64,
}

/// One row of the visa-requirements dataset (`visa.csv`).
///
/// `from` and `to` are country names, keyed the same way as the Country
/// nodes created from the traveller and hotel datasets.
#[derive(Debug, Clone, Deserialize)]
pub struct VisaRow {
    #[serde(rename = "from")]
    pub from_country: String,
    #[serde(rename = "to")]
    pub to_country: String,
    pub requires_visa: String,
    pub visa_type: String,
}

impl VisaRow {
    /// Whether this row calls for a NEEDS_VISA edge.
    ///
    /// The source flag is free text; only a trimmed, case-insensitive
    /// "yes" counts. Anything else produces no edge and no error.
    pub fn requires_visa(&self) -> bool {
        self.requires_visa.trim().eq_ignore_ascii_case("yes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one<T: for<'de> Deserialize<'de>>(data: &str) -> Result<T, csv::Error> {
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        reader.deserialize().next().expect("one row")
    }

    #[test]
    fn test_parse_traveller_row() {
        let row: TravellerRow = parse_one(
            "user_id,age_group,traveller_type,user_gender,country\n\
             U1,25-34,Solo,F,France\n",
        )
        .unwrap();
        assert_eq!(row.user_id, "U1");
        assert_eq!(row.age_group, "25-34");
        assert_eq!(row.traveller_type, "Solo");
        assert_eq!(row.user_gender, "F");
        assert_eq!(row.country, "France");
    }

    #[test]
    fn test_parse_hotel_row() {
        let row: HotelRow = parse_one(
            "hotel_id,hotel_name,star_rating,cleanliness_base,comfort_base,facilities_base,city,country\n\
             H1,Le Grand,4.5,8.1,7.9,8.4,Paris,France\n",
        )
        .unwrap();
        assert_eq!(row.hotel_id, "H1");
        assert_eq!(row.hotel_name, "Le Grand");
        assert_eq!(row.star_rating, 4.5);
        assert_eq!(row.city, "Paris");
    }

    #[test]
    fn test_parse_review_row() {
        let row: ReviewRow = parse_one(
            "review_id,user_id,hotel_id,review_text,review_date,score_overall,score_cleanliness,score_comfort,score_facilities,score_location,score_staff,score_value_for_money\n\
             R1,U1,H1,Great stay,2024-03-15,8,9,8,7,9,8,7\n",
        )
        .unwrap();
        assert_eq!(row.review_id, "R1");
        assert_eq!(row.review_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(row.score_overall, 8.0);
        assert_eq!(row.score_value_for_money, 7.0);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        // No country column.
        let result: Result<TravellerRow, _> = parse_one(
            "user_id,age_group,traveller_type,user_gender\n\
             U1,25-34,Solo,F\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unparsable_score_is_an_error() {
        let result: Result<HotelRow, _> = parse_one(
            "hotel_id,hotel_name,star_rating,cleanliness_base,comfort_base,facilities_base,city,country\n\
             H1,Le Grand,four,8.1,7.9,8.4,Paris,France\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unparsable_date_is_an_error() {
        let result: Result<ReviewRow, _> = parse_one(
            "review_id,user_id,hotel_id,review_text,review_date,score_overall,score_cleanliness,score_comfort,score_facilities,score_location,score_staff,score_value_for_money\n\
             R1,U1,H1,Great stay,15/03/2024,8,9,8,7,9,8,7\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_requires_visa_flag() {
        let make = |flag: &str| VisaRow {
            from_country: "France".into(),
            to_country: "Japan".into(),
            requires_visa: flag.into(),
            visa_type: "Tourist".into(),
        };

        assert!(make("yes").requires_visa());
        assert!(make("YES").requires_visa());
        assert!(make("  Yes ").requires_visa());
        assert!(!make("no").requires_visa());
        assert!(!make("").requires_visa());
        assert!(!make("yess").requires_visa());
    }
}
