//! CSV dataset loading into typed row records.
//!
//! Each file must carry a header row naming the required columns. Rows
//! deserialize into the record types from `wayfarer-core`; the first
//! missing column or unparsable value aborts the load with an error
//! naming the offending file. No row is ever skipped silently.

use std::path::Path;

use serde::de::DeserializeOwned;

use wayfarer_core::records::{HotelRow, ReviewRow, TravellerRow, VisaRow};

use crate::config::IngestConfig;
use crate::error::{IngestError, Result};

/// The four source datasets, fully loaded and validated.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub travellers: Vec<TravellerRow>,
    pub hotels: Vec<HotelRow>,
    pub reviews: Vec<ReviewRow>,
    pub visa: Vec<VisaRow>,
}

impl Datasets {
    /// Load all four CSV files from the configured locations.
    pub fn load(config: &IngestConfig) -> Result<Self> {
        let travellers = load_rows(&config.users_path())?;
        let hotels = load_rows(&config.hotels_path())?;
        let reviews = load_rows(&config.reviews_path())?;
        let visa = load_rows(&config.visa_path())?;

        tracing::info!(
            travellers = travellers.len(),
            hotels = hotels.len(),
            reviews = reviews.len(),
            visa = visa.len(),
            "Datasets loaded"
        );

        Ok(Self {
            travellers,
            hotels,
            reviews,
            visa,
        })
    }
}

/// Read one CSV file into typed rows, failing on the first bad row.
fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let data_error = |source| IngestError::Data {
        path: path.display().to_string(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(data_error)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(data_error)?);
    }
    Ok(rows)
}
