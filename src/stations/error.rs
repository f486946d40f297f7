use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Query target has a non-finite coordinate ({latitude}, {longitude})")]
    NonFiniteTarget { latitude: f64, longitude: f64 },

    #[error("Query start date {start} is after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Query lists no required fields")]
    NoRequiredFields,
}
