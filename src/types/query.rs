//! The resolution query: what the caller wants, where, and how picky to be.

use crate::geo::LatLon;
use crate::stations::error::ResolveError;
use bon::Builder;
use chrono::NaiveDate;

/// Everything a resolution needs to know about what the caller wants.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use flowgeo::{LatLon, ResolutionQuery};
///
/// let query = ResolutionQuery::builder()
///     .target(LatLon(40.0, -105.0))
///     .required_fields(vec!["TMIN".to_string(), "TMAX".to_string()])
///     .start_date(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap())
///     .end_date(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap())
///     .min_coverage(0.87)
///     .evaluation_cap(50)
///     .build();
/// assert!(query.validate().is_ok());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ResolutionQuery {
    /// Coordinate the station should be near.
    pub target: LatLon,
    /// Field codes every observation record must provide (e.g., "TMIN", "TMAX").
    pub required_fields: Vec<String>,
    /// First date observations are needed for.
    pub start_date: NaiveDate,
    /// Last date observations are needed for.
    pub end_date: NaiveDate,
    /// Reported data coverage a station must exceed to qualify. Strictly
    /// greater-than: a station sitting exactly at the threshold is rejected.
    pub min_coverage: f64,
    /// How many ranked candidates may be evaluated before giving up.
    /// `None` evaluates the whole pool.
    pub evaluation_cap: Option<usize>,
}

impl ResolutionQuery {
    /// Checks the parts of the query that no candidate can repair.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] when the target coordinate is not finite,
    /// the date range is inverted, or no required fields are listed.
    pub fn validate(&self) -> Result<(), ResolveError> {
        if !self.target.is_finite() {
            return Err(ResolveError::NonFiniteTarget {
                latitude: self.target.0,
                longitude: self.target.1,
            });
        }
        if self.start_date > self.end_date {
            return Err(ResolveError::InvertedDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.required_fields.is_empty() {
            return Err(ResolveError::NoRequiredFields);
        }
        Ok(())
    }
}
