//! Seams to the outside world. The core never fetches anything itself:
//! station catalogs, availability probes, and boundary documents arrive
//! through these traits, already retried and already authenticated by the
//! implementation that owns the transport and its credentials.

use crate::geo::LatLon;
use crate::types::candidate::StationCandidate;
use crate::types::ring::Ring;
use chrono::NaiveDate;
use std::fmt;

/// Supplies the candidate pool for a political/geographic filter.
pub trait StationListSource {
    /// All known candidates whose catalog id belongs to `country_code`.
    fn candidates(&self, country_code: &str) -> Vec<StationCandidate>;
}

/// Answers whether a station can actually deliver the required fields over
/// a date range.
///
/// This is the expensive authority behind qualification; resolution consults
/// it last, and only for candidates that pass every metadata check.
/// Implementations fold transport failure into `false`.
pub trait FieldAvailabilityChecker {
    fn all_fields_available(
        &self,
        station_id: &str,
        fields: &[String],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> bool;
}

/// Produces the boundary ring enclosing a coordinate at a watershed level.
pub trait PolygonSource {
    /// The outer boundary ring of the hydrologic unit containing `target`,
    /// or `None` when the service knows no unit there.
    fn boundary_ring(&self, target: LatLon, level: HucLevel) -> Option<Ring>;
}

/// Hydrologic unit levels of the Watershed Boundary Dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HucLevel {
    Huc2,
    Huc4,
    Huc6,
    Huc8,
    Huc10,
    Huc12,
}

impl HucLevel {
    /// Digits in a hydrologic unit code at this level.
    pub fn digits(&self) -> u8 {
        match self {
            HucLevel::Huc2 => 2,
            HucLevel::Huc4 => 4,
            HucLevel::Huc6 => 6,
            HucLevel::Huc8 => 8,
            HucLevel::Huc10 => 10,
            HucLevel::Huc12 => 12,
        }
    }

    /// Layer index of this level in the WBD map service.
    pub fn wbd_layer(&self) -> u8 {
        match self {
            HucLevel::Huc2 => 1,
            HucLevel::Huc4 => 2,
            HucLevel::Huc6 => 3,
            HucLevel::Huc8 => 4,
            HucLevel::Huc10 => 5,
            HucLevel::Huc12 => 6,
        }
    }
}

impl fmt::Display for HucLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HUC{}", self.digits())
    }
}

/// A [`StationListSource`] over a pool that is already in memory.
///
/// Filters by catalog id prefix, which carries the country code in
/// GHCN-style identifiers ("USC00050848" is a United States station).
#[derive(Debug, Clone, Default)]
pub struct InMemoryStationList {
    stations: Vec<StationCandidate>,
}

impl InMemoryStationList {
    pub fn new(stations: Vec<StationCandidate>) -> Self {
        InMemoryStationList { stations }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl StationListSource for InMemoryStationList {
    fn candidates(&self, country_code: &str) -> Vec<StationCandidate> {
        self.stations
            .iter()
            .filter(|station| station.id.starts_with(country_code))
            .cloned()
            .collect()
    }
}
