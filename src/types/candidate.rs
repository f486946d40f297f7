//! Defines the station candidate record offered to resolution, including the
//! implementations necessary for spatial indexing using the `rstar` crate.

use crate::geo::LatLon;
use chrono::NaiveDate;
use rstar::{PointDistance, RTreeObject, AABB};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single observation station offered for resolution.
///
/// The position is authoritative; everything else is best-effort metadata as
/// reported by the station catalog. Missing metadata never fails a
/// resolution, it only leaves the candidate non-qualifying.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StationCandidate {
    /// The catalog identifier (e.g., "USC00050848"). In GHCN-style catalogs
    /// the leading characters carry the country code.
    pub id: String,
    /// Latitude in decimal degrees (positive for North, negative for South).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East, negative for West).
    pub longitude: f64,
    /// Fraction of the reported period that actually has records, in [0, 1].
    pub data_coverage: Option<f64>,
    /// The earliest date for which records are reported, if known.
    pub min_date: Option<NaiveDate>,
    /// The latest date for which records are reported, if known.
    pub max_date: Option<NaiveDate>,
    /// Field codes the catalog claims the station reports (e.g., "TMIN").
    pub available_fields: Option<HashSet<String>>,
}

impl StationCandidate {
    /// The candidate's position in query order.
    pub fn position(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }
}

// --- R-Tree Implementations ---

impl RTreeObject for StationCandidate {
    type Envelope = AABB<[f64; 2]>;

    /// A station is a point; its envelope is the degenerate box around
    /// (latitude, longitude).
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.latitude, self.longitude])
    }
}

impl PointDistance for StationCandidate {
    /// Squared Euclidean distance on raw degrees. Sufficient for tree
    /// ordering; exact ranking always re-measures with the haversine.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.latitude - point[0];
        let dy = self.longitude - point[1];
        dx * dx + dy * dy
    }
}
