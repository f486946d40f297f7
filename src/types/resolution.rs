use crate::types::candidate::StationCandidate;

/// Outcome of a station resolution.
///
/// "No usable station" is an ordinary answer, not an error, so it is a
/// variant rather than an `Err`. An empty candidate pool also resolves to
/// [`Resolution::NotFound`]; callers that need to tell the two apart check
/// the pool size themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The nearest candidate that passed every qualification check.
    Found {
        station: StationCandidate,
        distance_km: f64,
    },
    /// No candidate qualified, or the pool was empty.
    NotFound,
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }

    /// The selected station, if any.
    pub fn station(&self) -> Option<&StationCandidate> {
        match self {
            Resolution::Found { station, .. } => Some(station),
            Resolution::NotFound => None,
        }
    }

    /// Distance to the selected station in kilometers, if any.
    pub fn distance_km(&self) -> Option<f64> {
        match self {
            Resolution::Found { distance_km, .. } => Some(*distance_km),
            Resolution::NotFound => None,
        }
    }
}
