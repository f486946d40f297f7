use crate::geo::LonLat;
use serde::{Deserialize, Serialize};

/// A polygon boundary ring: vertices in `(lon, lat)` order.
///
/// Serializes transparently as `[[lon, lat], ...]`, the shape watershed
/// boundary services hand back. Construction does not validate; call
/// [`crate::validate`] (or [`crate::simplify`], which validates first) to
/// obtain the canonical closed, counter-clockwise form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring {
    pub points: Vec<LonLat>,
}

impl Ring {
    pub fn new(points: Vec<LonLat>) -> Self {
        Ring { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the first vertex is repeated as the last.
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }
}

impl From<Vec<(f64, f64)>> for Ring {
    /// Builds a ring from raw `(lon, lat)` pairs.
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        Ring::new(pairs.into_iter().map(|(lon, lat)| LonLat(lon, lat)).collect())
    }
}
