//! Coordinate newtypes and the distance primitives shared by station
//! resolution and ring simplification.

use haversine::{distance, Location as HaversineLocation, Units};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`. Resolution targets and station
/// positions use this order.
///
/// # Examples
///
/// ```
/// use flowgeo::LatLon;
///
/// let boulder = LatLon(40.0150, -105.2705);
/// assert_eq!(boulder.0, 40.0150); // Latitude
/// assert_eq!(boulder.1, -105.2705); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    /// Whether both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

/// A ring vertex in longitude, latitude order.
///
/// Watershed boundary documents store their rings as `[[lon, lat], ...]`,
/// the reverse of [`LatLon`]. Keeping the two orders as separate types turns
/// an accidental axis swap into a compile error.
///
/// # Examples
///
/// ```
/// use flowgeo::LonLat;
///
/// let vertex = LonLat(-105.2705, 40.0150);
/// assert_eq!(vertex.0, -105.2705); // Longitude
/// assert_eq!(vertex.1, 40.0150); // Latitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat(pub f64, pub f64);

impl LonLat {
    /// Whether both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

/// Great-circle distance between two coordinates in kilometers.
///
/// Haversine on a mean earth radius of 6371 km. Symmetric, and exactly zero
/// for identical inputs.
///
/// # Examples
///
/// ```
/// use flowgeo::{great_circle_km, LatLon};
///
/// let here = LatLon(40.0, -105.0);
/// assert_eq!(great_circle_km(here, here), 0.0);
/// ```
pub fn great_circle_km(a: LatLon, b: LatLon) -> f64 {
    distance(
        HaversineLocation {
            latitude: a.0,
            longitude: a.1,
        },
        HaversineLocation {
            latitude: b.0,
            longitude: b.1,
        },
        Units::Kilometers,
    )
}

/// Perpendicular distance from `point` to the chord through `start` and
/// `end`, in the same planar degree units as the inputs.
///
/// A zero-length chord has no direction; the distance is defined as 0 so a
/// degenerate split never aborts simplification.
pub fn perpendicular_distance(point: LonLat, start: LonLat, end: LonLat) -> f64 {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return 0.0;
    }
    let numerator = (dx * (start.1 - point.1) - (start.0 - point.0) * dy).abs();
    numerator / length_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_zero_for_identical_points() {
        let point = LatLon(40.0, -105.0);
        assert_eq!(great_circle_km(point, point), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let boulder = LatLon(40.0150, -105.2705);
        let denver = LatLon(39.7392, -104.9903);
        let there = great_circle_km(boulder, denver);
        let back = great_circle_km(denver, boulder);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_distance_matches_known_pair() {
        // Boulder to Denver is roughly 38 km as the crow flies.
        let boulder = LatLon(40.0150, -105.2705);
        let denver = LatLon(39.7392, -104.9903);
        let dist = great_circle_km(boulder, denver);
        assert!(dist > 35.0 && dist < 42.0, "unexpected distance {}", dist);
    }

    #[test]
    fn test_perpendicular_distance_from_horizontal_chord() {
        let dist = perpendicular_distance(LonLat(1.0, 1.0), LonLat(0.0, 0.0), LonLat(2.0, 0.0));
        assert_eq!(dist, 1.0);
    }

    #[test]
    fn test_points_on_the_chord_have_zero_distance() {
        let dist = perpendicular_distance(LonLat(0.5, 0.0), LonLat(0.0, 0.0), LonLat(1.0, 0.0));
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_degenerate_chord_has_zero_distance() {
        let anchor = LonLat(1.0, 1.0);
        assert_eq!(perpendicular_distance(LonLat(3.0, 4.0), anchor, anchor), 0.0);
    }

    #[test]
    fn test_non_finite_coordinates_are_detected() {
        assert!(LatLon(40.0, -105.0).is_finite());
        assert!(!LatLon(f64::NAN, 0.0).is_finite());
        assert!(!LonLat(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_coordinates_serialize_as_pairs() {
        let target = LatLon(40.015, -105.2705);
        let json = serde_json::to_string(&target).unwrap();
        assert_eq!(json, "[40.015,-105.2705]");
        let back: LatLon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, target);

        let vertex = LonLat(-105.2705, 40.015);
        assert_eq!(
            serde_json::to_string(&vertex).unwrap(),
            "[-105.2705,40.015]"
        );
    }
}
