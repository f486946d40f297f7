//! Douglas-Peucker simplification of watershed boundary rings, for upstream
//! APIs that reject geometries past a vertex limit.

use crate::geo::{perpendicular_distance, LonLat};
use crate::polygon::error::RingError;
use crate::polygon::validate::validate;
use crate::types::ring::Ring;
use log::debug;

const ROUND_DECIMALS: i32 = 6;

/// Simplifies a ring to within `tolerance` (in coordinate degrees), keeping
/// at most `max_points` vertices.
///
/// The ring is canonicalized first (see [`validate`](crate::validate)), so
/// any input accepted there is accepted here. When Douglas-Peucker alone
/// cannot reach `max_points`, the vertex list is truncated and re-closed;
/// a distorted ring beats a rejected upload. Coordinates are rounded to six
/// decimal places on the way out, and the result is canonicalized once
/// more, so the output is closed and counter-clockwise even through the
/// truncation fallback.
///
/// # Errors
///
/// Returns a [`RingError`] when the parameters are out of range, the ring
/// fails canonicalization, or the simplified ring degenerates (fewer than
/// three distinct vertices, or zero area).
///
/// ```
/// use flowgeo::{simplify, Ring};
///
/// let square = Ring::from(vec![
///     (0.0, 0.0),
///     (1.0, 0.0),
///     (1.0, 1.0),
///     (0.0, 1.0),
///     (0.0, 0.0),
/// ]);
/// assert_eq!(simplify(&square, 0.0, 100).unwrap(), square);
/// ```
pub fn simplify(ring: &Ring, tolerance: f64, max_points: usize) -> Result<Ring, RingError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(RingError::InvalidTolerance(tolerance));
    }
    if max_points < 4 {
        return Err(RingError::InvalidMaxPoints(max_points));
    }
    let canonical = validate(ring)?;

    // Douglas-Peucker anchors on the chord between first and last vertex; on
    // a closed sequence that chord is degenerate. The closing vertex is
    // stripped for the recursion and restored afterwards.
    let open = &canonical.points[..canonical.points.len() - 1];
    let mut kept = douglas_peucker(open, tolerance);
    kept.push(kept[0]);

    if kept.len() > max_points {
        debug!(
            "Ring still has {} points at tolerance {}, truncating to {}",
            kept.len(),
            tolerance,
            max_points
        );
        kept.truncate(max_points - 1);
        kept.push(kept[0]);
    }

    let rounded: Vec<LonLat> = kept.into_iter().map(round_vertex).collect();
    // Rounding can merge near-coincident vertices, and truncating a concave
    // ring can flip its winding; a second canonicalization settles both.
    validate(&Ring::new(rounded))
}

/// Recursive Douglas-Peucker over an open vertex sequence. The first and
/// last vertex always survive.
fn douglas_peucker(points: &[LonLat], tolerance: f64) -> Vec<LonLat> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_distance = 0.0;
    let mut split = 0;
    for (i, &point) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let distance = perpendicular_distance(point, first, last);
        if distance > max_distance {
            max_distance = distance;
            split = i;
        }
    }

    if max_distance > tolerance {
        let mut left = douglas_peucker(&points[..=split], tolerance);
        let right = douglas_peucker(&points[split..], tolerance);
        // The split vertex heads `right` already.
        left.pop();
        left.extend(right);
        left
    } else {
        vec![first, last]
    }
}

fn round_vertex(point: LonLat) -> LonLat {
    LonLat(round_coordinate(point.0), round_coordinate(point.1))
}

fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(ROUND_DECIMALS);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::validate::is_ccw;
    use std::f64::consts::TAU;

    fn ring(pairs: &[(f64, f64)]) -> Ring {
        Ring::from(pairs.to_vec())
    }

    /// Unclosed near-circle with a bumpy radius, so no three consecutive
    /// vertices are collinear.
    fn bumpy_ring(points: usize) -> Ring {
        let pairs: Vec<(f64, f64)> = (0..points)
            .map(|i| {
                let angle = TAU * i as f64 / points as f64;
                let radius = 1.0 + 0.001 * ((i % 7) as f64);
                (-105.0 + radius * angle.cos(), 40.0 + radius * angle.sin())
            })
            .collect();
        Ring::from(pairs)
    }

    #[test]
    fn test_zero_tolerance_keeps_a_square_intact() {
        let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        assert_eq!(simplify(&square, 0.0, 100).unwrap(), square);
    }

    #[test]
    fn test_collinear_vertices_are_dropped() {
        let with_midpoint = ring(&[
            (0.0, 0.0),
            (0.5, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
        ]);
        let simplified = simplify(&with_midpoint, 0.0, 100).unwrap();
        let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        assert_eq!(simplified, square);
    }

    #[test]
    fn test_vertex_cap_is_enforced_exactly() {
        let simplified = simplify(&bumpy_ring(150), 0.0, 50).unwrap();
        assert_eq!(simplified.points.len(), 50);
        assert!(simplified.is_closed());
    }

    #[test]
    fn test_output_never_exceeds_the_cap() {
        let dense = bumpy_ring(150);
        for max_points in [4, 5, 8, 20, 75] {
            let simplified = simplify(&dense, 0.0, max_points).unwrap();
            assert!(
                simplified.points.len() <= max_points,
                "{} points with cap {}",
                simplified.points.len(),
                max_points
            );
            assert!(simplified.is_closed());
        }
    }

    #[test]
    fn test_truncated_concave_rings_stay_counter_clockwise() {
        // Truncation keeps a prefix of the notch, which on its own winds
        // the other way.
        let staple = ring(&[
            (3.0, 4.0),
            (3.0, 1.0),
            (1.0, 1.0),
            (1.0, 4.0),
            (0.0, 4.0),
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
        ]);
        assert!(is_ccw(&staple.points).unwrap());
        let simplified = simplify(&staple, 0.0, 6).unwrap();
        assert_eq!(simplified.points.len(), 6);
        assert!(simplified.is_closed());
        assert!(is_ccw(&simplified.points).unwrap());
    }

    #[test]
    fn test_coordinates_are_rounded_to_six_decimals() {
        let raw = ring(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.123_456_4, 1.0),
            (0.0, 0.0),
        ]);
        let simplified = simplify(&raw, 0.0, 100).unwrap();
        assert_eq!(simplified.points[3], LonLat(0.123_456, 1.0));
    }

    #[test]
    fn test_rounding_merges_near_coincident_vertices() {
        let noisy = ring(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.000_000_4, 0.000_000_4),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
        ]);
        let simplified = simplify(&noisy, 0.0, 100).unwrap();
        let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        assert_eq!(simplified, square);
    }

    #[test]
    fn test_over_aggressive_tolerance_fails() {
        let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        let err = simplify(&square, 1000.0, 100).unwrap_err();
        assert_eq!(err, RingError::TooFewPoints { distinct: 2 });
    }

    #[test]
    fn test_clockwise_input_comes_out_counter_clockwise() {
        let clockwise = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
        let simplified = simplify(&clockwise, 0.0, 100).unwrap();
        assert!(is_ccw(&simplified.points).unwrap());
    }

    #[test]
    fn test_bad_tolerances_are_rejected() {
        let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        assert!(matches!(
            simplify(&square, f64::NAN, 100).unwrap_err(),
            RingError::InvalidTolerance(_)
        ));
        assert!(matches!(
            simplify(&square, -1.0, 100).unwrap_err(),
            RingError::InvalidTolerance(_)
        ));
    }

    #[test]
    fn test_caps_below_a_closed_triangle_are_rejected() {
        let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        assert_eq!(
            simplify(&square, 0.0, 3).unwrap_err(),
            RingError::InvalidMaxPoints(3)
        );
    }

    #[test]
    fn test_degenerate_rings_are_rejected() {
        let line = ring(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        assert_eq!(
            simplify(&line, 0.0, 100).unwrap_err(),
            RingError::TooFewPoints { distinct: 2 }
        );
    }
}
