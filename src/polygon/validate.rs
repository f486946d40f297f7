//! Canonicalization of watershed boundary rings. Downstream consumers
//! expect rings that are closed, counter-clockwise, and free of
//! consecutive duplicate vertices.

use crate::geo::LonLat;
use crate::polygon::error::RingError;
use crate::types::ring::Ring;
use log::debug;

/// Whether `points` wind counter-clockwise, by the shoelace sum.
///
/// The ring may be given open or closed; the wrap-around segment is counted
/// either way. A negative sum means counter-clockwise in the usual
/// lon/lat axis orientation.
///
/// # Errors
///
/// Returns [`RingError::TooFewPoints`] when fewer than three distinct
/// vertices remain, where winding is undefined.
///
/// ```
/// use flowgeo::{is_ccw, LonLat};
///
/// let square = [
///     LonLat(0.0, 0.0),
///     LonLat(1.0, 0.0),
///     LonLat(1.0, 1.0),
///     LonLat(0.0, 1.0),
/// ];
/// assert!(is_ccw(&square).unwrap());
/// ```
pub fn is_ccw(points: &[LonLat]) -> Result<bool, RingError> {
    let distinct = distinct_points(points);
    if distinct < 3 {
        return Err(RingError::TooFewPoints { distinct });
    }
    Ok(shoelace_sum(points) < 0.0)
}

/// Canonicalizes a ring: drops consecutive duplicates, closes it, and
/// reverses it to counter-clockwise when needed.
///
/// The result always passes `validate` unchanged.
///
/// # Errors
///
/// Returns a [`RingError`] when a vertex is non-finite, fewer than three
/// distinct vertices remain, or the ring encloses no area.
pub fn validate(ring: &Ring) -> Result<Ring, RingError> {
    if let Some(index) = ring.points.iter().position(|point| !point.is_finite()) {
        return Err(RingError::NonFiniteVertex { index });
    }

    let mut points = dedup_consecutive(&ring.points);
    let distinct = distinct_points(&points);
    if distinct < 3 {
        return Err(RingError::TooFewPoints { distinct });
    }
    if points.first() != points.last() {
        points.push(points[0]);
    }

    let sum = shoelace_sum(&points);
    if sum == 0.0 {
        return Err(RingError::ZeroArea);
    }
    if sum > 0.0 {
        debug!("Reversing clockwise ring of {} points", points.len());
        points.reverse();
    }
    Ok(Ring::new(points))
}

/// Drops consecutive duplicate vertices, keeping the first of each run.
fn dedup_consecutive(points: &[LonLat]) -> Vec<LonLat> {
    let mut out: Vec<LonLat> = Vec::with_capacity(points.len());
    for &point in points {
        if out.last() != Some(&point) {
            out.push(point);
        }
    }
    out
}

/// Distinct vertex count, not counting a closing vertex twice.
fn distinct_points(points: &[LonLat]) -> usize {
    let deduped = dedup_consecutive(points);
    if deduped.len() > 1 && deduped.first() == deduped.last() {
        deduped.len() - 1
    } else {
        deduped.len()
    }
}

fn shoelace_sum(points: &[LonLat]) -> f64 {
    let mut sum: f64 = points
        .windows(2)
        .map(|pair| (pair[1].0 - pair[0].0) * (pair[1].1 + pair[0].1))
        .sum();
    // Unclosed input still owes the wrap-around segment.
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };
    if first != last {
        sum += (first.0 - last.0) * (first.1 + last.1);
    }
    sum
}
