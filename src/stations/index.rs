//! Spatial index over a fixed candidate pool, for pipelines that resolve
//! many targets against the same station catalog.

use crate::geo::{great_circle_km, LatLon};
use crate::stations::resolver::rank_refs;
use crate::types::candidate::StationCandidate;
use log::warn;
use ordered_float::OrderedFloat;
use rstar::RTree;

/// The tree is queried in squared coordinate space, which near the poles can
/// order stations differently than true distance. Pulling a margin of extra
/// neighbors before the exact re-rank absorbs that.
const MIN_PREFETCH: usize = 20;

#[derive(Debug, Clone)]
pub struct StationIndex {
    rtree: RTree<StationCandidate>,
    len: usize,
}

impl StationIndex {
    /// Builds the index, dropping candidates with non-finite coordinates.
    pub fn new(candidates: Vec<StationCandidate>) -> Self {
        let usable: Vec<StationCandidate> = candidates
            .into_iter()
            .filter(|candidate| {
                if candidate.position().is_finite() {
                    return true;
                }
                warn!(
                    "Dropping candidate {} with non-finite coordinates",
                    candidate.id
                );
                false
            })
            .collect();
        let len = usable.len();
        StationIndex {
            rtree: RTree::bulk_load(usable),
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `limit` candidates nearest `target`, ascending by great-circle
    /// distance in kilometers.
    ///
    /// The tree orders neighbors by squared degree offsets; an over-fetched
    /// prefix is re-ranked with the exact distance before truncation.
    pub fn nearest(&self, target: LatLon, limit: usize) -> Vec<(&StationCandidate, f64)> {
        if limit == 0 {
            return Vec::new();
        }
        let prefetch = limit.saturating_mul(2).max(MIN_PREFETCH);
        let mut ranked: Vec<(&StationCandidate, f64)> = self
            .rtree
            .nearest_neighbor_iter(&[target.0, target.1])
            .take(prefetch)
            .map(|candidate| (candidate, great_circle_km(target, candidate.position())))
            .collect();
        ranked.sort_by_key(|&(_, distance_km)| OrderedFloat(distance_km));
        ranked.truncate(limit);
        ranked
    }

    /// Every indexed candidate ranked by distance from `target`.
    pub fn rank_all(&self, target: LatLon) -> Vec<(&StationCandidate, f64)> {
        rank_refs(self.rtree.iter(), target)
    }
}
