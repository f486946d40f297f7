//! Ranking and qualification of station candidates against a resolution
//! query. Checks run cheapest first; the availability probe is consulted
//! only for candidates that survive everything metadata can answer.

use crate::geo::{great_circle_km, LatLon};
use crate::sources::FieldAvailabilityChecker;
use crate::stations::error::ResolveError;
use crate::stations::index::StationIndex;
use crate::types::candidate::StationCandidate;
use crate::types::query::ResolutionQuery;
use crate::types::resolution::Resolution;
use chrono::{Days, NaiveDate};
use log::{debug, info, warn};
use ordered_float::OrderedFloat;

/// A reported last-record date may lag the requested end date by up to this
/// many days and still count as current.
pub const STALE_GRACE_DAYS: u64 = 3;

/// Ranks `candidates` by great-circle distance from `target`, ascending.
///
/// Ties keep their input order. Candidates with non-finite coordinates are
/// malformed; they are skipped with a warning and do not appear in the
/// ranking.
pub fn rank_by_distance<'a>(
    candidates: &'a [StationCandidate],
    target: LatLon,
) -> Vec<(&'a StationCandidate, f64)> {
    rank_refs(candidates.iter(), target)
}

pub(crate) fn rank_refs<'a>(
    candidates: impl Iterator<Item = &'a StationCandidate>,
    target: LatLon,
) -> Vec<(&'a StationCandidate, f64)> {
    let mut ranked: Vec<(&StationCandidate, f64)> = candidates
        .filter_map(|candidate| {
            if !candidate.position().is_finite() {
                warn!(
                    "Skipping candidate {} with non-finite coordinates",
                    candidate.id
                );
                return None;
            }
            Some((candidate, great_circle_km(target, candidate.position())))
        })
        .collect();
    // Stable sort: equally distant candidates keep their pool order.
    ranked.sort_by_key(|&(_, distance_km)| OrderedFloat(distance_km));
    ranked
}

/// Picks the nearest station that can actually serve a query.
#[derive(Debug)]
pub struct StationResolver<P> {
    probe: P,
}

impl<P: FieldAvailabilityChecker> StationResolver<P> {
    pub fn new(probe: P) -> Self {
        StationResolver { probe }
    }

    /// Resolves against a plain candidate slice.
    ///
    /// Candidates are ranked by distance and evaluated nearest first, up to
    /// `query.evaluation_cap`; the first qualifying candidate wins. An empty
    /// or exhausted pool yields [`Resolution::NotFound`]. Malformed
    /// candidates are skipped, never fatal.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] when the query itself is invalid; see
    /// [`ResolutionQuery::validate`].
    pub fn resolve(
        &self,
        candidates: &[StationCandidate],
        query: &ResolutionQuery,
    ) -> Result<Resolution, ResolveError> {
        query.validate()?;
        let ranked = rank_by_distance(candidates, query.target);
        Ok(self.first_qualifying(ranked, query))
    }

    /// Resolves against a prebuilt [`StationIndex`].
    ///
    /// Same semantics as [`StationResolver::resolve`]. With an evaluation
    /// cap set, only the nearest `cap` candidates are pulled from the index;
    /// without one the whole pool is ranked exactly.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] when the query itself is invalid.
    pub fn resolve_indexed(
        &self,
        index: &StationIndex,
        query: &ResolutionQuery,
    ) -> Result<Resolution, ResolveError> {
        query.validate()?;
        let ranked = match query.evaluation_cap {
            Some(cap) => index.nearest(query.target, cap),
            None => index.rank_all(query.target),
        };
        Ok(self.first_qualifying(ranked, query))
    }

    fn first_qualifying(
        &self,
        ranked: Vec<(&StationCandidate, f64)>,
        query: &ResolutionQuery,
    ) -> Resolution {
        let cap = query.evaluation_cap.unwrap_or(usize::MAX);
        for (candidate, distance_km) in ranked.into_iter().take(cap) {
            if !self.qualifies(candidate, query) {
                continue;
            }
            info!("Selected station {} at {:.3} km", candidate.id, distance_km);
            return Resolution::Found {
                station: candidate.clone(),
                distance_km,
            };
        }
        debug!("No candidate qualified");
        Resolution::NotFound
    }

    /// Whether one candidate satisfies every requirement of the query.
    ///
    /// Checks run in cost order and short-circuit; the availability probe is
    /// never consulted when a metadata check already rejected the candidate.
    pub fn qualifies(&self, candidate: &StationCandidate, query: &ResolutionQuery) -> bool {
        // --- 1. Reported coverage ---
        let Some(coverage) = candidate.data_coverage else {
            debug!("{}: no reported coverage", candidate.id);
            return false;
        };
        if !(0.0..=1.0).contains(&coverage) {
            warn!(
                "Skipping candidate {} with malformed coverage {}",
                candidate.id, coverage
            );
            return false;
        }
        if coverage <= query.min_coverage {
            debug!(
                "{}: coverage {} not above {}",
                candidate.id, coverage, query.min_coverage
            );
            return false;
        }

        // --- 2. Reported record span ---
        let (Some(min_date), Some(max_date)) = (candidate.min_date, candidate.max_date) else {
            debug!("{}: record span unknown", candidate.id);
            return false;
        };
        if min_date > max_date {
            warn!(
                "Skipping candidate {} with inverted record span {}..{}",
                candidate.id, min_date, max_date
            );
            return false;
        }
        if max_date < grace_cutoff(query.end_date) {
            debug!("{}: records end too early ({})", candidate.id, max_date);
            return false;
        }
        if min_date > query.start_date {
            debug!("{}: records start too late ({})", candidate.id, min_date);
            return false;
        }

        // --- 3. Claimed fields, when the catalog lists them ---
        if let Some(fields) = &candidate.available_fields {
            if !query.required_fields.iter().all(|field| fields.contains(field)) {
                debug!(
                    "{}: catalog does not list every required field",
                    candidate.id
                );
                return false;
            }
        }

        // --- 4. Availability probe (expensive, authoritative) ---
        self.probe.all_fields_available(
            &candidate.id,
            &query.required_fields,
            query.start_date,
            query.end_date,
        )
    }
}

/// Oldest acceptable last-record date for a requested end date.
fn grace_cutoff(end_date: NaiveDate) -> NaiveDate {
    end_date
        .checked_sub_days(Days::new(STALE_GRACE_DAYS))
        .unwrap_or(NaiveDate::MIN)
}
