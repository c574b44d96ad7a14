//! Combine candidate lists from separate provider queries.
//!
//! Providers are usually asked twice: once with default preferences and
//! once with tolls avoided. The second answer often repeats a route from
//! the first; distance is a cheap proxy for "same path".

use crate::RouteCandidate;

/// Minimum distance difference, in metres, for a route to count as new.
pub const DEFAULT_MIN_SEPARATION_METERS: u64 = 1_000;

/// Append each `extra` candidate whose length differs from every kept
/// candidate by at least `min_separation_meters`.
///
/// Extras are checked against the primaries and against extras already
/// appended. Order is preserved.
///
/// # Examples
/// ```
/// use tollway_core::{RouteCandidate, merge_candidates};
///
/// let primary = vec![RouteCandidate::new("fast", 1_200, 30_000)];
/// let avoid_tolls = vec![
///     RouteCandidate::new("dup", 1_300, 30_400),
///     RouteCandidate::new("free", 1_900, 34_000),
/// ];
/// let merged = merge_candidates(primary, avoid_tolls, 1_000);
/// let ids: Vec<_> = merged.iter().map(|r| r.route_id.as_str()).collect();
/// assert_eq!(ids, ["fast", "free"]);
/// ```
#[must_use]
pub fn merge_candidates(
    primary: Vec<RouteCandidate>,
    extra: Vec<RouteCandidate>,
    min_separation_meters: u64,
) -> Vec<RouteCandidate> {
    let mut merged = primary;
    for candidate in extra {
        let distinct = merged.iter().all(|kept| {
            kept.distance_meters.abs_diff(candidate.distance_meters) >= min_separation_meters
        });
        if distinct {
            merged.push(candidate);
        } else {
            log::debug!(
                "dropping candidate {} as a repeat of an existing route",
                candidate.route_id
            );
        }
    }
    merged
}
