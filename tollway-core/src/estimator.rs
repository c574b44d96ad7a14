//! Price candidate routes.
//!
//! The [`TollEstimator`] trait turns an unpriced [`RouteCandidate`] into a
//! dollar estimate. Implementations supply the per-route arithmetic; the
//! provided [`TollEstimator::estimate_tolls`] applies it across a batch,
//! leaving already-priced routes untouched and rounding to cents.

use crate::RouteCandidate;
use crate::units::round_to_cents;

/// Estimate toll costs for candidate routes.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one estimator
/// can serve concurrent requests. The computation is infallible: missing
/// data degrades to a heuristic rather than an error.
///
/// # Examples
///
/// ```rust
/// use tollway_core::{RouteCandidate, TollEstimator};
///
/// struct FlatRate;
///
/// impl TollEstimator for FlatRate {
///     fn route_toll(&self, route: &RouteCandidate) -> f64 {
///         route.distance_meters as f64 / 1000.0 * 0.10
///     }
/// }
///
/// let mut routes = vec![
///     RouteCandidate::new("a", 600, 12_345),
///     RouteCandidate::new("b", 600, 10_000).with_toll(0.0),
/// ];
/// FlatRate.estimate_tolls(&mut routes);
/// assert_eq!(routes[0].toll_estimate_usd, Some(1.23));
/// assert_eq!(routes[1].toll_estimate_usd, Some(0.0));
/// ```
pub trait TollEstimator: Send + Sync {
    /// Unrounded toll in dollars for a single route.
    fn route_toll(&self, route: &RouteCandidate) -> f64;

    /// Price every route whose estimate is still unset.
    ///
    /// Estimates are clamped at zero and rounded to whole cents. Routes
    /// that already carry an estimate are skipped.
    fn estimate_tolls(&self, routes: &mut [RouteCandidate]) {
        for route in routes.iter_mut() {
            if route.is_priced() {
                log::debug!("route {} already priced, skipping", route.route_id);
                continue;
            }
            let toll = sanitise_toll(self.route_toll(route));
            route.price_once(toll);
        }
    }
}

/// Clamp a raw toll to a finite, non-negative amount in whole cents.
#[must_use]
pub fn sanitise_toll(toll_usd: f64) -> f64 {
    if !toll_usd.is_finite() {
        return 0.0;
    }
    round_to_cents(toll_usd.max(0.0))
}

impl<E: TollEstimator + ?Sized> TollEstimator for std::sync::Arc<E> {
    fn route_toll(&self, route: &RouteCandidate) -> f64 {
        (**self).route_toll(route)
    }
}
