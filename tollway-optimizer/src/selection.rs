//! Per-route annotations and the picks made from them.
//!
//! Picks return positions into the annotated slice. Every pick resolves
//! ties in favour of the earliest position.

use std::cmp::Ordering;

use tollway_core::units::{meters_to_miles, round_to_cents, round_to_tenths};
use tollway_core::{OptionKind, RouteCandidate, RouteOption};

/// A candidate with the figures shown to the traveller.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Annotated<'a> {
    pub(crate) route: &'a RouteCandidate,
    pub(crate) toll_usd: f64,
    pub(crate) minutes: u64,
    pub(crate) miles: f64,
    pub(crate) within_budget: bool,
    pub(crate) exceeds_by_usd: f64,
}

impl<'a> Annotated<'a> {
    pub(crate) fn new(route: &'a RouteCandidate, budget_usd: f64) -> Self {
        let toll_usd = route.toll_or_zero();
        #[expect(
            clippy::cast_precision_loss,
            reason = "route lengths are far below 2^52 metres"
        )]
        let miles = round_to_tenths(meters_to_miles(route.distance_meters as f64));
        Self {
            route,
            toll_usd,
            minutes: whole_minutes(route.eta_seconds),
            miles,
            within_budget: toll_usd <= budget_usd,
            exceeds_by_usd: round_to_cents(toll_usd - budget_usd).max(0.0),
        }
    }

    pub(crate) const fn eta_seconds(&self) -> u64 {
        self.route.eta_seconds
    }

    /// Present the route as an option of `kind`.
    pub(crate) fn to_option(self, kind: OptionKind, description: String) -> RouteOption {
        RouteOption {
            route_id: self.route.route_id.clone(),
            kind,
            label: kind.label().to_owned(),
            eta_seconds: self.route.eta_seconds,
            distance_meters: self.route.distance_meters,
            toll_estimate_usd: self.toll_usd,
            minutes: self.minutes,
            miles: self.miles,
            within_budget: self.within_budget,
            exceeds_by_usd: self.exceeds_by_usd,
            description,
            polyline: self.route.polyline.clone(),
            geometry: self.route.geometry.clone(),
        }
    }
}

/// Seconds to whole minutes, rounding halves up: 90 s is 2 min and 150 s
/// is 3 min.
pub(crate) const fn whole_minutes(seconds: u64) -> u64 {
    seconds.saturating_add(30) / 60
}

/// Position of the lowest toll.
pub(crate) fn cheapest(routes: &[Annotated<'_>]) -> Option<usize> {
    routes
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.toll_usd.partial_cmp(&b.toll_usd).unwrap_or(Ordering::Equal))
        .map(|(index, _)| index)
}

/// Position of the shortest travel time among routes accepted by `keep`.
pub(crate) fn fastest(
    routes: &[Annotated<'_>],
    keep: impl Fn(&Annotated<'_>) -> bool,
) -> Option<usize> {
    routes
        .iter()
        .enumerate()
        .filter(|(_, route)| keep(route))
        .min_by_key(|(_, route)| route.eta_seconds())
        .map(|(index, _)| index)
}

/// Every position ordered by ascending travel time, stable on ties.
pub(crate) fn by_eta(routes: &[Annotated<'_>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..routes.len()).collect();
    order.sort_by_key(|&index| routes[index].eta_seconds());
    order
}
