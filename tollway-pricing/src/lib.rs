//! Road-name toll estimation for Tollway routes.
//!
//! [`RoadPatternEstimator`] implements
//! [`TollEstimator`](tollway_core::TollEstimator). For each unpriced route it
//! flattens the provider's step geometry into named segments, resolves each
//! name against a shared [`PricingTable`](tollway_core::PricingTable), and
//! charges the matched miles at the facility's rate:
//!
//! - dynamic facilities scale the rate by time of day and, when the route
//!   is slow, by congestion (see [`dynamic_multiplier`]);
//! - vehicles without a toll tag pay [`NO_TAG_SURCHARGE`] on every rate.
//!
//! Routes with no step detail are priced by [`fallback_toll`], a
//! distance-and-speed heuristic.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use tollway_core::{FixedClock, PricingTable, RouteCandidate, RouteGeometry, RouteLeg,
//!     RouteStep, TollEstimator};
//! use tollway_pricing::{EstimatorConfig, RoadPatternEstimator};
//!
//! # fn main() -> Result<(), tollway_core::PricingTableError> {
//! let table = Arc::new(PricingTable::texas()?);
//! let clock = FixedClock::at(15, 0).expect("valid time");
//! let estimator = RoadPatternEstimator::new(table, EstimatorConfig::default()).with_clock(clock);
//!
//! let geometry = RouteGeometry::new(vec![RouteLeg::new(vec![
//!     RouteStep::new("SH 130", 16_093.4),
//!     RouteStep::new("Interstate 35", 8_000.0),
//! ])]);
//! let mut routes = vec![RouteCandidate::new("r1", 900, 24_093).with_geometry(geometry)];
//! estimator.estimate_tolls(&mut routes);
//! assert_eq!(routes[0].toll_estimate_usd, Some(1.7));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use std::sync::Arc;

use tollway_core::units::{average_speed_mph, meters_to_miles};
use tollway_core::{
    Clock, PricingPeriod, PricingTable, RouteCandidate, SystemClock, TollEstimator,
    extract_segments,
};

mod breakdown;
mod config;
mod dynamic;
mod fallback;

pub use breakdown::{FacilityCharge, PricingMethod, TollBreakdown};
pub use config::EstimatorConfig;
pub use dynamic::{
    CONGESTED_SPEED_FRACTION, CONGESTION_MULTIPLIER, HIGHWAY_SPEED_MPH, MIDDAY_MULTIPLIER,
    NO_TAG_SURCHARGE, OFF_PEAK_MULTIPLIER, dynamic_multiplier, effective_rate, is_congested,
    period_multiplier,
};
pub use fallback::{
    FALLBACK_RATE_PER_MILE, HIGHWAY_SPEED_THRESHOLD_MPH, HIGHWAY_TOLL_SHARE, LOCAL_TOLL_SHARE,
    fallback_toll,
};

/// Prices routes by matching road names against a [`PricingTable`].
///
/// The table is shared read-only, so one table can back any number of
/// estimators with different configurations. The clock is read once per
/// route.
#[derive(Debug, Clone)]
pub struct RoadPatternEstimator<C = SystemClock> {
    table: Arc<PricingTable>,
    config: EstimatorConfig,
    clock: C,
}

impl RoadPatternEstimator<SystemClock> {
    /// Create an estimator that reads the local wall clock.
    #[must_use]
    pub const fn new(table: Arc<PricingTable>, config: EstimatorConfig) -> Self {
        Self {
            table,
            config,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> RoadPatternEstimator<C> {
    /// Replace the time source, consuming `self`.
    #[must_use]
    pub fn with_clock<D: Clock>(self, clock: D) -> RoadPatternEstimator<D> {
        RoadPatternEstimator {
            table: self.table,
            config: self.config,
            clock,
        }
    }

    /// Itemise the toll for `route`, ignoring any preset estimate.
    #[must_use]
    pub fn breakdown(&self, route: &RouteCandidate) -> TollBreakdown {
        let segments = extract_segments(route);
        let breakdown = if segments.is_empty() {
            TollBreakdown::fallback(fallback_toll(
                route.distance_meters,
                route.eta_seconds,
                self.config.has_toll_tag,
            ))
        } else {
            let period = PricingPeriod::at(self.clock.time_of_day());
            let speed = average_speed_mph(route.distance_meters, route.eta_seconds);
            let charges = segments
                .into_iter()
                .filter_map(|segment| {
                    let facility = self.table.identify(&segment.name)?;
                    let miles = meters_to_miles(segment.distance_meters.max(0.0));
                    let rate_per_mile = effective_rate(facility, period, speed, self.config);
                    Some(FacilityCharge {
                        facility_id: facility.id().to_owned(),
                        facility: facility.description().to_owned(),
                        road_name: segment.name,
                        miles,
                        rate_per_mile,
                        cost_usd: rate_per_mile * miles,
                    })
                })
                .collect();
            TollBreakdown::from_charges(charges)
        };
        log::debug!(
            "route {} priced from {:?}: ${:.2} across {} charged segment(s)",
            route.route_id,
            breakdown.method,
            breakdown.total_usd,
            breakdown.charges.len()
        );
        breakdown
    }
}

impl<C: Clock> TollEstimator for RoadPatternEstimator<C> {
    fn route_toll(&self, route: &RouteCandidate) -> f64 {
        self.breakdown(route).total_usd
    }
}
