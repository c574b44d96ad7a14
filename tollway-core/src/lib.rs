//! Core domain types for the Tollway route planner.
//!
//! The crate defines the data exchanged between the directions provider,
//! the toll estimators, and the budget optimiser, plus the traits that
//! separate them:
//!
//! - [`RouteCandidate`] and its geometry describe a drivable route.
//! - [`PricingTable`] recognises toll facilities by road name.
//! - [`TollEstimator`] prices candidates; [`RouteOptimizer`] ranks them.
//! - [`Clock`] supplies the local time used for dynamic pricing.
//!
//! Implementations live in sibling crates so that callers can depend on
//! the traits without pulling in a particular pricing model.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod clock;
pub mod estimator;
pub mod merge;
pub mod optimizer;
pub mod pricing;
pub mod request;
pub mod route;
pub mod segment;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod units;

pub use clock::{Clock, FixedClock, PricingPeriod, SystemClock};
pub use estimator::{TollEstimator, sanitise_toll};
pub use merge::{DEFAULT_MIN_SEPARATION_METERS, merge_candidates};
pub use optimizer::{OptimizationResult, OptionKind, RouteOptimizer, RouteOption};
pub use pricing::{
    FacilityPricing, MatchRule, PricingTable, PricingTableError, Region, TollFacility,
};
pub use request::{DEFAULT_BUDGET_USD, OptimizeRequest, OptimizeRequestError, validate_budget};
pub use route::{RouteCandidate, RouteGeometry, RouteLeg, RouteStep};
pub use segment::{RoadSegment, extract_segments};
