//! Facade crate for the Tollway route pricing engine.
//!
//! This crate re-exports the core domain types and exposes the default
//! estimator and optimiser behind feature flags.
//!
//! ```
//! # #[cfg(all(feature = "pricing", feature = "optimizer"))]
//! # fn main() -> Result<(), tollway::PricingTableError> {
//! use std::sync::Arc;
//! use tollway::{
//!     BudgetOptimizer, EstimatorConfig, PricingTable, RoadPatternEstimator, RouteCandidate,
//!     RouteOptimizer, TollEstimator,
//! };
//!
//! let table = Arc::new(PricingTable::texas()?);
//! let estimator = RoadPatternEstimator::new(table, EstimatorConfig::default());
//! let mut routes = vec![
//!     RouteCandidate::new("tolled", 1_500, 30_000).with_toll(6.0),
//!     RouteCandidate::new("free", 2_100, 33_000),
//! ];
//! estimator.estimate_tolls(&mut routes);
//!
//! let result = BudgetOptimizer::new().optimize(&routes, 10.0);
//! assert_eq!(result.budget_option.map(|option| option.route_id).as_deref(), Some("tolled"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "pricing", feature = "optimizer")))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use tollway_core::{
    Clock, FixedClock, OptimizationResult, OptimizeRequest, OptimizeRequestError, OptionKind,
    PricingPeriod, PricingTable, PricingTableError, Region, RoadSegment, RouteCandidate,
    RouteGeometry, RouteLeg, RouteOptimizer, RouteOption, RouteStep, SystemClock, TollEstimator,
    TollFacility, extract_segments, merge_candidates,
};

#[cfg(feature = "pricing")]
pub use tollway_pricing::{EstimatorConfig, RoadPatternEstimator, TollBreakdown};

#[cfg(feature = "optimizer")]
pub use tollway_optimizer::{BudgetOptimizer, OptimizerConfig};
