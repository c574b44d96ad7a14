//! Property-based tests for the road-pattern estimator.
//!
//! # Invariants tested
//!
//! - **Non-negative cents:** every estimate is at least zero and a whole
//!   number of cents.
//! - **Idempotence:** preset estimates are never re-priced.
//! - **Fallback exactness:** routes without geometry price at exactly the
//!   rounded fallback heuristic.

use std::sync::Arc;

use proptest::prelude::*;
use tollway_core::test_support::RouteBuilder;
use tollway_core::{FixedClock, PricingTable, RouteCandidate, TollEstimator, sanitise_toll};
use tollway_pricing::{EstimatorConfig, RoadPatternEstimator, fallback_toll};

const ROAD_NAMES: &[&str] = &[
    "US 183 Toll",
    "MoPac Express",
    "SH 130",
    "Sam Houston Tollway",
    "Dallas North Tollway",
    "LBJ Express",
    "Interstate 35",
    "Main Street",
    "",
];

fn estimator(
    has_toll_tag: bool,
    dynamic_pricing: bool,
    hour: u32,
) -> RoadPatternEstimator<FixedClock> {
    let table = Arc::new(PricingTable::texas().expect("built-in table compiles"));
    let config = EstimatorConfig::default()
        .with_toll_tag(has_toll_tag)
        .with_dynamic_pricing(dynamic_pricing);
    RoadPatternEstimator::new(table, config).with_clock(FixedClock::at(hour, 0).expect("valid hour"))
}

/// Strategy for a route built from known road names.
fn segmented_route() -> impl Strategy<Value = RouteCandidate> {
    let step = (0..ROAD_NAMES.len(), 0.0_f64..50_000.0);
    (
        proptest::collection::vec(step, 1..8),
        0_u64..10_000,
        0_u64..200_000,
    )
        .prop_map(|(steps, eta_seconds, distance_meters)| {
            steps
                .into_iter()
                .fold(
                    RouteBuilder::new("route", eta_seconds, distance_meters),
                    |builder, (name, distance)| builder.step(ROAD_NAMES[name], distance),
                )
                .build()
        })
}

fn is_whole_cents(value: f64) -> bool {
    ((value * 100.0).round() / 100.0 - value).abs() < 1e-9
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: estimates are non-negative and rounded to cents.
    #[test]
    fn estimates_are_non_negative_cents(
        route in segmented_route(),
        has_toll_tag in any::<bool>(),
        dynamic_pricing in any::<bool>(),
        hour in 0_u32..24,
    ) {
        let mut routes = vec![route];
        estimator(has_toll_tag, dynamic_pricing, hour).estimate_tolls(&mut routes);
        let toll = routes[0].toll_estimate_usd.expect("route priced");
        prop_assert!(toll >= 0.0, "toll {} is negative", toll);
        prop_assert!(is_whole_cents(toll), "toll {} is not whole cents", toll);
    }

    /// Property: a preset estimate survives pricing unchanged.
    #[test]
    fn preset_estimates_are_unchanged(
        route in segmented_route(),
        preset in 0.0_f64..100.0,
    ) {
        let mut routes = vec![RouteCandidate { toll_estimate_usd: Some(preset), ..route }];
        estimator(false, true, 8).estimate_tolls(&mut routes);
        prop_assert_eq!(routes[0].toll_estimate_usd, Some(preset));
    }

    /// Property: routes without geometry price at the fallback heuristic.
    #[test]
    fn bare_routes_use_fallback(
        distance_meters in 0_u64..500_000,
        eta_seconds in 0_u64..20_000,
        has_toll_tag in any::<bool>(),
        hour in 0_u32..24,
    ) {
        let mut routes = vec![RouteCandidate::new("bare", eta_seconds, distance_meters)];
        estimator(has_toll_tag, true, hour).estimate_tolls(&mut routes);
        let expected = sanitise_toll(fallback_toll(distance_meters, eta_seconds, has_toll_tag));
        prop_assert_eq!(routes[0].toll_estimate_usd, Some(expected));
    }
}
