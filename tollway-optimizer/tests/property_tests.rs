//! Property-based tests for the budget optimiser.
//!
//! # Invariants tested
//!
//! - **Cheapest first:** the no-toll option's toll is at most every
//!   other route's toll.
//! - **Fastest within budget:** the budget option is at least as fast as
//!   every other within-budget route.
//! - **No repeats:** alternatives never repeat each other or either option.
//! - **Coverage:** every input route is shown exactly once.
//! - **Determinism:** identical inputs give identical results.

use std::collections::HashSet;

use proptest::prelude::*;
use tollway_core::{RouteCandidate, RouteOptimizer};
use tollway_optimizer::BudgetOptimizer;

/// Strategy for priced routes with unique ids and frequent ties.
fn routes_strategy() -> impl Strategy<Value = Vec<RouteCandidate>> {
    let route = (0_u64..20, 0_u32..2_000, 1_000_u64..100_000);
    proptest::collection::vec(route, 1..12).prop_map(|routes| {
        routes
            .into_iter()
            .enumerate()
            .map(|(index, (eta_minutes, cents, distance))| {
                RouteCandidate::new(format!("r{index}"), eta_minutes * 60, distance)
                    .with_toll(f64::from(cents) / 100.0)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: the no-toll option carries the lowest toll.
    #[test]
    fn no_toll_option_is_cheapest(routes in routes_strategy(), budget in 0.0_f64..25.0) {
        let result = BudgetOptimizer::new().optimize(&routes, budget);
        let no_toll = result.no_toll_option.expect("non-empty input");
        for route in &routes {
            prop_assert!(no_toll.toll_estimate_usd <= route.toll_or_zero());
        }
    }

    /// Property: the budget option is the fastest within-budget route.
    #[test]
    fn budget_option_is_fastest_within_budget(
        routes in routes_strategy(),
        budget in 0.0_f64..25.0,
    ) {
        let result = BudgetOptimizer::new().optimize(&routes, budget);
        let budget_option = result.budget_option.expect("non-empty input");
        let within: Vec<&RouteCandidate> =
            routes.iter().filter(|r| r.toll_or_zero() <= budget).collect();
        if within.is_empty() {
            prop_assert!(!budget_option.within_budget);
        } else {
            prop_assert!(budget_option.within_budget);
            for route in within {
                prop_assert!(budget_option.eta_seconds <= route.eta_seconds);
            }
        }
    }

    /// Property: alternatives repeat nothing and every route is shown once.
    #[test]
    fn every_route_is_shown_once(routes in routes_strategy(), budget in 0.0_f64..25.0) {
        let result = BudgetOptimizer::new().optimize(&routes, budget);
        let no_toll = result.no_toll_option.as_ref().expect("non-empty input");
        let budget_option = result.budget_option.as_ref().expect("non-empty input");

        let mut seen = HashSet::new();
        seen.insert(no_toll.route_id.as_str());
        seen.insert(budget_option.route_id.as_str());
        for option in &result.alternatives {
            prop_assert!(
                seen.insert(option.route_id.as_str()),
                "route {} shown twice",
                option.route_id
            );
        }
        prop_assert_eq!(seen.len(), routes.len());
    }

    /// Property: optimisation is deterministic.
    #[test]
    fn optimisation_is_deterministic(routes in routes_strategy(), budget in 0.0_f64..25.0) {
        let optimizer = BudgetOptimizer::new();
        prop_assert_eq!(optimizer.optimize(&routes, budget), optimizer.optimize(&routes, budget));
    }
}
