//! Behavioural tests for budget-aware route selection.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tollway_core::test_support::sample_routes;
use tollway_core::{OptimizationResult, RouteCandidate, RouteOptimizer};
use tollway_optimizer::BudgetOptimizer;

#[fixture]
fn routes() -> RefCell<Vec<RouteCandidate>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn outcome() -> RefCell<Option<OptimizationResult>> {
    RefCell::new(None)
}

fn optimise(
    routes: &RefCell<Vec<RouteCandidate>>,
    outcome: &RefCell<Option<OptimizationResult>>,
    budget: f64,
) {
    let result = BudgetOptimizer::new().optimize(&routes.borrow(), budget);
    *outcome.borrow_mut() = Some(result);
}

fn with_result<T>(
    outcome: &RefCell<Option<OptimizationResult>>,
    check: impl FnOnce(&OptimizationResult) -> T,
) -> T {
    let outcome = outcome.borrow();
    check(outcome.as_ref().expect("optimisation was run"))
}

fn assert_budget_option(outcome: &RefCell<Option<OptimizationResult>>, expected: &str) {
    with_result(outcome, |result| {
        let option = result.budget_option.as_ref().expect("budget option present");
        assert_eq!(option.route_id, expected);
    });
}

#[given("the four sample routes")]
fn four_routes(#[from(routes)] routes: &RefCell<Vec<RouteCandidate>>) {
    *routes.borrow_mut() = sample_routes();
}

#[given("no routes")]
fn no_routes(#[from(routes)] routes: &RefCell<Vec<RouteCandidate>>) {
    routes.borrow_mut().clear();
}

#[when("I optimise with a budget of 10 dollars")]
fn optimise_ten(
    #[from(routes)] routes: &RefCell<Vec<RouteCandidate>>,
    #[from(outcome)] outcome: &RefCell<Option<OptimizationResult>>,
) {
    optimise(routes, outcome, 10.0);
}

#[when("I optimise with a budget of 5 dollars")]
fn optimise_five(
    #[from(routes)] routes: &RefCell<Vec<RouteCandidate>>,
    #[from(outcome)] outcome: &RefCell<Option<OptimizationResult>>,
) {
    optimise(routes, outcome, 5.0);
}

#[when("I optimise with a budget of 0 dollars")]
fn optimise_zero(
    #[from(routes)] routes: &RefCell<Vec<RouteCandidate>>,
    #[from(outcome)] outcome: &RefCell<Option<OptimizationResult>>,
) {
    optimise(routes, outcome, 0.0);
}

#[then("the no-toll option is route C")]
fn no_toll_is_c(#[from(outcome)] outcome: &RefCell<Option<OptimizationResult>>) {
    with_result(outcome, |result| {
        let option = result.no_toll_option.as_ref().expect("no-toll option present");
        assert_eq!(option.route_id, "C");
    });
}

#[then("the budget option is route A")]
fn budget_is_a(#[from(outcome)] outcome: &RefCell<Option<OptimizationResult>>) {
    assert_budget_option(outcome, "A");
}

#[then("the budget option is route B")]
fn budget_is_b(#[from(outcome)] outcome: &RefCell<Option<OptimizationResult>>) {
    assert_budget_option(outcome, "B");
}

#[then("the budget option is route C")]
fn budget_is_c(#[from(outcome)] outcome: &RefCell<Option<OptimizationResult>>) {
    assert_budget_option(outcome, "C");
}

#[then("the alternatives are B then D")]
fn alternatives_b_d(#[from(outcome)] outcome: &RefCell<Option<OptimizationResult>>) {
    with_result(outcome, |result| {
        let ids: Vec<&str> = result
            .alternatives
            .iter()
            .map(|o| o.route_id.as_str())
            .collect();
        assert_eq!(ids, ["B", "D"]);
    });
}

#[then("the alternatives are A then D, both over budget")]
fn alternatives_a_d_over(#[from(outcome)] outcome: &RefCell<Option<OptimizationResult>>) {
    with_result(outcome, |result| {
        let ids: Vec<&str> = result
            .alternatives
            .iter()
            .map(|o| o.route_id.as_str())
            .collect();
        assert_eq!(ids, ["A", "D"]);
        assert!(result.alternatives.iter().all(|o| o.exceeds_by_usd > 0.0));
    });
}

#[then("the only advisory says no routes are available")]
fn no_routes_advisory(#[from(outcome)] outcome: &RefCell<Option<OptimizationResult>>) {
    with_result(outcome, |result| {
        assert_eq!(result.advisories, ["No routes available"]);
        assert!(result.budget_option.is_none());
    });
}

#[scenario(path = "tests/features/budget_optimization.feature", index = 0)]
fn ten_dollar_budget(routes: RefCell<Vec<RouteCandidate>>, outcome: RefCell<Option<OptimizationResult>>) {
    let _ = (routes, outcome);
}

#[scenario(path = "tests/features/budget_optimization.feature", index = 1)]
fn five_dollar_budget(routes: RefCell<Vec<RouteCandidate>>, outcome: RefCell<Option<OptimizationResult>>) {
    let _ = (routes, outcome);
}

#[scenario(path = "tests/features/budget_optimization.feature", index = 2)]
fn zero_budget(routes: RefCell<Vec<RouteCandidate>>, outcome: RefCell<Option<OptimizationResult>>) {
    let _ = (routes, outcome);
}

#[scenario(path = "tests/features/budget_optimization.feature", index = 3)]
fn no_candidates(routes: RefCell<Vec<RouteCandidate>>, outcome: RefCell<Option<OptimizationResult>>) {
    let _ = (routes, outcome);
}
