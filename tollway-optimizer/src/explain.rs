//! Explanation text for options and advisories.

use crate::selection::{Annotated, whole_minutes};

pub(crate) fn toll_free(route: &Annotated<'_>) -> String {
    format!("Toll-free route ({} min)", route.minutes)
}

pub(crate) fn cheapest(route: &Annotated<'_>) -> String {
    format!(
        "Lowest toll option: ${:.2} ({} min)",
        route.toll_usd, route.minutes
    )
}

pub(crate) fn best_within_budget(
    route: &Annotated<'_>,
    no_toll: &Annotated<'_>,
    budget_usd: f64,
) -> String {
    let base = format!(
        "Fastest within your ${budget_usd:.2} budget: ${:.2} toll, {} min",
        route.toll_usd, route.minutes
    );
    let saved = whole_minutes(no_toll.eta_seconds().saturating_sub(route.eta_seconds()));
    if saved > 0 {
        format!("{base}; saves {saved} min vs the no-toll route")
    } else {
        base
    }
}

pub(crate) fn budget_fallback(route: &Annotated<'_>) -> String {
    format!(
        "Cheapest option (no routes within budget): ${:.2} toll, {} min",
        route.toll_usd, route.minutes
    )
}

pub(crate) fn fastest(route: &Annotated<'_>) -> String {
    let base = format!(
        "Fastest route: {} min (${:.2} toll)",
        route.minutes, route.toll_usd
    );
    if route.within_budget {
        base
    } else {
        format!("{base}, exceeds budget by ${:.2}", route.exceeds_by_usd)
    }
}

pub(crate) fn within_budget(route: &Annotated<'_>, budget_route: &Annotated<'_>) -> String {
    let slower = whole_minutes(route.eta_seconds().saturating_sub(budget_route.eta_seconds()));
    format!(
        "Within budget: ${:.2} toll, +{slower} min vs the budget route",
        route.toll_usd
    )
}

pub(crate) fn exceeds_budget(route: &Annotated<'_>) -> String {
    format!(
        "Exceeds budget by ${:.2}: ${:.2} toll, {} min",
        route.exceeds_by_usd, route.toll_usd, route.minutes
    )
}

pub(crate) fn nothing_within_budget(budget_usd: f64) -> String {
    format!(
        "No routes within ${budget_usd:.2} budget. Consider the no-toll option or increase the budget."
    )
}

pub(crate) fn economical(route: &Annotated<'_>, budget_usd: f64) -> String {
    let share = route.toll_usd / budget_usd * 100.0;
    format!(
        "The budget route is both economical and fastest: ${:.2} uses {share:.0}% of your ${budget_usd:.2} budget",
        route.toll_usd
    )
}
