//! `BudgetOptimizer`: the default [`RouteOptimizer`].

use tollway_core::{OptimizationResult, OptionKind, RouteCandidate, RouteOptimizer};

use crate::OptimizerConfig;
use crate::explain;
use crate::selection::{Annotated, by_eta, cheapest, fastest};

/// Ranks priced routes against a toll budget.
///
/// The result holds, in display order:
///
/// 1. the cheapest route, labelled toll-free when its toll is below
///    [`OptimizerConfig::free_threshold_usd`];
/// 2. the fastest route within budget, or the cheapest route again when
///    nothing fits;
/// 3. the fastest route overall, if not already shown;
/// 4. the remaining within-budget routes by ascending travel time;
/// 5. the remaining over-budget routes by ascending travel time.
///
/// # Examples
///
/// ```
/// use tollway_core::{RouteCandidate, RouteOptimizer};
/// use tollway_optimizer::BudgetOptimizer;
///
/// let routes = vec![
///     RouteCandidate::new("express", 1_800, 30_000).with_toll(9.8),
///     RouteCandidate::new("frontage", 2_400, 35_000).with_toll(0.0),
/// ];
/// let result = BudgetOptimizer::default().optimize(&routes, 10.0);
/// assert_eq!(result.no_toll_option.map(|o| o.route_id).as_deref(), Some("frontage"));
/// assert_eq!(result.budget_option.map(|o| o.route_id).as_deref(), Some("express"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetOptimizer {
    config: OptimizerConfig,
}

impl BudgetOptimizer {
    /// Construct an optimiser with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an optimiser with explicit thresholds.
    #[must_use]
    pub const fn with_config(config: OptimizerConfig) -> Self {
        Self { config }
    }
}

impl RouteOptimizer for BudgetOptimizer {
    fn optimize(&self, routes: &[RouteCandidate], budget_usd: f64) -> OptimizationResult {
        let annotated: Vec<Annotated<'_>> = routes
            .iter()
            .map(|route| Annotated::new(route, budget_usd))
            .collect();
        let Some(cheapest_at) = cheapest(&annotated) else {
            log::debug!("no candidate routes to optimise");
            return OptimizationResult::no_routes(budget_usd);
        };
        let no_toll = annotated[cheapest_at];

        let no_toll_option = if no_toll.toll_usd < self.config.free_threshold_usd {
            no_toll.to_option(OptionKind::NoToll, explain::toll_free(&no_toll))
        } else {
            no_toll.to_option(OptionKind::Cheapest, explain::cheapest(&no_toll))
        };

        let budget_at = fastest(&annotated, |route| route.within_budget);
        let mut advisories = Vec::new();
        let budget_option = match budget_at {
            Some(index) => {
                let pick = annotated[index];
                if pick.toll_usd < budget_usd * self.config.economical_fraction {
                    advisories.push(explain::economical(&pick, budget_usd));
                }
                pick.to_option(
                    OptionKind::BestWithinBudget,
                    explain::best_within_budget(&pick, &no_toll, budget_usd),
                )
            }
            None => {
                log::warn!(
                    "none of {} route(s) fit the ${budget_usd:.2} budget; falling back to the cheapest",
                    routes.len()
                );
                advisories.push(explain::nothing_within_budget(budget_usd));
                no_toll.to_option(OptionKind::BudgetFallback, explain::budget_fallback(&no_toll))
            }
        };

        let mut shown = vec![cheapest_at, budget_at.unwrap_or(cheapest_at)];
        let mut alternatives = Vec::new();
        if let Some(index) = fastest(&annotated, |_| true) {
            if !shown.contains(&index) {
                let route = annotated[index];
                alternatives.push(route.to_option(OptionKind::Fastest, explain::fastest(&route)));
                shown.push(index);
            }
        }
        let order = by_eta(&annotated);
        if let Some(budget_route) = budget_at.map(|index| annotated[index]) {
            for &index in &order {
                let route = annotated[index];
                if route.within_budget && !shown.contains(&index) {
                    alternatives.push(route.to_option(
                        OptionKind::WithinBudget,
                        explain::within_budget(&route, &budget_route),
                    ));
                    shown.push(index);
                }
            }
        }
        for &index in &order {
            if !shown.contains(&index) {
                let route = annotated[index];
                alternatives.push(
                    route.to_option(OptionKind::ExceedsBudget, explain::exceeds_budget(&route)),
                );
                shown.push(index);
            }
        }

        log::debug!(
            "optimised {} route(s) at ${budget_usd:.2}: no-toll {}, budget {}, {} alternative(s)",
            routes.len(),
            no_toll_option.route_id,
            budget_option.route_id,
            alternatives.len()
        );
        OptimizationResult {
            budget_usd,
            no_toll_option: Some(no_toll_option),
            budget_option: Some(budget_option),
            alternatives,
            advisories,
        }
    }
}
