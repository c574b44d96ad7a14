//! Budget-aware route selection.
//!
//! A [`RouteOptimizer`] turns priced candidates and a toll budget into an
//! [`OptimizationResult`]: a no-toll option, a budget option, ordered
//! alternatives, and advisories for the traveller.

use crate::{RouteCandidate, RouteGeometry};

/// Role of a route within an [`OptimizationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OptionKind {
    /// Cheapest route, effectively toll-free.
    NoToll,
    /// Cheapest route, but it still carries a toll.
    Cheapest,
    /// Fastest route whose toll fits the budget.
    BestWithinBudget,
    /// Nothing fits the budget; the cheapest route stands in.
    BudgetFallback,
    /// Fastest route overall.
    Fastest,
    /// Another route that fits the budget.
    WithinBudget,
    /// A route whose toll exceeds the budget.
    ExceedsBudget,
}

impl OptionKind {
    /// Display label for the option.
    ///
    /// # Examples
    /// ```
    /// use tollway_core::OptionKind;
    ///
    /// assert_eq!(OptionKind::NoToll.label(), "No Toll Route");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoToll => "No Toll Route",
            Self::Cheapest => "Cheapest Route",
            Self::BestWithinBudget => "Best Within Budget",
            Self::BudgetFallback => "Cheapest Route (No Routes Within Budget)",
            Self::Fastest => "Fastest Route",
            Self::WithinBudget => "Within Budget",
            Self::ExceedsBudget => "Exceeds Budget",
        }
    }
}

/// A route annotated for presentation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteOption {
    /// Identifier of the underlying candidate.
    pub route_id: String,
    /// Role of the route in the result.
    pub kind: OptionKind,
    /// Display label, usually [`OptionKind::label`].
    pub label: String,
    /// Travel time in seconds.
    pub eta_seconds: u64,
    /// Length in metres.
    pub distance_meters: u64,
    /// Toll estimate in dollars; unpriced candidates count as free.
    pub toll_estimate_usd: f64,
    /// Travel time in whole minutes.
    pub minutes: u64,
    /// Length in miles, one decimal place.
    pub miles: f64,
    /// Whether the toll fits the budget.
    pub within_budget: bool,
    /// Dollars over budget, zero when within.
    pub exceeds_by_usd: f64,
    /// Explanation of why the route is offered.
    pub description: String,
    /// Encoded polyline of the candidate.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub polyline: String,
    /// Geometry of the candidate, for map rendering.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub geometry: Option<RouteGeometry>,
}

/// Outcome of one optimisation call.
///
/// `no_toll_option` is present whenever the input was non-empty, and
/// `budget_option` then falls back to the no-toll route's figures when
/// nothing fits the budget. Alternatives never repeat a route shown in
/// either option.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult {
    /// Budget the result was computed for.
    pub budget_usd: f64,
    /// Cheapest route.
    pub no_toll_option: Option<RouteOption>,
    /// Fastest route within budget.
    pub budget_option: Option<RouteOption>,
    /// Remaining routes worth showing, in display order.
    pub alternatives: Vec<RouteOption>,
    /// Human-readable notes about the selection.
    pub advisories: Vec<String>,
}

impl OptimizationResult {
    /// Result for an empty candidate list.
    #[must_use]
    pub fn no_routes(budget_usd: f64) -> Self {
        Self {
            budget_usd,
            no_toll_option: None,
            budget_option: None,
            alternatives: Vec::new(),
            advisories: vec!["No routes available".to_owned()],
        }
    }

    /// Every emitted option in display order: no-toll, budget, alternatives.
    pub fn options(&self) -> impl Iterator<Item = &RouteOption> {
        self.no_toll_option
            .iter()
            .chain(self.budget_option.iter())
            .chain(self.alternatives.iter())
    }
}

/// Select and explain routes under a toll budget.
///
/// Implementations must be deterministic: identical inputs produce
/// identical results, with ties resolved in favour of the earliest-listed
/// route.
///
/// # Examples
///
/// ```rust
/// use tollway_core::{OptimizationResult, RouteCandidate, RouteOptimizer};
///
/// struct NothingFits;
///
/// impl RouteOptimizer for NothingFits {
///     fn optimize(&self, _routes: &[RouteCandidate], budget_usd: f64) -> OptimizationResult {
///         OptimizationResult::no_routes(budget_usd)
///     }
/// }
///
/// let result = NothingFits.optimize(&[], 10.0);
/// assert!(result.no_toll_option.is_none());
/// assert_eq!(result.options().count(), 0);
/// ```
pub trait RouteOptimizer: Send + Sync {
    /// Rank `routes` against `budget_usd`.
    fn optimize(&self, routes: &[RouteCandidate], budget_usd: f64) -> OptimizationResult;
}
