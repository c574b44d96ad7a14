//! Optimisation requests and their validation.

use thiserror::Error;

use crate::{DEFAULT_MIN_SEPARATION_METERS, RouteCandidate, merge_candidates};

/// Budget applied when neither the request nor configuration names one.
pub const DEFAULT_BUDGET_USD: f64 = 10.0;

/// Candidates to price and rank, with the traveller's preferences.
///
/// # Examples
/// ```
/// use tollway_core::{OptimizeRequest, RouteCandidate};
///
/// let request = OptimizeRequest::new(vec![RouteCandidate::new("a", 600, 9_000)])
///     .with_budget(4.0);
/// assert!(request.validate().is_ok());
/// assert_eq!(request.budget_or(10.0), 4.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizeRequest {
    /// Candidate routes from the directions provider.
    pub routes: Vec<RouteCandidate>,
    /// Candidates from a second, toll-avoiding provider query. Only those
    /// that differ from `routes` are kept; see [`merge_candidates`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub avoid_tolls_routes: Vec<RouteCandidate>,
    /// Toll budget in dollars.
    #[cfg_attr(feature = "serde", serde(default))]
    pub budget_usd: Option<f64>,
    /// Whether the vehicle carries an electronic toll tag.
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_toll_tag: Option<bool>,
}

/// Reasons an [`OptimizeRequest`] is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeRequestError {
    /// The budget was negative, NaN, or infinite.
    #[error("budget must be a finite, non-negative amount (got {budget})")]
    InvalidBudget {
        /// Rejected budget.
        budget: f64,
    },
    /// A candidate had an empty identifier.
    #[error("route at position {index} has an empty route_id")]
    EmptyRouteId {
        /// Position of the candidate in the request.
        index: usize,
    },
    /// Two candidates shared an identifier.
    #[error("route_id {route_id:?} appears more than once")]
    DuplicateRouteId {
        /// Repeated identifier.
        route_id: String,
    },
    /// A caller-supplied toll was negative, NaN, or infinite.
    #[error("route {route_id:?} has invalid toll estimate {toll}")]
    InvalidToll {
        /// Affected route.
        route_id: String,
        /// Rejected toll.
        toll: f64,
    },
}

impl OptimizeRequest {
    /// Wrap candidates with no preferences set.
    #[must_use]
    pub fn new(routes: Vec<RouteCandidate>) -> Self {
        Self {
            routes,
            avoid_tolls_routes: Vec::new(),
            budget_usd: None,
            has_toll_tag: None,
        }
    }

    /// Attach candidates from a toll-avoiding query, consuming `self`.
    #[must_use]
    pub fn with_avoid_tolls_routes(mut self, routes: Vec<RouteCandidate>) -> Self {
        self.avoid_tolls_routes = routes;
        self
    }

    /// Set the toll budget, consuming `self`.
    #[must_use]
    pub const fn with_budget(mut self, budget_usd: f64) -> Self {
        self.budget_usd = Some(budget_usd);
        self
    }

    /// Set whether the vehicle has a toll tag, consuming `self`.
    #[must_use]
    pub const fn with_toll_tag(mut self, has_toll_tag: bool) -> Self {
        self.has_toll_tag = Some(has_toll_tag);
        self
    }

    /// The request budget, or `fallback` when unset.
    #[must_use]
    pub fn budget_or(&self, fallback: f64) -> f64 {
        self.budget_usd.unwrap_or(fallback)
    }

    /// Every candidate to rank: `routes` followed by the distinct
    /// avoid-tolls candidates.
    #[must_use]
    pub fn into_candidates(self) -> Vec<RouteCandidate> {
        merge_candidates(
            self.routes,
            self.avoid_tolls_routes,
            DEFAULT_MIN_SEPARATION_METERS,
        )
    }

    /// Check the request for values the pipeline cannot use.
    ///
    /// Route identifiers must be unique across both candidate lists.
    ///
    /// # Errors
    /// Returns the first [`OptimizeRequestError`] encountered, checking the
    /// budget before the routes and routes in order.
    pub fn validate(&self) -> Result<(), OptimizeRequestError> {
        if let Some(budget) = self.budget_usd {
            validate_budget(budget)?;
        }
        let all: Vec<&RouteCandidate> = self
            .routes
            .iter()
            .chain(&self.avoid_tolls_routes)
            .collect();
        for (index, route) in all.iter().enumerate() {
            if route.route_id.trim().is_empty() {
                return Err(OptimizeRequestError::EmptyRouteId { index });
            }
            if all
                .iter()
                .take(index)
                .any(|earlier| earlier.route_id == route.route_id)
            {
                return Err(OptimizeRequestError::DuplicateRouteId {
                    route_id: route.route_id.clone(),
                });
            }
            if let Some(toll) = route.toll_estimate_usd {
                if !toll.is_finite() || toll < 0.0 {
                    return Err(OptimizeRequestError::InvalidToll {
                        route_id: route.route_id.clone(),
                        toll,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Reject budgets that are negative or not finite.
///
/// # Errors
/// Returns [`OptimizeRequestError::InvalidBudget`] for unusable budgets.
pub fn validate_budget(budget: f64) -> Result<(), OptimizeRequestError> {
    if budget.is_finite() && budget >= 0.0 {
        Ok(())
    } else {
        Err(OptimizeRequestError::InvalidBudget { budget })
    }
}
