//! Builders and fixtures shared by unit and behaviour tests.

use crate::{RouteCandidate, RouteGeometry, RouteLeg, RouteStep};

/// Fluent builder for [`RouteCandidate`] values with step geometry.
///
/// # Examples
/// ```
/// use tollway_core::test_support::RouteBuilder;
///
/// let route = RouteBuilder::new("r1", 1_500, 20_000)
///     .step("US 183 Toll", 20_000.0)
///     .build();
/// assert_eq!(route.geometry.map(|g| g.legs.len()), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct RouteBuilder {
    route: RouteCandidate,
    legs: Vec<RouteLeg>,
}

impl RouteBuilder {
    /// Start a route without geometry.
    pub fn new(route_id: &str, eta_seconds: u64, distance_meters: u64) -> Self {
        Self {
            route: RouteCandidate::new(route_id, eta_seconds, distance_meters),
            legs: Vec::new(),
        }
    }

    /// Append a named step to the current leg, opening one if needed.
    #[must_use]
    pub fn step(mut self, name: &str, distance_meters: f64) -> Self {
        let step = RouteStep::new(name, distance_meters);
        match self.legs.last_mut() {
            Some(leg) => leg.steps.push(step),
            None => self.legs.push(RouteLeg::new(vec![step])),
        }
        self
    }

    /// Append a step with neither name nor distance.
    #[must_use]
    pub fn blank_step(mut self) -> Self {
        let step = RouteStep {
            name: None,
            distance: None,
        };
        match self.legs.last_mut() {
            Some(leg) => leg.steps.push(step),
            None => self.legs.push(RouteLeg::new(vec![step])),
        }
        self
    }

    /// Start a new, empty leg.
    #[must_use]
    pub fn leg(mut self) -> Self {
        self.legs.push(RouteLeg::new(Vec::new()));
        self
    }

    /// Preset the toll estimate.
    #[must_use]
    pub fn toll(mut self, toll_usd: f64) -> Self {
        self.route.toll_estimate_usd = Some(toll_usd);
        self
    }

    /// Finish the route. Geometry is attached only if a leg was added.
    pub fn build(self) -> RouteCandidate {
        let Self { route, legs } = self;
        if legs.is_empty() {
            route
        } else {
            route.with_geometry(RouteGeometry::new(legs))
        }
    }
}

/// Four priced routes spanning the budget boundaries used across tests.
///
/// | id | toll  | eta (s) |
/// |----|-------|---------|
/// | A  | 9.80  | 1800    |
/// | B  | 5.00  | 2100    |
/// | C  | 0.00  | 2400    |
/// | D  | 12.00 | 2700    |
pub fn sample_routes() -> Vec<RouteCandidate> {
    vec![
        RouteCandidate::new("A", 1_800, 30_000).with_toll(9.8),
        RouteCandidate::new("B", 2_100, 32_000).with_toll(5.0),
        RouteCandidate::new("C", 2_400, 35_000).with_toll(0.0),
        RouteCandidate::new("D", 2_700, 40_000).with_toll(12.0),
    ]
}
