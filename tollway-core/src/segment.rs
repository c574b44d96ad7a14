//! Flatten route geometry into named road segments.

use crate::RouteCandidate;

/// A stretch of named road with its length.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadSegment {
    /// Road name as reported by the provider, empty when unnamed.
    pub name: String,
    /// Segment length in metres.
    pub distance_meters: f64,
}

/// Flatten every step of every leg into an ordered list of segments.
///
/// Returns an empty list when the route carries no geometry, no legs, or
/// only legs without steps; callers treat that as "segment pricing
/// impossible". A missing step name becomes the empty string and a missing
/// distance becomes zero.
///
/// # Examples
/// ```
/// use tollway_core::{RouteCandidate, RouteGeometry, RouteLeg, RouteStep, extract_segments};
///
/// let route = RouteCandidate::new("r", 600, 5_000).with_geometry(RouteGeometry::new(vec![
///     RouteLeg::new(vec![RouteStep::new("SH 130 Toll", 4_000.0), RouteStep::default()]),
/// ]));
/// let segments = extract_segments(&route);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1].name, "");
/// assert_eq!(segments[1].distance_meters, 0.0);
/// ```
#[must_use]
pub fn extract_segments(route: &RouteCandidate) -> Vec<RoadSegment> {
    let Some(geometry) = route.geometry.as_ref() else {
        return Vec::new();
    };
    geometry
        .legs
        .iter()
        .flat_map(|leg| leg.steps.iter())
        .map(|step| RoadSegment {
            name: step.name.clone().unwrap_or_default(),
            distance_meters: step.distance.unwrap_or(0.0),
        })
        .collect()
}
