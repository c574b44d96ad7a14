//! Candidate routes returned by a directions provider.
//!
//! A [`RouteCandidate`] carries the provider's headline figures (ETA and
//! distance) plus optional step-level geometry. The geometry mirrors the
//! provider's `legs[].steps[]` layout so a raw response can be decoded
//! without an intermediate type.

/// A single candidate path between origin and destination.
///
/// The toll estimate starts unset and is written at most once, by
/// [`RouteCandidate::price_once`]. An estimate supplied by the caller is
/// treated as authoritative and never overwritten.
///
/// # Examples
/// ```
/// use tollway_core::RouteCandidate;
///
/// let mut route = RouteCandidate::new("route_1", 1800, 25_000);
/// assert!(route.price_once(4.25));
/// assert!(!route.price_once(9.99));
/// assert_eq!(route.toll_estimate_usd, Some(4.25));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteCandidate {
    /// Identifier, unique within one optimisation call.
    pub route_id: String,
    /// Travel-time estimate in seconds.
    pub eta_seconds: u64,
    /// Path length in metres.
    pub distance_meters: u64,
    /// Estimated toll in US dollars, `None` until priced.
    #[cfg_attr(feature = "serde", serde(default))]
    pub toll_estimate_usd: Option<f64>,
    /// Encoded polyline passed through untouched.
    #[cfg_attr(feature = "serde", serde(default))]
    pub polyline: String,
    /// Step-level path detail, when the provider supplied it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub geometry: Option<RouteGeometry>,
}

impl RouteCandidate {
    /// Construct an unpriced candidate without geometry.
    pub fn new(route_id: impl Into<String>, eta_seconds: u64, distance_meters: u64) -> Self {
        Self {
            route_id: route_id.into(),
            eta_seconds,
            distance_meters,
            toll_estimate_usd: None,
            polyline: String::new(),
            geometry: None,
        }
    }

    /// Attach step-level geometry, consuming `self`.
    #[must_use]
    pub fn with_geometry(mut self, geometry: RouteGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Attach a caller-supplied toll estimate, consuming `self`.
    #[must_use]
    pub fn with_toll(mut self, toll_usd: f64) -> Self {
        self.toll_estimate_usd = Some(toll_usd);
        self
    }

    /// Record a toll estimate unless one is already present.
    ///
    /// Returns `true` when the estimate was written.
    pub fn price_once(&mut self, toll_usd: f64) -> bool {
        if self.toll_estimate_usd.is_some() {
            return false;
        }
        self.toll_estimate_usd = Some(toll_usd);
        true
    }

    /// Whether the route has been priced.
    #[must_use]
    pub const fn is_priced(&self) -> bool {
        self.toll_estimate_usd.is_some()
    }

    /// Toll estimate with unpriced routes treated as free.
    #[must_use]
    pub fn toll_or_zero(&self) -> f64 {
        self.toll_estimate_usd.unwrap_or(0.0)
    }

    /// Whether the route was priced at exactly zero.
    #[must_use]
    pub fn is_toll_free(&self) -> bool {
        self.toll_estimate_usd == Some(0.0)
    }
}

/// Provider geometry split into legs.
///
/// Unknown provider fields (coordinates, geometry type) are ignored when
/// decoding.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteGeometry {
    /// Ordered legs between waypoints.
    #[cfg_attr(feature = "serde", serde(default))]
    pub legs: Vec<RouteLeg>,
}

impl RouteGeometry {
    /// Build geometry from legs.
    #[must_use]
    pub const fn new(legs: Vec<RouteLeg>) -> Self {
        Self { legs }
    }
}

/// One leg of a route, made of manoeuvre steps.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    /// Ordered steps along the leg.
    #[cfg_attr(feature = "serde", serde(default))]
    pub steps: Vec<RouteStep>,
}

impl RouteLeg {
    /// Build a leg from steps.
    #[must_use]
    pub const fn new(steps: Vec<RouteStep>) -> Self {
        Self { steps }
    }
}

/// A single manoeuvre step.
///
/// Providers omit the road name on unnamed ways, so both fields are
/// optional.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStep {
    /// Road name as reported by the provider.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Step length in metres.
    #[cfg_attr(feature = "serde", serde(default))]
    pub distance: Option<f64>,
}

impl RouteStep {
    /// Build a named step of the given length.
    pub fn new(name: impl Into<String>, distance: f64) -> Self {
        Self {
            name: Some(name.into()),
            distance: Some(distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn price_once_keeps_existing_estimate() {
        let mut route = RouteCandidate::new("a", 60, 1_000).with_toll(2.5);
        assert!(!route.price_once(7.0));
        assert_eq!(route.toll_estimate_usd, Some(2.5));
    }

    #[rstest]
    #[case(Some(0.0), true)]
    #[case(Some(0.01), false)]
    #[case(None, false)]
    fn toll_free_requires_exact_zero(#[case] toll: Option<f64>, #[case] expected: bool) {
        let mut route = RouteCandidate::new("a", 60, 1_000);
        route.toll_estimate_usd = toll;
        assert_eq!(route.is_toll_free(), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decodes_provider_route_shape() {
        let json = r#"{
            "route_id": "mapbox_route_0",
            "eta_seconds": 1500,
            "distance_meters": 20000,
            "polyline": "",
            "geometry": {
                "type": "LineString",
                "coordinates": [[-97.7, 30.2], [-97.6, 30.3]],
                "legs": [
                    {"summary": "I 35", "steps": [
                        {"name": "183 Toll", "distance": 1609.34},
                        {"distance": 12.0}
                    ]},
                    {}
                ]
            }
        }"#;

        let route: RouteCandidate = serde_json::from_str(json).expect("route should decode");

        assert_eq!(route.toll_estimate_usd, None);
        let geometry = route.geometry.expect("geometry present");
        assert_eq!(geometry.legs.len(), 2);
        assert_eq!(geometry.legs[0].steps[0].name.as_deref(), Some("183 Toll"));
        assert_eq!(geometry.legs[0].steps[1].name, None);
        assert!(geometry.legs[1].steps.is_empty());
    }
}
