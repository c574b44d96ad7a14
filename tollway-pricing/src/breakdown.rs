//! Itemised toll estimates.

/// How a route's toll was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PricingMethod {
    /// Summed from named road segments.
    Segments,
    /// Estimated from distance and speed alone.
    Fallback,
}

/// Charge for one segment on a recognised facility.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacilityCharge {
    /// Identifier of the matched facility.
    pub facility_id: String,
    /// Human-readable name of the matched facility.
    pub facility: String,
    /// Road name as reported by the provider.
    pub road_name: String,
    /// Segment length in miles.
    pub miles: f64,
    /// Per-mile rate after multipliers and surcharge.
    pub rate_per_mile: f64,
    /// Unrounded cost of the segment.
    pub cost_usd: f64,
}

/// Itemised estimate for a single route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TollBreakdown {
    /// Derivation used.
    pub method: PricingMethod,
    /// Charged segments in route order; empty for fallback estimates.
    pub charges: Vec<FacilityCharge>,
    /// Unrounded sum of the charges, or the fallback estimate.
    pub total_usd: f64,
}

impl TollBreakdown {
    pub(crate) fn from_charges(charges: Vec<FacilityCharge>) -> Self {
        let total_usd = charges.iter().map(|charge| charge.cost_usd).sum();
        Self {
            method: PricingMethod::Segments,
            charges,
            total_usd,
        }
    }

    pub(crate) const fn fallback(total_usd: f64) -> Self {
        Self {
            method: PricingMethod::Fallback,
            charges: Vec::new(),
            total_usd,
        }
    }

    /// Facility identifiers charged, in route order, without repeats.
    #[must_use]
    pub fn facilities(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for charge in &self.charges {
            if !ids.contains(&charge.facility_id.as_str()) {
                ids.push(&charge.facility_id);
            }
        }
        ids
    }
}
