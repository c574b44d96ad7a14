//! Registry of toll facilities and the rules that recognise them.
//!
//! A [`PricingTable`] is built once at start-up and shared read-only
//! (typically behind an `Arc`) by every estimator. Facilities are tested in
//! declaration order and the first facility with a matching rule wins, so a
//! road name resolves to at most one facility.

mod region;
mod texas;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

pub use region::Region;

/// Errors raised while building a [`PricingTable`].
#[derive(Debug, Error)]
pub enum PricingTableError {
    /// A match pattern was not a valid regular expression.
    #[error("facility {facility} has invalid match pattern {pattern:?}")]
    InvalidPattern {
        /// Facility declaring the pattern.
        facility: String,
        /// Offending pattern source.
        pattern: String,
        /// Source error from `regex`.
        #[source]
        source: regex::Error,
    },
    /// Two facilities share an identifier.
    #[error("facility id {id} is declared more than once")]
    DuplicateFacility {
        /// Repeated identifier.
        id: String,
    },
    /// A base rate was negative or not finite.
    #[error("facility {facility} has invalid rate {rate}")]
    InvalidRate {
        /// Facility declaring the rate.
        facility: String,
        /// Rejected rate.
        rate: f64,
    },
    /// A peak multiplier was below 1.0 or not finite.
    #[error("facility {facility} has invalid peak multiplier {multiplier}")]
    InvalidPeakMultiplier {
        /// Facility declaring the multiplier.
        facility: String,
        /// Rejected multiplier.
        multiplier: f64,
    },
}

/// Case-insensitive pattern tested against a road name.
///
/// Matching is an unanchored search, so `183.*toll` matches
/// `"US 183 Toll Road"`.
#[derive(Debug, Clone)]
pub struct MatchRule {
    regex: Regex,
}

impl MatchRule {
    /// Compile a rule from a regular-expression source.
    ///
    /// # Errors
    /// Returns the `regex` error when `pattern` does not compile.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    /// Whether the rule matches anywhere in `road_name`.
    #[must_use]
    pub fn matches(&self, road_name: &str) -> bool {
        self.regex.is_match(road_name)
    }
}

/// How a facility prices its miles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FacilityPricing {
    /// The base rate applies at all times.
    Fixed,
    /// The base rate is scaled by time of day and, optionally, congestion.
    Dynamic {
        /// Highest multiplier the facility may charge.
        peak_multiplier: f64,
        /// Whether slow traffic raises the rate.
        congestion_sensitive: bool,
    },
}

/// A named toll road or express lane.
#[derive(Debug, Clone)]
pub struct TollFacility {
    id: String,
    description: String,
    region: Region,
    rules: Vec<MatchRule>,
    rate_per_mile: f64,
    pricing: FacilityPricing,
}

impl TollFacility {
    /// Build a fixed-rate facility from pattern sources.
    ///
    /// # Errors
    /// Returns [`PricingTableError::InvalidPattern`] when a pattern does not
    /// compile and [`PricingTableError::InvalidRate`] when the rate is
    /// negative or not finite.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        region: Region,
        rate_per_mile: f64,
        patterns: &[&str],
    ) -> Result<Self, PricingTableError> {
        let id = id.into();
        if !rate_per_mile.is_finite() || rate_per_mile < 0.0 {
            return Err(PricingTableError::InvalidRate {
                facility: id,
                rate: rate_per_mile,
            });
        }
        let rules = patterns
            .iter()
            .map(|pattern| {
                MatchRule::new(pattern).map_err(|source| PricingTableError::InvalidPattern {
                    facility: id.clone(),
                    pattern: (*pattern).to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id,
            description: description.into(),
            region,
            rules,
            rate_per_mile,
            pricing: FacilityPricing::Fixed,
        })
    }

    /// Switch the facility to dynamic pricing.
    ///
    /// # Errors
    /// Returns [`PricingTableError::InvalidPeakMultiplier`] when
    /// `peak_multiplier` is below 1.0 or not finite.
    pub fn with_dynamic_pricing(
        mut self,
        peak_multiplier: f64,
        congestion_sensitive: bool,
    ) -> Result<Self, PricingTableError> {
        if !peak_multiplier.is_finite() || peak_multiplier < 1.0 {
            return Err(PricingTableError::InvalidPeakMultiplier {
                facility: self.id,
                multiplier: peak_multiplier,
            });
        }
        self.pricing = FacilityPricing::Dynamic {
            peak_multiplier,
            congestion_sensitive,
        };
        Ok(self)
    }

    /// Stable identifier, e.g. `"183_toll"`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Metro area operating the facility.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Base rate in dollars per mile.
    #[must_use]
    pub const fn rate_per_mile(&self) -> f64 {
        self.rate_per_mile
    }

    /// Pricing mode.
    #[must_use]
    pub const fn pricing(&self) -> FacilityPricing {
        self.pricing
    }

    /// Whether the facility uses dynamic pricing.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self.pricing, FacilityPricing::Dynamic { .. })
    }

    /// Whether any rule matches `road_name`.
    #[must_use]
    pub fn matches(&self, road_name: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(road_name))
    }
}

/// Ordered, immutable set of toll facilities.
///
/// # Examples
/// ```
/// use tollway_core::{PricingTable, Region};
///
/// # fn main() -> Result<(), tollway_core::PricingTableError> {
/// let table = PricingTable::texas()?;
/// let facility = table.identify("MoPac Express").expect("known facility");
/// assert_eq!(facility.id(), "mopac_express");
/// assert!(table.identify("I-35 Frontage Road").is_none());
///
/// let houston = table.for_region(Region::Houston);
/// assert!(houston.identify("MoPac Express").is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PricingTable {
    facilities: Vec<TollFacility>,
}

impl PricingTable {
    /// Build a table, rejecting duplicate facility identifiers.
    ///
    /// # Errors
    /// Returns [`PricingTableError::DuplicateFacility`] when two facilities
    /// share an id.
    pub fn new(facilities: Vec<TollFacility>) -> Result<Self, PricingTableError> {
        for (index, facility) in facilities.iter().enumerate() {
            if facilities
                .iter()
                .take(index)
                .any(|earlier| earlier.id == facility.id)
            {
                return Err(PricingTableError::DuplicateFacility {
                    id: facility.id.clone(),
                });
            }
        }
        Ok(Self { facilities })
    }

    /// The built-in table covering every Texas metro area.
    ///
    /// # Errors
    /// Propagates construction errors from the built-in definitions.
    pub fn texas() -> Result<Self, PricingTableError> {
        texas::facilities().and_then(Self::new)
    }

    /// A copy of the table restricted to one region, preserving order.
    #[must_use]
    pub fn for_region(&self, region: Region) -> Self {
        Self {
            facilities: self
                .facilities
                .iter()
                .filter(|facility| facility.region == region)
                .cloned()
                .collect(),
        }
    }

    /// Resolve a road name to the first facility whose rules match.
    ///
    /// The name is lowercased before matching; an empty name never
    /// matches.
    #[must_use]
    pub fn identify(&self, road_name: &str) -> Option<&TollFacility> {
        if road_name.is_empty() {
            return None;
        }
        let normalised = road_name.to_lowercase();
        self.facilities
            .iter()
            .find(|facility| facility.matches(&normalised))
    }

    /// Look a facility up by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TollFacility> {
        self.facilities.iter().find(|facility| facility.id == id)
    }

    /// Iterate facilities in match order.
    pub fn iter(&self) -> impl Iterator<Item = &TollFacility> {
        self.facilities.iter()
    }

    /// Number of facilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    /// Whether the table has no facilities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}
