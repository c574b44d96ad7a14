//! Estimator configuration.

/// Vehicle and tariff options fixed for the lifetime of an estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Whether the vehicle carries an electronic toll tag. Vehicles without
    /// one pay the pay-by-mail surcharge.
    pub has_toll_tag: bool,
    /// Whether dynamic facilities apply time-of-day and congestion
    /// multipliers.
    pub dynamic_pricing: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            has_toll_tag: true,
            dynamic_pricing: true,
        }
    }
}

impl EstimatorConfig {
    /// Set whether the vehicle has a toll tag, consuming `self`.
    #[must_use]
    pub const fn with_toll_tag(mut self, has_toll_tag: bool) -> Self {
        self.has_toll_tag = has_toll_tag;
        self
    }

    /// Enable or disable dynamic pricing, consuming `self`.
    #[must_use]
    pub const fn with_dynamic_pricing(mut self, dynamic_pricing: bool) -> Self {
        self.dynamic_pricing = dynamic_pricing;
        self
    }
}
