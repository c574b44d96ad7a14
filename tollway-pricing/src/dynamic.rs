//! Rate multipliers for dynamic facilities and untagged vehicles.

use tollway_core::{FacilityPricing, PricingPeriod, TollFacility};

use crate::EstimatorConfig;

/// Multiplier applied between 11:00 and 14:00.
pub const MIDDAY_MULTIPLIER: f64 = 1.3;
/// Multiplier applied between 21:00 and 06:00.
pub const OFF_PEAK_MULTIPLIER: f64 = 0.6;
/// Extra multiplier applied on congested routes.
pub const CONGESTION_MULTIPLIER: f64 = 1.4;
/// Free-flow highway speed assumed when judging congestion.
pub const HIGHWAY_SPEED_MPH: f64 = 65.0;
/// Fraction of [`HIGHWAY_SPEED_MPH`] below which a route counts as congested.
pub const CONGESTED_SPEED_FRACTION: f64 = 0.7;
/// Rate multiplier for vehicles without a toll tag.
pub const NO_TAG_SURCHARGE: f64 = 1.5;

/// Multiplier for a pricing period, given the facility's peak multiplier.
#[must_use]
pub const fn period_multiplier(period: PricingPeriod, peak_multiplier: f64) -> f64 {
    if period.is_peak() {
        return peak_multiplier;
    }
    match period {
        PricingPeriod::Midday => MIDDAY_MULTIPLIER,
        PricingPeriod::OffPeak => OFF_PEAK_MULTIPLIER,
        PricingPeriod::MorningPeak | PricingPeriod::EveningPeak | PricingPeriod::Standard => 1.0,
    }
}

/// Whether an average speed indicates congestion.
///
/// An unknown speed is never congested.
#[must_use]
pub fn is_congested(average_speed_mph: Option<f64>) -> bool {
    average_speed_mph.is_some_and(|speed| speed < HIGHWAY_SPEED_MPH * CONGESTED_SPEED_FRACTION)
}

/// Combined time-of-day and congestion multiplier for a dynamic facility.
///
/// Congestion raises the period multiplier by [`CONGESTION_MULTIPLIER`] but
/// never above `peak_multiplier`.
///
/// # Examples
/// ```
/// use tollway_core::PricingPeriod;
/// use tollway_pricing::dynamic_multiplier;
///
/// let midday = dynamic_multiplier(PricingPeriod::Midday, 2.0, true, Some(20.0));
/// assert!((midday - 1.82).abs() < 1e-9);
/// let capped = dynamic_multiplier(PricingPeriod::MorningPeak, 2.0, true, Some(20.0));
/// assert!((capped - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn dynamic_multiplier(
    period: PricingPeriod,
    peak_multiplier: f64,
    congestion_sensitive: bool,
    average_speed_mph: Option<f64>,
) -> f64 {
    let base = period_multiplier(period, peak_multiplier);
    if congestion_sensitive && is_congested(average_speed_mph) {
        (base * CONGESTION_MULTIPLIER).min(peak_multiplier)
    } else {
        base
    }
}

/// Per-mile rate a vehicle pays on `facility` under `config`.
#[must_use]
pub fn effective_rate(
    facility: &TollFacility,
    period: PricingPeriod,
    average_speed_mph: Option<f64>,
    config: EstimatorConfig,
) -> f64 {
    let mut rate = facility.rate_per_mile();
    if config.dynamic_pricing {
        if let FacilityPricing::Dynamic {
            peak_multiplier,
            congestion_sensitive,
        } = facility.pricing()
        {
            rate *= dynamic_multiplier(
                period,
                peak_multiplier,
                congestion_sensitive,
                average_speed_mph,
            );
        }
    }
    if !config.has_toll_tag {
        rate *= NO_TAG_SURCHARGE;
    }
    rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tollway_core::Region;

    const CONGESTED: Option<f64> = Some(30.0);
    const FREE_FLOWING: Option<f64> = Some(60.0);

    #[fixture]
    fn express_lane() -> TollFacility {
        TollFacility::new("express", "Express lane", Region::Austin, 0.5, &["express"])
            .and_then(|facility| facility.with_dynamic_pricing(2.0, true))
            .expect("valid facility")
    }

    #[rstest]
    #[case(PricingPeriod::MorningPeak, 2.0)]
    #[case(PricingPeriod::EveningPeak, 2.0)]
    #[case(PricingPeriod::Midday, 1.3)]
    #[case(PricingPeriod::OffPeak, 0.6)]
    #[case(PricingPeriod::Standard, 1.0)]
    fn period_multipliers(#[case] period: PricingPeriod, #[case] expected: f64) {
        assert!((period_multiplier(period, 2.0) - expected).abs() < 1e-12);
    }

    #[rstest]
    #[case(PricingPeriod::MorningPeak, 2.0)]
    #[case(PricingPeriod::Midday, 1.82)]
    #[case(PricingPeriod::OffPeak, 0.84)]
    #[case(PricingPeriod::Standard, 1.4)]
    fn congestion_is_capped_at_peak(#[case] period: PricingPeriod, #[case] expected: f64) {
        let multiplier = dynamic_multiplier(period, 2.0, true, CONGESTED);
        assert!((multiplier - expected).abs() < 1e-9, "got {multiplier}");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(45.5))]
    #[case(FREE_FLOWING)]
    fn no_congestion_at_or_above_threshold(#[case] speed: Option<f64>) {
        assert!(!is_congested(speed));
        let multiplier = dynamic_multiplier(PricingPeriod::Standard, 2.0, true, speed);
        assert!((multiplier - 1.0).abs() < 1e-12);
    }

    #[rstest]
    fn insensitive_facility_ignores_congestion() {
        let multiplier = dynamic_multiplier(PricingPeriod::Midday, 2.0, false, CONGESTED);
        assert!((multiplier - 1.3).abs() < 1e-12);
    }

    #[rstest]
    fn disabled_dynamic_pricing_uses_base_rate(express_lane: TollFacility) {
        let config = EstimatorConfig::default().with_dynamic_pricing(false);
        let rate = effective_rate(&express_lane, PricingPeriod::MorningPeak, CONGESTED, config);
        assert!((rate - 0.5).abs() < 1e-12);
    }

    #[rstest]
    fn surcharge_stacks_with_dynamic_multiplier(express_lane: TollFacility) {
        let config = EstimatorConfig::default().with_toll_tag(false);
        let rate = effective_rate(&express_lane, PricingPeriod::MorningPeak, FREE_FLOWING, config);
        assert!((rate - 1.5).abs() < 1e-12);
    }

    #[rstest]
    fn fixed_facility_only_pays_surcharge() {
        let facility = TollFacility::new("fixed", "Fixed", Region::Houston, 0.4, &["fixed"])
            .expect("valid facility");
        let tagged = effective_rate(
            &facility,
            PricingPeriod::MorningPeak,
            CONGESTED,
            EstimatorConfig::default(),
        );
        let untagged = effective_rate(
            &facility,
            PricingPeriod::MorningPeak,
            CONGESTED,
            EstimatorConfig::default().with_toll_tag(false),
        );
        assert!((tagged - 0.4).abs() < 1e-12);
        assert!((untagged - 0.6).abs() < 1e-12);
    }
}
