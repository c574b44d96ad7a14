//! Unit conversions shared by pricing and optimisation.

/// Metres in one statute mile.
pub const METERS_PER_MILE: f64 = 1609.34;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Convert metres to miles.
///
/// # Examples
/// ```
/// use tollway_core::units::meters_to_miles;
///
/// assert!((meters_to_miles(1609.34) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// Average speed in miles per hour.
///
/// Returns `None` when `eta_seconds` is zero: the speed is unknown and any
/// speed-dependent branch must be skipped.
#[must_use]
pub fn average_speed_mph(distance_meters: u64, eta_seconds: u64) -> Option<f64> {
    if eta_seconds == 0 {
        return None;
    }
    let miles = meters_to_miles(distance_meters as f64);
    Some(miles / eta_seconds as f64 * SECONDS_PER_HOUR)
}

/// Round a dollar amount to whole cents.
#[must_use]
pub fn round_to_cents(usd: f64) -> f64 {
    (usd * 100.0).round() / 100.0
}

/// Round to one decimal place.
#[must_use]
pub fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zero_eta_has_unknown_speed() {
        assert_eq!(average_speed_mph(20_000, 0), None);
    }

    #[rstest]
    fn speed_uses_statute_miles() {
        let speed = average_speed_mph(20_000, 1_500).expect("non-zero eta");
        assert!((speed - 29.826).abs() < 0.001);
    }

    #[rstest]
    #[case(1.234, 1.23)]
    #[case(1.235_000_1, 1.24)]
    #[case(0.0, 0.0)]
    fn rounds_to_cents(#[case] raw: f64, #[case] expected: f64) {
        assert!((round_to_cents(raw) - expected).abs() < 1e-9);
    }
}
