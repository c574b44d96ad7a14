//! Distance-based estimate for routes without step detail.

use tollway_core::units::{average_speed_mph, meters_to_miles};

use crate::NO_TAG_SURCHARGE;

/// Flat per-mile rate assumed for unidentified toll miles.
pub const FALLBACK_RATE_PER_MILE: f64 = 0.55;
/// Average speed above which a route is assumed to use highways.
pub const HIGHWAY_SPEED_THRESHOLD_MPH: f64 = 55.0;
/// Share of miles assumed tolled on a highway route.
pub const HIGHWAY_TOLL_SHARE: f64 = 0.4;
/// Share of miles assumed tolled on any other route.
pub const LOCAL_TOLL_SHARE: f64 = 0.3;

/// Unrounded toll for a route known only by its length and travel time.
///
/// A zero `eta_seconds` leaves the speed unknown and the route is treated
/// as local. Dynamic pricing never applies.
///
/// # Examples
/// ```
/// use tollway_pricing::fallback_toll;
///
/// let toll = fallback_toll(20_000, 1_500, false);
/// let expected = 20_000.0 / 1609.34 * 0.3 * 0.55 * 1.5;
/// assert!((toll - expected).abs() < 1e-9);
/// ```
#[must_use]
pub fn fallback_toll(distance_meters: u64, eta_seconds: u64, has_toll_tag: bool) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "route lengths are far below 2^52 metres"
    )]
    let miles = meters_to_miles(distance_meters as f64);
    let share = match average_speed_mph(distance_meters, eta_seconds) {
        Some(speed) if speed > HIGHWAY_SPEED_THRESHOLD_MPH => HIGHWAY_TOLL_SHARE,
        _ => LOCAL_TOLL_SHARE,
    };
    let toll = miles * share * FALLBACK_RATE_PER_MILE;
    if has_toll_tag {
        toll
    } else {
        toll * NO_TAG_SURCHARGE
    }
}
