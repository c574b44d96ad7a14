//! Time-of-day source and the pricing periods derived from it.
//!
//! Dynamic pricing depends on the current local time. Estimators read it
//! through the [`Clock`] trait so tests and batch runs can pin a departure
//! time with [`FixedClock`].

use chrono::{NaiveTime, Timelike};

/// Source of the local time of day.
pub trait Clock: Send + Sync {
    /// Current local time of day.
    fn time_of_day(&self) -> NaiveTime;
}

/// Wall clock in the process's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_of_day(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// Clock frozen at a chosen time of day.
///
/// # Examples
/// ```
/// use tollway_core::{Clock, FixedClock, PricingPeriod};
///
/// let clock = FixedClock::at(8, 15).expect("valid time");
/// assert_eq!(PricingPeriod::at(clock.time_of_day()), PricingPeriod::MorningPeak);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveTime);

impl FixedClock {
    /// Freeze the clock at `time`.
    #[must_use]
    pub const fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Freeze the clock at `hour:minute`, or `None` when out of range.
    #[must_use]
    pub fn at(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }
}

impl Clock for FixedClock {
    fn time_of_day(&self) -> NaiveTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn time_of_day(&self) -> NaiveTime {
        (**self).time_of_day()
    }
}

const fn hms(hour: u32, minute: u32) -> u32 {
    hour * 3600 + minute * 60
}

const MORNING_PEAK: (u32, u32) = (hms(7, 0), hms(9, 30));
const EVENING_PEAK: (u32, u32) = (hms(16, 30), hms(19, 0));
const MIDDAY: (u32, u32) = (hms(11, 0), hms(14, 0));
const OFF_PEAK_START: u32 = hms(21, 0);
const OFF_PEAK_END: u32 = hms(6, 0);

/// Tariff band for a time of day.
///
/// Bands are inclusive at both ends and resolved to the second. They are
/// tested in declaration order, so the first band containing a time wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PricingPeriod {
    /// 07:00 to 09:30.
    MorningPeak,
    /// 16:30 to 19:00.
    EveningPeak,
    /// 11:00 to 14:00.
    Midday,
    /// 21:00 to 06:00, wrapping midnight.
    OffPeak,
    /// Any other time.
    Standard,
}

impl PricingPeriod {
    /// Classify a time of day.
    #[must_use]
    pub fn at(time: NaiveTime) -> Self {
        let seconds = time.num_seconds_from_midnight();
        let within = |(start, end): (u32, u32)| (start..=end).contains(&seconds);
        if within(MORNING_PEAK) {
            Self::MorningPeak
        } else if within(EVENING_PEAK) {
            Self::EveningPeak
        } else if within(MIDDAY) {
            Self::Midday
        } else if seconds >= OFF_PEAK_START || seconds <= OFF_PEAK_END {
            Self::OffPeak
        } else {
            Self::Standard
        }
    }

    /// Whether the band is a rush-hour peak.
    #[must_use]
    pub const fn is_peak(self) -> bool {
        matches!(self, Self::MorningPeak | Self::EveningPeak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn time(hour: u32, minute: u32, second: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, second).expect("valid time")
    }

    #[rstest]
    #[case(time(7, 0, 0), PricingPeriod::MorningPeak)]
    #[case(time(9, 30, 0), PricingPeriod::MorningPeak)]
    #[case(time(9, 30, 1), PricingPeriod::Standard)]
    #[case(time(11, 0, 0), PricingPeriod::Midday)]
    #[case(time(14, 0, 0), PricingPeriod::Midday)]
    #[case(time(15, 0, 0), PricingPeriod::Standard)]
    #[case(time(16, 30, 0), PricingPeriod::EveningPeak)]
    #[case(time(19, 0, 0), PricingPeriod::EveningPeak)]
    #[case(time(20, 59, 59), PricingPeriod::Standard)]
    #[case(time(21, 0, 0), PricingPeriod::OffPeak)]
    #[case(time(0, 0, 0), PricingPeriod::OffPeak)]
    #[case(time(6, 0, 0), PricingPeriod::OffPeak)]
    #[case(time(6, 0, 1), PricingPeriod::Standard)]
    fn classifies_band_boundaries(#[case] at: NaiveTime, #[case] expected: PricingPeriod) {
        assert_eq!(PricingPeriod::at(at), expected);
    }

    #[rstest]
    #[case(PricingPeriod::MorningPeak, true)]
    #[case(PricingPeriod::EveningPeak, true)]
    #[case(PricingPeriod::Midday, false)]
    #[case(PricingPeriod::OffPeak, false)]
    #[case(PricingPeriod::Standard, false)]
    fn only_rush_hours_are_peak(#[case] period: PricingPeriod, #[case] peak: bool) {
        assert_eq!(period.is_peak(), peak);
    }

    #[rstest]
    fn fixed_clock_rejects_out_of_range() {
        assert!(FixedClock::at(24, 0).is_none());
        assert!(FixedClock::at(23, 60).is_none());
    }
}
