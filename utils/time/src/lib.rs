//! A [`DateAdapter`] backed by the [`time`] crate.
//!
//! [`TimeAdapter`] works with [`PrimitiveDateTime`] values and understands
//! moment-style format strings (see [`format`]). Its clock is either the
//! system clock in UTC or a fixed instant, which keeps validation that
//! depends on "today" reproducible.
//!
//! ```
//! use waterpick_core::DateAdapter;
//! use waterpick_time::TimeAdapter;
//!
//! let adapter = TimeAdapter::default();
//! let date = adapter.parse("01/05/2021", "MM/DD/YYYY").unwrap();
//! assert_eq!(adapter.format(&date, "YYYY-MM-DD"), "2021-01-05");
//! ```

pub mod format;

pub use time;

use time::{OffsetDateTime, PrimitiveDateTime};
use waterpick_core::{DateAdapter, DateFormats};

/// Formats tried, in order, when reading ISO 8601 style text.
const ISO_FORMATS: [&str; 5] = [
    "YYYY-MM-DD[T]HH:mm:ss",
    "YYYY-MM-DD[T]HH:mm",
    "YYYY-MM-DD HH:mm:ss",
    "YYYY-MM-DD HH:mm",
    "YYYY-MM-DD",
];

/// Where [`TimeAdapter::now`](DateAdapter::now) reads the current instant from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// The system clock, in UTC.
    #[default]
    SystemUtc,
    /// Always the given instant.
    Fixed(PrimitiveDateTime),
}

/// Date adapter over [`PrimitiveDateTime`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAdapter {
    formats: DateFormats,
    clock: Clock,
    twelve_hour_cycle: bool,
}

impl Default for TimeAdapter {
    fn default() -> Self {
        Self {
            formats: DateFormats::default(),
            clock: Clock::default(),
            twelve_hour_cycle: true,
        }
    }
}

impl TimeAdapter {
    /// Creates an adapter with default formats and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter whose clock always reads `now`.
    #[must_use]
    pub fn with_fixed_now(now: PrimitiveDateTime) -> Self {
        Self::default().clock(Clock::Fixed(now))
    }

    /// Replaces the clock.
    #[must_use]
    pub const fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the named formats.
    #[must_use]
    pub fn with_formats(mut self, formats: DateFormats) -> Self {
        self.formats = formats;
        self
    }

    /// Makes pickers default to a 24 hour clock.
    #[must_use]
    pub const fn twenty_four_hour_cycle(mut self) -> Self {
        self.twelve_hour_cycle = false;
        self
    }
}

impl DateAdapter for TimeAdapter {
    type Date = PrimitiveDateTime;

    fn formats(&self) -> &DateFormats {
        &self.formats
    }

    fn now(&self) -> Self::Date {
        match self.clock {
            Clock::SystemUtc => {
                let now = OffsetDateTime::now_utc();
                PrimitiveDateTime::new(now.date(), now.time())
            }
            Clock::Fixed(now) => now,
        }
    }

    fn date_from_str(&self, value: &str) -> Option<Self::Date> {
        let base = self.now();
        ISO_FORMATS
            .iter()
            .find_map(|iso| format::parse(value, iso, base))
    }

    fn parse(&self, value: &str, format: &str) -> Option<Self::Date> {
        format::parse(value, format, self.now())
    }

    fn format(&self, date: &Self::Date, format: &str) -> String {
        format::format(date, format)
    }

    fn is_before(&self, a: &Self::Date, b: &Self::Date) -> bool {
        a < b
    }

    fn is_before_day(&self, a: &Self::Date, b: &Self::Date) -> bool {
        a.date() < b.date()
    }

    fn hours(&self, date: &Self::Date) -> u8 {
        date.hour()
    }

    fn minutes(&self, date: &Self::Date) -> u8 {
        date.minute()
    }

    fn seconds(&self, date: &Self::Date) -> u8 {
        date.second()
    }

    fn is_12_hour_cycle_in_current_locale(&self) -> bool {
        self.twelve_hour_cycle
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, Month, PrimitiveDateTime, Time};
    use waterpick_core::DateAdapter;

    use super::TimeAdapter;

    fn at(year: i32, month: Month, day: u8, hour: u8, minute: u8) -> PrimitiveDateTime {
        PrimitiveDateTime::new(
            Date::from_calendar_date(year, month, day).unwrap(),
            Time::from_hms(hour, minute, 0).unwrap(),
        )
    }

    #[test]
    fn reads_iso_text() {
        let adapter = TimeAdapter::default();
        assert_eq!(
            adapter.date_from_str("2021-01-05"),
            Some(at(2021, Month::January, 5, 0, 0))
        );
        assert_eq!(
            adapter.date_from_str("2021-01-05T14:30"),
            Some(at(2021, Month::January, 5, 14, 30))
        );
        assert_eq!(adapter.date_from_str("tomorrow"), None);
    }

    #[test]
    fn fixed_clock_is_stable() {
        let now = at(2020, Month::February, 29, 9, 15);
        let adapter = TimeAdapter::with_fixed_now(now);
        assert_eq!(adapter.now(), now);
        assert_eq!(adapter.now(), adapter.now());
    }

    #[test]
    fn compares_days_and_times() {
        let adapter = TimeAdapter::default();
        let morning = at(2021, Month::May, 3, 8, 0);
        let evening = at(2021, Month::May, 3, 20, 0);
        let next_day = at(2021, Month::May, 4, 1, 0);

        assert!(adapter.is_before(&morning, &evening));
        assert!(adapter.is_same_day(&morning, &evening));
        assert!(adapter.is_before_day(&evening, &next_day));
        assert!(adapter.is_after_day(&next_day, &morning));
        assert!(adapter.seconds_of_day(&next_day) < adapter.seconds_of_day(&morning));
    }

    #[test]
    fn hour_cycle_is_configurable() {
        assert!(TimeAdapter::default().is_12_hour_cycle_in_current_locale());
        assert!(!TimeAdapter::new()
            .twenty_four_hour_cycle()
            .is_12_hour_cycle_in_current_locale());
    }
}
