//! The date adapter contract.
//!
//! Pickers never do date arithmetic themselves. Everything that depends on a
//! concrete date library (parsing text, formatting, comparing, reading the
//! clock) goes through a [`DateAdapter`]. The adapter used by a picker is
//! resolved once per render cycle: an adapter passed in props wins, then the
//! one installed in the [`Environment`], then the adapter's `Default`.

use alloc::string::String;
use core::fmt::Debug;

use crate::Environment;

/// Date arithmetic, parsing and formatting for one date type.
///
/// Format strings use moment-style tokens (`YYYY`, `MM`, `DD`, `HH`, `hh`,
/// `mm`, `ss`, `A`, ...). Implementations must be deterministic for a given
/// adapter value: two calls with the same arguments return the same result.
pub trait DateAdapter: Debug + Clone + Default + PartialEq + 'static {
    /// The date type this adapter works with.
    type Date: Debug + Clone + PartialEq + 'static;

    /// Format strings used to pick default input formats.
    fn formats(&self) -> &DateFormats;

    /// The current instant, as seen by this adapter.
    fn now(&self) -> Self::Date;

    /// Parses an ISO 8601 style value such as `2021-01-05` or
    /// `2021-01-05T14:30`.
    fn date_from_str(&self, value: &str) -> Option<Self::Date>;

    /// Parses `value` with an explicit `format`.
    fn parse(&self, value: &str, format: &str) -> Option<Self::Date>;

    /// Renders `date` with `format`.
    fn format(&self, date: &Self::Date, format: &str) -> String;

    /// Returns `true` when both values denote the same instant.
    fn is_equal(&self, a: &Self::Date, b: &Self::Date) -> bool {
        a == b
    }

    /// Returns `true` when `a` is strictly before `b`.
    fn is_before(&self, a: &Self::Date, b: &Self::Date) -> bool;

    /// Returns `true` when `a` is strictly after `b`.
    fn is_after(&self, a: &Self::Date, b: &Self::Date) -> bool {
        self.is_before(b, a)
    }

    /// Returns `true` when `a` falls on an earlier calendar day than `b`.
    fn is_before_day(&self, a: &Self::Date, b: &Self::Date) -> bool;

    /// Returns `true` when `a` falls on a later calendar day than `b`.
    fn is_after_day(&self, a: &Self::Date, b: &Self::Date) -> bool {
        self.is_before_day(b, a)
    }

    /// Returns `true` when both values fall on the same calendar day.
    fn is_same_day(&self, a: &Self::Date, b: &Self::Date) -> bool {
        !self.is_before_day(a, b) && !self.is_after_day(a, b)
    }

    /// Hour of the day, `0..=23`.
    fn hours(&self, date: &Self::Date) -> u8;

    /// Minute of the hour.
    fn minutes(&self, date: &Self::Date) -> u8;

    /// Second of the minute.
    fn seconds(&self, date: &Self::Date) -> u8;

    /// Seconds elapsed since midnight, ignoring the date part.
    fn seconds_of_day(&self, date: &Self::Date) -> u32 {
        u32::from(self.hours(date)) * 3600
            + u32::from(self.minutes(date)) * 60
            + u32::from(self.seconds(date))
    }

    /// Whether the current locale prefers a 12 hour clock.
    fn is_12_hour_cycle_in_current_locale(&self) -> bool {
        true
    }
}

/// Resolves the adapter for one render cycle.
///
/// `explicit` comes from props; otherwise the adapter installed in `env` is
/// cloned; otherwise `A::default()` is used.
#[must_use]
pub fn resolve_adapter<A: DateAdapter>(explicit: Option<A>, env: &Environment) -> A {
    explicit
        .or_else(|| env.get::<A>().cloned())
        .unwrap_or_default()
}

/// Named format strings an adapter offers to pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateFormats {
    /// Editable date, e.g. `MM/DD/YYYY`.
    pub keyboard_date: String,
    /// Editable date and 12 hour time.
    pub keyboard_date_time_12h: String,
    /// Editable date and 24 hour time.
    pub keyboard_date_time_24h: String,
    /// 12 hour time.
    pub full_time_12h: String,
    /// 24 hour time.
    pub full_time_24h: String,
    /// Year only.
    pub year: String,
    /// Month and year, used when the day view is hidden.
    pub month_and_year: String,
    /// Date shown in toolbars.
    pub toolbar_date: String,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            keyboard_date: "MM/DD/YYYY".into(),
            keyboard_date_time_12h: "MM/DD/YYYY hh:mm A".into(),
            keyboard_date_time_24h: "MM/DD/YYYY HH:mm".into(),
            full_time_12h: "hh:mm A".into(),
            full_time_24h: "HH:mm".into(),
            year: "YYYY".into(),
            month_and_year: "MM/YYYY".into(),
            toolbar_date: "MMM D, YYYY".into(),
        }
    }
}
