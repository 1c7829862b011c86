//! Date and time rules shared by the picker variants.
//!
//! Validation never fails in the propagation sense: every rule returns an
//! optional [`ValidationError`] describing the first rule the value breaks.
//! An empty value is always valid; an unparseable one always breaks
//! [`ValidationError::InvalidDate`] before any other rule is checked.

use core::fmt;

use waterpick_core::{DateAdapter, Predicate};

use crate::picker::value::PickerValue;

/// The first rule a picker value breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ValidationError {
    /// The input could not be read as a date.
    #[error("invalid date")]
    InvalidDate,
    /// The date was rejected by `should_disable_date`.
    #[error("date is disabled")]
    ShouldDisableDate,
    /// The date is before today while past dates are disabled.
    #[error("date is in the past")]
    DisablePast,
    /// The date is after today while future dates are disabled.
    #[error("date is in the future")]
    DisableFuture,
    /// The date is before the minimum date.
    #[error("date is before the minimum date")]
    MinDate,
    /// The date is after the maximum date.
    #[error("date is after the maximum date")]
    MaxDate,
    /// The time is before the minimum time.
    #[error("time is before the minimum time")]
    MinTime,
    /// The time is after the maximum time.
    #[error("time is after the maximum time")]
    MaxTime,
    /// One clock component was rejected by `should_disable_time`.
    #[error("{0} value is disabled")]
    ShouldDisableTime(ClockUnit),
}

/// A component of the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ClockUnit {
    /// Hours, `0..24`.
    Hours,
    /// Minutes, `0..60`.
    Minutes,
    /// Seconds, `0..60`.
    Seconds,
}

impl fmt::Display for ClockUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        })
    }
}

/// Argument of a `should_disable_time` predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeComponent {
    /// Which part of the clock is tested.
    pub unit: ClockUnit,
    /// Its value in the picked date.
    pub value: u8,
}

/// Date rules, borrowed from a variant's props.
#[derive(Debug)]
pub struct DateRules<'a, D> {
    /// Earliest allowed day.
    pub min_date: Option<&'a D>,
    /// Latest allowed day.
    pub max_date: Option<&'a D>,
    /// Reject days before today.
    pub disable_past: bool,
    /// Reject days after today.
    pub disable_future: bool,
    /// Reject individual days.
    pub should_disable_date: Option<&'a Predicate<D>>,
}

/// Time rules, borrowed from a variant's props.
#[derive(Debug)]
pub struct TimeRules<'a, D> {
    /// Earliest allowed time.
    pub min_time: Option<&'a D>,
    /// Latest allowed time.
    pub max_time: Option<&'a D>,
    /// Reject individual clock values.
    pub should_disable_time: Option<&'a Predicate<TimeComponent>>,
    /// Compare full instants instead of the time of day.
    pub disable_ignoring_date_part: bool,
}

/// Checks `value` against day-level rules. "Today" is the adapter's `now`.
#[must_use]
pub fn validate_date<A: DateAdapter>(
    adapter: &A,
    value: &PickerValue<A::Date>,
    rules: &DateRules<'_, A::Date>,
) -> Option<ValidationError> {
    let date = match value {
        PickerValue::Empty => return None,
        PickerValue::Invalid(_) => return Some(ValidationError::InvalidDate),
        PickerValue::Valid(date) => date,
    };

    if rules
        .should_disable_date
        .is_some_and(|predicate| predicate.test(date))
    {
        return Some(ValidationError::ShouldDisableDate);
    }

    if rules.disable_future || rules.disable_past {
        let today = adapter.now();
        if rules.disable_future && adapter.is_after_day(date, &today) {
            return Some(ValidationError::DisableFuture);
        }
        if rules.disable_past && adapter.is_before_day(date, &today) {
            return Some(ValidationError::DisablePast);
        }
    }

    if rules
        .min_date
        .is_some_and(|min| adapter.is_before_day(date, min))
    {
        return Some(ValidationError::MinDate);
    }
    if rules
        .max_date
        .is_some_and(|max| adapter.is_after_day(date, max))
    {
        return Some(ValidationError::MaxDate);
    }

    None
}

/// Checks `value` against clock-level rules.
#[must_use]
pub fn validate_time<A: DateAdapter>(
    adapter: &A,
    value: &PickerValue<A::Date>,
    rules: &TimeRules<'_, A::Date>,
) -> Option<ValidationError> {
    let date = match value {
        PickerValue::Empty => return None,
        PickerValue::Invalid(_) => return Some(ValidationError::InvalidDate),
        PickerValue::Valid(date) => date,
    };

    let is_after = |a: &A::Date, b: &A::Date| {
        if rules.disable_ignoring_date_part {
            adapter.is_after(a, b)
        } else {
            adapter.seconds_of_day(a) > adapter.seconds_of_day(b)
        }
    };

    if rules.min_time.is_some_and(|min| is_after(min, date)) {
        return Some(ValidationError::MinTime);
    }
    if rules.max_time.is_some_and(|max| is_after(date, max)) {
        return Some(ValidationError::MaxTime);
    }

    if let Some(predicate) = rules.should_disable_time {
        let components = [
            (ClockUnit::Hours, adapter.hours(date)),
            (ClockUnit::Minutes, adapter.minutes(date)),
            (ClockUnit::Seconds, adapter.seconds(date)),
        ];
        for (unit, value) in components {
            if predicate.test(&TimeComponent { unit, value }) {
                return Some(ValidationError::ShouldDisableTime(unit));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use waterpick_core::{DateAdapter, Predicate};
    use waterpick_time::{
        TimeAdapter,
        time::{Date, Month, PrimitiveDateTime, Time},
    };

    use super::{
        ClockUnit, DateRules, TimeComponent, TimeRules, ValidationError, validate_date,
        validate_time,
    };
    use crate::picker::value::PickerValue;

    fn at(year: i32, month: Month, day: u8, hour: u8, minute: u8) -> PrimitiveDateTime {
        PrimitiveDateTime::new(
            Date::from_calendar_date(year, month, day).unwrap(),
            Time::from_hms(hour, minute, 0).unwrap(),
        )
    }

    fn open_rules<'a>() -> DateRules<'a, PrimitiveDateTime> {
        DateRules {
            min_date: None,
            max_date: None,
            disable_past: false,
            disable_future: false,
            should_disable_date: None,
        }
    }

    fn open_time_rules<'a>() -> TimeRules<'a, PrimitiveDateTime> {
        TimeRules {
            min_time: None,
            max_time: None,
            should_disable_time: None,
            disable_ignoring_date_part: false,
        }
    }

    #[test]
    fn empty_value_is_always_valid() {
        let adapter = TimeAdapter::new();
        let min = at(2030, Month::January, 1, 0, 0);
        let rules = DateRules {
            min_date: Some(&min),
            ..open_rules()
        };
        assert_eq!(validate_date(&adapter, &PickerValue::Empty, &rules), None);
        assert_eq!(
            validate_time(&adapter, &PickerValue::Empty, &open_time_rules()),
            None
        );
    }

    #[test]
    fn unparseable_value_is_invalid_date() {
        let adapter = TimeAdapter::new();
        let value = PickerValue::Invalid("31/31".into());
        assert_eq!(
            validate_date(&adapter, &value, &open_rules()),
            Some(ValidationError::InvalidDate)
        );
        assert_eq!(
            validate_time(&adapter, &value, &open_time_rules()),
            Some(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn range_is_checked_by_day() {
        let adapter = TimeAdapter::new();
        let min = at(2021, Month::January, 5, 18, 0);
        let max = at(2021, Month::January, 10, 6, 0);
        let rules = DateRules {
            min_date: Some(&min),
            max_date: Some(&max),
            ..open_rules()
        };

        let same_day_earlier = PickerValue::Valid(at(2021, Month::January, 5, 9, 0));
        assert_eq!(validate_date(&adapter, &same_day_earlier, &rules), None);

        let before = PickerValue::Valid(at(2021, Month::January, 4, 23, 59));
        assert_eq!(
            validate_date(&adapter, &before, &rules),
            Some(ValidationError::MinDate)
        );

        let after = PickerValue::Valid(at(2021, Month::January, 11, 0, 0));
        assert_eq!(
            validate_date(&adapter, &after, &rules),
            Some(ValidationError::MaxDate)
        );
    }

    #[test]
    fn past_and_future_follow_the_adapter_clock() {
        let adapter = TimeAdapter::with_fixed_now(at(2021, Month::June, 15, 12, 0));
        let past_rules = DateRules {
            disable_past: true,
            ..open_rules()
        };
        let future_rules = DateRules {
            disable_future: true,
            ..open_rules()
        };

        let yesterday = PickerValue::Valid(at(2021, Month::June, 14, 12, 0));
        let today = PickerValue::Valid(adapter.now());
        let tomorrow = PickerValue::Valid(at(2021, Month::June, 16, 0, 0));

        assert_eq!(
            validate_date(&adapter, &yesterday, &past_rules),
            Some(ValidationError::DisablePast)
        );
        assert_eq!(validate_date(&adapter, &today, &past_rules), None);
        assert_eq!(
            validate_date(&adapter, &tomorrow, &future_rules),
            Some(ValidationError::DisableFuture)
        );
    }

    #[test]
    fn disabled_dates_win_over_range() {
        let adapter = TimeAdapter::new();
        let weekends = Predicate::new(|date: &PrimitiveDateTime| {
            date.weekday().number_from_monday() > 5
        });
        let max = at(2000, Month::January, 1, 0, 0);
        let rules = DateRules {
            should_disable_date: Some(&weekends),
            max_date: Some(&max),
            ..open_rules()
        };
        // 2021-01-09 is a Saturday.
        let saturday = PickerValue::Valid(at(2021, Month::January, 9, 0, 0));
        assert_eq!(
            validate_date(&adapter, &saturday, &rules),
            Some(ValidationError::ShouldDisableDate)
        );
    }

    #[test]
    fn time_bounds_ignore_the_date_by_default() {
        let adapter = TimeAdapter::new();
        let min = at(2030, Month::January, 1, 9, 0);
        let max = at(1990, Month::January, 1, 17, 30);
        let rules = TimeRules {
            min_time: Some(&min),
            max_time: Some(&max),
            ..open_time_rules()
        };

        let noon = PickerValue::Valid(at(2021, Month::March, 3, 12, 0));
        assert_eq!(validate_time(&adapter, &noon, &rules), None);

        let early = PickerValue::Valid(at(2021, Month::March, 3, 8, 59));
        assert_eq!(
            validate_time(&adapter, &early, &rules),
            Some(ValidationError::MinTime)
        );

        let late = PickerValue::Valid(at(2021, Month::March, 3, 17, 31));
        assert_eq!(
            validate_time(&adapter, &late, &rules),
            Some(ValidationError::MaxTime)
        );
    }

    #[test]
    fn time_bounds_can_compare_full_instants() {
        let adapter = TimeAdapter::new();
        let min = at(2030, Month::January, 1, 9, 0);
        let rules = TimeRules {
            min_time: Some(&min),
            disable_ignoring_date_part: true,
            ..open_time_rules()
        };
        let noon = PickerValue::Valid(at(2021, Month::March, 3, 12, 0));
        assert_eq!(
            validate_time(&adapter, &noon, &rules),
            Some(ValidationError::MinTime)
        );
    }

    #[test]
    fn disabled_clock_values_report_their_unit() {
        let adapter = TimeAdapter::new();
        let odd_minutes = Predicate::new(|component: &TimeComponent| {
            component.unit == ClockUnit::Minutes && component.value % 2 == 1
        });
        let rules = TimeRules {
            should_disable_time: Some(&odd_minutes),
            ..open_time_rules()
        };

        let odd = PickerValue::Valid(at(2021, Month::March, 3, 10, 15));
        assert_eq!(
            validate_time(&adapter, &odd, &rules),
            Some(ValidationError::ShouldDisableTime(ClockUnit::Minutes))
        );
        let even = PickerValue::Valid(at(2021, Month::March, 3, 10, 16));
        assert_eq!(validate_time(&adapter, &even, &rules), None);
    }

    #[test]
    fn errors_describe_themselves() {
        assert_eq!(ValidationError::MinDate.to_string(), "date is before the minimum date");
        assert_eq!(
            ValidationError::ShouldDisableTime(ClockUnit::Hours).to_string(),
            "hours value is disabled"
        );
    }
}
