//! Date-time picker: a calendar followed by a clock.

use core::fmt::Debug;

use alloc::{vec, vec::Vec};
use waterpick_core::{DateAdapter, MergeDefaults};

use super::{
    date::DatePickerProps,
    options::{InterceptedProps, PickerOptions},
    props::{CommonProps, MergedProps, PickerView, VariantProps},
    time::TimePickerProps,
    toolbar::{Toolbar, ToolbarContent},
};
use crate::validation::{validate_date, validate_time};

/// Props specific to date-time pickers.
///
/// The day-level and clock-level rules reuse the date and time picker props;
/// their `views` and `open_to` fields are ignored in favour of the ones here.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimePickerProps<D> {
    /// Day-level rules.
    pub date: DatePickerProps<D>,
    /// Clock-level rules and `ampm`.
    pub time: TimePickerProps<D>,
    /// Earliest selectable instant.
    pub min_date_time: Option<D>,
    /// Latest selectable instant.
    pub max_date_time: Option<D>,
    /// Views, in navigation order.
    pub views: Option<Vec<PickerView>>,
    /// First view shown.
    pub open_to: Option<PickerView>,
}

impl<D> Default for DateTimePickerProps<D> {
    fn default() -> Self {
        Self {
            date: DatePickerProps::default(),
            time: TimePickerProps::default(),
            min_date_time: None,
            max_date_time: None,
            views: None,
            open_to: None,
        }
    }
}

impl<D: Clone> MergeDefaults for DateTimePickerProps<D> {
    fn merge_defaults(self, defaults: &Self) -> Self {
        Self {
            date: self.date.merge_defaults(&defaults.date),
            time: self.time.merge_defaults(&defaults.time),
            min_date_time: self
                .min_date_time
                .or_else(|| defaults.min_date_time.clone()),
            max_date_time: self
                .max_date_time
                .or_else(|| defaults.max_date_time.clone()),
            views: self.views.or_else(|| defaults.views.clone()),
            open_to: self.open_to.or(defaults.open_to),
        }
    }
}

impl<D: Debug + Clone + PartialEq + 'static> VariantProps for DateTimePickerProps<D> {
    fn views(&self) -> Vec<PickerView> {
        self.views.clone().unwrap_or_else(|| {
            vec![
                PickerView::Year,
                PickerView::Day,
                PickerView::Hours,
                PickerView::Minutes,
            ]
        })
    }

    fn open_to(&self) -> Option<PickerView> {
        self.open_to.or(Some(PickerView::Day))
    }
}

impl<D> DateTimePickerProps<D> {
    /// Sets the earliest selectable instant.
    #[must_use]
    pub fn min_date_time(mut self, instant: D) -> Self {
        self.min_date_time = Some(instant);
        self
    }

    /// Sets the latest selectable instant.
    #[must_use]
    pub fn max_date_time(mut self, instant: D) -> Self {
        self.max_date_time = Some(instant);
        self
    }

    /// Replaces the day-level rules.
    #[must_use]
    pub fn date(mut self, date: DatePickerProps<D>) -> Self {
        self.date = date;
        self
    }

    /// Replaces the clock-level rules.
    #[must_use]
    pub fn time(mut self, time: TimePickerProps<D>) -> Self {
        self.time = time;
        self
    }
}

/// Splits the instant bounds into day and clock bounds, then applies the
/// date and time defaults.
fn intercept_date_time_props<A: DateAdapter>(
    adapter: &A,
    common: CommonProps<A>,
    variant: DateTimePickerProps<A::Date>,
) -> InterceptedProps<A, DateTimePickerProps<A::Date>> {
    let views = variant.views();
    let open_to = variant.open_to();
    let DateTimePickerProps {
        mut date,
        mut time,
        min_date_time,
        max_date_time,
        ..
    } = variant;

    if min_date_time.is_some() || max_date_time.is_some() {
        date.min_date = date.min_date.or_else(|| min_date_time.clone());
        date.max_date = date.max_date.or_else(|| max_date_time.clone());
        time.min_time = time.min_time.or_else(|| min_date_time.clone());
        time.max_time = time.max_time.or_else(|| max_date_time.clone());
        time.disable_ignoring_date_part_for_time_validation = time
            .disable_ignoring_date_part_for_time_validation
            .or(Some(true));
    }

    let date = date.with_defaults(adapter);
    let time = time.with_defaults(adapter);
    let input_format = common.input_format.clone().unwrap_or_else(|| {
        let formats = adapter.formats();
        if time.is_ampm() {
            formats.keyboard_date_time_12h.clone()
        } else {
            formats.keyboard_date_time_24h.clone()
        }
    });

    InterceptedProps {
        common,
        variant: DateTimePickerProps {
            date,
            time,
            min_date_time,
            max_date_time,
            views: Some(views),
            open_to,
        },
        input_format,
    }
}

/// The toolbar date-time pickers show by default.
#[must_use]
pub fn date_time_toolbar<A: DateAdapter>() -> Toolbar<A> {
    Toolbar::new(|props, adapter: &A| {
        ToolbarContent::formatted(adapter, props, "SELECT DATE & TIME", &props.input_format)
    })
}

/// The date-time picker configuration, registered as `name`.
#[must_use]
pub fn date_time_picker_options<A: DateAdapter>(
    name: &str,
) -> PickerOptions<A, DateTimePickerProps<A::Date>> {
    PickerOptions::new(name)
        .validation(
            |value, props: &MergedProps<A, DateTimePickerProps<A::Date>>| {
                let adapter = &props.adapter;
                validate_date(adapter, value, &props.variant.date.rules())
                    .or_else(|| validate_time(adapter, value, &props.variant.time.rules()))
            },
        )
        .intercept_props(intercept_date_time_props)
        .default_toolbar(date_time_toolbar())
}

picker_entry_points! {
    DateTimePickerProps, date_time_picker_options;
    DateTimePicker => date_time_picker(ResponsiveWrapper);
    DesktopDateTimePicker => desktop_date_time_picker(DesktopWrapper);
    MobileDateTimePicker => mobile_date_time_picker(MobileWrapper);
    StaticDateTimePicker => static_date_time_picker(StaticWrapper);
    InlineDateTimePicker => inline_date_time_picker(InlineWrapper);
}
