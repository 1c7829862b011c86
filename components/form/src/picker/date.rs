//! Date picker: a calendar with day-level rules.

use core::fmt::Debug;

use alloc::{vec, vec::Vec};
use waterpick_core::{DateAdapter, Predicate, merge_defaults};

use super::{
    options::{InterceptedProps, PickerOptions},
    props::{CommonProps, MergedProps, PickerView, VariantProps},
    toolbar::{Toolbar, ToolbarContent},
};
use crate::validation::{DateRules, validate_date};

/// Earliest date allowed when `min_date` is unset.
pub const DEFAULT_MIN_DATE: &str = "1900-01-01";
/// Latest date allowed when `max_date` is unset.
pub const DEFAULT_MAX_DATE: &str = "2099-12-31";

/// Props specific to date pickers.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePickerProps<D> {
    /// Earliest selectable day.
    pub min_date: Option<D>,
    /// Latest selectable day.
    pub max_date: Option<D>,
    /// Reject days before today.
    pub disable_past: Option<bool>,
    /// Reject days after today.
    pub disable_future: Option<bool>,
    /// Reject individual days.
    pub should_disable_date: Option<Predicate<D>>,
    /// Views, in navigation order.
    pub views: Option<Vec<PickerView>>,
    /// First view shown.
    pub open_to: Option<PickerView>,
}

impl<D> Default for DatePickerProps<D> {
    fn default() -> Self {
        Self {
            min_date: None,
            max_date: None,
            disable_past: None,
            disable_future: None,
            should_disable_date: None,
            views: None,
            open_to: None,
        }
    }
}

merge_defaults!(impl<D: Clone> DatePickerProps<D> {
    min_date,
    max_date,
    disable_past,
    disable_future,
    should_disable_date,
    views,
    open_to,
});

impl<D: Debug + Clone + PartialEq + 'static> VariantProps for DatePickerProps<D> {
    fn views(&self) -> Vec<PickerView> {
        self.views
            .clone()
            .unwrap_or_else(|| vec![PickerView::Year, PickerView::Day])
    }

    fn open_to(&self) -> Option<PickerView> {
        self.open_to.or(Some(PickerView::Day))
    }
}

impl<D> DatePickerProps<D> {
    /// Sets the earliest selectable day.
    #[must_use]
    pub fn min_date(mut self, date: D) -> Self {
        self.min_date = Some(date);
        self
    }

    /// Sets the latest selectable day.
    #[must_use]
    pub fn max_date(mut self, date: D) -> Self {
        self.max_date = Some(date);
        self
    }

    /// Rejects days before today.
    #[must_use]
    pub const fn disable_past(mut self, disable: bool) -> Self {
        self.disable_past = Some(disable);
        self
    }

    /// Rejects days after today.
    #[must_use]
    pub const fn disable_future(mut self, disable: bool) -> Self {
        self.disable_future = Some(disable);
        self
    }

    /// Rejects the days `predicate` returns `true` for.
    #[must_use]
    pub fn should_disable_date(mut self, predicate: impl Fn(&D) -> bool + 'static) -> Self {
        self.should_disable_date = Some(Predicate::new(predicate));
        self
    }

    /// Borrows the day-level rules.
    #[must_use]
    pub fn rules(&self) -> DateRules<'_, D> {
        DateRules {
            min_date: self.min_date.as_ref(),
            max_date: self.max_date.as_ref(),
            disable_past: self.disable_past.unwrap_or(false),
            disable_future: self.disable_future.unwrap_or(false),
            should_disable_date: self.should_disable_date.as_ref(),
        }
    }
}

impl<D: Debug + Clone + PartialEq + 'static> DatePickerProps<D> {
    /// Fills unset bounds and views with the date picker defaults.
    pub(crate) fn with_defaults<A: DateAdapter<Date = D>>(self, adapter: &A) -> Self {
        let views = VariantProps::views(&self);
        let open_to = VariantProps::open_to(&self);
        Self {
            min_date: self
                .min_date
                .or_else(|| adapter.date_from_str(DEFAULT_MIN_DATE)),
            max_date: self
                .max_date
                .or_else(|| adapter.date_from_str(DEFAULT_MAX_DATE)),
            views: Some(views),
            open_to,
            ..self
        }
    }
}

fn intercept_date_props<A: DateAdapter>(
    adapter: &A,
    common: CommonProps<A>,
    variant: DatePickerProps<A::Date>,
) -> InterceptedProps<A, DatePickerProps<A::Date>> {
    let input_format = common
        .input_format
        .clone()
        .unwrap_or_else(|| adapter.formats().keyboard_date.clone());
    InterceptedProps {
        common,
        variant: variant.with_defaults(adapter),
        input_format,
    }
}

/// The toolbar date pickers show by default.
#[must_use]
pub fn date_toolbar<A: DateAdapter>() -> Toolbar<A> {
    Toolbar::new(|props, adapter: &A| {
        let formats = adapter.formats();
        let format = match props.views.as_slice() {
            [PickerView::Year] => &formats.year,
            views if !views.contains(&PickerView::Day) => &formats.month_and_year,
            _ => &formats.toolbar_date,
        };
        ToolbarContent::formatted(adapter, props, "SELECT DATE", format)
    })
}

/// The date picker configuration, registered as `name`.
#[must_use]
pub fn date_picker_options<A: DateAdapter>(
    name: &str,
) -> PickerOptions<A, DatePickerProps<A::Date>> {
    PickerOptions::new(name)
        .validation(|value, props: &MergedProps<A, DatePickerProps<A::Date>>| {
            validate_date(&props.adapter, value, &props.variant.rules())
        })
        .intercept_props(intercept_date_props)
        .default_toolbar(date_toolbar())
}

picker_entry_points! {
    DatePickerProps, date_picker_options;
    DatePicker => date_picker(ResponsiveWrapper);
    DesktopDatePicker => desktop_date_picker(DesktopWrapper);
    MobileDatePicker => mobile_date_picker(MobileWrapper);
    StaticDatePicker => static_date_picker(StaticWrapper);
    InlineDatePicker => inline_date_picker(InlineWrapper);
}
