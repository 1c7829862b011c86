//! Time picker: a clock with time-of-day rules.

use core::fmt::Debug;

use alloc::{vec, vec::Vec};
use waterpick_core::{DateAdapter, Predicate, merge_defaults};

use super::{
    options::{InterceptedProps, PickerOptions},
    props::{CommonProps, MergedProps, PickerView, VariantProps},
    toolbar::{Toolbar, ToolbarContent},
};
use crate::validation::{TimeComponent, TimeRules, validate_time};

/// Props specific to time pickers.
#[derive(Debug, Clone, PartialEq)]
pub struct TimePickerProps<D> {
    /// Earliest selectable time.
    pub min_time: Option<D>,
    /// Latest selectable time.
    pub max_time: Option<D>,
    /// Reject individual clock values.
    pub should_disable_time: Option<Predicate<TimeComponent>>,
    /// Compare bounds as full instants rather than times of day.
    pub disable_ignoring_date_part_for_time_validation: Option<bool>,
    /// 12 hour clock. Unset follows the adapter's locale.
    pub ampm: Option<bool>,
    /// Views, in navigation order.
    pub views: Option<Vec<PickerView>>,
    /// First view shown.
    pub open_to: Option<PickerView>,
}

impl<D> Default for TimePickerProps<D> {
    fn default() -> Self {
        Self {
            min_time: None,
            max_time: None,
            should_disable_time: None,
            disable_ignoring_date_part_for_time_validation: None,
            ampm: None,
            views: None,
            open_to: None,
        }
    }
}

merge_defaults!(impl<D: Clone> TimePickerProps<D> {
    min_time,
    max_time,
    should_disable_time,
    disable_ignoring_date_part_for_time_validation,
    ampm,
    views,
    open_to,
});

impl<D: Debug + Clone + PartialEq + 'static> VariantProps for TimePickerProps<D> {
    fn views(&self) -> Vec<PickerView> {
        self.views
            .clone()
            .unwrap_or_else(|| vec![PickerView::Hours, PickerView::Minutes])
    }

    fn open_to(&self) -> Option<PickerView> {
        self.open_to.or(Some(PickerView::Hours))
    }
}

impl<D> TimePickerProps<D> {
    /// Sets the earliest selectable time.
    #[must_use]
    pub fn min_time(mut self, time: D) -> Self {
        self.min_time = Some(time);
        self
    }

    /// Sets the latest selectable time.
    #[must_use]
    pub fn max_time(mut self, time: D) -> Self {
        self.max_time = Some(time);
        self
    }

    /// Chooses between a 12 and a 24 hour clock.
    #[must_use]
    pub const fn ampm(mut self, ampm: bool) -> Self {
        self.ampm = Some(ampm);
        self
    }

    /// Rejects the clock values `predicate` returns `true` for.
    #[must_use]
    pub fn should_disable_time(
        mut self,
        predicate: impl Fn(&TimeComponent) -> bool + 'static,
    ) -> Self {
        self.should_disable_time = Some(Predicate::new(predicate));
        self
    }

    /// Borrows the clock-level rules.
    #[must_use]
    pub fn rules(&self) -> TimeRules<'_, D> {
        TimeRules {
            min_time: self.min_time.as_ref(),
            max_time: self.max_time.as_ref(),
            should_disable_time: self.should_disable_time.as_ref(),
            disable_ignoring_date_part: self
                .disable_ignoring_date_part_for_time_validation
                .unwrap_or(false),
        }
    }
}

impl<D: Debug + Clone + PartialEq + 'static> TimePickerProps<D> {
    /// Resolves `ampm` from the adapter and fills unset views.
    pub(crate) fn with_defaults<A: DateAdapter<Date = D>>(self, adapter: &A) -> Self {
        let views = VariantProps::views(&self);
        let open_to = VariantProps::open_to(&self);
        Self {
            ampm: Some(
                self.ampm
                    .unwrap_or_else(|| adapter.is_12_hour_cycle_in_current_locale()),
            ),
            views: Some(views),
            open_to,
            ..self
        }
    }

    /// Whether the resolved props use a 12 hour clock.
    pub(crate) fn is_ampm(&self) -> bool {
        self.ampm.unwrap_or(true)
    }
}

fn intercept_time_props<A: DateAdapter>(
    adapter: &A,
    common: CommonProps<A>,
    variant: TimePickerProps<A::Date>,
) -> InterceptedProps<A, TimePickerProps<A::Date>> {
    let variant = variant.with_defaults(adapter);
    let input_format = common.input_format.clone().unwrap_or_else(|| {
        let formats = adapter.formats();
        if variant.is_ampm() {
            formats.full_time_12h.clone()
        } else {
            formats.full_time_24h.clone()
        }
    });
    InterceptedProps {
        common,
        variant,
        input_format,
    }
}

/// The toolbar time pickers show by default.
#[must_use]
pub fn time_toolbar<A: DateAdapter>() -> Toolbar<A> {
    Toolbar::new(|props, adapter: &A| {
        ToolbarContent::formatted(adapter, props, "SELECT TIME", &props.input_format)
    })
}

/// The time picker configuration, registered as `name`.
#[must_use]
pub fn time_picker_options<A: DateAdapter>(
    name: &str,
) -> PickerOptions<A, TimePickerProps<A::Date>> {
    PickerOptions::new(name)
        .validation(|value, props: &MergedProps<A, TimePickerProps<A::Date>>| {
            validate_time(&props.adapter, value, &props.variant.rules())
        })
        .intercept_props(intercept_time_props)
        .default_toolbar(time_toolbar())
}

picker_entry_points! {
    TimePickerProps, time_picker_options;
    TimePicker => time_picker(ResponsiveWrapper);
    DesktopTimePicker => desktop_time_picker(DesktopWrapper);
    MobileTimePicker => mobile_time_picker(MobileWrapper);
    StaticTimePicker => static_time_picker(StaticWrapper);
    InlineTimePicker => inline_time_picker(InlineWrapper);
}
