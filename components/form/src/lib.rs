//! Date and time pickers for `WaterPick`.
//!
//! Every picker is the same machine with different parts plugged in:
//!
//! ```text
//! caller props ─▶ default props ─▶ intercept ─▶ parse ─▶ validate ─▶ compose ─▶ wrapper
//! ```
//!
//! - [`picker::value`] turns raw input into a [`PickerValue`] and decides when
//!   two values are the same,
//! - [`validation`] holds the date and time rules shared by the variants,
//! - [`picker::state`] derives the view, input and wrapper props,
//! - [`picker::factory`] joins a variant configuration and a wrapper into a
//!   [`PickerComponent`].
//!
//! The date, time and date-time variants live in [`picker::date`],
//! [`picker::time`] and [`picker::date_time`].

extern crate alloc;

pub mod picker;
pub mod validation;

#[doc(inline)]
pub use picker::{
    date::{DatePicker, DatePickerProps},
    date_time::{DateTimePicker, DateTimePickerProps},
    factory::{
        InputElement, PickerComponent, PickerCycle, PickerEvent, PickerFrame, PickerInstance,
        SelectionState, make_picker_with_state_and_wrapper,
    },
    options::{PickerOptions, VariantConfig},
    props::{CommonProps, MergedProps, Orientation, PickerProps, PickerView},
    state::{DateInputProps, PickerState, PickerViewProps},
    time::{TimePicker, TimePickerProps},
    toolbar::{Toolbar, ToolbarContent, ToolbarProps},
    value::{PickerValue, RawInput, VALUE_MANAGER, ValueManager},
};
#[doc(inline)]
pub use validation::{ClockUnit, TimeComponent, ValidationError};
