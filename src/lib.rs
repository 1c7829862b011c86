#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod logging;

pub use waterpick_core;
pub use waterpick_form;
pub use waterpick_layout;
pub use waterpick_time;

pub use nami as reactive;

pub use logging::install_tracing;

pub mod prelude {
    //! The types most picker code needs, in one import.
    //!
    //! ```rust
    //! use waterpick::prelude::*;
    //!
    //! let value = binding(RawInput::<PrimitiveDateTime>::Empty);
    //! let picker = date_picker::<TimeAdapter>().unwrap();
    //! let cycle = picker.evaluate(&PickerProps::new(&value), &Environment::new());
    //! assert!(cycle.validation.is_none());
    //! ```
    pub use nami::{Binding, Signal, binding};
    pub use waterpick_core::{
        Callback, ConfigError, DateAdapter, DateFormats, DefaultPropsRegistry, Environment,
        ForwardedRef, MergeDefaults, Predicate,
    };
    pub use waterpick_form::{
        CommonProps, DatePicker, DatePickerProps, DateTimePicker, DateTimePickerProps,
        InputElement, Orientation, PickerComponent, PickerEvent, PickerOptions, PickerProps,
        PickerValue, PickerView, RawInput, SelectionState, TimePicker, TimePickerProps, Toolbar,
        ValidationError, make_picker_with_state_and_wrapper,
        picker::{
            date::{
                date_picker, desktop_date_picker, inline_date_picker, mobile_date_picker,
                static_date_picker,
            },
            date_time::{
                date_time_picker, desktop_date_time_picker, inline_date_time_picker,
                mobile_date_time_picker, static_date_time_picker,
            },
            time::{
                desktop_time_picker, inline_time_picker, mobile_time_picker, static_time_picker,
                time_picker,
            },
        },
    };
    pub use waterpick_layout::{
        DesktopWrapper, InlineWrapper, MobileWrapper, OpenState, PointerCapability,
        ResponsiveWrapper, StaticWrapper, Wrapper,
    };
    pub use waterpick_time::{TimeAdapter, time::PrimitiveDateTime};
}
