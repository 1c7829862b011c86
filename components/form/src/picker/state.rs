//! Derives the three prop bundles a picker renders from.

use alloc::{string::String, vec::Vec};
use waterpick_core::DateAdapter;
use waterpick_layout::WrapperProps;

use super::{
    props::{MergedProps, PickerView, VariantProps},
    toolbar::{ToolbarContent, ToolbarProps},
    value::PickerValue,
};
use crate::validation::ValidationError;

/// Props for the input element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInputProps {
    /// Text shown in the input.
    pub display_value: String,
    /// Format used to display and read the text.
    pub input_format: String,
    /// Shown while the input is empty.
    pub placeholder: String,
    /// Input label.
    pub label: Option<String>,
    /// Input identifier.
    pub id: Option<String>,
    /// The input cannot be used.
    pub disabled: bool,
    /// The input cannot be edited.
    pub read_only: bool,
    /// Draw in the error style.
    pub error: bool,
    /// The broken rule, when `error` is set.
    pub validation_error: Option<ValidationError>,
}

/// Props for the picker view (calendar, clock, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct PickerViewProps<D, V> {
    /// The current date, when valid.
    pub date: Option<D>,
    /// Views the picker can show.
    pub views: Vec<PickerView>,
    /// View shown first.
    pub open_to: Option<PickerView>,
    /// Rendered toolbar, unless hidden.
    pub toolbar: Option<ToolbarContent>,
    /// Same flag as [`DateInputProps::error`].
    pub error: bool,
    /// The view cannot be used.
    pub disabled: bool,
    /// The view cannot change the value.
    pub read_only: bool,
    /// Variant props, for the view's own rules.
    pub variant: V,
}

/// The three bundles derived for one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState<D, V, P> {
    /// Props for the view.
    pub picker_props: PickerViewProps<D, V>,
    /// Props for the input.
    pub input_props: DateInputProps,
    /// Props for the wrapper chrome.
    pub wrapper_props: WrapperProps<P>,
}

/// Derives the picker state from merged props, the parsed value and the
/// validation outcome.
///
/// Pure and total: the same arguments always give the same bundles, for
/// every value including empty and invalid ones.
#[must_use]
pub fn compose_picker_state<A, V, P>(
    merged: &MergedProps<A, V>,
    wrapper: &P,
    value: &PickerValue<A::Date>,
    validation: Option<&ValidationError>,
) -> PickerState<A::Date, V, P>
where
    A: DateAdapter,
    V: VariantProps,
    P: Clone,
{
    let adapter = &merged.adapter;
    let error = validation.is_some();
    let disabled = merged.is_disabled();
    let read_only = merged.is_read_only();

    let display_value = match value {
        PickerValue::Empty => String::new(),
        PickerValue::Valid(date) => adapter.format(date, &merged.input_format),
        PickerValue::Invalid(text) => text.clone(),
    };

    let views = merged.variant.views();
    let open_to = merged
        .variant
        .open_to()
        .filter(|view| views.contains(view))
        .or_else(|| views.first().copied());

    let toolbar = merged.common.show_toolbar.unwrap_or(true).then(|| {
        merged.toolbar.render(
            &ToolbarProps {
                title: merged.title().map(String::from),
                date: value.valid().cloned(),
                views: views.clone(),
                open_to,
                orientation: merged.common.orientation.unwrap_or_default(),
                error,
                input_format: merged.input_format.clone(),
            },
            adapter,
        )
    });

    PickerState {
        picker_props: PickerViewProps {
            date: value.valid().cloned(),
            views,
            open_to,
            toolbar,
            error,
            disabled,
            read_only,
            variant: merged.variant.clone(),
        },
        input_props: DateInputProps {
            display_value,
            input_format: merged.input_format.clone(),
            placeholder: merged.input_format.clone(),
            label: merged.common.label.clone(),
            id: merged.common.id.clone(),
            disabled,
            read_only,
            error,
            validation_error: validation.copied(),
        },
        wrapper_props: WrapperProps {
            anchor_id: merged.common.id.clone(),
            disabled,
            strategy: wrapper.clone(),
        },
    }
}
