//! Props accepted by every picker, and the merged form they take during a
//! render cycle.

use core::fmt::Debug;

use alloc::{string::String, vec::Vec};
use nami::Binding;
use waterpick_core::{Callback, DateAdapter, MergeDefaults, merge_defaults};

use super::{
    toolbar::Toolbar,
    value::{PickerValue, RawInput},
};
use crate::validation::ValidationError;

/// A view a picker can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum PickerView {
    /// Year list.
    Year,
    /// Month grid.
    Month,
    /// Day calendar.
    Day,
    /// Hour clock.
    Hours,
    /// Minute clock.
    Minutes,
    /// Second clock.
    Seconds,
}

/// Toolbar placement relative to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Orientation {
    /// Toolbar above the view.
    #[default]
    Portrait,
    /// Toolbar beside the view.
    Landscape,
}

/// Props shared by every picker variant. `None` means "not set" so defaults
/// can fill the gap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommonProps<A: DateAdapter> {
    /// Input label. Also used as the toolbar title when set.
    pub label: Option<String>,
    /// Toolbar title used when there is no label.
    pub toolbar_title: Option<String>,
    /// Replaces the variant's default toolbar.
    pub toolbar: Option<Toolbar<A>>,
    /// Format the input displays and parses.
    pub input_format: Option<String>,
    /// Blocks every interaction.
    pub disabled: Option<bool>,
    /// Blocks opening and editing, keeps the value visible.
    pub read_only: Option<bool>,
    /// Controls the open state from outside.
    pub open: Option<bool>,
    /// Keeps the picker open after a finished selection.
    pub disable_close_on_select: Option<bool>,
    /// Whether the toolbar is rendered. Defaults to `true`.
    pub show_toolbar: Option<bool>,
    /// Toolbar placement.
    pub orientation: Option<Orientation>,
    /// Identifier of the input element.
    pub id: Option<String>,
}

merge_defaults!(impl<A: DateAdapter> CommonProps<A> {
    label,
    toolbar_title,
    toolbar,
    input_format,
    disabled,
    read_only,
    open,
    disable_close_on_select,
    show_toolbar,
    orientation,
    id,
});

/// Payload of `on_change`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChange<D> {
    /// The new value.
    pub value: PickerValue<D>,
    /// Text typed by the user, when the change came from the keyboard.
    pub keyboard_input: Option<String>,
}

/// Payload of `on_error`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationChange<D> {
    /// The new outcome.
    pub error: Option<ValidationError>,
    /// The value that produced it.
    pub value: PickerValue<D>,
}

/// Callbacks a picker calls.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerHandlers<D> {
    /// The value changed.
    pub on_change: Option<Callback<ValueChange<D>>>,
    /// A value was accepted.
    pub on_accept: Option<Callback<PickerValue<D>>>,
    /// The picker opened.
    pub on_open: Option<Callback<()>>,
    /// The picker closed.
    pub on_close: Option<Callback<()>>,
    /// The validation outcome changed.
    pub on_error: Option<Callback<ValidationChange<D>>>,
}

impl<D> Default for PickerHandlers<D> {
    fn default() -> Self {
        Self {
            on_change: None,
            on_accept: None,
            on_open: None,
            on_close: None,
            on_error: None,
        }
    }
}

/// Props specific to one picker variant.
pub trait VariantProps: Debug + Clone + Default + PartialEq + MergeDefaults + 'static {
    /// Views the picker can show, in navigation order.
    fn views(&self) -> Vec<PickerView>;

    /// View shown when the picker opens.
    fn open_to(&self) -> Option<PickerView>;
}

/// Everything a caller passes to a picker.
///
/// `V` holds the variant props and `P` the wrapper props.
#[derive(Debug, Clone)]
pub struct PickerProps<A: DateAdapter, V, P> {
    /// The value, read every cycle and written on change.
    pub value: Binding<RawInput<A::Date>>,
    /// Callbacks.
    pub handlers: PickerHandlers<A::Date>,
    /// Shared props.
    pub common: CommonProps<A>,
    /// Variant props.
    pub variant: V,
    /// Wrapper props.
    pub wrapper: P,
    /// Adapter to use instead of the one in the environment.
    pub date_adapter: Option<A>,
}

impl<A: DateAdapter, V: Default, P: Default> PickerProps<A, V, P> {
    /// Creates props bound to `value`, with everything else unset.
    #[must_use]
    pub fn new(value: &Binding<RawInput<A::Date>>) -> Self {
        Self {
            value: value.clone(),
            handlers: PickerHandlers::default(),
            common: CommonProps::default(),
            variant: V::default(),
            wrapper: P::default(),
            date_adapter: None,
        }
    }
}

impl<A: DateAdapter, V, P> PickerProps<A, V, P> {
    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.common.label = Some(label.into());
        self
    }

    /// Sets the toolbar title.
    #[must_use]
    pub fn toolbar_title(mut self, title: impl Into<String>) -> Self {
        self.common.toolbar_title = Some(title.into());
        self
    }

    /// Replaces the default toolbar.
    #[must_use]
    pub fn toolbar(mut self, toolbar: Toolbar<A>) -> Self {
        self.common.toolbar = Some(toolbar);
        self
    }

    /// Sets the input format.
    #[must_use]
    pub fn input_format(mut self, format: impl Into<String>) -> Self {
        self.common.input_format = Some(format.into());
        self
    }

    /// Disables the picker.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.common.disabled = Some(disabled);
        self
    }

    /// Makes the picker read-only.
    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.common.read_only = Some(read_only);
        self
    }

    /// Controls the open state.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.common.open = Some(open);
        self
    }

    /// Keeps the picker open after a finished selection.
    #[must_use]
    pub fn disable_close_on_select(mut self, disable: bool) -> Self {
        self.common.disable_close_on_select = Some(disable);
        self
    }

    /// Shows or hides the toolbar.
    #[must_use]
    pub fn show_toolbar(mut self, show: bool) -> Self {
        self.common.show_toolbar = Some(show);
        self
    }

    /// Sets the orientation.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.common.orientation = Some(orientation);
        self
    }

    /// Sets the input identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.common.id = Some(id.into());
        self
    }

    /// Sets the variant props.
    #[must_use]
    pub fn variant(mut self, variant: V) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the wrapper props.
    #[must_use]
    pub fn wrapper(mut self, wrapper: P) -> Self {
        self.wrapper = wrapper;
        self
    }

    /// Uses `adapter` instead of the environment's.
    #[must_use]
    pub fn date_adapter(mut self, adapter: A) -> Self {
        self.date_adapter = Some(adapter);
        self
    }

    /// Called when the value changes.
    #[must_use]
    pub fn on_change(mut self, f: impl Fn(&ValueChange<A::Date>) + 'static) -> Self {
        self.handlers.on_change = Some(Callback::new(f));
        self
    }

    /// Called when a value is accepted.
    #[must_use]
    pub fn on_accept(mut self, f: impl Fn(&PickerValue<A::Date>) + 'static) -> Self {
        self.handlers.on_accept = Some(Callback::new(f));
        self
    }

    /// Called when the picker opens.
    #[must_use]
    pub fn on_open(mut self, f: impl Fn(&()) + 'static) -> Self {
        self.handlers.on_open = Some(Callback::new(f));
        self
    }

    /// Called when the picker closes.
    #[must_use]
    pub fn on_close(mut self, f: impl Fn(&()) + 'static) -> Self {
        self.handlers.on_close = Some(Callback::new(f));
        self
    }

    /// Called when the validation outcome changes.
    #[must_use]
    pub fn on_error(mut self, f: impl Fn(&ValidationChange<A::Date>) + 'static) -> Self {
        self.handlers.on_error = Some(Callback::new(f));
        self
    }
}

/// Defaults registered for a picker name in the
/// [`DefaultPropsRegistry`](waterpick_core::DefaultPropsRegistry).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PickerDefaults<A: DateAdapter, V> {
    /// Shared props.
    pub common: CommonProps<A>,
    /// Variant props.
    pub variant: V,
}

impl<A: DateAdapter, V: MergeDefaults> MergeDefaults for PickerDefaults<A, V> {
    fn merge_defaults(self, defaults: &Self) -> Self {
        Self {
            common: self.common.merge_defaults(&defaults.common),
            variant: self.variant.merge_defaults(&defaults.variant),
        }
    }
}

/// Props for one render cycle: caller props after default injection and
/// interception, with the input format and toolbar resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedProps<A: DateAdapter, V> {
    /// Shared props.
    pub common: CommonProps<A>,
    /// Variant props.
    pub variant: V,
    /// Resolved input format.
    pub input_format: String,
    /// Resolved toolbar.
    pub toolbar: Toolbar<A>,
    /// Resolved adapter.
    pub adapter: A,
}

impl<A: DateAdapter, V> MergedProps<A, V> {
    /// Caller's label, falling back to the toolbar title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.common
            .label
            .as_deref()
            .or(self.common.toolbar_title.as_deref())
    }

    /// Whether the picker is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.common.disabled.unwrap_or(false)
    }

    /// Whether the picker is read-only.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.common.read_only.unwrap_or(false)
    }
}
