//! Raw input, parsed values and the value manager shared by all pickers.

use core::fmt::Debug;

use alloc::string::String;
use waterpick_core::DateAdapter;

/// What a caller stores in a picker's binding.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput<D> {
    /// No value.
    Empty,
    /// Text to be read by the adapter.
    Text(String),
    /// An already parsed date.
    Value(D),
}

impl<D> Default for RawInput<D> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<D> From<Option<D>> for RawInput<D> {
    fn from(value: Option<D>) -> Self {
        value.map_or(Self::Empty, Self::Value)
    }
}

/// A picker value after parsing.
///
/// Parsing never fails: input the adapter cannot read becomes
/// [`PickerValue::Invalid`], keeping the original text for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum PickerValue<D> {
    /// No value.
    Empty,
    /// A readable date.
    Valid(D),
    /// Text that is not a date.
    Invalid(String),
}

impl<D> PickerValue<D> {
    /// `true` for [`PickerValue::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// `true` for [`PickerValue::Invalid`].
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The date, if the value is valid.
    #[must_use]
    pub const fn valid(&self) -> Option<&D> {
        match self {
            Self::Valid(date) => Some(date),
            _ => None,
        }
    }

    /// Converts back to the form stored in a binding.
    #[must_use]
    pub fn into_raw(self) -> RawInput<D> {
        match self {
            Self::Empty => RawInput::Empty,
            Self::Valid(date) => RawInput::Value(date),
            Self::Invalid(text) => RawInput::Text(text),
        }
    }
}

/// Describes how picker values are represented, produced and compared.
///
/// A manager is stateless and shared by every picker a factory builds, so
/// implementations must be pure.
pub trait ValueManager<A: DateAdapter>: Debug + Sync + 'static {
    /// The single representation of "no value".
    fn empty_value(&self) -> PickerValue<A::Date>;

    /// Reads raw input. Total: unreadable input maps to an invalid value.
    fn parse_input(&self, adapter: &A, raw: &RawInput<A::Date>) -> PickerValue<A::Date>;

    /// Equivalence used to drop changes that would not change anything.
    fn are_values_equal(
        &self,
        adapter: &A,
        a: &PickerValue<A::Date>,
        b: &PickerValue<A::Date>,
    ) -> bool;
}

/// The value manager for date-like pickers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateValueManager;

/// The manager every factory-built picker uses.
pub static VALUE_MANAGER: DateValueManager = DateValueManager;

impl<A: DateAdapter> ValueManager<A> for DateValueManager {
    fn empty_value(&self) -> PickerValue<A::Date> {
        PickerValue::Empty
    }

    fn parse_input(&self, adapter: &A, raw: &RawInput<A::Date>) -> PickerValue<A::Date> {
        match raw {
            RawInput::Empty => PickerValue::Empty,
            RawInput::Value(date) => PickerValue::Valid(date.clone()),
            RawInput::Text(text) if text.trim().is_empty() => PickerValue::Empty,
            RawInput::Text(text) => adapter
                .date_from_str(text.trim())
                .map_or_else(|| PickerValue::Invalid(text.clone()), PickerValue::Valid),
        }
    }

    fn are_values_equal(
        &self,
        adapter: &A,
        a: &PickerValue<A::Date>,
        b: &PickerValue<A::Date>,
    ) -> bool {
        match (a, b) {
            (PickerValue::Empty, PickerValue::Empty) => true,
            (PickerValue::Valid(a), PickerValue::Valid(b)) => adapter.is_equal(a, b),
            (PickerValue::Invalid(a), PickerValue::Invalid(b)) => a == b,
            _ => false,
        }
    }
}
