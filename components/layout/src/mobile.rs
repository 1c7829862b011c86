//! Modal dialog chrome for touch environments.

use alloc::string::String;

use waterpick_core::{Environment, merge_defaults};

use crate::wrapper::{Chrome, Wrapper, WrapperProps, WrapperVariant};

/// Props for [`MobileWrapper`]. Unset fields use English defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MobileWrapperProps {
    /// Label of the accept button.
    pub ok_text: Option<String>,
    /// Label of the cancel button.
    pub cancel_text: Option<String>,
    /// Label of the clear button.
    pub clear_text: Option<String>,
    /// Label of the today button.
    pub today_text: Option<String>,
    /// Show a button that clears the value.
    pub clearable: Option<bool>,
    /// Show a button that selects the current date.
    pub show_today_button: Option<bool>,
}

merge_defaults!(MobileWrapperProps {
    ok_text,
    cancel_text,
    clear_text,
    today_text,
    clearable,
    show_today_button,
});

impl MobileWrapperProps {
    /// Resolves the dialog buttons.
    #[must_use]
    pub fn actions(&self) -> DialogActions {
        let text = |value: &Option<String>, fallback: &str| {
            value.clone().unwrap_or_else(|| fallback.into())
        };
        DialogActions {
            ok: text(&self.ok_text, "OK"),
            cancel: text(&self.cancel_text, "Cancel"),
            clear: self
                .clearable
                .unwrap_or(false)
                .then(|| text(&self.clear_text, "Clear")),
            today: self
                .show_today_button
                .unwrap_or(false)
                .then(|| text(&self.today_text, "Today")),
        }
    }
}

/// Buttons shown at the bottom of the dialog. Optional buttons are `None`
/// when hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogActions {
    /// Accept button label.
    pub ok: String,
    /// Cancel button label.
    pub cancel: String,
    /// Clear button label.
    pub clear: Option<String>,
    /// Today button label.
    pub today: Option<String>,
}

/// Shows the view in a modal dialog opened from a read-only input.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileWrapper;

impl Wrapper for MobileWrapper {
    type Props = MobileWrapperProps;

    fn variant(&self, _env: &Environment) -> WrapperVariant {
        WrapperVariant::Mobile
    }

    fn chrome(&self, props: &WrapperProps<Self::Props>, _env: &Environment) -> Chrome {
        Chrome::Dialog {
            actions: props.strategy.actions(),
        }
    }
}
