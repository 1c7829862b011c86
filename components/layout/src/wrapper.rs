//! The wrapper strategy contract.

use alloc::string::String;
use core::fmt::Debug;

use waterpick_core::Environment;

use crate::{
    desktop::Placement, mobile::DialogActions, open::OpenState, static_wrapper::StaticDisplay,
};

/// The kind of chrome a wrapper resolved to for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum WrapperVariant {
    /// Input and view rendered together in place.
    Inline,
    /// View in a popover anchored to an editable input.
    Desktop,
    /// View in a modal dialog opened from a read-only input.
    Mobile,
    /// View rendered in place with no input.
    Static,
}

impl WrapperVariant {
    /// Whether this variant has separate closed and open states.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Desktop | Self::Mobile)
    }

    /// The input this variant hosts, if any.
    #[must_use]
    pub const fn input_kind(self) -> Option<InputKind> {
        match self {
            Self::Inline | Self::Desktop => Some(InputKind::Keyboard),
            Self::Mobile => Some(InputKind::Pure),
            Self::Static => None,
        }
    }

    /// Whether finishing a selection closes the view unless told otherwise.
    #[must_use]
    pub const fn closes_on_select(self) -> bool {
        !matches!(self, Self::Mobile)
    }
}

/// How the input element accepts values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum InputKind {
    /// Editable text field that parses what the user types.
    Keyboard,
    /// Read-only field that opens the view when activated.
    Pure,
}

/// Props consumed by the wrapper chrome.
///
/// `strategy` holds the props specific to one wrapper type; the other fields
/// are shared by all wrappers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrapperProps<P> {
    /// Identifier of the input the chrome anchors to.
    pub anchor_id: Option<String>,
    /// Disabled pickers cannot be opened.
    pub disabled: bool,
    /// Props specific to the wrapper type.
    pub strategy: P,
}

/// Chrome resolved for one render, with the wrapper-specific details a
/// backend needs to draw it.
#[derive(Debug, Clone, PartialEq)]
pub enum Chrome {
    /// No chrome, content is laid out in place.
    Inline,
    /// Popover attached to the input.
    Popover {
        /// Where the popover sits relative to its anchor.
        placement: Placement,
        /// Identifier of the anchoring input.
        anchor_id: Option<String>,
    },
    /// Modal dialog.
    Dialog {
        /// Buttons shown under the view.
        actions: DialogActions,
    },
    /// Always-visible view without an input.
    Static {
        /// Which layout the static view imitates.
        display_as: StaticDisplay,
    },
}

/// An input handed to the chrome together with the way it accepts values.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSlot<I> {
    /// Editable or read-only.
    pub kind: InputKind,
    /// The input's own props, opaque to the wrapper.
    pub props: I,
}

/// What to render for one cycle: chrome, and the input and content it hosts.
#[derive(Debug, Clone, PartialEq)]
pub struct Wrapped<I, C> {
    /// Variant the wrapper resolved to.
    pub variant: WrapperVariant,
    /// Chrome to draw.
    pub chrome: Chrome,
    /// Whether the content is visible.
    pub open: bool,
    /// The input, when the variant hosts one.
    pub input: Option<InputSlot<I>>,
    /// The content, when visible.
    pub content: Option<C>,
}

/// A layout strategy hosting a picker's input and view.
pub trait Wrapper: Debug + 'static {
    /// Props specific to this wrapper.
    type Props: Debug + Clone + Default + PartialEq + 'static;

    /// The variant this wrapper renders as in `env`.
    fn variant(&self, env: &Environment) -> WrapperVariant;

    /// The chrome for one render.
    fn chrome(&self, props: &WrapperProps<Self::Props>, env: &Environment) -> Chrome;

    /// Places `input` and `content` inside the chrome.
    ///
    /// Non-interactive variants ignore `open` and always show the content.
    fn wrap<I, C>(
        &self,
        open: OpenState,
        props: &WrapperProps<Self::Props>,
        input: I,
        content: C,
        env: &Environment,
    ) -> Wrapped<I, C> {
        let variant = self.variant(env);
        let open = !variant.is_interactive() || open.is_open();
        Wrapped {
            variant,
            chrome: self.chrome(props, env),
            open,
            input: variant
                .input_kind()
                .map(|kind| InputSlot { kind, props: input }),
            content: open.then_some(content),
        }
    }
}
