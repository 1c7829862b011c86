//! Always-visible chrome with no input.

use waterpick_core::Environment;

use crate::wrapper::{Chrome, Wrapper, WrapperProps, WrapperVariant};

/// Which interactive layout a static picker imitates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum StaticDisplay {
    /// Popover content layout.
    Desktop,
    /// Dialog content layout.
    #[default]
    Mobile,
}

/// Props for [`StaticWrapper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticWrapperProps {
    /// Layout to imitate.
    pub display_as: StaticDisplay,
}

/// Renders the view in place, permanently open, without an input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticWrapper;

impl Wrapper for StaticWrapper {
    type Props = StaticWrapperProps;

    fn variant(&self, _env: &Environment) -> WrapperVariant {
        WrapperVariant::Static
    }

    fn chrome(&self, props: &WrapperProps<Self::Props>, _env: &Environment) -> Chrome {
        Chrome::Static {
            display_as: props.strategy.display_as,
        }
    }
}
