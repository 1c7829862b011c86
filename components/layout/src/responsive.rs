//! Chooses desktop or mobile chrome from the environment.

use waterpick_core::Environment;

use crate::{
    desktop::{DesktopWrapper, DesktopWrapperProps},
    mobile::{MobileWrapper, MobileWrapperProps},
    wrapper::{Chrome, Wrapper, WrapperProps, WrapperVariant},
};

/// Primary pointer of the device, stored in the [`Environment`].
///
/// Backends install it once; a missing value is treated as
/// [`PointerCapability::Coarse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum PointerCapability {
    /// Mouse or trackpad.
    Fine,
    /// Touch.
    Coarse,
}

impl PointerCapability {
    /// Reads the capability from `env`.
    #[must_use]
    pub fn from_env(env: &Environment) -> Self {
        env.get::<Self>().copied().unwrap_or(Self::Coarse)
    }
}

/// Props for both possible chromes. Only the chosen half is used.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponsiveWrapperProps {
    /// Used when rendering as a popover.
    pub desktop: DesktopWrapperProps,
    /// Used when rendering as a dialog.
    pub mobile: MobileWrapperProps,
}

/// Renders as [`DesktopWrapper`] with a fine pointer, [`MobileWrapper`]
/// otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponsiveWrapper;

impl Wrapper for ResponsiveWrapper {
    type Props = ResponsiveWrapperProps;

    fn variant(&self, env: &Environment) -> WrapperVariant {
        match PointerCapability::from_env(env) {
            PointerCapability::Fine => WrapperVariant::Desktop,
            PointerCapability::Coarse => WrapperVariant::Mobile,
        }
    }

    fn chrome(&self, props: &WrapperProps<Self::Props>, env: &Environment) -> Chrome {
        match self.variant(env) {
            WrapperVariant::Desktop => DesktopWrapper.chrome(
                &WrapperProps {
                    anchor_id: props.anchor_id.clone(),
                    disabled: props.disabled,
                    strategy: props.strategy.desktop,
                },
                env,
            ),
            _ => MobileWrapper.chrome(
                &WrapperProps {
                    anchor_id: props.anchor_id.clone(),
                    disabled: props.disabled,
                    strategy: props.strategy.mobile.clone(),
                },
                env,
            ),
        }
    }
}
