//! Popover chrome for pointer-driven environments.

use waterpick_core::Environment;

use crate::wrapper::{Chrome, Wrapper, WrapperProps, WrapperVariant};

/// Where a popover sits relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Placement {
    /// Below the anchor, aligned to its start edge.
    #[default]
    BottomStart,
    /// Below the anchor, aligned to its end edge.
    BottomEnd,
    /// Above the anchor, aligned to its start edge.
    TopStart,
    /// Above the anchor, aligned to its end edge.
    TopEnd,
}

/// Props for [`DesktopWrapper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DesktopWrapperProps {
    /// Popover placement.
    pub placement: Placement,
}

/// Shows the view in a popover anchored to an editable input.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopWrapper;

impl Wrapper for DesktopWrapper {
    type Props = DesktopWrapperProps;

    fn variant(&self, _env: &Environment) -> WrapperVariant {
        WrapperVariant::Desktop
    }

    fn chrome(&self, props: &WrapperProps<Self::Props>, _env: &Environment) -> Chrome {
        Chrome::Popover {
            placement: props.strategy.placement,
            anchor_id: props.anchor_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use waterpick_core::Environment;

    use super::{DesktopWrapper, DesktopWrapperProps, Placement};
    use crate::{Chrome, InputKind, OpenState, Wrapper, WrapperProps};

    #[test]
    fn closed_popover_hides_content_but_keeps_input() {
        let props = WrapperProps {
            anchor_id: Some("start".into()),
            disabled: false,
            strategy: DesktopWrapperProps {
                placement: Placement::TopEnd,
            },
        };
        let env = Environment::new();
        let wrapped = DesktopWrapper.wrap(OpenState::Closed, &props, "input", "calendar", &env);

        assert!(!wrapped.open);
        assert_eq!(wrapped.content, None);
        assert_eq!(wrapped.input.map(|slot| slot.kind), Some(InputKind::Keyboard));
        assert_eq!(
            wrapped.chrome,
            Chrome::Popover {
                placement: Placement::TopEnd,
                anchor_id: Some("start".into()),
            }
        );
    }

    #[test]
    fn open_popover_shows_content() {
        let wrapped = DesktopWrapper.wrap(
            OpenState::Open,
            &WrapperProps::default(),
            (),
            "calendar",
            &Environment::new(),
        );
        assert!(wrapped.open);
        assert_eq!(wrapped.content, Some("calendar"));
    }
}
