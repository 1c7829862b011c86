//! Chrome-less wrapper: input and view side by side.

use waterpick_core::Environment;

use crate::wrapper::{Chrome, Wrapper, WrapperProps, WrapperVariant};

/// Lays out the input and the view in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineWrapper;

impl Wrapper for InlineWrapper {
    type Props = ();

    fn variant(&self, _env: &Environment) -> WrapperVariant {
        WrapperVariant::Inline
    }

    fn chrome(&self, _props: &WrapperProps<()>, _env: &Environment) -> Chrome {
        Chrome::Inline
    }
}

#[cfg(test)]
mod tests {
    use waterpick_core::Environment;

    use super::InlineWrapper;
    use crate::{Chrome, InputKind, OpenState, Wrapper, WrapperProps};

    #[test]
    fn shows_input_and_content_together() {
        let wrapped = InlineWrapper.wrap(
            OpenState::Closed,
            &WrapperProps::default(),
            "input",
            "calendar",
            &Environment::new(),
        );
        assert_eq!(wrapped.chrome, Chrome::Inline);
        assert!(wrapped.open);
        assert_eq!(wrapped.input.map(|slot| slot.kind), Some(InputKind::Keyboard));
        assert_eq!(wrapped.content, Some("calendar"));
    }
}
