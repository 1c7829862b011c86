//! Open/closed state machine for interactive wrappers.
//!
//! ```text
//!            OpenRequested
//!   Closed ─────────────────▶ Open
//!     ▲                        │
//!     └────────────────────────┘
//!   Committed | Dismissed | OutsideInteraction
//! ```
//!
//! Non-interactive variants (inline, static) have no open state; every
//! event leaves them where they are.

use tracing::trace;

use crate::WrapperVariant;

/// Whether an interactive wrapper currently shows its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenState {
    /// Content hidden. Initial state.
    #[default]
    Closed,
    /// Content visible.
    Open,
}

/// Something that may open or close a wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperEvent {
    /// The input was focused or clicked.
    OpenRequested,
    /// A value was accepted.
    Committed,
    /// The user cancelled.
    Dismissed,
    /// The user interacted outside the chrome.
    OutsideInteraction,
}

impl OpenState {
    /// `true` for [`OpenState::Open`].
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// The state after `event` for a wrapper rendering as `variant`.
    #[must_use]
    pub fn transition(self, event: WrapperEvent, variant: WrapperVariant) -> Self {
        if !variant.is_interactive() {
            return self;
        }
        let next = match event {
            WrapperEvent::OpenRequested => Self::Open,
            WrapperEvent::Committed
            | WrapperEvent::Dismissed
            | WrapperEvent::OutsideInteraction => Self::Closed,
        };
        trace!(?variant, ?event, from = ?self, to = ?next, "wrapper transition");
        next
    }
}

impl From<bool> for OpenState {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

#[cfg(test)]
mod tests {
    use super::{OpenState, WrapperEvent};
    use crate::WrapperVariant;

    #[test]
    fn desktop_cycles_between_states() {
        let variant = WrapperVariant::Desktop;
        let state = OpenState::default();
        assert_eq!(state, OpenState::Closed);

        let state = state.transition(WrapperEvent::OpenRequested, variant);
        assert!(state.is_open());
        let state = state.transition(WrapperEvent::OutsideInteraction, variant);
        assert_eq!(state, OpenState::Closed);
        let state = state
            .transition(WrapperEvent::OpenRequested, variant)
            .transition(WrapperEvent::Committed, variant);
        assert_eq!(state, OpenState::Closed);
    }

    #[test]
    fn mobile_closes_on_dismiss() {
        let state = OpenState::Open.transition(WrapperEvent::Dismissed, WrapperVariant::Mobile);
        assert_eq!(state, OpenState::Closed);
    }

    #[test]
    fn non_interactive_variants_ignore_events() {
        for variant in [WrapperVariant::Inline, WrapperVariant::Static] {
            let state = OpenState::Closed.transition(WrapperEvent::OpenRequested, variant);
            assert_eq!(state, OpenState::Closed);
        }
    }

    #[test]
    fn converts_from_controlled_flag() {
        assert_eq!(OpenState::from(true), OpenState::Open);
        assert_eq!(OpenState::from(false), OpenState::Closed);
    }
}
