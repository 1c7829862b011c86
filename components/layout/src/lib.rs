#![no_std]
//! Wrapper chrome for `WaterPick` pickers.
//!
//! A picker is an input plus a view (calendar, clock, ...). The wrapper
//! decides how the two are laid out and when the view is visible:
//!
//! | Wrapper | Chrome | Input | View visible |
//! |---------|--------|-------|--------------|
//! | [`InlineWrapper`] | rendered in place | editable | always |
//! | [`DesktopWrapper`] | popover anchored to the input | editable | while open |
//! | [`MobileWrapper`] | modal dialog with action buttons | read-only, opens on click | while open |
//! | [`ResponsiveWrapper`] | desktop or mobile, chosen from [`PointerCapability`] | per choice | per choice |
//! | [`StaticWrapper`] | rendered in place | none | always |
//!
//! Interactive wrappers (desktop and mobile) drive an [`OpenState`] machine;
//! the others have no closed state.
//!
//! Wrappers never look inside the input or the view. They receive them as
//! opaque values and hand them back inside a [`Wrapped`] descriptor that a
//! backend renders.

extern crate alloc;

pub mod desktop;
pub mod inline;
pub mod mobile;
pub mod open;
pub mod responsive;
pub mod static_wrapper;
pub mod wrapper;

pub use desktop::{DesktopWrapper, DesktopWrapperProps, Placement};
pub use inline::InlineWrapper;
pub use mobile::{DialogActions, MobileWrapper, MobileWrapperProps};
pub use open::{OpenState, WrapperEvent};
pub use responsive::{PointerCapability, ResponsiveWrapper, ResponsiveWrapperProps};
pub use static_wrapper::{StaticDisplay, StaticWrapper, StaticWrapperProps};
pub use wrapper::{Chrome, InputKind, InputSlot, Wrapped, Wrapper, WrapperProps, WrapperVariant};
