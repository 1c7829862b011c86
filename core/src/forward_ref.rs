//! A slot through which a picker exposes its interactive input.
//!
//! Callers create a [`ForwardedRef`] and hand it to a picker when mounting it.
//! After each render the picker writes a description of its input element
//! into the slot, or clears it when the current wrapper renders no input.
//! The slot is a [`Binding`], so callers can observe it like any other
//! reactive value.

use core::fmt;

use nami::Binding;

/// Shared, late-bound reference to an element of type `T`.
pub struct ForwardedRef<T: 'static>(Binding<Option<T>>);

impl<T: Clone + 'static> ForwardedRef<T> {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self(nami::binding(None))
    }

    /// Attaches `element`, replacing any previous one.
    pub fn set(&self, element: T) {
        self.0.set(Some(element));
    }

    /// Detaches the current element.
    pub fn clear(&self) {
        self.0.set(None);
    }

    /// Returns `true` when an element is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.0.get().is_some()
    }

    /// Returns a copy of the attached element.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.0.get()
    }

    /// Runs `f` against the attached element.
    pub fn with<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        f(self.0.get().as_ref())
    }

    /// The underlying binding, for observing attach and detach.
    #[must_use]
    pub const fn binding(&self) -> &Binding<Option<T>> {
        &self.0
    }
}

impl<T: 'static> Clone for ForwardedRef<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Clone + 'static> Default for ForwardedRef<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for ForwardedRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ForwardedRef").field(&self.0.get()).finish()
    }
}
