//! Shareable callbacks and predicates.
//!
//! Props are cloned into every render cycle, so handlers are reference
//! counted rather than boxed. Two handlers compare equal when they share the
//! same allocation, which keeps props that carry handlers comparable.

use alloc::rc::Rc;

/// A callback invoked with a borrowed payload.
pub struct Callback<T: ?Sized>(Rc<dyn Fn(&T)>);

impl<T: ?Sized> Callback<T> {
    /// Wraps a closure.
    pub fn new(f: impl Fn(&T) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the callback.
    pub fn call(&self, payload: &T) {
        (self.0)(payload);
    }
}

impl<T: ?Sized> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl_debug!(impl<T> Callback<T>);

/// A shared test on a borrowed value.
pub struct Predicate<T: ?Sized>(Rc<dyn Fn(&T) -> bool>);

impl<T: ?Sized> Predicate<T> {
    /// Wraps a closure.
    pub fn new(f: impl Fn(&T) -> bool + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Evaluates the predicate.
    #[must_use]
    pub fn test(&self, value: &T) -> bool {
        (self.0)(value)
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for Predicate<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl_debug!(impl<T> Predicate<T>);
