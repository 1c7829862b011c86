//! The typed context pickers are rendered in.
//!
//! An [`Environment`] maps a type to a single value of that type. Applications
//! install shared configuration into it once (the date adapter, the
//! [`DefaultPropsRegistry`](crate::DefaultPropsRegistry), pointer capability
//! for responsive wrappers) and every picker reads from it during a render
//! cycle. Values are reference counted, so cloning an environment is cheap and
//! never copies the stored values.

use alloc::{collections::BTreeMap, rc::Rc};
use core::any::{Any, TypeId};

/// Type-keyed storage for values shared across a picker tree.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    map: BTreeMap<TypeId, Rc<dyn Any>>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, replacing any previous value of the same type.
    pub fn insert<T: 'static>(&mut self, value: T) {
        self.map.insert(TypeId::of::<T>(), Rc::new(value));
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Returns the stored value of type `T`, if any.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Returns `true` when a value of type `T` is stored.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    /// Removes the stored value of type `T`.
    pub fn remove<T: 'static>(&mut self) {
        self.map.remove(&TypeId::of::<T>());
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;

    #[derive(Debug, PartialEq)]
    struct Locale(&'static str);

    #[test]
    fn stores_one_value_per_type() {
        let mut env = Environment::new().with(Locale("en-US")).with(42_u32);
        assert_eq!(env.get::<Locale>(), Some(&Locale("en-US")));
        assert_eq!(env.get::<u32>(), Some(&42));

        env.insert(Locale("de-DE"));
        assert_eq!(env.get::<Locale>(), Some(&Locale("de-DE")));
    }

    #[test]
    fn clones_share_values() {
        let env = Environment::new().with(Locale("fr-FR"));
        let cloned = env.clone();
        assert!(core::ptr::eq(
            env.get::<Locale>().unwrap(),
            cloned.get::<Locale>().unwrap()
        ));
    }

    #[test]
    fn remove_drops_only_that_type() {
        let mut env = Environment::new().with(Locale("en-GB")).with(7_i64);
        env.remove::<Locale>();
        assert!(!env.contains::<Locale>());
        assert!(env.contains::<i64>());
        assert_eq!(env.get::<Locale>(), None);
    }
}
