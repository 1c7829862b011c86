//! Default props keyed by picker name.
//!
//! Every picker variant carries a name (`"DatePicker"`, `"MobileTimePicker"`,
//! ...). Before a picker processes its props it looks the name up in the
//! [`DefaultPropsRegistry`] installed in the [`Environment`](crate::Environment)
//! and fills every field the caller left unset from the registered defaults.
//! This lets an application change defaults for a whole variant without
//! touching its call sites.
//!
//! # Lifecycle
//!
//! 1. Build a registry and [`register`](DefaultPropsRegistry::register)
//!    defaults under picker names.
//! 2. Install it with `env.insert(registry)`.
//! 3. Pickers rendered in that environment call
//!    [`apply`](DefaultPropsRegistry::apply) at the start of every cycle.
//!
//! The registry is immutable once installed; replace it to change defaults.

use alloc::{collections::BTreeMap, rc::Rc, string::String};
use core::any::{Any, type_name};

use tracing::warn;

/// Props that can take their unset fields from a set of defaults.
///
/// Caller values always win; defaults only fill gaps. Merging is shallow:
/// a field that is set is kept as a whole.
pub trait MergeDefaults: Sized {
    /// Fills the unset fields of `self` from `defaults`.
    #[must_use]
    fn merge_defaults(self, defaults: &Self) -> Self;
}

/// Registry mapping picker names to default props.
#[derive(Debug, Clone, Default)]
pub struct DefaultPropsRegistry {
    entries: BTreeMap<String, Rc<dyn Any>>,
}

impl DefaultPropsRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `defaults` under `name`, replacing any previous entry.
    pub fn register<T: 'static>(&mut self, name: impl Into<String>, defaults: T) {
        self.entries.insert(name.into(), Rc::new(defaults));
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with<T: 'static>(mut self, name: impl Into<String>, defaults: T) -> Self {
        self.register(name, defaults);
        self
    }

    /// Returns the defaults registered under `name` when they have type `T`.
    ///
    /// An entry of a different type is ignored and reported through `tracing`.
    #[must_use]
    pub fn lookup<T: 'static>(&self, name: &str) -> Option<&T> {
        let entry = self.entries.get(name)?;
        let typed = entry.downcast_ref::<T>();
        if typed.is_none() {
            warn!(
                picker = name,
                expected = type_name::<T>(),
                "ignoring default props registered with a different type"
            );
        }
        typed
    }

    /// Fills the unset fields of `props` from the defaults registered under `name`.
    #[must_use]
    pub fn apply<T: MergeDefaults + 'static>(&self, name: &str, props: T) -> T {
        match self.lookup::<T>(name) {
            Some(defaults) => props.merge_defaults(defaults),
            None => props,
        }
    }

    /// Removes the entry registered under `name`.
    pub fn unregister(&mut self, name: &str) {
        self.entries.remove(name);
    }

    /// Returns `true` when an entry exists under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over the registered names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> MergeDefaults for Option<T> {
    fn merge_defaults(self, defaults: &Self) -> Self {
        self.or_else(|| defaults.clone())
    }
}

impl MergeDefaults for () {
    fn merge_defaults(self, _defaults: &Self) -> Self {}
}
