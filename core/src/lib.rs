//! Core contracts shared by every `WaterPick` crate.
//!
//! Pickers are assembled from a handful of collaborators that live in other
//! crates. This crate holds the pieces all of them agree on:
//!
//! - [`Environment`], the typed context a picker is rendered in,
//! - [`DefaultPropsRegistry`], process-wide default props keyed by picker name,
//! - [`DateAdapter`], the contract for date arithmetic, parsing and formatting,
//! - [`ForwardedRef`], the slot a picker writes its interactive input into,
//! - [`Callback`] and [`Predicate`], shareable handler types,
//! - [`ConfigError`], raised when a picker variant is misconfigured.

extern crate alloc;

#[macro_use]
mod macros;

pub mod adapter;
pub mod env;
pub mod error;
pub mod forward_ref;
pub mod handler;
pub mod registry;

#[doc(inline)]
pub use adapter::{DateAdapter, DateFormats};
#[doc(inline)]
pub use env::Environment;
#[doc(inline)]
pub use error::ConfigError;
#[doc(inline)]
pub use forward_ref::ForwardedRef;
#[doc(inline)]
pub use handler::{Callback, Predicate};
#[doc(inline)]
pub use registry::{DefaultPropsRegistry, MergeDefaults};
