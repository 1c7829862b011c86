/// Implements a basic `Debug` trait for types using their type name.
///
/// Handler wrappers hold closures, so there is nothing more useful to print
/// than the type itself.
#[macro_export]
macro_rules! impl_debug {
    (impl<$($generic:ident),*> $ty:ty) => {
        impl<$($generic: ?Sized),*> core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(core::any::type_name::<Self>())
            }
        }
    };
    ($ty:ty) => {
        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(core::any::type_name::<Self>())
            }
        }
    };
}

/// Implements [`MergeDefaults`](crate::MergeDefaults) for a props struct whose
/// fields are all `Option`s.
///
/// Each field keeps the caller's value when it is set and falls back to a
/// clone of the default otherwise.
///
/// # Usage
///
/// ```ignore
/// merge_defaults!(impl<D: Clone> DatePickerProps<D> {
///     min_date,
///     max_date,
/// });
///
/// merge_defaults!(MobileWrapperProps { ok_text, cancel_text });
/// ```
#[macro_export]
macro_rules! merge_defaults {
    (impl<$($generic:ident: $bound:path),*> $ty:ty { $($field:ident),* $(,)? }) => {
        impl<$($generic: $bound),*> $crate::registry::MergeDefaults for $ty {
            fn merge_defaults(self, defaults: &Self) -> Self {
                Self {
                    $($field: self.$field.or_else(|| defaults.$field.clone()),)*
                }
            }
        }
    };
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::registry::MergeDefaults for $ty {
            fn merge_defaults(self, defaults: &Self) -> Self {
                Self {
                    $($field: self.$field.or_else(|| defaults.$field.clone()),)*
                }
            }
        }
    };
}
