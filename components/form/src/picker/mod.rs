//! The picker machinery and its three variants.

/// Declares the wrapper-specific entry points of a variant: one type alias
/// and one constructor per wrapper, each registered under the alias name.
macro_rules! picker_entry_points {
    ($props:ident, $options:ident; $($alias:ident => $ctor:ident($wrapper:ident);)+) => {
        $(
            #[doc = concat!(
                "`", stringify!($props), "` rendered through [`", stringify!($wrapper),
                "`](waterpick_layout::", stringify!($wrapper), ")."
            )]
            pub type $alias<A> = $crate::picker::factory::PickerComponent<
                A,
                $props<<A as waterpick_core::DateAdapter>::Date>,
                waterpick_layout::$wrapper,
            >;

            #[doc = concat!(
                "Builds a [`", stringify!($alias), "`], registered as `",
                stringify!($alias), "`."
            )]
            ///
            /// # Errors
            ///
            /// Fails only if the built-in configuration is incomplete.
            pub fn $ctor<A: waterpick_core::DateAdapter>()
            -> Result<$alias<A>, waterpick_core::ConfigError> {
                $crate::picker::factory::make_picker_with_state_and_wrapper(
                    waterpick_layout::$wrapper,
                    $options(stringify!($alias)),
                )
            }
        )+
    };
}

pub mod date;
pub mod date_time;
pub mod factory;
pub mod options;
pub mod props;
pub mod state;
pub mod time;
pub mod toolbar;
pub mod value;
