//! Per-variant configuration: name, validation, prop interception and the
//! default toolbar.

use core::fmt;

use alloc::{rc::Rc, string::String};
use waterpick_core::{ConfigError, DateAdapter};

use super::{
    props::{CommonProps, MergedProps},
    toolbar::Toolbar,
    value::PickerValue,
};
use crate::validation::ValidationError;

/// Computes the validation outcome of a value under merged props.
pub type ValidationFn<A, V> = Rc<
    dyn Fn(&PickerValue<<A as DateAdapter>::Date>, &MergedProps<A, V>) -> Option<ValidationError>,
>;

/// Normalizes caller props before validation and parsing.
pub type InterceptFn<A, V> = Rc<dyn Fn(&A, CommonProps<A>, V) -> InterceptedProps<A, V>>;

/// What an interceptor returns. The input format is always resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct InterceptedProps<A: DateAdapter, V> {
    /// Shared props, possibly adjusted.
    pub common: CommonProps<A>,
    /// Variant props with the variant's defaults filled in.
    pub variant: V,
    /// The input format to use.
    pub input_format: String,
}

/// Builder for a [`VariantConfig`].
///
/// Every field is required; [`resolve`](Self::resolve) reports the first one
/// missing so misconfiguration surfaces when the picker is built.
pub struct PickerOptions<A: DateAdapter, V> {
    name: String,
    validation: Option<ValidationFn<A, V>>,
    intercept_props: Option<InterceptFn<A, V>>,
    default_toolbar: Option<Toolbar<A>>,
}

impl<A: DateAdapter, V> PickerOptions<A, V> {
    /// Starts a configuration for the variant registered as `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validation: None,
            intercept_props: None,
            default_toolbar: None,
        }
    }

    /// Sets the validation function.
    #[must_use]
    pub fn validation(
        mut self,
        validate: impl Fn(&PickerValue<A::Date>, &MergedProps<A, V>) -> Option<ValidationError>
        + 'static,
    ) -> Self {
        self.validation = Some(Rc::new(validate));
        self
    }

    /// Sets the prop interceptor.
    #[must_use]
    pub fn intercept_props(
        mut self,
        intercept: impl Fn(&A, CommonProps<A>, V) -> InterceptedProps<A, V> + 'static,
    ) -> Self {
        self.intercept_props = Some(Rc::new(intercept));
        self
    }

    /// Sets the toolbar used when the caller provides none.
    #[must_use]
    pub fn default_toolbar(mut self, toolbar: Toolbar<A>) -> Self {
        self.default_toolbar = Some(toolbar);
        self
    }

    /// Checks that every field is set.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first missing field.
    pub fn resolve(self) -> Result<VariantConfig<A, V>, ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::MissingName);
        }
        let Some(validation) = self.validation else {
            return Err(ConfigError::MissingValidation { name: self.name });
        };
        let Some(intercept_props) = self.intercept_props else {
            return Err(ConfigError::MissingInterceptProps { name: self.name });
        };
        let Some(default_toolbar) = self.default_toolbar else {
            return Err(ConfigError::MissingToolbar { name: self.name });
        };
        Ok(VariantConfig {
            name: self.name,
            validation,
            intercept_props,
            default_toolbar,
        })
    }
}

impl<A: DateAdapter, V> fmt::Debug for PickerOptions<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerOptions")
            .field("name", &self.name)
            .field("validation", &self.validation.is_some())
            .field("intercept_props", &self.intercept_props.is_some())
            .field("default_toolbar", &self.default_toolbar.is_some())
            .finish()
    }
}

/// A complete variant configuration, created once and shared by every
/// picker of that variant.
pub struct VariantConfig<A: DateAdapter, V> {
    /// Registry name.
    pub name: String,
    /// Validation function.
    pub validation: ValidationFn<A, V>,
    /// Prop interceptor.
    pub intercept_props: InterceptFn<A, V>,
    /// Toolbar used when the caller provides none.
    pub default_toolbar: Toolbar<A>,
}

impl<A: DateAdapter, V> Clone for VariantConfig<A, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            validation: Rc::clone(&self.validation),
            intercept_props: Rc::clone(&self.intercept_props),
            default_toolbar: self.default_toolbar.clone(),
        }
    }
}

impl<A: DateAdapter, V> fmt::Debug for VariantConfig<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantConfig")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use waterpick_core::ConfigError;
    use waterpick_time::TimeAdapter;

    use super::{InterceptedProps, PickerOptions};
    use crate::picker::toolbar::{Toolbar, ToolbarContent};

    fn toolbar() -> Toolbar<TimeAdapter> {
        Toolbar::new(|_, _| ToolbarContent {
            title: "T".into(),
            text: String::new(),
            landscape: false,
            error: false,
        })
    }

    fn complete() -> PickerOptions<TimeAdapter, ()> {
        PickerOptions::new("TestPicker")
            .validation(|_, _| None)
            .intercept_props(|_, common, variant| InterceptedProps {
                common,
                variant,
                input_format: "YYYY".into(),
            })
            .default_toolbar(toolbar())
    }

    #[test]
    fn complete_options_resolve() {
        let config = complete().resolve().unwrap();
        assert_eq!(config.name, "TestPicker");
    }

    #[test]
    fn missing_validation_is_reported() {
        let options = PickerOptions::<TimeAdapter, ()>::new("TestPicker")
            .intercept_props(|_, common, variant| InterceptedProps {
                common,
                variant,
                input_format: String::new(),
            })
            .default_toolbar(toolbar());
        assert_eq!(
            options.resolve().unwrap_err(),
            ConfigError::MissingValidation {
                name: "TestPicker".into()
            }
        );
    }

    #[test]
    fn missing_toolbar_and_interceptor_are_reported() {
        let no_toolbar = PickerOptions::<TimeAdapter, ()>::new("A")
            .validation(|_, _| None)
            .intercept_props(|_, common, variant| InterceptedProps {
                common,
                variant,
                input_format: String::new(),
            });
        assert_eq!(
            no_toolbar.resolve().unwrap_err(),
            ConfigError::MissingToolbar { name: "A".into() }
        );

        let no_interceptor = PickerOptions::<TimeAdapter, ()>::new("B")
            .validation(|_, _| None)
            .default_toolbar(toolbar());
        assert_eq!(
            no_interceptor.resolve().unwrap_err(),
            ConfigError::MissingInterceptProps { name: "B".into() }
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let options = PickerOptions::<TimeAdapter, ()>::new("  ");
        assert_eq!(options.resolve().unwrap_err(), ConfigError::MissingName);
    }
}
