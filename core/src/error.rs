//! Errors raised while assembling a picker.
//!
//! Only construction can fail. Once a picker exists, unparseable input and
//! validation failures are surfaced as data, never as errors.

use alloc::string::String;

/// A picker variant was configured without one of its required parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The variant has an empty name, so default props cannot be scoped to it.
    #[error("picker variant name must not be empty")]
    MissingName,
    /// The variant has no validation function.
    #[error("picker variant `{name}` has no validation function")]
    MissingValidation {
        /// Name of the offending variant.
        name: String,
    },
    /// The variant has no props interceptor.
    #[error("picker variant `{name}` has no props interceptor")]
    MissingInterceptProps {
        /// Name of the offending variant.
        name: String,
    },
    /// The variant has no default toolbar.
    #[error("picker variant `{name}` has no default toolbar")]
    MissingToolbar {
        /// Name of the offending variant.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::ConfigError;

    #[test]
    fn messages_name_the_variant() {
        let error = ConfigError::MissingValidation {
            name: "DatePicker".into(),
        };
        assert_eq!(
            error.to_string(),
            "picker variant `DatePicker` has no validation function"
        );
        assert_eq!(
            ConfigError::MissingName.to_string(),
            "picker variant name must not be empty"
        );
    }
}
