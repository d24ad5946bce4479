//! Filter error types
//!
//! Data problems never surface here: a rule that cannot handle a value simply
//! reports `false`. These errors describe misuse of the library itself.

use thiserror::Error;

pub type FilterResult<T> = Result<T, FilterError>;

/// Integration errors raised when a rule is wired up incorrectly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The rule was invoked on a field the record does not have
    #[error("field '{field}' is not present on the record")]
    MissingField { field: String },

    /// A date format template contains specifiers chrono cannot render
    #[error("invalid date format template: '{format}'")]
    InvalidFormat { format: String },
}

impl FilterError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(format: impl Into<String>) -> Self {
        Self::InvalidFormat {
            format: format.into(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: '{value}', expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("filter configuration has already been initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = FilterError::missing_field("email");
        assert_eq!(error.to_string(), "field 'email' is not present on the record");
    }

    #[test]
    fn test_invalid_format_display() {
        let error = FilterError::invalid_format("%Q");
        assert_eq!(error, FilterError::InvalidFormat { format: "%Q".to_string() });
        assert!(error.to_string().contains("%Q"));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::InvalidValue {
            field: "ELIF_FILTER_ENCODING".to_string(),
            value: "ebcdic".to_string(),
            expected: "multibyte or byte".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid value for ELIF_FILTER_ENCODING: 'ebcdic', expected multibyte or byte"
        );
    }
}
