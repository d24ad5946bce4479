//! International Standard Book Number validator

use crate::error::FilterResult;
use crate::isbn::{is_valid_isbn, normalize_isbn};
use crate::record::{require, Record};
use crate::traits::ValidateRule;
use crate::value::Value;

/// Validates that a value is an ISBN-10 or ISBN-13 with a correct checksum.
///
/// Hyphens and spaces are stripped before checking; the record itself is not
/// modified.
#[derive(Debug, Clone, Default)]
pub struct IsbnValidator;

impl IsbnValidator {
    pub fn new() -> Self {
        Self
    }
}

impl ValidateRule for IsbnValidator {
    fn validate(&self, record: &dyn Record, field: &str) -> FilterResult<bool> {
        let candidate = match require(record, field)? {
            Value::String(s) => normalize_isbn(&s),
            Value::Integer(i) if i >= 0 => i.to_string(),
            other => {
                tracing::debug!("isbn rejected {} value in field '{}'", other.type_name(), field);
                return Ok(false);
            }
        };

        Ok(is_valid_isbn(&candidate))
    }

    fn rule_name(&self) -> &'static str {
        "isbn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use std::collections::HashMap;

    fn check(value: impl Into<Value>) -> bool {
        let mut record = HashMap::new();
        record.insert("isbn".to_string(), value.into());
        IsbnValidator::new().validate(&record, "isbn").unwrap()
    }

    #[test]
    fn test_valid_isbns() {
        assert!(check("9780306406157"));
        assert!(check("0306406152"));
        assert!(check("155860832X"));
    }

    #[test]
    fn test_invalid_checksums() {
        assert!(!check("9780306406158"));
        assert!(!check("0306406153"));
    }

    #[test]
    fn test_separators_are_ignored() {
        assert!(check("978-0-306-40615-7"));
        assert!(check("0 306 40615 2"));
        assert!(check("1-55860-832-X"));
    }

    #[test]
    fn test_multibyte_candidate_of_isbn_byte_length() {
        // ten bytes, but not ten digits
        assert!(!check("03064061é"));
        assert!(!check("ééééé"));
    }

    #[test]
    fn test_integer_value() {
        assert!(check(9780306406157i64));
        assert!(!check(9780306406158i64));
    }

    #[test]
    fn test_wrong_shapes_are_invalid() {
        assert!(!check(""));
        assert!(!check("isbn"));
        assert!(!check("97803064061"));
        assert!(!check("03064O6152"));
        assert!(!check(Value::Null));
        assert!(!check(true));
        assert!(!check(1.5));
        assert!(!check(Value::Array(vec![Value::from("9780306406157")])));
    }

    #[test]
    fn test_missing_field() {
        let record: HashMap<String, Value> = HashMap::new();
        assert_eq!(
            IsbnValidator::new().validate(&record, "isbn"),
            Err(FilterError::missing_field("isbn"))
        );
    }
}
