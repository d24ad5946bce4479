//! Core rule traits for the elif filter system

use crate::error::FilterResult;
use crate::record::Record;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

/// A predicate over one field of a record. Never mutates the record.
pub trait ValidateRule: Send + Sync {
    /// Check the field's current value.
    ///
    /// Returns `Ok(false)` for values the rule cannot accept and `Err` only
    /// when the field does not exist on the record.
    fn validate(&self, record: &dyn Record, field: &str) -> FilterResult<bool>;

    /// Get the rule name
    fn rule_name(&self) -> &'static str;

    /// Get the rule's arguments as JSON
    fn parameters(&self) -> Option<JsonValue> {
        None
    }
}

/// A transformation of one field of a record, applied in place
pub trait SanitizeRule: Send + Sync {
    /// Rewrite the field's value, returning whether sanitization succeeded.
    ///
    /// On `Ok(false)` the field is left as it was.
    fn sanitize(&self, record: &mut dyn Record, field: &str) -> FilterResult<bool>;

    /// Get the rule name
    fn rule_name(&self) -> &'static str;

    /// Get the rule's arguments as JSON
    fn parameters(&self) -> Option<JsonValue> {
        None
    }
}

/// Either kind of rule, so callers can hold and apply them uniformly
#[derive(Clone)]
pub enum Rule {
    Validate(Arc<dyn ValidateRule>),
    Sanitize(Arc<dyn SanitizeRule>),
}

impl Rule {
    pub fn validate<R>(rule: R) -> Self
    where
        R: ValidateRule + 'static,
    {
        Rule::Validate(Arc::new(rule))
    }

    pub fn sanitize<R>(rule: R) -> Self
    where
        R: SanitizeRule + 'static,
    {
        Rule::Sanitize(Arc::new(rule))
    }

    /// Run the rule against a field
    pub fn apply(&self, record: &mut dyn Record, field: &str) -> FilterResult<bool> {
        match self {
            Rule::Validate(rule) => rule.validate(record, field),
            Rule::Sanitize(rule) => rule.sanitize(record, field),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Validate(rule) => rule.rule_name(),
            Rule::Sanitize(rule) => rule.rule_name(),
        }
    }

    pub fn parameters(&self) -> Option<JsonValue> {
        match self {
            Rule::Validate(rule) => rule.parameters(),
            Rule::Sanitize(rule) => rule.parameters(),
        }
    }

    pub fn is_sanitizer(&self) -> bool {
        matches!(self, Rule::Sanitize(_))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_sanitizer() { "sanitize" } else { "validate" };
        f.debug_struct("Rule")
            .field("kind", &kind)
            .field("name", &self.name())
            .field("parameters", &self.parameters())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use crate::value::Value;
    use std::collections::HashMap;

    struct NonEmpty;

    impl ValidateRule for NonEmpty {
        fn validate(&self, record: &dyn Record, field: &str) -> FilterResult<bool> {
            let value = record
                .get(field)
                .ok_or_else(|| FilterError::missing_field(field))?;
            Ok(value.as_str().map(|s| !s.is_empty()).unwrap_or(false))
        }

        fn rule_name(&self) -> &'static str {
            "non_empty"
        }
    }

    struct Uppercase;

    impl SanitizeRule for Uppercase {
        fn sanitize(&self, record: &mut dyn Record, field: &str) -> FilterResult<bool> {
            match record.get(field) {
                Some(Value::String(s)) => {
                    record.set(field, Value::String(s.to_uppercase()));
                    Ok(true)
                }
                Some(_) => Ok(false),
                None => Err(FilterError::missing_field(field)),
            }
        }

        fn rule_name(&self) -> &'static str {
            "uppercase"
        }

        fn parameters(&self) -> Option<JsonValue> {
            Some(serde_json::json!({ "locale": "none" }))
        }
    }

    #[test]
    fn test_rule_dispatch() {
        let mut record: HashMap<String, Value> = HashMap::new();
        record.insert("name".to_string(), Value::from("ada"));

        let rules = vec![Rule::sanitize(Uppercase), Rule::validate(NonEmpty)];
        for rule in &rules {
            assert_eq!(rule.apply(&mut record, "name"), Ok(true));
        }
        assert_eq!(record.get("name"), Some(&Value::from("ADA")));
    }

    #[test]
    fn test_rule_metadata() {
        let rule = Rule::sanitize(Uppercase);
        assert_eq!(rule.name(), "uppercase");
        assert!(rule.is_sanitizer());
        assert_eq!(rule.parameters(), Some(serde_json::json!({ "locale": "none" })));

        let rule = Rule::validate(NonEmpty);
        assert!(!rule.is_sanitizer());
        assert_eq!(rule.parameters(), None);
        assert!(format!("{:?}", rule).contains("non_empty"));
    }

    #[test]
    fn test_missing_field_surfaces_as_error() {
        let mut record: HashMap<String, Value> = HashMap::new();
        let result = Rule::validate(NonEmpty).apply(&mut record, "name");
        assert_eq!(result, Err(FilterError::missing_field("name")));
    }
}
