//! Strict equality validator

use crate::error::FilterResult;
use crate::record::{require, Record};
use crate::traits::ValidateRule;
use crate::value::Value;
use serde_json::Value as JsonValue;

/// Validates that a field is identical to a fixed value, in both type and
/// value. `"1"` does not equal `1`.
#[derive(Debug, Clone)]
pub struct StrictEqualValidator {
    pub other: Value,
}

impl StrictEqualValidator {
    pub fn new(other: impl Into<Value>) -> Self {
        Self {
            other: other.into(),
        }
    }
}

impl ValidateRule for StrictEqualValidator {
    fn validate(&self, record: &dyn Record, field: &str) -> FilterResult<bool> {
        Ok(require(record, field)?.same_as(&self.other))
    }

    fn rule_name(&self) -> &'static str {
        "strict_equal_to_value"
    }

    fn parameters(&self) -> Option<JsonValue> {
        Some(serde_json::json!({ "value": JsonValue::from(self.other.clone()) }))
    }
}
