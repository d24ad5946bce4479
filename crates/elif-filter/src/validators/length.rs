//! Length-based validators for scalar values
//!
//! Lengths are measured with [`StringMetrics`], so multibyte text is counted
//! by character rather than by byte unless the process runs in byte mode.

use crate::error::FilterResult;
use crate::record::{require, Record};
use crate::strings::StringMetrics;
use crate::traits::ValidateRule;
use serde_json::Value as JsonValue;

/// Measure a field's scalar value, or `None` when it is not scalar
pub(crate) fn measure(
    metrics: &StringMetrics,
    record: &dyn Record,
    field: &str,
    rule: &str,
) -> FilterResult<Option<usize>> {
    let value = require(record, field)?;
    match value.to_scalar_string() {
        Some(text) => Ok(Some(metrics.length(&text))),
        None => {
            tracing::debug!(
                "{} rejected non-scalar {} value in field '{}'",
                rule,
                value.type_name(),
                field
            );
            Ok(None)
        }
    }
}

/// Validates that a value is no longer than `max` characters
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    pub max: usize,
    metrics: StringMetrics,
}

impl MaxLengthValidator {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            metrics: StringMetrics::global(),
        }
    }

    /// Measure with a fixed encoding mode instead of the process-wide one
    pub fn with_metrics(mut self, metrics: StringMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl ValidateRule for MaxLengthValidator {
    fn validate(&self, record: &dyn Record, field: &str) -> FilterResult<bool> {
        let length = measure(&self.metrics, record, field, self.rule_name())?;
        Ok(length.is_some_and(|len| len <= self.max))
    }

    fn rule_name(&self) -> &'static str {
        "strlen_max"
    }

    fn parameters(&self) -> Option<JsonValue> {
        Some(serde_json::json!({ "max": self.max }))
    }
}

/// Validates that a value is at least `min` characters long
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    pub min: usize,
    metrics: StringMetrics,
}

impl MinLengthValidator {
    pub fn new(min: usize) -> Self {
        Self {
            min,
            metrics: StringMetrics::global(),
        }
    }

    pub fn with_metrics(mut self, metrics: StringMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl ValidateRule for MinLengthValidator {
    fn validate(&self, record: &dyn Record, field: &str) -> FilterResult<bool> {
        let length = measure(&self.metrics, record, field, self.rule_name())?;
        Ok(length.is_some_and(|len| len >= self.min))
    }

    fn rule_name(&self) -> &'static str {
        "strlen_min"
    }

    fn parameters(&self) -> Option<JsonValue> {
        Some(serde_json::json!({ "min": self.min }))
    }
}

/// Validates that a value is exactly `len` characters long
#[derive(Debug, Clone)]
pub struct ExactLengthValidator {
    pub len: usize,
    metrics: StringMetrics,
}

impl ExactLengthValidator {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            metrics: StringMetrics::global(),
        }
    }

    pub fn with_metrics(mut self, metrics: StringMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl ValidateRule for ExactLengthValidator {
    fn validate(&self, record: &dyn Record, field: &str) -> FilterResult<bool> {
        let length = measure(&self.metrics, record, field, self.rule_name())?;
        Ok(length == Some(self.len))
    }

    fn rule_name(&self) -> &'static str {
        "strlen"
    }

    fn parameters(&self) -> Option<JsonValue> {
        Some(serde_json::json!({ "len": self.len }))
    }
}

/// Validates that a value's length falls within `min..=max`
#[derive(Debug, Clone)]
pub struct LengthBetweenValidator {
    pub min: usize,
    pub max: usize,
    metrics: StringMetrics,
}

impl LengthBetweenValidator {
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            metrics: StringMetrics::global(),
        }
    }

    pub fn with_metrics(mut self, metrics: StringMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl ValidateRule for LengthBetweenValidator {
    fn validate(&self, record: &dyn Record, field: &str) -> FilterResult<bool> {
        let length = measure(&self.metrics, record, field, self.rule_name())?;
        Ok(length.is_some_and(|len| (self.min..=self.max).contains(&len)))
    }

    fn rule_name(&self) -> &'static str {
        "strlen_between"
    }

    fn parameters(&self) -> Option<JsonValue> {
        Some(serde_json::json!({ "min": self.min, "max": self.max }))
    }
}
