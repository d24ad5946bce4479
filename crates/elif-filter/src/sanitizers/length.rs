//! Length-based sanitizers that truncate or pad scalar values
//!
//! A value that already satisfies the constraint is left untouched, keeping
//! its original type. Otherwise it is coerced to a string and rewritten.

use crate::error::FilterResult;
use crate::record::{require, Record};
use crate::strings::{PadSide, StringMetrics};
use crate::traits::SanitizeRule;
use crate::value::Value;
use serde_json::Value as JsonValue;

/// How short values are widened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Padding {
    pub pad_string: String,
    pub side: PadSide,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            pad_string: " ".to_string(),
            side: PadSide::Right,
        }
    }
}

impl Padding {
    fn side_name(&self) -> &'static str {
        match self.side {
            PadSide::Left => "left",
            PadSide::Right => "right",
            PadSide::Both => "both",
        }
    }
}

/// Read a field as text, `None` when the value is not scalar
fn scalar_text(record: &dyn Record, field: &str, rule: &str) -> FilterResult<Option<String>> {
    let value = require(record, field)?;
    let text = value.to_scalar_string();
    if text.is_none() {
        tracing::debug!(
            "{} cannot sanitize non-scalar {} value in field '{}'",
            rule,
            value.type_name(),
            field
        );
    }
    Ok(text)
}

/// Fit `text` between `min` and `max` characters, `None` when it already fits.
///
/// Truncation runs first; in byte mode it can land short of `max` when a
/// multibyte character straddles the cut, so the result is padded afterwards.
fn fit(
    metrics: &StringMetrics,
    text: &str,
    min: Option<usize>,
    max: Option<usize>,
    padding: &Padding,
) -> Option<String> {
    let mut fitted = match max {
        Some(max) if metrics.length(text) > max => Some(metrics.truncate(text, max)),
        _ => None,
    };

    if let Some(min) = min {
        let current = fitted.as_deref().unwrap_or(text);
        if metrics.length(current) < min {
            fitted = Some(metrics.pad(current, min, &padding.pad_string, padding.side));
        }
    }
    fitted
}

fn rewrite(
    metrics: &StringMetrics,
    record: &mut dyn Record,
    field: &str,
    rule: &str,
    (min, max): (Option<usize>, Option<usize>),
    padding: &Padding,
) -> FilterResult<bool> {
    let Some(text) = scalar_text(record, field, rule)? else {
        return Ok(false);
    };

    if let Some(fitted) = fit(metrics, &text, min, max, padding) {
        tracing::trace!("{} rewrote field '{}'", rule, field);
        record.set(field, Value::String(fitted));
    }
    Ok(true)
}

/// Truncates a value to at most `max` characters
#[derive(Debug, Clone)]
pub struct MaxLengthSanitizer {
    pub max: usize,
    metrics: StringMetrics,
}

impl MaxLengthSanitizer {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            metrics: StringMetrics::global(),
        }
    }

    pub fn with_metrics(mut self, metrics: StringMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl SanitizeRule for MaxLengthSanitizer {
    fn sanitize(&self, record: &mut dyn Record, field: &str) -> FilterResult<bool> {
        rewrite(
            &self.metrics,
            record,
            field,
            self.rule_name(),
            (None, Some(self.max)),
            &Padding::default(),
        )
    }

    fn rule_name(&self) -> &'static str {
        "strlen_max"
    }

    fn parameters(&self) -> Option<JsonValue> {
        Some(serde_json::json!({ "max": self.max }))
    }
}

/// Pads a value to at least `min` characters
#[derive(Debug, Clone)]
pub struct MinLengthSanitizer {
    pub min: usize,
    pub padding: Padding,
    metrics: StringMetrics,
}

impl MinLengthSanitizer {
    pub fn new(min: usize) -> Self {
        Self {
            min,
            padding: Padding::default(),
            metrics: StringMetrics::global(),
        }
    }

    pub fn pad_with(mut self, pad_string: impl Into<String>, side: PadSide) -> Self {
        self.padding = Padding {
            pad_string: pad_string.into(),
            side,
        };
        self
    }

    pub fn with_metrics(mut self, metrics: StringMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl SanitizeRule for MinLengthSanitizer {
    fn sanitize(&self, record: &mut dyn Record, field: &str) -> FilterResult<bool> {
        rewrite(
            &self.metrics,
            record,
            field,
            self.rule_name(),
            (Some(self.min), None),
            &self.padding,
        )
    }

    fn rule_name(&self) -> &'static str {
        "strlen_min"
    }

    fn parameters(&self) -> Option<JsonValue> {
        Some(serde_json::json!({
            "min": self.min,
            "pad_string": self.padding.pad_string,
            "pad_side": self.padding.side_name(),
        }))
    }
}

/// Pads or truncates a value to exactly `len` characters
#[derive(Debug, Clone)]
pub struct ExactLengthSanitizer {
    pub len: usize,
    pub padding: Padding,
    metrics: StringMetrics,
}

impl ExactLengthSanitizer {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            padding: Padding::default(),
            metrics: StringMetrics::global(),
        }
    }

    pub fn pad_with(mut self, pad_string: impl Into<String>, side: PadSide) -> Self {
        self.padding = Padding {
            pad_string: pad_string.into(),
            side,
        };
        self
    }

    pub fn with_metrics(mut self, metrics: StringMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl SanitizeRule for ExactLengthSanitizer {
    fn sanitize(&self, record: &mut dyn Record, field: &str) -> FilterResult<bool> {
        rewrite(
            &self.metrics,
            record,
            field,
            self.rule_name(),
            (Some(self.len), Some(self.len)),
            &self.padding,
        )
    }

    fn rule_name(&self) -> &'static str {
        "strlen"
    }

    fn parameters(&self) -> Option<JsonValue> {
        Some(serde_json::json!({
            "len": self.len,
            "pad_string": self.padding.pad_string,
            "pad_side": self.padding.side_name(),
        }))
    }
}

/// Pads short values up to `min` and truncates long values down to `max`
#[derive(Debug, Clone)]
pub struct LengthBetweenSanitizer {
    pub min: usize,
    pub max: usize,
    pub padding: Padding,
    metrics: StringMetrics,
}

impl LengthBetweenSanitizer {
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            padding: Padding::default(),
            metrics: StringMetrics::global(),
        }
    }

    pub fn pad_with(mut self, pad_string: impl Into<String>, side: PadSide) -> Self {
        self.padding = Padding {
            pad_string: pad_string.into(),
            side,
        };
        self
    }

    pub fn with_metrics(mut self, metrics: StringMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl SanitizeRule for LengthBetweenSanitizer {
    fn sanitize(&self, record: &mut dyn Record, field: &str) -> FilterResult<bool> {
        rewrite(
            &self.metrics,
            record,
            field,
            self.rule_name(),
            (Some(self.min), Some(self.max)),
            &self.padding,
        )
    }

    fn rule_name(&self) -> &'static str {
        "strlen_between"
    }

    fn parameters(&self) -> Option<JsonValue> {
        Some(serde_json::json!({
            "min": self.min,
            "max": self.max,
            "pad_string": self.padding.pad_string,
            "pad_side": self.padding.side_name(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn run(rule: &dyn SanitizeRule, value: impl Into<Value>) -> (bool, Value) {
        let mut record: HashMap<String, Value> = HashMap::new();
        record.insert("field".to_string(), value.into());
        let ok = rule.sanitize(&mut record, "field").unwrap();
        (ok, record.remove("field").unwrap())
    }

    #[test]
    fn test_max_length_truncates() {
        let rule = MaxLengthSanitizer::new(3).with_metrics(StringMetrics::multibyte());

        assert_eq!(run(&rule, "héllo"), (true, Value::from("hél")));
        assert_eq!(run(&rule, "abc"), (true, Value::from("abc")));
    }

    #[test]
    fn test_max_length_keeps_short_scalars_typed() {
        let rule = MaxLengthSanitizer::new(5).with_metrics(StringMetrics::multibyte());

        assert_eq!(run(&rule, 123), (true, Value::from(123)));
        assert_eq!(run(&rule, 1234567), (true, Value::from("12345")));
    }

    #[test]
    fn test_non_scalar_is_left_unchanged() {
        let rule = MaxLengthSanitizer::new(1);
        let list = Value::Array(vec![Value::from("a"), Value::from("b")]);

        assert_eq!(run(&rule, list.clone()), (false, list));
        assert_eq!(run(&rule, Value::Null), (false, Value::Null));
    }

    #[test]
    fn test_min_length_pads() {
        let rule = MinLengthSanitizer::new(5).with_metrics(StringMetrics::multibyte());
        assert_eq!(run(&rule, "hé"), (true, Value::from("hé   ")));

        let rule = MinLengthSanitizer::new(5)
            .pad_with("0", PadSide::Left)
            .with_metrics(StringMetrics::multibyte());
        assert_eq!(run(&rule, 42), (true, Value::from("00042")));
        assert_eq!(run(&rule, "123456"), (true, Value::from("123456")));
    }

    #[test]
    fn test_exact_length_pads_or_truncates() {
        let rule = ExactLengthSanitizer::new(6)
            .pad_with("*", PadSide::Both)
            .with_metrics(StringMetrics::multibyte());

        assert_eq!(run(&rule, "abc"), (true, Value::from("*abc**")));
        assert_eq!(run(&rule, "abcdefgh"), (true, Value::from("abcdef")));
        assert_eq!(run(&rule, "abcdef"), (true, Value::from("abcdef")));
    }

    #[test]
    fn test_length_between() {
        let rule = LengthBetweenSanitizer::new(3, 5)
            .pad_with(".", PadSide::Right)
            .with_metrics(StringMetrics::multibyte());

        assert_eq!(run(&rule, "a"), (true, Value::from("a..")));
        assert_eq!(run(&rule, "abcd"), (true, Value::from("abcd")));
        assert_eq!(run(&rule, "abcdefg"), (true, Value::from("abcde")));
    }

    #[test]
    fn test_byte_mode_truncation_stays_within_max() {
        let rule = MaxLengthSanitizer::new(2).with_metrics(StringMetrics::byte());
        assert_eq!(run(&rule, "héllo"), (true, Value::from("h")));

        let rule = MaxLengthSanitizer::new(3).with_metrics(StringMetrics::byte());
        assert_eq!(run(&rule, "héllo"), (true, Value::from("hé")));
    }

    #[test]
    fn test_byte_mode_exact_length_pads_after_short_truncation() {
        let rule = ExactLengthSanitizer::new(2).with_metrics(StringMetrics::byte());
        assert_eq!(run(&rule, "héllo"), (true, Value::from("h ")));

        let rule = ExactLengthSanitizer::new(4)
            .pad_with("é", PadSide::Right)
            .with_metrics(StringMetrics::byte());
        assert_eq!(run(&rule, "x"), (true, Value::from("xé ")));
    }

    #[test]
    fn test_parameters() {
        let rule = MinLengthSanitizer::new(4).pad_with("-", PadSide::Both);
        assert_eq!(
            rule.parameters(),
            Some(serde_json::json!({ "min": 4, "pad_string": "-", "pad_side": "both" }))
        );
    }
}
