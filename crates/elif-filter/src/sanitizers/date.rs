//! Date/time sanitizer

use crate::error::{FilterError, FilterResult};
use crate::record::{require, Record};
use crate::traits::SanitizeRule;
use crate::value::{Value, DEFAULT_DATETIME_FORMAT};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value as JsonValue;
use std::fmt::Write;

/// Layouts carrying both a date and a time of day
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
];

/// Date-only layouts, read as midnight
const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%d-%m-%Y",
    "%Y%m%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parse free-form date/time text.
///
/// Calendar-invalid dates such as February 30th are rejected rather than
/// rolled over into the next month.
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(seconds) = input.strip_prefix('@') {
        let seconds: i64 = seconds.parse().ok()?;
        return DateTime::from_timestamp(seconds, 0).map(|dt| dt.naive_utc());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.naive_local());
    }

    DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
        .or_else(|| {
            DATE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(input, layout).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Sanitizes a field into a formatted date/time string.
///
/// The field may hold text in any layout [`parse_datetime`] understands, or a
/// date/time value, which is used as-is. On failure the field is untouched.
#[derive(Debug, Clone)]
pub struct DateSanitizer {
    format: String,
}

impl DateSanitizer {
    /// Sanitize to `%Y-%m-%d %H:%M:%S`
    pub fn new() -> Self {
        Self {
            format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }

    /// Sanitize to a custom chrono strftime template
    pub fn with_format(format: impl Into<String>) -> FilterResult<Self> {
        let format = format.into();
        let has_error = StrftimeItems::new(&format).any(|item| matches!(item, Item::Error));
        // zone specifiers parse fine but cannot render a naive date/time
        let mut rendered = String::new();
        if has_error || write!(rendered, "{}", NaiveDateTime::default().format(&format)).is_err() {
            return Err(FilterError::invalid_format(format));
        }
        Ok(Self { format })
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    fn resolve(&self, value: &Value, field: &str) -> Option<NaiveDateTime> {
        match value {
            Value::DateTime(dt) => Some(*dt),
            value => {
                let Some(text) = value.to_scalar_string() else {
                    tracing::debug!(
                        "datetime cannot parse {} value in field '{}'",
                        value.type_name(),
                        field
                    );
                    return None;
                };
                let parsed = parse_datetime(&text);
                if parsed.is_none() {
                    tracing::debug!("datetime could not parse '{}' in field '{}'", text, field);
                }
                parsed
            }
        }
    }
}

impl Default for DateSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SanitizeRule for DateSanitizer {
    fn sanitize(&self, record: &mut dyn Record, field: &str) -> FilterResult<bool> {
        let value = require(record, field)?;
        let Some(datetime) = self.resolve(&value, field) else {
            return Ok(false);
        };

        let mut formatted = String::new();
        if write!(formatted, "{}", datetime.format(&self.format)).is_err() {
            return Ok(false);
        }

        tracing::trace!("datetime rewrote field '{}'", field);
        record.set(field, Value::String(formatted));
        Ok(true)
    }

    fn rule_name(&self) -> &'static str {
        "datetime"
    }

    fn parameters(&self) -> Option<JsonValue> {
        Some(serde_json::json!({ "format": self.format }))
    }
}
