//! Field removal

use crate::error::FilterResult;
use crate::record::Record;
use crate::traits::SanitizeRule;

/// Deletes the field's slot from the record. Always succeeds, including when
/// the field is already gone.
#[derive(Debug, Clone, Default)]
pub struct FieldRemover;

impl FieldRemover {
    pub fn new() -> Self {
        Self
    }
}

impl SanitizeRule for FieldRemover {
    fn sanitize(&self, record: &mut dyn Record, field: &str) -> FilterResult<bool> {
        if record.remove(field).is_some() {
            tracing::trace!("remove deleted field '{}'", field);
        }
        Ok(true)
    }

    fn rule_name(&self) -> &'static str {
        "remove"
    }
}
