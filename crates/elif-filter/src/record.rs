//! Record access used by every rule

use crate::error::{FilterError, FilterResult};
use crate::value::Value;
use std::collections::{BTreeMap, HashMap};

/// A mutable collection of named fields.
///
/// Rules only ever see a record through this trait, so any key-value store
/// can be filtered by implementing it.
pub trait Record {
    /// Read a field, `None` when the slot does not exist
    fn get(&self, field: &str) -> Option<Value>;

    /// Write a field, creating the slot if absent
    fn set(&mut self, field: &str, value: Value);

    /// Delete a field's slot, returning its previous value
    fn remove(&mut self, field: &str) -> Option<Value>;

    fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }
}

/// Read a field that must exist, treating its absence as a wiring mistake
pub(crate) fn require(record: &dyn Record, field: &str) -> FilterResult<Value> {
    record
        .get(field)
        .ok_or_else(|| FilterError::missing_field(field))
}

impl Record for HashMap<String, Value> {
    fn get(&self, field: &str) -> Option<Value> {
        HashMap::get(self, field).cloned()
    }

    fn set(&mut self, field: &str, value: Value) {
        self.insert(field.to_string(), value);
    }

    fn remove(&mut self, field: &str) -> Option<Value> {
        HashMap::remove(self, field)
    }

    fn contains(&self, field: &str) -> bool {
        self.contains_key(field)
    }
}

impl Record for BTreeMap<String, Value> {
    fn get(&self, field: &str) -> Option<Value> {
        BTreeMap::get(self, field).cloned()
    }

    fn set(&mut self, field: &str, value: Value) {
        self.insert(field.to_string(), value);
    }

    fn remove(&mut self, field: &str) -> Option<Value> {
        BTreeMap::remove(self, field)
    }

    fn contains(&self, field: &str) -> bool {
        self.contains_key(field)
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn get(&self, field: &str) -> Option<Value> {
        serde_json::Map::get(self, field).cloned().map(Value::from)
    }

    fn set(&mut self, field: &str, value: Value) {
        self.insert(field.to_string(), value.into());
    }

    fn remove(&mut self, field: &str) -> Option<Value> {
        serde_json::Map::remove(self, field).map(Value::from)
    }

    fn contains(&self, field: &str) -> bool {
        self.contains_key(field)
    }
}
