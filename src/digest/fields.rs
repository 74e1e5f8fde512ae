//! Allow-list field selection
//!
//! Reduces an entity to the handful of fields worth showing in a summary.
//! Selection is shallow: a retained field keeps its value as-is, nested
//! objects and arrays included.

use crate::digest::view::Record;
use once_cell::sync::Lazy;
use serde_json::Value;

/// Fields considered important for display, in display order
pub const IMPORTANT_FIELDS: &[&str] = &[
    "Name",
    "DataStoreName",
    "IntegrationFlow",
    "VariableName",
    "QueueName",
    "State",
    "Status",
    "CreatedAt",
    "LastModifiedAt",
    "LastUpdatedAt",
    "ID",
];

static DEFAULT_SELECTOR: Lazy<FieldSelector> = Lazy::new(FieldSelector::default);

/// An ordered, duplicate-free allow-list of field names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    fields: Vec<String>,
}

impl Default for FieldSelector {
    fn default() -> Self {
        FieldSelector::new(IMPORTANT_FIELDS.iter().copied())
    }
}

impl FieldSelector {
    /// Build a selector; later duplicates of a name are dropped so the
    /// first occurrence fixes its position.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for field in fields {
            let field = field.into();
            if !ordered.contains(&field) {
                ordered.push(field);
            }
        }
        FieldSelector { fields: ordered }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Keep only allow-listed keys, in allow-list order.
    ///
    /// Non-object values come back unchanged, and so does an object that
    /// has none of the allow-listed keys.
    pub fn select(&self, value: &Value) -> Value {
        let Value::Object(obj) = value else {
            return value.clone();
        };

        let picked: Record = self
            .fields
            .iter()
            .filter_map(|field| obj.get(field).map(|v| (field.clone(), v.clone())))
            .collect();

        if picked.is_empty() {
            tracing::debug!(
                fields = obj.len(),
                "no allow-listed fields present, keeping record as-is"
            );
            return value.clone();
        }

        Value::Object(picked)
    }
}

/// Select the important fields of `value` using the default allow-list
pub fn pick_important_fields(value: &Value) -> Value {
    DEFAULT_SELECTOR.select(value)
}
