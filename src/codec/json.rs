//! JSON wire format: `selected=["id1","id2"]`, `sort=[{"column":"name","direction":"asc"}]`.

use super::ViewStateCodec;
use crate::model::{SortConfig, SortDirection};
use indexmap::IndexSet;
use serde_json::{json, Value};

/// The default codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    fn sort_entry(value: &Value) -> Option<SortConfig> {
        let obj = value.as_object()?;
        let column = obj.get("column")?.as_str()?;
        if column.is_empty() {
            return None;
        }
        let direction = SortDirection::parse(obj.get("direction")?.as_str()?)?;
        Some(SortConfig::new(column, direction))
    }
}

impl ViewStateCodec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn decode_selected(&self, raw: &str) -> Option<IndexSet<String>> {
        let value: Value = serde_json::from_str(raw).ok()?;
        let items = value.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }

    fn encode_selected(&self, ids: &IndexSet<String>) -> String {
        Value::from(ids.iter().map(String::as_str).collect::<Vec<_>>()).to_string()
    }

    fn decode_sort(&self, raw: &str) -> Option<Vec<SortConfig>> {
        let value: Value = serde_json::from_str(raw).ok()?;
        match &value {
            Value::Array(items) => Some(items.iter().filter_map(Self::sort_entry).collect()),
            // A bare object is the single-sort form
            Value::Object(_) => Some(Self::sort_entry(&value).into_iter().collect()),
            _ => None,
        }
    }

    fn encode_sort(&self, configs: &[SortConfig]) -> String {
        Value::Array(
            configs
                .iter()
                .map(|c| json!({ "column": c.column, "direction": c.direction.as_str() }))
                .collect(),
        )
        .to_string()
    }
}
