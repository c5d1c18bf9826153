//! Sort-to-query compiler.
//!
//! Turns abstract sort configs into the backend's `orderBy` structure:
//!
//! | column            | output                                        |
//! |-------------------|-----------------------------------------------|
//! | `name`            | `{"name": "asc"}`                             |
//! | `severity`        | `{"severityOrder": "asc"}` (remapped)         |
//! | `dueDate`         | `{"dueDate": {"sort": "asc", "nulls": "last"}}` |
//! | `customer.name`   | `{"customer": {"name": "asc"}}`               |
//! | `assignee.name`   | `{"assignee": {"name": {"sort": "asc", "nulls": "last"}}}` |
//! | `a.b.c.d`         | `{"a.b.c.d": "asc"}` (literal fallback)       |

use crate::config::CompilerConfig;
use crate::model::{SortConfig, SortDirection};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Deepest dotted path compiled into nested objects.
const MAX_NESTED_DEPTH: usize = 3;

/// Compiled ordering. A single sort is sent as a bare object, several as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OrderBy {
    Single(Value),
    Many(Vec<Value>),
}

impl OrderBy {
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Single(value) => value.clone(),
            Self::Many(values) => Value::Array(values.clone()),
        }
    }
}

/// Target of a single-segment column remap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRemap {
    pub field: String,
    pub nulls_last: bool,
}

/// Compiles [`SortConfig`] sequences into [`OrderBy`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortQueryCompiler {
    remaps: IndexMap<String, FieldRemap>,
    nulls_last_relations: Vec<String>,
}

impl Default for SortQueryCompiler {
    fn default() -> Self {
        Self::from_config(&CompilerConfig::default())
    }
}

impl SortQueryCompiler {
    /// A compiler with no remaps and no nulls-last relations.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            remaps: IndexMap::new(),
            nulls_last_relations: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &CompilerConfig) -> Self {
        let remaps = config
            .remaps
            .iter()
            .map(|r| {
                (
                    r.column.clone(),
                    FieldRemap {
                        field: r.field.clone().unwrap_or_else(|| r.column.clone()),
                        nulls_last: r.nulls_last,
                    },
                )
            })
            .collect();
        Self {
            remaps,
            nulls_last_relations: config.nulls_last_relations.clone(),
        }
    }

    /// Register or replace a remap for a single-segment column.
    #[must_use]
    pub fn with_remap(mut self, column: impl Into<String>, remap: FieldRemap) -> Self {
        self.remaps.insert(column.into(), remap);
        self
    }

    /// Mark a relation whose nested fields sort nulls last.
    #[must_use]
    pub fn with_nulls_last_relation(mut self, relation: impl Into<String>) -> Self {
        self.nulls_last_relations.push(relation.into());
        self
    }

    /// Compile a sort sequence. `None` when there is nothing to sort by.
    #[must_use]
    pub fn compile(&self, configs: &[SortConfig]) -> Option<OrderBy> {
        match configs {
            [] => None,
            [single] => Some(OrderBy::Single(self.compile_one(single))),
            many => Some(OrderBy::Many(
                many.iter().map(|c| self.compile_one(c)).collect(),
            )),
        }
    }

    /// Compile one config into an ordering object.
    #[must_use]
    pub fn compile_one(&self, config: &SortConfig) -> Value {
        let segments: Vec<&str> = config.column.split('.').collect();
        let valid_path = segments.iter().all(|s| !s.is_empty());

        match segments.as_slice() {
            [field] => match self.remaps.get(*field) {
                Some(remap) => object(&remap.field, leaf(config.direction, remap.nulls_last)),
                None => object(field, leaf(config.direction, false)),
            },
            [relation, ..] if valid_path && segments.len() <= MAX_NESTED_DEPTH => {
                let nulls_last = self.nulls_last_relations.iter().any(|r| r == relation);
                segments
                    .iter()
                    .rev()
                    .fold(leaf(config.direction, nulls_last), |inner, segment| {
                        object(segment, inner)
                    })
            }
            _ => object(&config.column, leaf(config.direction, false)),
        }
    }
}

fn leaf(direction: SortDirection, nulls_last: bool) -> Value {
    if nulls_last {
        json!({ "sort": direction.as_str(), "nulls": "last" })
    } else {
        Value::String(direction.as_str().to_string())
    }
}

fn object(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_compiles_to_none() {
        assert_eq!(SortQueryCompiler::default().compile(&[]), None);
    }

    #[test]
    fn test_single_is_bare_object() {
        let order = SortQueryCompiler::plain().compile(&[SortConfig::asc("name")]);
        assert_eq!(order, Some(OrderBy::Single(json!({ "name": "asc" }))));
    }

    #[test]
    fn test_many_is_array() {
        let order = SortQueryCompiler::plain()
            .compile(&[SortConfig::asc("name"), SortConfig::desc("age")])
            .expect("non-empty");
        assert_eq!(
            serde_json::to_value(&order).expect("serialize"),
            json!([{ "name": "asc" }, { "age": "desc" }])
        );
    }

    #[test]
    fn test_default_remaps() {
        let compiler = SortQueryCompiler::default();
        assert_eq!(
            compiler.compile_one(&SortConfig::desc("severity")),
            json!({ "severityOrder": "desc" })
        );
        assert_eq!(
            compiler.compile_one(&SortConfig::asc("dueDate")),
            json!({ "dueDate": { "sort": "asc", "nulls": "last" } })
        );
    }

    #[test]
    fn test_nested_paths() {
        let compiler = SortQueryCompiler::plain().with_nulls_last_relation("assignee");
        assert_eq!(
            compiler.compile_one(&SortConfig::asc("customer.name")),
            json!({ "customer": { "name": "asc" } })
        );
        assert_eq!(
            compiler.compile_one(&SortConfig::desc("customer.address.city")),
            json!({ "customer": { "address": { "city": "desc" } } })
        );
        assert_eq!(
            compiler.compile_one(&SortConfig::asc("assignee.name")),
            json!({ "assignee": { "name": { "sort": "asc", "nulls": "last" } } })
        );
    }

    #[test]
    fn test_deep_and_malformed_paths_are_literal() {
        let compiler = SortQueryCompiler::plain();
        assert_eq!(
            compiler.compile_one(&SortConfig::asc("a.b.c.d")),
            json!({ "a.b.c.d": "asc" })
        );
        assert_eq!(
            compiler.compile_one(&SortConfig::asc("a..b")),
            json!({ "a..b": "asc" })
        );
    }
}
