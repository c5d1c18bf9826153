//! Configuration types for table-view-state.
//!
//! Provides structured configuration for the table synchronizer, the
//! sort-to-query compiler and debounced form sync.

use super::defaults::{
    default_nulls_last_relations, default_remaps, DEFAULT_DEBOUNCE_MS, DEFAULT_ID_FIELD,
};
use crate::codec::CodecKind;
use crate::model::{SortConfig, DEFAULT_PAGE_SIZE};
use crate::table::SelectAllMatch;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loadable from a YAML file and overridable from the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Table synchronizer behavior
    pub table: TableConfig,
    /// Sort-to-query compilation
    pub compiler: CompilerConfig,
    /// Debounced form sync
    pub sync: SyncConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the default page size.
    pub const fn default_page_size(mut self, page_size: usize) -> Self {
        self.config.table.default_page_size = page_size;
        self
    }

    /// Set the default sort sequence.
    pub fn default_sort(mut self, sort: Vec<SortConfig>) -> Self {
        self.config.table.default_sort = sort;
        self
    }

    /// Clear the selection on page and page-size changes.
    pub const fn reset_selection_on_page_change(mut self, reset: bool) -> Self {
        self.config.table.reset_selection_on_page_change = reset;
        self
    }

    /// Choose how select-all toggling compares selections.
    pub const fn select_all_match(mut self, mode: SelectAllMatch) -> Self {
        self.config.table.select_all_match = mode;
        self
    }

    /// Choose the wire codec.
    pub const fn codec(mut self, codec: CodecKind) -> Self {
        self.config.table.codec = codec;
        self
    }

    /// Add a column remap to the compiler.
    pub fn remap(mut self, remap: FieldRemapConfig) -> Self {
        self.config.compiler.remaps.retain(|r| r.column != remap.column);
        self.config.compiler.remaps.push(remap);
        self
    }

    /// Set the form-sync debounce window.
    pub const fn debounce_ms(mut self, ms: u64) -> Self {
        self.config.sync.debounce_ms = ms;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Table synchronizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TableConfig {
    /// Page size used when the query string has none (1-100)
    pub default_page_size: usize,
    /// Sort applied when the query string has no `sort` parameter
    pub default_sort: Vec<SortConfig>,
    /// Clear the selection whenever the page or page size changes
    pub reset_selection_on_page_change: bool,
    /// Select-all comparison: `membership` or `count`
    pub select_all_match: SelectAllMatch,
    /// Wire codec for `selected` and `sort`
    pub codec: CodecKind,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            default_sort: Vec::new(),
            reset_selection_on_page_change: false,
            select_all_match: SelectAllMatch::Membership,
            codec: CodecKind::Json,
        }
    }
}

/// A single-segment column compiled to a different backend field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldRemapConfig {
    /// Logical column name as used in sort configs
    pub column: String,
    /// Backend field to order by (defaults to the column itself)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Request nulls-last ordering
    #[serde(default)]
    pub nulls_last: bool,
}

impl FieldRemapConfig {
    pub fn to_field(column: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            field: Some(field.into()),
            nulls_last: false,
        }
    }

    pub fn nulls_last(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            field: None,
            nulls_last: true,
        }
    }
}

/// Sort-to-query compiler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CompilerConfig {
    /// Column remaps for single-segment columns
    pub remaps: Vec<FieldRemapConfig>,
    /// Relations whose nested fields sort nulls last
    pub nulls_last_relations: Vec<String>,
    /// Field used for the id-membership filter in show-selected-only mode
    pub id_field: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            remaps: default_remaps(),
            nulls_last_relations: default_nulls_last_relations(),
            id_field: DEFAULT_ID_FIELD.to_string(),
        }
    }
}

/// Debounced form-sync configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SyncConfig {
    /// Quiet period before staged form edits are written, in milliseconds
    pub debounce_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .default_page_size(25)
            .codec(CodecKind::Compact)
            .remap(FieldRemapConfig::to_field("priority", "priorityOrder"))
            .debounce_ms(250)
            .build();
        assert_eq!(config.table.default_page_size, 25);
        assert_eq!(config.table.codec, CodecKind::Compact);
        assert!(config
            .compiler
            .remaps
            .iter()
            .any(|r| r.column == "priority" && r.field.as_deref() == Some("priorityOrder")));
        assert_eq!(config.sync.debounce_ms, 250);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig =
            serde_yaml::from_str("table:\n  default_page_size: 60\n").expect("valid yaml");
        assert_eq!(config.table.default_page_size, 60);
        assert_eq!(config.table.codec, CodecKind::Json);
        assert_eq!(config.compiler, CompilerConfig::default());
    }
}
