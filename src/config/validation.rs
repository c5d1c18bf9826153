//! Configuration validation for table-view-state.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, CompilerConfig, SyncConfig, TableConfig};
use crate::error::ViewStateError;
use crate::model::{MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use regex::Regex;
use std::sync::OnceLock;

/// Longest accepted debounce window.
const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Dotted identifier path, e.g. `name` or `assignee.profile.name`.
fn column_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
            .expect("static regex")
    })
}

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.table.validate());
        errors.extend(self.compiler.validate());
        errors.extend(self.sync.validate());
        errors
    }
}

impl AppConfig {
    /// Return the config if it is valid, otherwise one error listing every problem.
    pub fn validated(self) -> crate::error::Result<Self> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(self);
        }
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Err(ViewStateError::validation(details.join("; ")))
    }
}

impl Validatable for TableConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.default_page_size) {
            errors.push(ConfigError {
                field: "table.default_page_size".to_string(),
                message: format!(
                    "Page size must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}, got {}",
                    self.default_page_size
                ),
            });
        }

        let mut seen: Vec<&str> = Vec::new();
        for sort in &self.default_sort {
            if !column_pattern().is_match(&sort.column) {
                errors.push(ConfigError {
                    field: "table.default_sort".to_string(),
                    message: format!("Invalid column name '{}'", sort.column),
                });
            }
            if seen.contains(&sort.column.as_str()) {
                errors.push(ConfigError {
                    field: "table.default_sort".to_string(),
                    message: format!("Column '{}' appears more than once", sort.column),
                });
            }
            seen.push(&sort.column);
        }

        errors
    }
}

impl Validatable for CompilerConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for remap in &self.remaps {
            if remap.column.is_empty() || remap.column.contains('.') {
                errors.push(ConfigError {
                    field: "compiler.remaps".to_string(),
                    message: format!(
                        "Remapped column '{}' must be a single non-empty segment",
                        remap.column
                    ),
                });
            }
            if let Some(ref field) = remap.field {
                if !column_pattern().is_match(field) {
                    errors.push(ConfigError {
                        field: "compiler.remaps".to_string(),
                        message: format!("Invalid target field '{field}' for '{}'", remap.column),
                    });
                }
            }
        }

        for relation in &self.nulls_last_relations {
            if relation.is_empty() || relation.contains('.') {
                errors.push(ConfigError {
                    field: "compiler.nulls_last_relations".to_string(),
                    message: format!("Relation '{relation}' must be a single non-empty segment"),
                });
            }
        }

        if self.id_field.trim().is_empty() {
            errors.push(ConfigError {
                field: "compiler.id_field".to_string(),
                message: "Id field must not be empty".to_string(),
            });
        }

        errors
    }
}

impl Validatable for SyncConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            errors.push(ConfigError {
                field: "sync.debounce_ms".to_string(),
                message: format!(
                    "Debounce must be at most {MAX_DEBOUNCE_MS}ms, got {}",
                    self.debounce_ms
                ),
            });
        }
        errors
    }
}
