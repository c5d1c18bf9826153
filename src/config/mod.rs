//! Configuration module for table-view-state.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust
//! use table_view_state::config::{AppConfig, ConfigPreset, Validatable};
//! use table_view_state::CodecKind;
//!
//! let config = AppConfig::from_preset(ConfigPreset::Compact);
//! assert_eq!(config.table.codec, CodecKind::Compact);
//!
//! let config = AppConfig::builder()
//!     .default_page_size(25)
//!     .debounce_ms(250)
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.table-view-state.yaml` file in your project root or
//! `~/.config/table-view-state/`:
//!
//! ```yaml
//! table:
//!   default_page_size: 25
//!   codec: compact
//!   default_sort:
//!     - column: createdAt
//!       direction: desc
//! compiler:
//!   remaps:
//!     - column: priority
//!       field: priorityOrder
//! sync:
//!   debounce_ms: 150
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    default_nulls_last_relations, default_remaps, ConfigPreset, DEFAULT_DEBOUNCE_MS,
    DEFAULT_ID_FIELD,
};
pub use types::{
    AppConfig, AppConfigBuilder, CompilerConfig, FieldRemapConfig, SyncConfig, TableConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_effective,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.table-view-state.yaml`.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
