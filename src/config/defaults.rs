//! Default configurations and presets for table-view-state.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AppConfig, FieldRemapConfig};
use crate::codec::CodecKind;
use crate::table::SelectAllMatch;

/// Default form-sync debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Default field used for id-membership filters.
pub const DEFAULT_ID_FIELD: &str = "id";

/// Columns remapped by default: enum-like columns sort by a numeric
/// companion field, due dates sort nulls last.
#[must_use]
pub fn default_remaps() -> Vec<FieldRemapConfig> {
    vec![
        FieldRemapConfig::to_field("severity", "severityOrder"),
        FieldRemapConfig::to_field("status", "statusOrder"),
        FieldRemapConfig::nulls_last("dueDate"),
    ]
}

#[must_use]
pub fn default_nulls_last_relations() -> Vec<String> {
    vec!["assignee".to_string()]
}

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// JSON wire format, membership-based select-all
    Default,
    /// Delimited wire format for short, hand-editable URLs
    Compact,
    /// Reproduces the historical size-only select-all comparison
    Legacy,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Compact => "compact",
            Self::Legacy => "legacy",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "json" => Some(Self::Default),
            "compact" | "short" => Some(Self::Compact),
            "legacy" | "compat" => Some(Self::Legacy),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "JSON-encoded selection and sort, membership-based select-all",
            Self::Compact => "Comma-delimited selection and sort for readable URLs",
            Self::Legacy => "Select-all compares selection size only, as older clients did",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Compact, Self::Legacy]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        Self::default().with_preset(preset)
    }

    /// Overlay the settings a preset controls, keeping everything else.
    #[must_use]
    pub fn with_preset(mut self, preset: ConfigPreset) -> Self {
        let (codec, select_all_match) = match preset {
            ConfigPreset::Default => (CodecKind::Json, SelectAllMatch::Membership),
            ConfigPreset::Compact => (CodecKind::Compact, SelectAllMatch::Membership),
            ConfigPreset::Legacy => (CodecKind::Json, SelectAllMatch::Count),
        };
        self.table.codec = codec;
        self.table.select_all_match = select_all_match;
        self
    }
}

impl std::str::FromStr for ConfigPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let names: Vec<&str> = Self::all().iter().map(Self::name).collect();
            format!("unknown preset '{s}' (expected one of: {})", names.join(", "))
        })
    }
}
