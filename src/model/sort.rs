//! Sort configuration types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a single column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse the wire form. Only the exact lowercase names are accepted.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(column, direction)` pair. Priority comes from position in a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct SortConfig {
    /// Column name, possibly dotted (`assignee.name`) for nested fields
    pub column: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Asc)
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Desc)
    }
}

/// Drop later entries whose column already appeared.
#[must_use]
pub fn dedup_columns(configs: Vec<SortConfig>) -> Vec<SortConfig> {
    let mut out: Vec<SortConfig> = Vec::with_capacity(configs.len());
    for config in configs {
        if !out.iter().any(|c| c.column == config.column) {
            out.push(config);
        }
    }
    out
}
