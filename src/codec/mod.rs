//! Wire codecs for the structured view-state parameters.
//!
//! Scalars (`page`, `pageSize`, `showSelectedOnly`) have a fixed wire form.
//! The selection and the sort sequence go through a [`ViewStateCodec`], so
//! the encoding can change without touching selection or sort logic.

mod compact;
mod json;

pub use compact::CompactCodec;
pub use json::JsonCodec;

use crate::model::SortConfig;
use indexmap::IndexSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Encoder/decoder for the `selected` and `sort` parameters.
///
/// Decoders return `None` when the raw value is malformed. Callers treat
/// that the same as an absent parameter.
pub trait ViewStateCodec: Send + Sync {
    /// Short name used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Decode a selection. Elements that are not strings are dropped.
    fn decode_selected(&self, raw: &str) -> Option<IndexSet<String>>;

    /// Encode a non-empty selection.
    fn encode_selected(&self, ids: &IndexSet<String>) -> String;

    /// Decode a sort sequence. Invalid entries are dropped.
    fn decode_sort(&self, raw: &str) -> Option<Vec<SortConfig>>;

    /// Encode a sort sequence.
    fn encode_sort(&self, configs: &[SortConfig]) -> String;
}

/// Codec selection for configuration and the CLI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    /// JSON arrays (`selected=["a","b"]`)
    #[default]
    Json,
    /// Comma-delimited lists (`selected=a,b`, `sort=name,-age`)
    Compact,
}

impl CodecKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Compact => "compact",
        }
    }

    /// Instantiate the codec.
    #[must_use]
    pub fn build(self) -> Box<dyn ViewStateCodec> {
        match self {
            Self::Json => Box::new(JsonCodec),
            Self::Compact => Box::new(CompactCodec),
        }
    }
}

impl std::fmt::Display for CodecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
