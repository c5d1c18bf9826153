//! **Query-string-backed view state for paginated, sortable, selectable tables.**
//!
//! `table-view-state` keeps a data table's page, page size, multi-column sort,
//! row selection and show-selected-only toggle in URL query parameters, so a
//! view can be shared, bookmarked and restored. The query string is the single
//! source of truth: every read decodes a fresh snapshot, every write is one
//! minimal delta that leaves unrelated parameters byte-for-byte intact.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`QueryParams`], [`ParamDelta`], [`SortConfig`] and the
//!   decoded [`ViewState`] snapshot.
//! - **[`codec`]**: wire encodings for the selection and sort parameters
//!   ([`JsonCodec`], [`CompactCodec`]).
//! - **[`store`]**: the [`ViewStateStore`] seam, with an in-memory store that
//!   tracks history and a file-backed store.
//! - **[`table`]**: the [`TableState`] synchronizer with pagination, sorting,
//!   selection and reset operations.
//! - **[`query`]**: the [`SortQueryCompiler`] and [`ListRequest`] that turn a
//!   view state into data-fetching parameters.
//! - **[`sync`]**: debounced synchronization of free-form form fields.
//! - **[`config`]**: YAML configuration, presets and validation.
//!
//! ## Getting Started
//!
//! ```
//! use table_view_state::{MemoryStore, TableState};
//!
//! fn main() -> table_view_state::Result<()> {
//!     let mut table = TableState::new(MemoryStore::from_query("foo=bar"));
//!
//!     table.set_page(2)?;
//!     table.toggle_sort("name")?;
//!     table.toggle_selection("row-7")?;
//!
//!     assert_eq!(table.page(), 2);
//!     assert!(table.is_selected("row-7"));
//!     assert!(table.store().query_string().starts_with("foo=bar&page=3"));
//!     Ok(())
//! }
//! ```
//!
//! ### Building a list request
//!
//! ```
//! use table_view_state::{ListRequest, MemoryStore, SortQueryCompiler, TableState};
//! use serde_json::json;
//!
//! let table = TableState::new(MemoryStore::from_query(
//!     r#"page=2&sort=[{"column":"assignee.name","direction":"desc"}]"#,
//! ));
//! let request = ListRequest::from_view_state(
//!     &table.view_state(),
//!     &SortQueryCompiler::default(),
//!     json!({}),
//!     "id",
//! );
//! assert_eq!(request.page, 2);
//! assert_eq!(
//!     serde_json::to_value(&request.order_by).ok(),
//!     Some(json!({"assignee": {"name": {"sort": "desc", "nulls": "last"}}}))
//! );
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod store;
pub mod sync;
pub mod table;

// Re-export main types for convenience
pub use codec::{CodecKind, CompactCodec, JsonCodec, ViewStateCodec};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigPreset, Validatable};
pub use error::{Result, StoreErrorKind, ViewStateError};
pub use model::{
    ParamChange, ParamDelta, QueryParams, SortConfig, SortDirection, ViewDefaults, ViewState,
};
pub use query::{FieldRemap, ListRequest, OrderBy, SortQueryCompiler};
pub use store::{FileStore, HistoryMode, MemoryStore, ViewStateStore};
pub use sync::{DebouncedWriter, FormStateSync};
pub use table::{SelectAllMatch, TableOptions, TableState};
