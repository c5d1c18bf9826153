//! Table view-state synchronizer.
//!
//! [`TableState`] owns pagination, multi-column sort, row selection and the
//! show-selected-only toggle for one table. Every read decodes a fresh
//! snapshot from the backing [`ViewStateStore`]; every write is a single
//! [`ParamDelta`] applied with [`HistoryMode::Replace`]. The only state held
//! in memory is the shift-click anchor.
//!
//! The implementation is split by concern:
//! - `reader`: pure decode/encode between parameters and [`ViewState`]
//! - `writer`: pagination, selection and toggle writes plus resets
//! - `selection`: multi-row selection semantics and range selection
//! - `sorting`: three-state multi-column sort cycling

mod reader;
mod selection;
mod sorting;
mod writer;

pub use reader::{decode, encode};
pub use selection::SelectAllMatch;

use crate::codec::{JsonCodec, ViewStateCodec};
use crate::config::TableConfig;
use crate::error::Result;
use crate::model::{ParamDelta, SortConfig, ViewDefaults, ViewState};
use crate::store::{HistoryMode, ViewStateStore};
use indexmap::IndexSet;

/// Behavior switches for a [`TableState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableOptions {
    /// Defaults that are never written to the store
    pub defaults: ViewDefaults,
    /// Clear the selection whenever the page or page size changes
    pub reset_selection_on_page_change: bool,
    /// How `toggle_select_all` decides that everything is already selected
    pub select_all_match: SelectAllMatch,
}

impl TableOptions {
    /// Build options from the `table` section of the configuration.
    #[must_use]
    pub fn from_config(config: &TableConfig) -> Self {
        Self {
            defaults: ViewDefaults::new(config.default_page_size, config.default_sort.clone()),
            reset_selection_on_page_change: config.reset_selection_on_page_change,
            select_all_match: config.select_all_match,
        }
    }
}

/// View-state synchronizer bound to a store.
pub struct TableState<S: ViewStateStore> {
    store: S,
    codec: Box<dyn ViewStateCodec>,
    options: TableOptions,
    last_clicked_id: Option<String>,
}

impl<S: ViewStateStore> std::fmt::Debug for TableState<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableState")
            .field("codec", &self.codec.name())
            .field("options", &self.options)
            .field("last_clicked_id", &self.last_clicked_id)
            .finish_non_exhaustive()
    }
}

impl<S: ViewStateStore> TableState<S> {
    /// Create a synchronizer with default options and the JSON codec.
    pub fn new(store: S) -> Self {
        Self::with_options(store, TableOptions::default())
    }

    pub fn with_options(store: S, options: TableOptions) -> Self {
        Self {
            store,
            codec: Box::new(JsonCodec),
            options,
            last_clicked_id: None,
        }
    }

    /// Create a synchronizer from configuration, including its codec.
    pub fn from_config(store: S, config: &TableConfig) -> Self {
        Self::with_options(store, TableOptions::from_config(config))
            .with_codec(config.codec.build())
    }

    /// Swap the wire codec.
    #[must_use]
    pub fn with_codec(mut self, codec: Box<dyn ViewStateCodec>) -> Self {
        self.codec = codec;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    #[must_use]
    pub fn codec(&self) -> &dyn ViewStateCodec {
        self.codec.as_ref()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Decode a fresh snapshot from the store.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        decode(&self.store.read(), &self.options.defaults, self.codec.as_ref())
    }

    /// Zero-based page index.
    #[must_use]
    pub fn page(&self) -> usize {
        self.view_state().page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.view_state().page_size
    }

    #[must_use]
    pub fn selected_ids(&self) -> IndexSet<String> {
        self.view_state().selected_ids
    }

    #[must_use]
    pub fn sort_configs(&self) -> Vec<SortConfig> {
        self.view_state().sort_configs
    }

    #[must_use]
    pub fn show_selected_only(&self) -> bool {
        self.view_state().show_selected_only
    }

    /// Anchor for shift-click range selection. Never persisted.
    #[must_use]
    pub fn last_clicked_id(&self) -> Option<&str> {
        self.last_clicked_id.as_deref()
    }

    // ------------------------------------------------------------------
    // Write plumbing
    // ------------------------------------------------------------------

    fn commit(&mut self, delta: &ParamDelta) -> Result<()> {
        if delta.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            keys = ?delta.keys().collect::<Vec<_>>(),
            "Applying view-state delta"
        );
        self.store.apply(delta, HistoryMode::Replace)
    }
}
