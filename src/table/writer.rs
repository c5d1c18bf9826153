//! Pagination, selection and toggle writes.

use super::reader::{encode, encode_sort_into};
use super::TableState;
use crate::error::Result;
use crate::model::{
    clamp_page_size, ParamDelta, SortConfig, ViewState, OWNED_KEYS, PARAM_PAGE, PARAM_PAGE_SIZE,
    PARAM_SELECTED, PARAM_SHOW_SELECTED_ONLY, PARAM_SORT,
};
use crate::store::ViewStateStore;
use indexmap::IndexSet;

/// Remove the selection and, if it was active, the show-selected-only flag.
fn clear_selection_into(delta: &mut ParamDelta, current: &ViewState) {
    delta.remove(PARAM_SELECTED);
    if current.show_selected_only {
        delta.remove(PARAM_SHOW_SELECTED_ONLY);
    }
}

impl<S: ViewStateStore> TableState<S> {
    /// Move to the zero-based page `n`. Negative values land on the first page.
    pub fn set_page(&mut self, n: i64) -> Result<()> {
        let wire_page = n.saturating_add(1).max(1);
        let mut delta = ParamDelta::new();
        if wire_page == 1 {
            delta.remove(PARAM_PAGE);
        } else {
            delta.set(PARAM_PAGE, wire_page.to_string());
        }
        if self.options.reset_selection_on_page_change {
            clear_selection_into(&mut delta, &self.view_state());
        }
        self.commit(&delta)
    }

    /// Change the page size, clamped into `[1, 100]`. Always returns to the first page.
    pub fn set_page_size(&mut self, n: i64) -> Result<()> {
        let page_size = clamp_page_size(n);
        let mut delta = ParamDelta::new();
        if page_size == self.options.defaults.page_size {
            delta.remove(PARAM_PAGE_SIZE);
        } else {
            delta.set(PARAM_PAGE_SIZE, page_size.to_string());
        }
        delta.remove(PARAM_PAGE);
        if self.options.reset_selection_on_page_change {
            clear_selection_into(&mut delta, &self.view_state());
        }
        self.commit(&delta)
    }

    /// Replace the selection. An empty selection also turns off show-selected-only.
    pub fn set_selected_ids<I, T>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let ids: IndexSet<String> = ids.into_iter().map(Into::into).collect();
        let mut delta = ParamDelta::new();
        if ids.is_empty() {
            clear_selection_into(&mut delta, &self.view_state());
        } else {
            delta.set(PARAM_SELECTED, self.codec.encode_selected(&ids));
        }
        self.commit(&delta)
    }

    /// Replace the sort sequence.
    pub fn set_sort_configs(&mut self, configs: Vec<SortConfig>) -> Result<()> {
        let mut delta = ParamDelta::new();
        encode_sort_into(
            &mut delta,
            &configs,
            &self.options.defaults,
            self.codec.as_ref(),
        );
        self.commit(&delta)
    }

    /// Turning the filter on returns to the first page of the filtered rows.
    pub fn set_show_selected_only(&mut self, show: bool) -> Result<()> {
        let mut delta = ParamDelta::new();
        if show {
            delta.set(PARAM_SHOW_SELECTED_ONLY, "true");
            delta.remove(PARAM_PAGE);
        } else {
            delta.remove(PARAM_SHOW_SELECTED_ONLY);
        }
        self.commit(&delta)
    }

    /// Write a whole snapshot at once.
    pub fn replace_view_state(&mut self, state: &ViewState) -> Result<()> {
        let delta = encode(state, &self.options.defaults, self.codec.as_ref());
        self.commit(&delta)
    }

    // ------------------------------------------------------------------
    // Resets
    // ------------------------------------------------------------------

    pub fn reset_page(&mut self) -> Result<()> {
        self.commit(&ParamDelta::new().with_remove(PARAM_PAGE))
    }

    pub fn reset_page_size(&mut self) -> Result<()> {
        self.commit(
            &ParamDelta::new()
                .with_remove(PARAM_PAGE_SIZE)
                .with_remove(PARAM_PAGE),
        )
    }

    /// Drop the sort parameter so the default sort applies again.
    pub fn reset_sort(&mut self) -> Result<()> {
        self.commit(&ParamDelta::new().with_remove(PARAM_SORT))
    }

    pub fn reset_selection(&mut self) -> Result<()> {
        self.deselect_all()
    }

    /// Remove every owned key in one write and forget the click anchor.
    pub fn reset_all(&mut self) -> Result<()> {
        let mut delta = ParamDelta::new();
        for key in OWNED_KEYS {
            delta.remove(key);
        }
        self.last_clicked_id = None;
        self.commit(&delta)
    }
}
