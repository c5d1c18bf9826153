//! Multi-row selection layered over the view state.

use super::TableState;
use crate::error::Result;
use crate::store::ViewStateStore;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How `toggle_select_all` decides the target rows are already selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SelectAllMatch {
    /// Every target id is in the selection
    #[default]
    Membership,
    /// Selection size equals the number of target ids, regardless of which ids they are
    Count,
}

impl SelectAllMatch {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Membership => "membership",
            Self::Count => "count",
        }
    }
}

impl<S: ViewStateStore> TableState<S> {
    /// Flip one id in or out of the selection.
    pub fn toggle_selection(&mut self, id: &str) -> Result<()> {
        let mut selected = self.selected_ids();
        if !selected.shift_remove(id) {
            selected.insert(id.to_string());
        }
        self.set_selected_ids(selected)
    }

    /// Replace the selection with `ids`.
    pub fn select_all<T: AsRef<str>>(&mut self, ids: &[T]) -> Result<()> {
        self.set_selected_ids(ids.iter().map(|id| id.as_ref().to_string()))
    }

    pub fn deselect_all(&mut self) -> Result<()> {
        self.set_selected_ids(Vec::<String>::new())
    }

    /// Header-checkbox behavior: deselect everything when `ids` are already
    /// selected, otherwise select exactly `ids`.
    pub fn toggle_select_all<T: AsRef<str>>(&mut self, ids: &[T]) -> Result<()> {
        let state = self.view_state();
        let all_selected = match self.options.select_all_match {
            SelectAllMatch::Membership => state.is_all_selected(ids),
            SelectAllMatch::Count => state.selected_ids.len() == ids.len(),
        };
        if all_selected {
            self.deselect_all()
        } else {
            self.select_all(ids)
        }
    }

    /// Drop `ids` from the selection, e.g. after they were deleted server-side.
    pub fn remove_from_selection<T: AsRef<str>>(&mut self, ids: &[T]) -> Result<()> {
        let mut selected = self.selected_ids();
        let before = selected.len();
        for id in ids {
            selected.shift_remove(id.as_ref());
        }
        if selected.len() == before {
            return Ok(());
        }
        self.set_selected_ids(selected)
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.view_state().is_selected(id)
    }

    #[must_use]
    pub fn is_all_selected<T: AsRef<str>>(&self, ids: &[T]) -> bool {
        self.view_state().is_all_selected(ids)
    }

    #[must_use]
    pub fn is_partially_selected<T: AsRef<str>>(&self, ids: &[T]) -> bool {
        self.view_state().is_partially_selected(ids)
    }

    /// Add the contiguous slice of `ordered_ids` between `start_id` and
    /// `end_id` (inclusive, either order) to the selection.
    ///
    /// No-op when either endpoint is missing from `ordered_ids`.
    pub fn select_range<T: AsRef<str>>(
        &mut self,
        ordered_ids: &[T],
        start_id: &str,
        end_id: &str,
    ) -> Result<()> {
        let position = |needle: &str| ordered_ids.iter().position(|id| id.as_ref() == needle);
        let (Some(start), Some(end)) = (position(start_id), position(end_id)) else {
            return Ok(());
        };
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };

        let mut selected = self.selected_ids();
        let before = selected.len();
        selected.extend(ordered_ids[lo..=hi].iter().map(|id| id.as_ref().to_string()));
        if selected.len() == before {
            return Ok(());
        }
        self.set_selected_ids(selected)
    }

    /// Row click handler. Shift-click with an anchor selects a range,
    /// anything else toggles the row. The anchor always moves to `id`.
    pub fn handle_row_click<T: AsRef<str>>(
        &mut self,
        id: &str,
        ordered_ids: &[T],
        is_shift_key: bool,
    ) -> Result<()> {
        let result = match self.last_clicked_id.clone() {
            Some(anchor) if is_shift_key => self.select_range(ordered_ids, &anchor, id),
            _ => self.toggle_selection(id),
        };
        self.last_clicked_id = Some(id.to_string());
        result
    }
}
