//! The decoded snapshot of one table view.

use super::sort::{dedup_columns, SortConfig, SortDirection};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Query key holding the 1-based page number.
pub const PARAM_PAGE: &str = "page";
/// Query key holding the page size.
pub const PARAM_PAGE_SIZE: &str = "pageSize";
/// Query key holding the encoded selection.
pub const PARAM_SELECTED: &str = "selected";
/// Query key holding the encoded sort sequence.
pub const PARAM_SORT: &str = "sort";
/// Query key holding the show-selected-only flag.
pub const PARAM_SHOW_SELECTED_ONLY: &str = "showSelectedOnly";

/// Every key the synchronizer owns. All other keys belong to someone else.
pub const OWNED_KEYS: [&str; 5] = [
    PARAM_PAGE,
    PARAM_PAGE_SIZE,
    PARAM_SELECTED,
    PARAM_SORT,
    PARAM_SHOW_SELECTED_ONLY,
];

pub const MIN_PAGE_SIZE: usize = 1;
pub const MAX_PAGE_SIZE: usize = 100;
pub const DEFAULT_PAGE_SIZE: usize = 40;

/// Clamp any integer into `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`.
#[must_use]
pub fn clamp_page_size(n: i64) -> usize {
    usize::try_from(n.clamp(MIN_PAGE_SIZE as i64, MAX_PAGE_SIZE as i64)).unwrap_or(MIN_PAGE_SIZE)
}

/// Whether `key` is one of the synchronizer's parameters.
#[must_use]
pub fn is_owned_key(key: &str) -> bool {
    OWNED_KEYS.contains(&key)
}

/// Caller-supplied defaults. Values equal to these are never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDefaults {
    pub page_size: usize,
    pub sort: Vec<SortConfig>,
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl ViewDefaults {
    /// Build defaults, clamping the page size and dropping duplicate sort columns.
    #[must_use]
    pub fn new(page_size: usize, sort: Vec<SortConfig>) -> Self {
        Self {
            page_size: clamp_page_size(i64::try_from(page_size).unwrap_or(i64::MAX)),
            sort: dedup_columns(sort),
        }
    }
}

/// Pagination, sort and selection state for one table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Zero-based page index
    pub page: usize,
    /// Rows per page, within `[1, 100]`
    pub page_size: usize,
    /// Selected row ids across all pages
    pub selected_ids: IndexSet<String>,
    /// Sort priority, first entry is primary
    pub sort_configs: Vec<SortConfig>,
    /// Restrict the visible rows to the selection
    pub show_selected_only: bool,
}

impl ViewState {
    /// The state represented by an empty query string.
    #[must_use]
    pub fn from_defaults(defaults: &ViewDefaults) -> Self {
        Self {
            page: 0,
            page_size: defaults.page_size,
            selected_ids: IndexSet::new(),
            sort_configs: defaults.sort.clone(),
            show_selected_only: false,
        }
    }

    /// One-based page number as it appears on the wire.
    #[must_use]
    pub fn wire_page(&self) -> u64 {
        u64::try_from(self.page).map_or(u64::MAX, |p| p.saturating_add(1))
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    /// True when `ids` is non-empty and every id is selected.
    #[must_use]
    pub fn is_all_selected<S: AsRef<str>>(&self, ids: &[S]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.is_selected(id.as_ref()))
    }

    /// True when some, but not all, of `ids` are selected.
    #[must_use]
    pub fn is_partially_selected<S: AsRef<str>>(&self, ids: &[S]) -> bool {
        let distinct: IndexSet<&str> = ids.iter().map(AsRef::as_ref).collect();
        let selected = distinct.iter().filter(|id| self.is_selected(id)).count();
        selected > 0 && selected < distinct.len()
    }

    #[must_use]
    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sort_configs
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.direction)
    }

    /// Zero-based priority of `column`, used for "1", "2" badges.
    #[must_use]
    pub fn sort_order(&self, column: &str) -> Option<usize> {
        self.sort_configs.iter().position(|c| c.column == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_selection(ids: &[&str]) -> ViewState {
        let mut state = ViewState::from_defaults(&ViewDefaults::default());
        state.selected_ids = ids.iter().map(|s| (*s).to_string()).collect();
        state
    }

    #[test]
    fn test_clamp_page_size() {
        assert_eq!(clamp_page_size(-3), 1);
        assert_eq!(clamp_page_size(0), 1);
        assert_eq!(clamp_page_size(60), 60);
        assert_eq!(clamp_page_size(1000), 100);
    }

    #[test]
    fn test_defaults_are_normalized() {
        let defaults = ViewDefaults::new(500, vec![SortConfig::asc("a"), SortConfig::desc("a")]);
        assert_eq!(defaults.page_size, 100);
        assert_eq!(defaults.sort, vec![SortConfig::asc("a")]);
    }

    #[test]
    fn test_is_all_selected_empty_ids() {
        let state = state_with_selection(&["a"]);
        let empty: [&str; 0] = [];
        assert!(!state.is_all_selected(&empty));
        assert!(state.is_all_selected(&["a"]));
        assert!(!state.is_all_selected(&["a", "b"]));
    }

    #[test]
    fn test_is_partially_selected() {
        let state = state_with_selection(&["a", "x"]);
        assert!(state.is_partially_selected(&["a", "b"]));
        assert!(!state.is_partially_selected(&["a"]));
        assert!(!state.is_partially_selected(&["b", "c"]));
        let empty: [&str; 0] = [];
        assert!(!state.is_partially_selected(&empty));
    }

    #[test]
    fn test_sort_lookups() {
        let mut state = ViewState::from_defaults(&ViewDefaults::default());
        state.sort_configs = vec![SortConfig::asc("name"), SortConfig::desc("age")];
        assert_eq!(state.sort_direction("age"), Some(SortDirection::Desc));
        assert_eq!(state.sort_order("age"), Some(1));
        assert_eq!(state.sort_order("missing"), None);
    }

    #[test]
    fn test_wire_page() {
        let mut state = ViewState::from_defaults(&ViewDefaults::default());
        state.page = 2;
        assert_eq!(state.wire_page(), 3);
    }
}
