//! Request parameters handed to the data-fetching layer.

use super::compiler::{OrderBy, SortQueryCompiler};
use crate::model::ViewState;
use serde::Serialize;
use serde_json::{json, Value};

/// List request derived from a view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    /// One-based page number
    pub page: u64,
    /// Rows per page
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    pub filter: Value,
}

impl ListRequest {
    /// Build a request from `state`.
    ///
    /// When show-selected-only is on and something is selected, an
    /// id-membership filter on `id_field` replaces `base_filter`.
    #[must_use]
    pub fn from_view_state(
        state: &ViewState,
        compiler: &SortQueryCompiler,
        base_filter: Value,
        id_field: &str,
    ) -> Self {
        let filter = if Self::is_selection_scoped(state) {
            let ids: Vec<&str> = state.selected_ids.iter().map(String::as_str).collect();
            let mut map = serde_json::Map::new();
            map.insert(id_field.to_string(), json!({ "in": ids }));
            Value::Object(map)
        } else {
            base_filter
        };

        Self {
            page: state.wire_page(),
            limit: state.page_size,
            order_by: compiler.compile(&state.sort_configs),
            filter,
        }
    }

    /// Whether the filter was narrowed to the selection.
    #[must_use]
    pub fn is_selection_scoped(state: &ViewState) -> bool {
        state.show_selected_only && !state.selected_ids.is_empty()
    }
}
