//! Core data model: query parameters, sort configs and the view-state snapshot.

mod params;
mod sort;
mod view_state;

pub use params::{ParamChange, ParamDelta, QueryParams};
pub use sort::{dedup_columns, SortConfig, SortDirection};
pub use view_state::{
    clamp_page_size, is_owned_key, ViewDefaults, ViewState, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    MIN_PAGE_SIZE, OWNED_KEYS, PARAM_PAGE, PARAM_PAGE_SIZE, PARAM_SELECTED,
    PARAM_SHOW_SELECTED_ONLY, PARAM_SORT,
};
