//! Pure conversion between query parameters and [`ViewState`].

use crate::codec::ViewStateCodec;
use crate::model::{
    clamp_page_size, dedup_columns, ParamDelta, QueryParams, ViewDefaults, ViewState,
    PARAM_PAGE, PARAM_PAGE_SIZE, PARAM_SELECTED, PARAM_SHOW_SELECTED_ONLY, PARAM_SORT,
};
use indexmap::IndexSet;

/// Decode a snapshot from query parameters.
///
/// Total: malformed or out-of-range values fall back to defaults or are
/// clamped, never reported as errors.
#[must_use]
pub fn decode(
    params: &QueryParams,
    defaults: &ViewDefaults,
    codec: &dyn ViewStateCodec,
) -> ViewState {
    let wire_page = params
        .get(PARAM_PAGE)
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1);
    let page = usize::try_from(wire_page - 1).unwrap_or(usize::MAX);

    let page_size = params
        .get(PARAM_PAGE_SIZE)
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .map_or(defaults.page_size, clamp_page_size);

    let selected_ids = params
        .get(PARAM_SELECTED)
        .map(|raw| {
            codec.decode_selected(raw).unwrap_or_else(|| {
                tracing::debug!(codec = codec.name(), "Ignoring malformed selection parameter");
                IndexSet::new()
            })
        })
        .unwrap_or_default();

    // Presence, not value, decides whether defaults apply
    let sort_configs = match params.get(PARAM_SORT) {
        None => defaults.sort.clone(),
        Some(raw) => dedup_columns(codec.decode_sort(raw).unwrap_or_else(|| {
            tracing::debug!(codec = codec.name(), "Ignoring malformed sort parameter");
            Vec::new()
        })),
    };

    let show_selected_only = params.get(PARAM_SHOW_SELECTED_ONLY) == Some("true");

    ViewState {
        page,
        page_size,
        selected_ids,
        sort_configs,
        show_selected_only,
    }
}

/// Encode a full snapshot as a delta over the five owned keys.
///
/// Values equal to their defaults are removed rather than written.
#[must_use]
pub fn encode(
    state: &ViewState,
    defaults: &ViewDefaults,
    codec: &dyn ViewStateCodec,
) -> ParamDelta {
    let mut delta = ParamDelta::new();

    if state.page == 0 {
        delta.remove(PARAM_PAGE);
    } else {
        delta.set(PARAM_PAGE, state.wire_page().to_string());
    }

    let page_size = clamp_page_size(i64::try_from(state.page_size).unwrap_or(i64::MAX));
    if page_size == defaults.page_size {
        delta.remove(PARAM_PAGE_SIZE);
    } else {
        delta.set(PARAM_PAGE_SIZE, page_size.to_string());
    }

    if state.selected_ids.is_empty() {
        delta.remove(PARAM_SELECTED);
    } else {
        delta.set(PARAM_SELECTED, codec.encode_selected(&state.selected_ids));
    }

    encode_sort_into(&mut delta, &state.sort_configs, defaults, codec);

    if state.show_selected_only && !state.selected_ids.is_empty() {
        delta.set(PARAM_SHOW_SELECTED_ONLY, "true");
    } else {
        delta.remove(PARAM_SHOW_SELECTED_ONLY);
    }

    delta
}

/// Record the sort sequence in `delta`.
///
/// An empty sequence, or one equal to the default sort, removes the key.
pub(crate) fn encode_sort_into(
    delta: &mut ParamDelta,
    configs: &[crate::model::SortConfig],
    defaults: &ViewDefaults,
    codec: &dyn ViewStateCodec,
) {
    if configs.is_empty() || configs == defaults.sort.as_slice() {
        delta.remove(PARAM_SORT);
    } else {
        delta.set(PARAM_SORT, codec.encode_sort(configs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{CompactCodec, JsonCodec};
    use crate::model::SortConfig;

    fn read(query: &str) -> ViewState {
        decode(&QueryParams::parse(query), &ViewDefaults::default(), &JsonCodec)
    }

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(read(""), ViewState::from_defaults(&ViewDefaults::default()));
    }

    #[test]
    fn test_page_parsing() {
        assert_eq!(read("page=3").page, 2);
        assert_eq!(read("page=0").page, 0);
        assert_eq!(read("page=-4").page, 0);
        assert_eq!(read("page=abc").page, 0);
        assert_eq!(read("page=").page, 0);
    }

    #[test]
    fn test_page_size_parsing() {
        assert_eq!(read("pageSize=60").page_size, 60);
        assert_eq!(read("pageSize=500").page_size, 100);
        assert_eq!(read("pageSize=-2").page_size, 1);
        assert_eq!(read("pageSize=lots").page_size, 40);
    }

    #[test]
    fn test_show_selected_only_is_literal() {
        assert!(read("showSelectedOnly=true").show_selected_only);
        assert!(!read("showSelectedOnly=false").show_selected_only);
        assert!(!read("showSelectedOnly=TRUE").show_selected_only);
        assert!(!read("showSelectedOnly=1").show_selected_only);
    }

    #[test]
    fn test_malformed_selection_is_empty() {
        assert!(read("selected=not-json").selected_ids.is_empty());
        assert!(read("selected=%7B%7D").selected_ids.is_empty());
        assert!(read("selected=%5B1%2C2%5D").selected_ids.is_empty());
    }

    #[test]
    fn test_default_sort_applies_only_when_absent() {
        let defaults = ViewDefaults::new(40, vec![SortConfig::desc("createdAt")]);
        let absent = decode(&QueryParams::parse(""), &defaults, &JsonCodec);
        assert_eq!(absent.sort_configs, vec![SortConfig::desc("createdAt")]);

        let explicit_empty = decode(&QueryParams::parse("sort=%5B%5D"), &defaults, &JsonCodec);
        assert!(explicit_empty.sort_configs.is_empty());

        let malformed = decode(&QueryParams::parse("sort=oops"), &defaults, &JsonCodec);
        assert!(malformed.sort_configs.is_empty());
    }

    #[test]
    fn test_duplicate_sort_columns_collapse() {
        let state = read(
            "sort=%5B%7B%22column%22%3A%22a%22%2C%22direction%22%3A%22asc%22%7D%2C\
             %7B%22column%22%3A%22a%22%2C%22direction%22%3A%22desc%22%7D%5D",
        );
        assert_eq!(state.sort_configs, vec![SortConfig::asc("a")]);
    }

    #[test]
    fn test_encode_omits_defaults() {
        let defaults = ViewDefaults::default();
        let state = ViewState::from_defaults(&defaults);
        let mut params = QueryParams::parse("foo=bar&page=9&pageSize=10");
        params.apply(&encode(&state, &defaults, &JsonCodec));
        assert_eq!(params.to_query_string(), "foo=bar");
    }

    #[test]
    fn test_encode_decode_with_compact_codec() {
        let defaults = ViewDefaults::default();
        let mut state = ViewState::from_defaults(&defaults);
        state.page = 4;
        state.page_size = 25;
        state.selected_ids = ["a", "b"].iter().map(|s| (*s).to_string()).collect();
        state.sort_configs = vec![SortConfig::asc("name"), SortConfig::desc("age")];
        state.show_selected_only = true;

        let mut params = QueryParams::new();
        params.apply(&encode(&state, &defaults, &CompactCodec));
        assert_eq!(params.get("sort"), Some("name,-age"));
        assert_eq!(decode(&params, &defaults, &CompactCodec), state);
    }

    #[test]
    fn test_encode_empty_sort_removes_key() {
        let defaults = ViewDefaults::new(40, vec![SortConfig::desc("createdAt")]);
        let mut state = ViewState::from_defaults(&defaults);
        state.sort_configs.clear();

        let mut params = QueryParams::parse("foo=bar&sort=name");
        params.apply(&encode(&state, &defaults, &CompactCodec));
        assert_eq!(params.to_query_string(), "foo=bar");
    }
}
