//! Delimited wire format: `selected=a,b,c`, `sort=name,-age`.
//!
//! A leading `-` on a sort item means descending. A backslash escapes the
//! next character, so ids and columns may contain `,`, `\` or a leading `-`.
//! An empty id is written as the reserved item `\0`.

use super::ViewStateCodec;
use crate::model::{SortConfig, SortDirection};
use indexmap::IndexSet;

const SEPARATOR: char = ',';
const ESCAPE: char = '\\';
const DESC_PREFIX: char = '-';
const EMPTY_ITEM: &str = "\\0";

/// Human-friendly codec producing shorter URLs than JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactCodec;

/// Split on unescaped separators without resolving escapes.
/// Returns `None` for a dangling escape at the end of input.
fn split_raw(raw: &str) -> Option<Vec<&str>> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (idx, ch) in raw.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == ESCAPE {
            escaped = true;
        } else if ch == SEPARATOR {
            items.push(&raw[start..idx]);
            start = idx + ch.len_utf8();
        }
    }
    if escaped {
        return None;
    }
    items.push(&raw[start..]);
    Some(items)
}

fn unescape(item: &str) -> String {
    let mut out = String::with_capacity(item.len());
    let mut escaped = false;
    for ch in item.chars() {
        if !escaped && ch == ESCAPE {
            escaped = true;
            continue;
        }
        escaped = false;
        out.push(ch);
    }
    out
}

fn escape(item: &str, guard_prefix: bool) -> String {
    let mut out = String::with_capacity(item.len() + 2);
    for (idx, ch) in item.chars().enumerate() {
        let needs_escape =
            ch == ESCAPE || ch == SEPARATOR || (guard_prefix && idx == 0 && ch == DESC_PREFIX);
        if needs_escape {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
    out
}

impl ViewStateCodec for CompactCodec {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn decode_selected(&self, raw: &str) -> Option<IndexSet<String>> {
        if raw.is_empty() {
            return Some(IndexSet::new());
        }
        Some(
            split_raw(raw)?
                .into_iter()
                .filter(|item| !item.is_empty())
                .map(|item| {
                    if item == EMPTY_ITEM {
                        String::new()
                    } else {
                        unescape(item)
                    }
                })
                .collect(),
        )
    }

    fn encode_selected(&self, ids: &IndexSet<String>) -> String {
        ids.iter()
            .map(|id| {
                if id.is_empty() {
                    EMPTY_ITEM.to_string()
                } else {
                    escape(id, false)
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    fn decode_sort(&self, raw: &str) -> Option<Vec<SortConfig>> {
        if raw.is_empty() {
            return Some(Vec::new());
        }
        let configs = split_raw(raw)?
            .into_iter()
            .filter_map(|item| {
                let (direction, column) = match item.strip_prefix(DESC_PREFIX) {
                    Some(rest) => (SortDirection::Desc, rest),
                    None => (SortDirection::Asc, item),
                };
                let column = unescape(column);
                (!column.is_empty()).then(|| SortConfig::new(column, direction))
            })
            .collect();
        Some(configs)
    }

    fn encode_sort(&self, configs: &[SortConfig]) -> String {
        configs
            .iter()
            .map(|c| {
                let column = escape(&c.column, true);
                match c.direction {
                    SortDirection::Asc => column,
                    SortDirection::Desc => format!("{DESC_PREFIX}{column}"),
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> IndexSet<String> {
        ids.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_selected_with_separators() {
        let ids = set(&["a,b", "c\\d", "-e"]);
        let encoded = CompactCodec.encode_selected(&ids);
        assert_eq!(encoded, r"a\,b,c\\d,-e");
        assert_eq!(CompactCodec.decode_selected(&encoded), Some(ids));
    }

    #[test]
    fn test_empty_id_survives() {
        let ids = set(&["", "a"]);
        let encoded = CompactCodec.encode_selected(&ids);
        assert_eq!(encoded, r"\0,a");
        assert_eq!(CompactCodec.decode_selected(&encoded), Some(ids));

        let only_empty = set(&[""]);
        assert_eq!(CompactCodec.encode_selected(&only_empty), r"\0");
        assert_eq!(CompactCodec.decode_selected(r"\0"), Some(only_empty));
    }

    #[test]
    fn test_literal_zero_ids_are_not_empty() {
        let ids = set(&["0", r"\0"]);
        let encoded = CompactCodec.encode_selected(&ids);
        assert_eq!(encoded, r"0,\\0");
        assert_eq!(CompactCodec.decode_selected(&encoded), Some(ids));
    }

    #[test]
    fn test_dangling_escape_is_malformed() {
        assert!(CompactCodec.decode_selected("a,b\\").is_none());
        assert!(CompactCodec.decode_sort("name\\").is_none());
    }

    #[test]
    fn test_sort_prefix() {
        let configs = CompactCodec.decode_sort("name,-age").expect("decodes");
        assert_eq!(
            configs,
            vec![SortConfig::asc("name"), SortConfig::desc("age")]
        );
        assert_eq!(CompactCodec.encode_sort(&configs), "name,-age");
    }

    #[test]
    fn test_sort_column_starting_with_dash() {
        let configs = vec![SortConfig::asc("-weird"), SortConfig::desc("-weird2")];
        let encoded = CompactCodec.encode_sort(&configs);
        assert_eq!(encoded, r"\-weird,-\-weird2");
        assert_eq!(CompactCodec.decode_sort(&encoded), Some(configs));
    }

    #[test]
    fn test_empty_items_are_skipped() {
        assert_eq!(CompactCodec.decode_selected("a,,b"), Some(set(&["a", "b"])));
        assert_eq!(
            CompactCodec.decode_sort(",-,name"),
            Some(vec![SortConfig::asc("name")])
        );
    }
}
