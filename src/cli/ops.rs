//! Operation mini-language for the `apply` command.
//!
//! Each argument is `name` or `name=value`, for example `page=3`,
//! `toggle-sort=name`, `add-sort=createdAt:desc` or `select=a,b,c`.

use crate::error::Result;
use crate::model::SortDirection;
use crate::store::ViewStateStore;
use crate::table::TableState;
use std::str::FromStr;

/// One table operation parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOp {
    /// One-based page, as it appears in the query string
    Page(i64),
    PageSize(i64),
    Select(Vec<String>),
    Toggle(String),
    SelectAll(Vec<String>),
    DeselectAll,
    ToggleSelectAll(Vec<String>),
    Remove(Vec<String>),
    ToggleSort(String),
    AddSort(String, SortDirection),
    RemoveSort(String),
    ShowSelectedOnly(bool),
    Click(String),
    ShiftClick(String),
    Reset,
    ResetPage,
    ResetPageSize,
    ResetSort,
    ResetSelection,
}

impl ApplyOp {
    /// Run the operation. `rows` is the visible row order used by clicks.
    pub fn run<S: ViewStateStore>(&self, table: &mut TableState<S>, rows: &[String]) -> Result<()> {
        match self {
            Self::Page(n) => table.set_page(n.saturating_sub(1)),
            Self::PageSize(n) => table.set_page_size(*n),
            Self::Select(ids) => table.set_selected_ids(ids.iter().cloned()),
            Self::Toggle(id) => table.toggle_selection(id),
            Self::SelectAll(ids) => table.select_all(ids),
            Self::DeselectAll => table.deselect_all(),
            Self::ToggleSelectAll(ids) => table.toggle_select_all(ids),
            Self::Remove(ids) => table.remove_from_selection(ids),
            Self::ToggleSort(column) => table.toggle_sort(column),
            Self::AddSort(column, direction) => table.add_sort(column, *direction),
            Self::RemoveSort(column) => table.remove_sort(column),
            Self::ShowSelectedOnly(show) => table.set_show_selected_only(*show),
            Self::Click(id) => table.handle_row_click(id, rows, false),
            Self::ShiftClick(id) => table.handle_row_click(id, rows, true),
            Self::Reset => table.reset_all(),
            Self::ResetPage => table.reset_page(),
            Self::ResetPageSize => table.reset_page_size(),
            Self::ResetSort => table.reset_sort(),
            Self::ResetSelection => table.reset_selection(),
        }
    }
}

fn split_ids(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_int(name: &str, value: &str) -> std::result::Result<i64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("'{name}' expects an integer, got '{value}'"))
}

fn non_empty(name: &str, value: &str) -> std::result::Result<String, String> {
    if value.is_empty() {
        Err(format!("'{name}' expects a value"))
    } else {
        Ok(value.to_string())
    }
}

impl FromStr for ApplyOp {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, value) = s.split_once('=').unwrap_or((s, ""));
        let op = match name {
            "page" => Self::Page(parse_int(name, value)?),
            "page-size" => Self::PageSize(parse_int(name, value)?),
            "select" => Self::Select(split_ids(value)),
            "toggle" => Self::Toggle(non_empty(name, value)?),
            "select-all" => Self::SelectAll(split_ids(value)),
            "deselect-all" => Self::DeselectAll,
            "toggle-select-all" => Self::ToggleSelectAll(split_ids(value)),
            "remove" => Self::Remove(split_ids(value)),
            "toggle-sort" => Self::ToggleSort(non_empty(name, value)?),
            "add-sort" => {
                let (column, direction) = match value.rsplit_once(':') {
                    Some((column, dir)) => {
                        let direction = SortDirection::parse(dir)
                            .ok_or_else(|| format!("Unknown sort direction '{dir}'"))?;
                        (column, direction)
                    }
                    None => (value, SortDirection::Asc),
                };
                Self::AddSort(non_empty(name, column)?, direction)
            }
            "remove-sort" => Self::RemoveSort(non_empty(name, value)?),
            "show-selected-only" => match value {
                "" | "true" => Self::ShowSelectedOnly(true),
                "false" => Self::ShowSelectedOnly(false),
                other => return Err(format!("'{name}' expects true or false, got '{other}'")),
            },
            "click" => Self::Click(non_empty(name, value)?),
            "shift-click" => Self::ShiftClick(non_empty(name, value)?),
            "reset" => Self::Reset,
            "reset-page" => Self::ResetPage,
            "reset-page-size" => Self::ResetPageSize,
            "reset-sort" => Self::ResetSort,
            "reset-selection" => Self::ResetSelection,
            other => return Err(format!("Unknown operation '{other}'")),
        };
        Ok(op)
    }
}
