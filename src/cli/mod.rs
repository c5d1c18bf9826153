//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler takes a raw query string plus the effective configuration and
//! returns the text to print.

mod ops;

pub use ops::ApplyOp;

use crate::config::AppConfig;
use crate::query::{ListRequest, SortQueryCompiler};
use crate::store::{FileStore, MemoryStore, ViewStateStore};
use crate::table::TableState;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

fn table_for(query: &str, config: &AppConfig) -> TableState<MemoryStore> {
    TableState::from_config(MemoryStore::from_query(query), &config.table)
}

/// Decode a query string into its view state, as pretty JSON.
pub fn run_decode(query: &str, config: &AppConfig) -> Result<String> {
    let state = table_for(query, config).view_state();
    serde_json::to_string_pretty(&state).context("failed to serialize view state")
}

/// Apply `ops` in order and return the resulting query string.
pub fn run_apply(
    query: &str,
    ops: &[ApplyOp],
    rows: &[String],
    config: &AppConfig,
) -> Result<String> {
    let mut table = table_for(query, config);
    apply_all(&mut table, ops, rows)?;
    Ok(table.store().query_string())
}

/// Apply `ops` to a query string persisted at `path` and return the new contents.
pub fn run_apply_file(
    path: &Path,
    ops: &[ApplyOp],
    rows: &[String],
    config: &AppConfig,
) -> Result<String> {
    let mut table = TableState::from_config(FileStore::new(path), &config.table);
    apply_all(&mut table, ops, rows)?;
    Ok(table.store().read().to_query_string())
}

fn apply_all<S: ViewStateStore>(
    table: &mut TableState<S>,
    ops: &[ApplyOp],
    rows: &[String],
) -> Result<()> {
    for op in ops {
        tracing::debug!(?op, "Applying operation");
        op.run(table, rows)
            .with_context(|| format!("failed to apply {op:?}"))?;
    }
    Ok(())
}

/// Compile the sort of a query string into `orderBy` JSON (`null` when unsorted).
pub fn run_compile_sort(query: &str, config: &AppConfig) -> Result<String> {
    let state = table_for(query, config).view_state();
    let order_by = SortQueryCompiler::from_config(&config.compiler).compile(&state.sort_configs);
    serde_json::to_string_pretty(&order_by).context("failed to serialize orderBy")
}

/// Build the list request for a query string.
///
/// `filter` is the caller's base filter as JSON. `id_field` overrides the
/// configured field used when show-selected-only narrows the request.
pub fn run_request(
    query: &str,
    filter: Option<&str>,
    id_field: Option<&str>,
    config: &AppConfig,
) -> Result<String> {
    let base_filter: Value = match filter {
        Some(raw) => serde_json::from_str(raw).context("--filter is not valid JSON")?,
        None => Value::Object(serde_json::Map::new()),
    };
    let state = table_for(query, config).view_state();
    let compiler = SortQueryCompiler::from_config(&config.compiler);
    let id_field = id_field.unwrap_or(&config.compiler.id_field);

    let request = ListRequest::from_view_state(&state, &compiler, base_filter, id_field);
    serde_json::to_string_pretty(&request).context("failed to serialize list request")
}
