//! Store, form-sync and configuration tests that touch the filesystem.

use std::time::{Duration, Instant};
use table_view_state::{
    config::{load_config_file, Validatable},
    FileStore, FormStateSync, HistoryMode, MemoryStore, ParamDelta, SortConfig, TableState,
    ViewStateStore,
};
use tempfile::TempDir;

// ============================================================================
// File-backed table state
// ============================================================================

#[test]
fn test_table_state_survives_reopen() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("state").join("orders.query");

    let mut t = TableState::new(FileStore::new(&path));
    t.set_page(4).expect("write");
    t.toggle_sort("createdAt").expect("write");
    t.set_selected_ids(["o-1", "o-2"]).expect("write");
    drop(t);

    let reopened = TableState::new(FileStore::new(&path));
    assert_eq!(reopened.page(), 4);
    assert_eq!(reopened.sort_configs(), vec![SortConfig::asc("createdAt")]);
    assert!(reopened.is_all_selected(&["o-1", "o-2"]));
}

#[test]
fn test_file_store_keeps_foreign_params() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("view.query");
    std::fs::write(&path, "tab=archived&q=a%2Bb\n").expect("seed");

    let mut store = FileStore::new(&path);
    store
        .apply(&ParamDelta::new().with_set("page", "2"), HistoryMode::Push)
        .expect("write");

    let content = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(content, "tab=archived&q=a%2Bb&page=2\n");
}

// ============================================================================
// Debounced form sync
// ============================================================================

#[test]
fn test_form_sync_and_table_share_a_store() {
    let start = Instant::now();
    let mut sync = FormStateSync::new(MemoryStore::from_query("page=3"), Duration::from_millis(50));
    sync.stage_set("status", "open", start);
    sync.stage_set("q", "widgets", start + Duration::from_millis(10));
    sync.stage_remove("status", start + Duration::from_millis(20));
    assert!(!sync.tick(start + Duration::from_millis(60)).expect("tick"));
    assert!(sync.tick(start + Duration::from_millis(70)).expect("tick"));

    let store = sync.into_store();
    assert_eq!(store.history(), ["page=3", "page=3&q=widgets"]);

    let mut table = TableState::new(store);
    table.set_page(0).expect("write");
    assert_eq!(table.store().query_string(), "q=widgets");
    assert_eq!(table.store().history().len(), 2);
}

#[test]
fn test_form_sync_from_config_window() {
    let config = table_view_state::AppConfig::builder().debounce_ms(0).build();
    let now = Instant::now();
    let mut sync = FormStateSync::from_config(MemoryStore::new(), &config.sync);
    sync.stage_set("q", "x", now);
    assert!(sync.tick(now).expect("tick"));
    assert_eq!(sync.store().query_string(), "q=x");
}

// ============================================================================
// Configuration files
// ============================================================================

#[test]
fn test_config_file_drives_table_defaults() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join(".table-view-state.yaml");
    std::fs::write(
        &path,
        concat!(
            "table:\n",
            "  default_page_size: 10\n",
            "  codec: compact\n",
            "  default_sort:\n",
            "    - column: createdAt\n",
            "      direction: desc\n",
        ),
    )
    .expect("write config");

    let config = load_config_file(&path).expect("load");
    assert!(config.is_valid());

    let mut t = TableState::from_config(MemoryStore::new(), &config.table);
    assert_eq!(t.page_size(), 10);
    assert_eq!(t.sort_configs(), vec![SortConfig::desc("createdAt")]);

    t.toggle_sort("name").expect("write");
    assert_eq!(t.store().query_string(), "sort=-createdAt%2Cname");
}

#[test]
fn test_invalid_config_reports_fields() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("bad.yaml");
    std::fs::write(&path, "table:\n  default_page_size: 500\nsync:\n  debounce_ms: 99999\n")
        .expect("write config");

    let config = load_config_file(&path).expect("parses");
    let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
    assert_eq!(fields, ["table.default_page_size", "sync.debounce_ms"]);
}
