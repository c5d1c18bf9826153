#![no_main]
use libfuzzer_sys::fuzz_target;
use table_view_state::cli::ApplyOp;
use table_view_state::{CodecKind, MemoryStore, TableState};

/// Fuzz sequences of table operations.
///
/// The first line is the starting query string; each following line is an
/// operation in the `apply` command syntax. Whatever is written must decode
/// back without panicking.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut lines = s.lines();
    let query = lines.next().unwrap_or_default();
    let rows: Vec<String> = ["a", "b", "c", "d"].iter().map(ToString::to_string).collect();

    for codec in [CodecKind::Json, CodecKind::Compact] {
        let mut table = TableState::new(MemoryStore::from_query(query)).with_codec(codec.build());
        for op in lines.clone().filter_map(|line| line.parse::<ApplyOp>().ok()) {
            let _ = op.run(&mut table, &rows);
        }
        let state = table.view_state();
        assert!(state.selected_ids.is_empty() || !table.store().query_string().is_empty());
    }
});
