#![no_main]
use libfuzzer_sys::fuzz_target;
use table_view_state::table::decode;
use table_view_state::{CodecKind, QueryParams, ViewDefaults};

/// Fuzz query-string decoding.
///
/// Decoding must be total for both codecs: any input yields a view state
/// with a clamped page size, never a panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let params = QueryParams::parse(s);
        let defaults = ViewDefaults::default();
        for codec in [CodecKind::Json, CodecKind::Compact] {
            let state = decode(&params, &defaults, codec.build().as_ref());
            assert!((1..=100).contains(&state.page_size));
        }
        let _ = params.to_query_string();
    }
});
