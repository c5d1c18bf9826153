//! Debounced synchronization of form fields into the query string.
//!
//! Form edits arrive in bursts. [`FormStateSync`] stages them in a
//! [`DebouncedWriter`] and writes the coalesced result as one pushed
//! history entry once input goes quiet. Table-owned keys are rejected so
//! form sync and [`crate::table::TableState`] never fight over a parameter.

mod debounce;

pub use debounce::DebouncedWriter;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::model::{is_owned_key, ParamDelta};
use crate::store::{HistoryMode, ViewStateStore};
use std::time::{Duration, Instant};

/// Form-field synchronizer over a store.
#[derive(Debug)]
pub struct FormStateSync<S: ViewStateStore> {
    store: S,
    writer: DebouncedWriter,
}

impl<S: ViewStateStore> FormStateSync<S> {
    pub fn new(store: S, window: Duration) -> Self {
        Self {
            store,
            writer: DebouncedWriter::new(window),
        }
    }

    pub fn from_config(store: S, config: &SyncConfig) -> Self {
        Self::new(store, Duration::from_millis(config.debounce_ms))
    }

    /// Stage a field value. Returns `false` if the key belongs to the table.
    pub fn stage_set(&mut self, key: &str, value: impl Into<String>, now: Instant) -> bool {
        if is_owned_key(key) {
            tracing::warn!("Form sync ignored table-owned parameter '{key}'");
            return false;
        }
        self.writer
            .schedule(ParamDelta::new().with_set(key, value), now);
        true
    }

    /// Stage removal of a field (e.g. an input was cleared).
    pub fn stage_remove(&mut self, key: &str, now: Instant) -> bool {
        if is_owned_key(key) {
            tracing::warn!("Form sync ignored table-owned parameter '{key}'");
            return false;
        }
        self.writer.schedule(ParamDelta::new().with_remove(key), now);
        true
    }

    /// Write the pending delta if its deadline has passed. Returns whether a write happened.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        match self.writer.poll(now) {
            Some(delta) => self.write(&delta).map(|()| true),
            None => Ok(false),
        }
    }

    /// Write the pending delta immediately.
    pub fn flush(&mut self) -> Result<bool> {
        match self.writer.flush() {
            Some(delta) => self.write(&delta).map(|()| true),
            None => Ok(false),
        }
    }

    /// Drop the pending delta without writing.
    pub fn cancel(&mut self) {
        if let Some(delta) = self.writer.cancel() {
            tracing::debug!(changes = delta.len(), "Discarded pending form sync");
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.writer.is_pending()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn write(&mut self, delta: &ParamDelta) -> Result<()> {
        tracing::debug!(changes = delta.len(), "Writing debounced form state");
        self.store.apply(delta, HistoryMode::Push)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_burst_becomes_one_history_entry() {
        let start = Instant::now();
        let mut sync =
            FormStateSync::new(MemoryStore::from_query("page=2"), Duration::from_millis(100));

        for (i, value) in ["r", "ru", "rus", "rust"].iter().enumerate() {
            let at = start + Duration::from_millis(30 * i as u64);
            assert!(sync.stage_set("q", *value, at));
            assert!(!sync.tick(at).expect("tick"));
        }
        assert!(sync.tick(start + Duration::from_millis(190)).expect("tick"));

        let store = sync.into_store();
        assert_eq!(store.history(), ["page=2", "page=2&q=rust"]);
    }

    #[test]
    fn test_owned_keys_are_rejected() {
        let mut sync = FormStateSync::new(MemoryStore::new(), Duration::from_millis(100));
        assert!(!sync.stage_set("page", "4", Instant::now()));
        assert!(!sync.stage_remove("selected", Instant::now()));
        assert!(!sync.is_pending());
    }

    #[test]
    fn test_flush_and_cancel() {
        let now = Instant::now();
        let mut sync = FormStateSync::new(MemoryStore::new(), Duration::from_secs(5));
        sync.stage_set("status", "open", now);
        assert!(sync.flush().expect("flush"));
        assert_eq!(sync.store().query_string(), "status=open");

        sync.stage_remove("status", now);
        sync.cancel();
        assert!(!sync.flush().expect("flush"));
        assert_eq!(sync.store().query_string(), "status=open");
    }
}
