//! In-memory store with a navigation history, standing in for an address bar.

use super::{HistoryMode, ViewStateStore};
use crate::error::Result;
use crate::model::{ParamDelta, QueryParams};

/// Query string held in memory.
///
/// `history` always has at least one entry; the last one is the current
/// query string.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    params: QueryParams,
    history: Vec<String>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::from_query("")
    }

    /// Start from an existing query string (leading `?` optional).
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let params = QueryParams::parse(query);
        let history = vec![params.to_query_string()];
        Self { params, history }
    }

    /// Current query string without a leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.params.to_query_string()
    }

    /// Every recorded entry, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl ViewStateStore for MemoryStore {
    fn read(&self) -> QueryParams {
        self.params.clone()
    }

    fn apply(&mut self, delta: &ParamDelta, mode: HistoryMode) -> Result<()> {
        self.params.apply(delta);
        let entry = self.params.to_query_string();
        match (mode, self.history.last_mut()) {
            (HistoryMode::Replace, Some(current)) => *current = entry,
            _ => self.history.push(entry),
        }
        Ok(())
    }
}
