//! Persistence backends for view state.
//!
//! The synchronizer never talks to an address bar directly. It reads a
//! [`QueryParams`] snapshot from a [`ViewStateStore`] and hands back a
//! [`ParamDelta`], so the core logic runs the same against an in-memory
//! query string, a file, or a browser binding implemented elsewhere.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::model::{ParamDelta, QueryParams};

/// How a write should interact with navigation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// Overwrite the current entry. Used for view-state changes.
    #[default]
    Replace,
    /// Record a new entry.
    Push,
}

/// Source of truth for a table's query parameters.
pub trait ViewStateStore {
    /// Snapshot of the current parameters.
    fn read(&self) -> QueryParams;

    /// Merge `delta` into the current parameters as one write.
    ///
    /// Keys not named in the delta must be preserved untouched.
    fn apply(&mut self, delta: &ParamDelta, mode: HistoryMode) -> Result<()>;
}

impl<S: ViewStateStore + ?Sized> ViewStateStore for Box<S> {
    fn read(&self) -> QueryParams {
        (**self).read()
    }

    fn apply(&mut self, delta: &ParamDelta, mode: HistoryMode) -> Result<()> {
        (**self).apply(delta, mode)
    }
}
