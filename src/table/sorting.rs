//! Multi-column sort with three-state cycling per column.
//!
//! Priority is array position. Flipping a column's direction never moves it,
//! so the primary sort stays primary while its direction changes.

use super::TableState;
use crate::error::Result;
use crate::model::{SortConfig, SortDirection};
use crate::store::ViewStateStore;

impl<S: ViewStateStore> TableState<S> {
    /// Cycle `column` through unsorted → asc → desc → unsorted.
    ///
    /// Newly sorted columns are appended as the lowest priority.
    pub fn toggle_sort(&mut self, column: &str) -> Result<()> {
        let mut configs = self.sort_configs();
        match configs.iter().position(|c| c.column == column) {
            None => configs.push(SortConfig::asc(column)),
            Some(idx) => match configs[idx].direction {
                SortDirection::Asc => configs[idx].direction = SortDirection::Desc,
                SortDirection::Desc => {
                    configs.remove(idx);
                }
            },
        }
        self.set_sort_configs(configs)
    }

    /// Append a sort without checking for an existing entry on `column`.
    ///
    /// Duplicates collapse to the first occurrence when the state is read back.
    pub fn add_sort(&mut self, column: &str, direction: SortDirection) -> Result<()> {
        let mut configs = self.sort_configs();
        configs.push(SortConfig::new(column, direction));
        self.set_sort_configs(configs)
    }

    pub fn remove_sort(&mut self, column: &str) -> Result<()> {
        let mut configs = self.sort_configs();
        let before = configs.len();
        configs.retain(|c| c.column != column);
        if configs.len() == before {
            return Ok(());
        }
        self.set_sort_configs(configs)
    }

    #[must_use]
    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.view_state().sort_direction(column)
    }

    /// Zero-based priority of `column` in the sort sequence.
    #[must_use]
    pub fn sort_order(&self, column: &str) -> Option<usize> {
        self.view_state().sort_order(column)
    }
}
