//! Global selection state
//!
//! One selected item across all columns, mirroring the single confirm
//! action. Overwrite-wins: selecting always clears the previous selection,
//! so the invariant "zero or one selected" can't be violated.

use crate::column::ColumnId;
use crate::item::ItemId;

#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    current: Option<(ColumnId, ItemId)>,
}

impl SelectionState {
    pub fn selected(&self) -> Option<(ColumnId, ItemId)> {
        self.current
    }

    /// Replace the selection, returning whatever it displaced.
    pub fn select(&mut self, column: ColumnId, item: ItemId) -> Option<(ColumnId, ItemId)> {
        self.current.replace((column, item))
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
