//! Controller-internal error taxonomy
//!
//! None of these reach the host as failures: `update` resolves every error
//! into its deterministic fallback (middle-item selection, logged no-op).

use thiserror::Error;

use crate::column::ColumnId;
use crate::item::ItemId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColumnError {
    #[error("column {0} has no items")]
    EmptyColumn(ColumnId),

    #[error("no usable geometry for item {index} in column {column}")]
    GeometryUnavailable { column: ColumnId, index: usize },

    #[error("unknown column {0}")]
    UnknownColumn(ColumnId),

    #[error("item {item} is not attached to column {column}")]
    UnknownItem { column: ColumnId, item: ItemId },
}
