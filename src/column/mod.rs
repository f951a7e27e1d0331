//! Column scroll surface and drag session

pub mod session;
pub mod state;

use std::fmt;

pub use session::DragSession;
pub use state::{ColumnGeometry, ColumnState};

/// Index-based column identity, assigned by [`crate::state::PickerState`]
/// in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId(pub usize);

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column#{}", self.0)
    }
}
