//! PickerState: all columns plus the shared selection
//!
//! Explicit state objects instead of ambient globals: each column bundles
//! its surface with its own motion machinery, and the one cross-column
//! resource (the selection) lives beside them. Everything is driven
//! through [`crate::update::update`].

use crate::active::ActiveTracker;
use crate::column::{ColumnGeometry, ColumnId, ColumnState, DragSession};
use crate::config::PickerConfig;
use crate::item::{Item, ItemId};
use crate::motion::{MomentumAnimator, SnapAnimator};
use crate::selection::SelectionState;
use crate::timers::SettleTimer;

/// One column's surface plus the per-column motion machinery. Columns are
/// fully independent; no shared mutable state between them.
#[derive(Debug, Clone)]
pub struct ColumnController {
    pub(crate) state: ColumnState,
    pub(crate) momentum: MomentumAnimator,
    pub(crate) snap: SnapAnimator,
    pub(crate) settle: SettleTimer,
    pub(crate) active: ActiveTracker,
}

impl ColumnController {
    fn new(state: ColumnState) -> Self {
        Self {
            state,
            momentum: MomentumAnimator::new(),
            snap: SnapAnimator::new(),
            settle: SettleTimer::default(),
            active: ActiveTracker::default(),
        }
    }

    pub fn state(&self) -> &ColumnState {
        &self.state
    }

    /// Item currently carrying the "active" emphasis, if any.
    pub fn active_item(&self) -> Option<ItemId> {
        self.active.current()
    }

    /// Stop momentum and any snap tween. Called before a new gesture is
    /// processed, and before a click-driven centering starts.
    pub(crate) fn cancel_motion(&mut self) {
        self.momentum.abort();
        self.snap.cancel();
        self.settle.cancel();
    }
}

#[derive(Debug, Default, Clone)]
pub struct PickerState {
    pub(crate) columns: Vec<ColumnController>,
    pub(crate) selection: SelectionState,
    /// At most one live gesture across the whole picker (single pointer).
    pub(crate) drag: Option<(ColumnId, DragSession)>,
    pub(crate) config: PickerConfig,
}

impl PickerState {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Register a column; ids are handed out in insertion order.
    pub fn add_column(
        &mut self,
        items: Vec<Item>,
        geometry: ColumnGeometry,
        viewport: f32,
    ) -> ColumnId {
        let id = ColumnId(self.columns.len());
        self.columns.push(ColumnController::new(ColumnState::new(
            id, items, geometry, viewport,
        )));
        id
    }

    pub fn column(&self, id: ColumnId) -> Option<&ColumnController> {
        self.columns.get(id.0)
    }

    pub fn columns(&self) -> &[ColumnController] {
        &self.columns
    }

    /// Currently selected (column, item), if any was ever clicked.
    pub fn selection(&self) -> Option<(ColumnId, ItemId)> {
        self.selection.selected()
    }

    /// True when a selection exists and its item is still attached to its
    /// column. This is the gate for the host's confirm action.
    pub fn selection_valid(&self) -> bool {
        self.selection.selected().is_some_and(|(column, item)| {
            self.columns
                .get(column.0)
                .is_some_and(|ctrl| ctrl.state.index_of(item).is_some())
        })
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Replace configuration at runtime (takes effect on the next message).
    pub fn set_config(&mut self, config: PickerConfig) {
        self.config = config;
    }

    /// True while a drag gesture is live on any column.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
