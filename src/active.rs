//! Active-item tracking: nearest-to-center within a proximity radius
//!
//! Same nearest computation as the snap resolver, but it never scrolls;
//! it only decides which item (if any) deserves the "active" emphasis.
//! Mid-scroll, when nothing is close enough to the center, no item is
//! active at all.

use crate::column::ColumnState;
use crate::config::SnapConfig;
use crate::item::ItemId;
use crate::motion::snap::nearest_item;

/// Resolve the active index for the column's current offset, or None when
/// the nearest item is outside the proximity radius (or the column is
/// empty / missing geometry — both degrade to "nothing active").
pub fn resolve_active(column: &ColumnState, cfg: &SnapConfig) -> Option<usize> {
    match nearest_item(column) {
        Ok((index, distance)) if distance < cfg.active_radius => Some(index),
        Ok(_) => None,
        Err(err) => {
            log::debug!("active tracking degraded: {err}");
            None
        }
    }
}

/// Change-only reporter so hosts see one event per transition, not one per
/// scroll frame.
#[derive(Debug, Default, Clone)]
pub struct ActiveTracker {
    current: Option<ItemId>,
}

impl ActiveTracker {
    pub fn current(&self) -> Option<ItemId> {
        self.current
    }

    /// Record the freshly resolved active item. Returns true when it
    /// differs from the previous one.
    pub fn update(&mut self, item: Option<ItemId>) -> bool {
        if self.current == item {
            return false;
        }
        self.current = item;
        true
    }
}
