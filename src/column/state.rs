//! ColumnState: vertically scrollable surface with item geometry
//!
//! The single source of truth for a column's scroll offset. During a drag
//! the offset may leave `[0, max_offset]` through the rubber-band mapping;
//! animated moves always clamp hard, so every gesture ends back in bounds.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::ColumnId;
use crate::config::MotionConfig;
use crate::constants::windows;
use crate::error::ColumnError;
use crate::item::{Item, ItemId};

/// Uniform per-item layout reported by the host. The controller reads
/// geometry, it never measures or owns it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnGeometry {
    pub item_height: f32,
    pub item_spacing: f32,
}

impl ColumnGeometry {
    pub fn new(item_height: f32, item_spacing: f32) -> Self {
        Self {
            item_height,
            item_spacing,
        }
    }

    #[inline]
    fn stride(&self) -> f32 {
        (self.item_height + self.item_spacing).max(1.0)
    }
}

#[derive(Debug, Clone)]
pub struct ColumnState {
    id: ColumnId,
    items: Vec<Item>,
    geometry: ColumnGeometry,
    /// Viewport extent along the scroll axis.
    viewport: f32,
    /// Current scroll offset. Transiently outside `[0, max_offset]` while
    /// a drag stretches past a bound.
    offset: f32,
    /// Derived: `max(content − viewport, 0)`.
    max_offset: f32,
    overscan: usize,
}

impl ColumnState {
    pub fn new(
        id: ColumnId,
        items: Vec<Item>,
        geometry: ColumnGeometry,
        viewport: f32,
    ) -> Self {
        let mut state = Self {
            id,
            items,
            geometry,
            viewport: viewport.max(0.0),
            offset: 0.0,
            max_offset: 0.0,
            overscan: windows::OVERSCAN_ITEMS,
        };
        state.recompute_max_offset();
        state
    }

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index_of(&self, item: ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id == item)
    }

    /// Structurally-middle item, the fallback target when geometry fails.
    pub fn middle_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.len() / 2)
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    pub fn viewport(&self) -> f32 {
        self.viewport
    }

    /// Viewport center in content coordinates.
    pub fn surface_center(&self) -> f32 {
        self.offset + self.viewport / 2.0
    }

    /// Content-space center of the item at `index`.
    pub fn item_center(&self, index: usize) -> Result<f32, ColumnError> {
        if index >= self.items.len() || self.geometry.item_height <= 0.0 {
            return Err(ColumnError::GeometryUnavailable {
                column: self.id,
                index,
            });
        }
        Ok(index as f32 * self.geometry.stride() + self.geometry.item_height / 2.0)
    }

    /// Offset that centers the item at `index`, clamped into bounds.
    pub fn snap_target(&self, index: usize) -> Result<f32, ColumnError> {
        let center = self.item_center(index)?;
        Ok((center - self.viewport / 2.0).clamp(0.0, self.max_offset))
    }

    /// Hard-clamped move used by animations and programmatic scrolls.
    pub fn scroll_to(&mut self, offset: f32) -> f32 {
        self.offset = offset.clamp(0.0, self.max_offset);
        self.offset
    }

    /// Relative hard-clamped move. Returns the new offset so callers can
    /// tell whether the delta was truncated at a bound.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        self.scroll_to(self.offset + delta)
    }

    /// Move used by the snap tween. Never pushes further outside bounds,
    /// but when the surface is already overscrolled it may pass through
    /// out-of-bounds values on its way back in, so the rubber-band return
    /// eases instead of jumping to the bound.
    pub fn scroll_animated(&mut self, offset: f32) -> f32 {
        let lo = self.offset.min(0.0);
        let hi = self.offset.max(self.max_offset);
        self.offset = offset.clamp(lo, hi);
        self.offset
    }

    /// Map a raw (undamped) drag position onto the surface. Excursions
    /// beyond a bound are multiplied by the rubber-band resistance and
    /// capped at a fraction of the viewport, so the stretch is damped
    /// rather than 1:1. Visual-only: release always animates back in.
    pub fn set_dragged(&mut self, raw: f32, cfg: &MotionConfig) -> f32 {
        let cap = self.viewport * cfg.max_overscroll_fraction;
        self.offset = if raw < 0.0 {
            (raw * cfg.rubber_band_resistance).max(-cap)
        } else if raw > self.max_offset {
            let excess = raw - self.max_offset;
            (self.max_offset + excess * cfg.rubber_band_resistance).min(self.max_offset + cap)
        } else {
            raw
        };
        self.offset
    }

    /// Update viewport extent; offset is pulled back into bounds so a
    /// resize never leaves the surface stranded past its new maximum.
    pub fn set_viewport(&mut self, viewport: f32) {
        self.viewport = viewport.max(0.0);
        self.recompute_max_offset();
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    /// Replace the item list and geometry wholesale.
    pub fn replace_items(&mut self, items: Vec<Item>, geometry: ColumnGeometry) {
        self.items = items;
        self.geometry = geometry;
        self.recompute_max_offset();
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    /// Indices worth rendering for the current offset, with overscan on
    /// both sides. Hosts virtualizing long columns read this after every
    /// `OffsetChanged`.
    pub fn visible_range(&self) -> Range<usize> {
        if self.items.is_empty() {
            return 0..0;
        }
        let stride = self.geometry.stride();
        let top = self.offset.max(0.0);
        let first = (top / stride).floor() as usize;
        // Ceil keeps a bottom edge landing exactly on an item boundary
        // from counting the next, zero-height row.
        let last = (((top + self.viewport) / stride).ceil() as usize).saturating_sub(1);
        let start = first.saturating_sub(self.overscan);
        let end = (last.max(first) + 1 + self.overscan).min(self.items.len());
        start..end
    }

    fn content_extent(&self) -> f32 {
        if self.items.is_empty() {
            return 0.0;
        }
        let n = self.items.len() as f32;
        n * self.geometry.item_height
            + (self.items.len().saturating_sub(1)) as f32 * self.geometry.item_spacing
    }

    fn recompute_max_offset(&mut self) {
        let content = self.content_extent();
        self.max_offset = (content - self.viewport).max(0.0);
    }
}
