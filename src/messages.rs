//! Messages into the controller and events out of it
//!
//! The host pumps [`Message`]s through [`crate::update::update`] and
//! renders from the returned [`Event`]s. Timestamps ride on the messages
//! so the controller never reads the clock itself.

use std::time::Instant;

use crate::column::{ColumnGeometry, ColumnId};
use crate::item::{Item, ItemId, SelectionPayload};

/// Input device for a gesture. Touch drags ask the host to suppress the
/// platform's native scroll/selection behavior; mouse drags do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer-down on a column. Cancels any in-flight motion there.
    PointerPressed {
        column: ColumnId,
        y: f32,
        at: Instant,
        kind: PointerKind,
    },
    /// Pointer move. No-op unless a gesture is live.
    PointerMoved { y: f32, at: Instant },
    /// Pointer-up / touch-end: hand off to momentum or snap.
    PointerReleased { at: Instant },
    /// Click on an item (host hit-testing). Ignored mid-drag.
    ItemClicked {
        column: ColumnId,
        item: ItemId,
        at: Instant,
    },
    /// Snap one item toward the end of the column.
    StepNext { column: ColumnId, at: Instant },
    /// Snap one item toward the start of the column.
    StepPrev { column: ColumnId, at: Instant },
    /// Host viewport geometry changed.
    ViewportResized { column: ColumnId, height: f32 },
    /// Replace a column's items and geometry wholesale.
    ItemsReplaced {
        column: ColumnId,
        items: Vec<Item>,
        geometry: ColumnGeometry,
    },
    /// One animation frame. Drives momentum steps, snap tweens, and
    /// settle debounce deadlines for every column.
    Tick { at: Instant },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The surface moved; hosts re-render scroll position from this.
    OffsetChanged { column: ColumnId, offset: f32 },
    /// A different item (or none) is now nearest-enough to center.
    ActiveChanged {
        column: ColumnId,
        item: Option<ItemId>,
    },
    /// An item was selected; payload feeds the confirm action.
    SelectionChanged(SelectionPayload),
    /// Whether the confirm action should currently be enabled.
    SelectionValidity(bool),
    /// A drag began; `suppress_native_scroll` is true for touch input.
    GestureCaptured {
        column: ColumnId,
        suppress_native_scroll: bool,
    },
}
