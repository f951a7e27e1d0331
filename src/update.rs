//! Update dispatch: one message in, zero or more events out
//!
//! The host calls [`update`] for every input event and once per animation
//! frame (`Message::Tick`). All failure paths degrade inside: the host
//! never sees an error, only events and log records.

use std::time::Instant;

use crate::active::{ActiveTracker, resolve_active};
use crate::column::{ColumnGeometry, ColumnId, ColumnState, DragSession};
use crate::config::SnapConfig;
use crate::constants::snap as snap_constants;
use crate::error::ColumnError;
use crate::item::{Item, ItemId};
use crate::messages::{Event, Message, PointerKind};
use crate::motion::snap::nearest_item;
use crate::motion::{SnapAnimator, StepOutcome};
use crate::state::{ColumnController, PickerState};

pub fn update(state: &mut PickerState, message: Message) -> Vec<Event> {
    let mut events = Vec::new();
    match message {
        Message::PointerPressed {
            column,
            y,
            at,
            kind,
        } => pointer_pressed(state, column, y, at, kind, &mut events),
        Message::PointerMoved { y, at } => pointer_moved(state, y, at, &mut events),
        Message::PointerReleased { at } => pointer_released(state, at, &mut events),
        Message::ItemClicked { column, item, at } => {
            item_clicked(state, column, item, at, &mut events)
        }
        Message::StepNext { column, at } => step(state, column, 1, at, &mut events),
        Message::StepPrev { column, at } => step(state, column, -1, at, &mut events),
        Message::ViewportResized { column, height } => {
            viewport_resized(state, column, height, &mut events)
        }
        Message::ItemsReplaced {
            column,
            items,
            geometry,
        } => items_replaced(state, column, items, geometry, &mut events),
        Message::Tick { at } => tick(state, at, &mut events),
    }
    events
}

fn pointer_pressed(
    state: &mut PickerState,
    column: ColumnId,
    y: f32,
    at: Instant,
    kind: PointerKind,
    events: &mut Vec<Event>,
) {
    let Some(ctrl) = state.columns.get_mut(column.0) else {
        log::warn!("pointer ignored: {}", ColumnError::UnknownColumn(column));
        return;
    };
    // A new gesture cancels any in-flight momentum or snap before its
    // first sample is processed.
    ctrl.cancel_motion();
    state.drag = Some((column, DragSession::begin(y, at, ctrl.state.offset())));
    events.push(Event::GestureCaptured {
        column,
        suppress_native_scroll: matches!(kind, PointerKind::Touch),
    });
}

fn pointer_moved(state: &mut PickerState, y: f32, at: Instant, events: &mut Vec<Event>) {
    let config = state.config;
    let Some((column, session)) = state.drag.as_mut() else {
        // Stray move with no live gesture.
        return;
    };
    session.sample(y, at);
    let raw = session.raw_offset();
    let column = *column;
    let Some(ctrl) = state.columns.get_mut(column.0) else {
        return;
    };
    let ColumnController {
        state: col,
        settle,
        active,
        ..
    } = ctrl;
    let before = col.offset();
    let after = col.set_dragged(raw, &config.motion);
    if after != before {
        events.push(Event::OffsetChanged {
            column,
            offset: after,
        });
        settle.arm(at, config.snap.settle_debounce_ms);
    }
    refresh_active(col, active, &config.snap, events);
}

fn pointer_released(state: &mut PickerState, at: Instant, events: &mut Vec<Event>) {
    let config = state.config;
    let Some((column, session)) = state.drag.take() else {
        return;
    };
    let Some(ctrl) = state.columns.get_mut(column.0) else {
        return;
    };
    let ColumnController {
        state: col,
        momentum,
        snap,
        settle,
        active,
    } = ctrl;

    let velocity = session.velocity();
    if momentum.try_start(velocity, &config.motion) {
        log::debug!("{column}: momentum at {velocity:.2} units/frame");
        return; // frame ticks drive it from here
    }

    if let Err(err) = begin_snap_to_nearest(col, snap, at, &config.snap, events) {
        log::warn!("release snap skipped: {err}");
        // Still never leave a rubber-band excursion behind.
        let before = col.offset();
        let after = col.scroll_to(before);
        if after != before {
            events.push(Event::OffsetChanged {
                column,
                offset: after,
            });
        }
    }
    settle.arm(at, config.snap.settle_debounce_ms);
    refresh_active(col, active, &config.snap, events);
}

fn item_clicked(
    state: &mut PickerState,
    column: ColumnId,
    item: ItemId,
    at: Instant,
    events: &mut Vec<Event>,
) {
    if state.drag.is_some() {
        log::debug!("click on {item} ignored mid-drag");
        return;
    }
    let config = state.config;
    let Some(ctrl) = state.columns.get_mut(column.0) else {
        log::warn!("click ignored: {}", ColumnError::UnknownColumn(column));
        return;
    };
    let ColumnController {
        state: col,
        momentum,
        snap,
        settle,
        active,
    } = ctrl;

    if col.is_empty() {
        log::warn!("selection skipped: {}", ColumnError::EmptyColumn(column));
        return;
    }
    let Some(middle) = col.middle_index() else {
        return;
    };

    let mut index = match col.index_of(item) {
        Some(index) => index,
        None => {
            log::warn!(
                "{}; selecting middle item instead",
                ColumnError::UnknownItem { column, item }
            );
            middle
        }
    };
    // Geometry failures also fall back to the structurally-middle item;
    // selection itself still goes through, possibly uncentered.
    let centering = match col.snap_target(index) {
        Ok(target) => Some(target),
        Err(err) => {
            log::warn!("{err}; selecting middle item instead");
            index = middle;
            col.snap_target(index).ok()
        }
    };

    let Some(chosen) = col.item(index) else {
        return;
    };
    let payload = chosen.payload();
    let chosen_id = chosen.id;

    momentum.abort();
    snap.cancel();
    if centering.is_some() {
        if let Err(err) = begin_snap_to_index(col, snap, index, at, &config.snap, events) {
            log::debug!("centering skipped: {err}");
        }
        settle.arm(at, config.snap.settle_debounce_ms);
    }
    refresh_active(col, active, &config.snap, events);

    state.selection.select(column, chosen_id);
    events.push(Event::SelectionChanged(payload));
    events.push(Event::SelectionValidity(true));
}

fn step(
    state: &mut PickerState,
    column: ColumnId,
    direction: isize,
    at: Instant,
    events: &mut Vec<Event>,
) {
    let config = state.config;
    let Some(ctrl) = state.columns.get_mut(column.0) else {
        log::warn!("step ignored: {}", ColumnError::UnknownColumn(column));
        return;
    };
    let ColumnController {
        state: col,
        momentum,
        snap,
        settle,
        active,
    } = ctrl;

    let base = match nearest_item(col) {
        Ok((index, _)) => index,
        Err(err) => {
            log::debug!("step ignored: {err}");
            return;
        }
    };
    let last = col.len().saturating_sub(1);
    let target = if direction > 0 {
        (base + 1).min(last)
    } else {
        base.saturating_sub(1)
    };

    momentum.abort();
    snap.cancel();
    if let Err(err) = begin_snap_to_index(col, snap, target, at, &config.snap, events) {
        log::debug!("step snap skipped: {err}");
    }
    settle.arm(at, config.snap.settle_debounce_ms);
    refresh_active(col, active, &config.snap, events);
}

fn viewport_resized(
    state: &mut PickerState,
    column: ColumnId,
    height: f32,
    events: &mut Vec<Event>,
) {
    let config = state.config;
    let Some(ctrl) = state.columns.get_mut(column.0) else {
        log::warn!("resize ignored: {}", ColumnError::UnknownColumn(column));
        return;
    };
    let ColumnController {
        state: col,
        momentum,
        snap,
        active,
        ..
    } = ctrl;

    // In-flight targets are stale once the layout changes.
    momentum.abort();
    snap.cancel();

    let before = col.offset();
    col.set_viewport(height);
    if col.offset() != before {
        events.push(Event::OffsetChanged {
            column,
            offset: col.offset(),
        });
    }
    refresh_active(col, active, &config.snap, events);
}

fn items_replaced(
    state: &mut PickerState,
    column: ColumnId,
    items: Vec<Item>,
    geometry: ColumnGeometry,
    events: &mut Vec<Event>,
) {
    let config = state.config;
    {
        let Some(ctrl) = state.columns.get_mut(column.0) else {
            log::warn!("replace ignored: {}", ColumnError::UnknownColumn(column));
            return;
        };
        let ColumnController {
            state: col,
            momentum,
            snap,
            active,
            ..
        } = ctrl;

        momentum.abort();
        snap.cancel();

        let before = col.offset();
        col.replace_items(items, geometry);
        if col.offset() != before {
            events.push(Event::OffsetChanged {
                column,
                offset: col.offset(),
            });
        }
        refresh_active(col, active, &config.snap, events);
    }

    // The selection may have lost its item.
    if state
        .selection
        .selected()
        .is_some_and(|(selected_column, _)| selected_column == column)
    {
        events.push(Event::SelectionValidity(state.selection_valid()));
    }
}

fn tick(state: &mut PickerState, at: Instant, events: &mut Vec<Event>) {
    let config = state.config;
    for ctrl in &mut state.columns {
        let ColumnController {
            state: col,
            momentum,
            snap,
            settle,
            active,
        } = ctrl;

        let before = col.offset();
        let outcome = momentum.step(col, &config.motion);
        if col.offset() != before {
            events.push(Event::OffsetChanged {
                column: col.id(),
                offset: col.offset(),
            });
            settle.arm(at, config.snap.settle_debounce_ms);
        }

        match outcome {
            StepOutcome::Moved => {
                refresh_active(col, active, &config.snap, events);
            }
            StepOutcome::Settled => {
                refresh_active(col, active, &config.snap, events);
                if let Err(err) = begin_snap_to_nearest(col, snap, at, &config.snap, events) {
                    log::warn!("snap after momentum skipped: {err}");
                }
                settle.arm(at, config.snap.settle_debounce_ms);
            }
            StepOutcome::Idle => {
                if let Some(next) = snap.tick(at) {
                    let before = col.offset();
                    let after = col.scroll_animated(next);
                    if after != before {
                        events.push(Event::OffsetChanged {
                            column: col.id(),
                            offset: after,
                        });
                        settle.arm(at, config.snap.settle_debounce_ms);
                    }
                    refresh_active(col, active, &config.snap, events);
                }
            }
        }

        if settle.fire_if_due(at) {
            refresh_active(col, active, &config.snap, events);
        }
    }
}

/// Recompute the active item and report it only when it changed.
fn refresh_active(
    col: &ColumnState,
    tracker: &mut ActiveTracker,
    cfg: &SnapConfig,
    events: &mut Vec<Event>,
) {
    let resolved = resolve_active(col, cfg)
        .and_then(|index| col.item(index))
        .map(|item| item.id);
    if tracker.update(resolved) {
        events.push(Event::ActiveChanged {
            column: col.id(),
            item: resolved,
        });
    }
}

/// Resolve the nearest item and tween the surface onto it.
fn begin_snap_to_nearest(
    col: &mut ColumnState,
    snap: &mut SnapAnimator,
    at: Instant,
    cfg: &SnapConfig,
    events: &mut Vec<Event>,
) -> Result<(), ColumnError> {
    let (index, _) = nearest_item(col)?;
    begin_snap_to_index(col, snap, index, at, cfg, events)
}

/// Start a tween that centers `index`. Deltas below the snap epsilon are
/// applied directly instead of animated.
fn begin_snap_to_index(
    col: &mut ColumnState,
    snap: &mut SnapAnimator,
    index: usize,
    at: Instant,
    cfg: &SnapConfig,
    events: &mut Vec<Event>,
) -> Result<(), ColumnError> {
    let target = col.snap_target(index)?;
    let current = col.offset();
    if (target - current).abs() < snap_constants::EPSILON {
        let after = col.scroll_to(target);
        if after != current {
            events.push(Event::OffsetChanged {
                column: col.id(),
                offset: after,
            });
        }
        return Ok(());
    }
    snap.start(current, target, at, cfg);
    Ok(())
}
