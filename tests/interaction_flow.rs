//! Drag / momentum / snap integration tests
//!
//! Drives the controller the way a host would: pointer samples with
//! explicit timestamps, then one Tick per 60 Hz frame until the column
//! settles. No real time passes in any of these tests.

use std::time::{Duration, Instant};

use pickwheel::{
    ColumnGeometry, ColumnId, Event, Item, ItemId, Message, PickerConfig, PickerState,
    PointerKind, update,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(ItemId(i as u64), format!("item {i}"), i as f32 + 0.5))
        .collect()
}

/// Five items of height 100, viewport 300 (3H), no spacing.
fn five_item_picker() -> (PickerState, ColumnId) {
    let mut picker = PickerState::new(PickerConfig::default());
    let column = picker.add_column(items(5), ColumnGeometry::new(100.0, 0.0), 300.0);
    (picker, column)
}

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

/// Run `frames` ticks at ~16 ms apart starting just after `start_ms`.
fn run_frames(
    picker: &mut PickerState,
    base: Instant,
    start_ms: u64,
    frames: u64,
) -> Vec<Event> {
    let mut events = Vec::new();
    for frame in 1..=frames {
        events.extend(update(
            picker,
            Message::Tick {
                at: at(base, start_ms + frame * 16),
            },
        ));
    }
    events
}

fn active_changes(events: &[Event]) -> Vec<Option<ItemId>> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::ActiveChanged { item, .. } => Some(*item),
            _ => None,
        })
        .collect()
}

#[test]
fn zero_velocity_release_at_two_h_snaps_to_item_three() {
    init_logs();
    let (mut picker, column) = five_item_picker();
    let base = Instant::now();

    update(
        &mut picker,
        Message::PointerPressed {
            column,
            y: 500.0,
            at: base,
            kind: PointerKind::Mouse,
        },
    );
    // One fast move to offset 2H = 200, then a still sample so the
    // last-sample velocity is exactly zero.
    update(
        &mut picker,
        Message::PointerMoved {
            y: 300.0,
            at: at(base, 16),
        },
    );
    update(
        &mut picker,
        Message::PointerMoved {
            y: 300.0,
            at: at(base, 120),
        },
    );
    assert_eq!(picker.column(column).unwrap().state().offset(), 200.0);

    // Below-threshold release: momentum never runs, snap resolves
    // directly. Surface center is 200 + 150 = 350, item 3's center.
    update(&mut picker, Message::PointerReleased { at: at(base, 130) });
    run_frames(&mut picker, base, 130, 30);

    let ctrl = picker.column(column).unwrap();
    assert_eq!(ctrl.state().offset(), 200.0);
    assert_eq!(ctrl.active_item(), Some(ItemId(3)));
}

#[test]
fn fast_release_runs_momentum_then_snaps_to_an_item_boundary() {
    init_logs();
    let mut picker = PickerState::new(PickerConfig::default());
    let column = picker.add_column(items(50), ColumnGeometry::new(100.0, 0.0), 300.0);
    let base = Instant::now();

    update(
        &mut picker,
        Message::PointerPressed {
            column,
            y: 600.0,
            at: base,
            kind: PointerKind::Touch,
        },
    );
    // 40 units per 16.67 ms frame.
    for frame in 1..=4u64 {
        update(
            &mut picker,
            Message::PointerMoved {
                y: 600.0 - 40.0 * frame as f32,
                at: base + Duration::from_micros(16_667 * frame),
            },
        );
    }
    update(&mut picker, Message::PointerReleased { at: at(base, 70) });

    let offset_after_release = picker.column(column).unwrap().state().offset();
    let events = run_frames(&mut picker, base, 70, 200);

    let ctrl = picker.column(column).unwrap();
    let offset = ctrl.state().offset();
    // Momentum carried the surface well past the drag distance...
    assert!(offset > offset_after_release + 100.0);
    assert!(offset <= ctrl.state().max_offset());
    // ...and the snap left it exactly centering some item.
    let centered = (offset + 150.0 - 50.0) / 100.0;
    assert!(
        (centered - centered.round()).abs() < 1e-3,
        "offset {offset} does not center an item"
    );
    // Settling ends with exactly one active item.
    assert!(ctrl.active_item().is_some());
    assert!(!events.is_empty());
}

#[test]
fn below_threshold_velocity_is_idempotent_no_momentum() {
    let (mut picker, column) = five_item_picker();
    let base = Instant::now();

    update(
        &mut picker,
        Message::PointerPressed {
            column,
            y: 500.0,
            at: base,
            kind: PointerKind::Mouse,
        },
    );
    // Crawl: 1 unit over 100 ms is far below 0.5 units/frame.
    update(
        &mut picker,
        Message::PointerMoved {
            y: 499.0,
            at: at(base, 100),
        },
    );
    update(&mut picker, Message::PointerReleased { at: at(base, 110) });

    // The first tick must not integrate any momentum: the only offset
    // movement afterwards comes from the snap tween back to item 0.
    let events = run_frames(&mut picker, base, 110, 2);
    for event in &events {
        if let Event::OffsetChanged { offset, .. } = event {
            assert!(*offset <= 1.0, "momentum ran after a crawl release");
        }
    }
}

#[test]
fn rubber_band_excursion_is_damped_capped_and_corrected() {
    init_logs();
    let (mut picker, column) = five_item_picker();
    let base = Instant::now();

    update(
        &mut picker,
        Message::PointerPressed {
            column,
            y: 100.0,
            at: base,
            kind: PointerKind::Touch,
        },
    );
    // Drag 400 units past the top bound: damped to -120, capped at
    // viewport * 0.3 = 90.
    update(
        &mut picker,
        Message::PointerMoved {
            y: 500.0,
            at: at(base, 16),
        },
    );
    assert_eq!(picker.column(column).unwrap().state().offset(), -90.0);

    // Hold still so release velocity is zero, then let the snap restore.
    update(
        &mut picker,
        Message::PointerMoved {
            y: 500.0,
            at: at(base, 216),
        },
    );
    update(&mut picker, Message::PointerReleased { at: at(base, 220) });
    run_frames(&mut picker, base, 220, 40);

    let offset = picker.column(column).unwrap().state().offset();
    assert_eq!(offset, 0.0, "rubber-band excursion persisted");
}

#[test]
fn new_drag_cancels_inflight_momentum() {
    let mut picker = PickerState::new(PickerConfig::default());
    let column = picker.add_column(items(50), ColumnGeometry::new(100.0, 0.0), 300.0);
    let base = Instant::now();

    update(
        &mut picker,
        Message::PointerPressed {
            column,
            y: 600.0,
            at: base,
            kind: PointerKind::Mouse,
        },
    );
    update(
        &mut picker,
        Message::PointerMoved {
            y: 500.0,
            at: at(base, 16),
        },
    );
    update(&mut picker, Message::PointerReleased { at: at(base, 20) });
    run_frames(&mut picker, base, 20, 3);

    // Momentum is live; catching the column must freeze it.
    update(
        &mut picker,
        Message::PointerPressed {
            column,
            y: 300.0,
            at: at(base, 80),
            kind: PointerKind::Mouse,
        },
    );
    let frozen = picker.column(column).unwrap().state().offset();
    let events = run_frames(&mut picker, base, 80, 20);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, Event::OffsetChanged { .. })),
        "momentum kept running through a new drag"
    );
    assert_eq!(picker.column(column).unwrap().state().offset(), frozen);
}

#[test]
fn stray_moves_and_releases_without_a_gesture_are_noops() {
    let (mut picker, _column) = five_item_picker();
    let base = Instant::now();

    let events = update(
        &mut picker,
        Message::PointerMoved {
            y: 100.0,
            at: base,
        },
    );
    assert!(events.is_empty());
    let events = update(&mut picker, Message::PointerReleased { at: at(base, 10) });
    assert!(events.is_empty());
}

#[test]
fn touch_gestures_request_native_scroll_suppression_mouse_does_not() {
    let (mut picker, column) = five_item_picker();
    let base = Instant::now();

    let events = update(
        &mut picker,
        Message::PointerPressed {
            column,
            y: 100.0,
            at: base,
            kind: PointerKind::Touch,
        },
    );
    assert!(events.contains(&Event::GestureCaptured {
        column,
        suppress_native_scroll: true
    }));
    update(&mut picker, Message::PointerReleased { at: at(base, 10) });

    let events = update(
        &mut picker,
        Message::PointerPressed {
            column,
            y: 100.0,
            at: at(base, 500),
            kind: PointerKind::Mouse,
        },
    );
    assert!(events.contains(&Event::GestureCaptured {
        column,
        suppress_native_scroll: false
    }));
}

#[test]
fn columns_are_independent() {
    let mut picker = PickerState::new(PickerConfig::default());
    let left = picker.add_column(items(5), ColumnGeometry::new(100.0, 0.0), 300.0);
    let right = picker.add_column(items(5), ColumnGeometry::new(100.0, 0.0), 300.0);
    let base = Instant::now();

    update(
        &mut picker,
        Message::PointerPressed {
            column: left,
            y: 500.0,
            at: base,
            kind: PointerKind::Mouse,
        },
    );
    update(
        &mut picker,
        Message::PointerMoved {
            y: 400.0,
            at: at(base, 16),
        },
    );
    update(&mut picker, Message::PointerReleased { at: at(base, 20) });
    run_frames(&mut picker, base, 20, 60);

    assert!(picker.column(left).unwrap().state().offset() > 0.0);
    assert_eq!(picker.column(right).unwrap().state().offset(), 0.0);
    assert_eq!(picker.column(right).unwrap().active_item(), None);
}

#[test]
fn random_gestures_always_settle_in_bounds_with_one_active_item() {
    use rand::Rng;
    init_logs();

    let mut rng = rand::rng();
    for round in 0..20 {
        let (mut picker, column) = five_item_picker();
        let base = Instant::now();

        update(
            &mut picker,
            Message::PointerPressed {
                column,
                y: 500.0,
                at: base,
                kind: PointerKind::Touch,
            },
        );
        let mut y = 500.0f32;
        let mut clock = 0u64;
        for _ in 0..rng.random_range(1..20) {
            y += rng.random_range(-120.0..120.0);
            clock += rng.random_range(1..40);
            update(
                &mut picker,
                Message::PointerMoved {
                    y,
                    at: at(base, clock),
                },
            );
        }
        clock += 5;
        update(&mut picker, Message::PointerReleased { at: at(base, clock) });
        run_frames(&mut picker, base, clock, 300);

        let ctrl = picker.column(column).unwrap();
        let offset = ctrl.state().offset();
        assert!(
            (0.0..=ctrl.state().max_offset()).contains(&offset),
            "round {round}: offset {offset} escaped bounds"
        );
        assert!(
            ctrl.active_item().is_some(),
            "round {round}: no active item after settling at {offset}"
        );
    }
}

#[test]
fn active_item_clears_mid_scroll_when_nothing_is_near_center() {
    let mut picker = PickerState::new(PickerConfig::default());
    let mut config = *picker.config();
    config.snap.active_radius = 20.0;
    picker.set_config(config);
    let column = picker.add_column(items(5), ColumnGeometry::new(100.0, 0.0), 300.0);
    let base = Instant::now();

    update(
        &mut picker,
        Message::PointerPressed {
            column,
            y: 500.0,
            at: base,
            kind: PointerKind::Mouse,
        },
    );
    // Offset 0: item 1 is dead-center, so it activates first.
    let events = update(
        &mut picker,
        Message::PointerMoved {
            y: 499.0,
            at: at(base, 16),
        },
    );
    assert_eq!(active_changes(&events), vec![Some(ItemId(1))]);

    // Offset 50: centers fall halfway between items 1 and 2, distance 50
    // from both, outside the tightened radius.
    let events = update(
        &mut picker,
        Message::PointerMoved {
            y: 450.0,
            at: at(base, 32),
        },
    );
    assert_eq!(active_changes(&events), vec![None]);
}
