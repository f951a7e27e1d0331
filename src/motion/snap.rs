//! Snap resolver and time-based tween animator
//!
//! `nearest_item` picks the item closest to the viewport center;
//! `SnapAnimator` eases the offset onto the exact target over wall-clock
//! time. Timestamps are injected so tests can step without sleeping.

use std::time::{Duration, Instant};

use crate::column::ColumnState;
use crate::config::SnapConfig;
use crate::error::ColumnError;

/// Find the item whose center is nearest the surface center. Ties go to
/// the earlier index (strict `<` while scanning in list order), so the
/// result is deterministic for identical geometry.
pub fn nearest_item(column: &ColumnState) -> Result<(usize, f32), ColumnError> {
    if column.is_empty() {
        return Err(ColumnError::EmptyColumn(column.id()));
    }
    let center = column.surface_center();
    let mut best: Option<(usize, f32)> = None;
    for index in 0..column.len() {
        let distance = (column.item_center(index)? - center).abs();
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((index, distance)),
        }
    }
    // Non-empty scan always yields a winner.
    best.ok_or(ColumnError::EmptyColumn(column.id()))
}

#[derive(Debug, Clone)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing_kind: u8, // 0=Linear,1=EaseIn,2=EaseOut,3=EaseInOut
}

impl Default for SnapAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(crate::constants::snap::DURATION_MS),
            easing_kind: crate::constants::snap::EASING_KIND,
        }
    }
}

impl SnapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn start(&mut self, current: f32, target: f32, now: Instant, cfg: &SnapConfig) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = now;
        self.duration = Duration::from_millis(cfg.duration_ms);
        self.easing_kind = cfg.easing_kind;
    }

    /// Returns Some(next_offset) while animating; the final call lands
    /// exactly on the target and flips the animator inactive. Callers
    /// detect completion by checking [`Self::is_active`] afterwards.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let te = apply_easing(t, self.easing_kind);
        Some(self.start + (self.target - self.start) * te)
    }

    /// Cancel the current tween immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

fn apply_easing(t: f32, kind: u8) -> f32 {
    match kind {
        1 => t * t,                       // EaseIn (quad)
        2 => 1.0 - (1.0 - t) * (1.0 - t), // EaseOut (quad)
        3 => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - 2.0 * (1.0 - t) * (1.0 - t)
            }
        } // EaseInOut (quad)
        _ => t,                           // Linear
    }
}
