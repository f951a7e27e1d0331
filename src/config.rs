//! Configuration for the picker controller
//!
//! These structs configure the physics in a unit-agnostic way so the same
//! engine drives short option columns and long product reels alike. Defaults
//! come from [`crate::constants`]; hosts may deserialize overrides from
//! their own settings layer.

use serde::{Deserialize, Serialize};

use crate::constants::{motion, snap, timing};

/// Drag and momentum physics knobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Velocity multiplier applied once per momentum frame (< 1).
    pub friction_per_frame: f32,
    /// Minimum speed (units/frame) for momentum to start or keep running.
    pub min_velocity: f32,
    /// Damping factor (< 1) for drag excursions beyond the scroll bounds.
    pub rubber_band_resistance: f32,
    /// Hard cap on overscroll, as a fraction of the viewport extent.
    pub max_overscroll_fraction: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            friction_per_frame: motion::FRICTION_PER_FRAME,
            min_velocity: motion::MIN_VELOCITY,
            rubber_band_resistance: motion::RUBBER_BAND_RESISTANCE,
            max_overscroll_fraction: motion::MAX_OVERSCROLL_FRACTION,
        }
    }
}

/// Snap tween and active-item tracking knobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Snap tween duration in milliseconds.
    pub duration_ms: u64,
    /// Easing kind: 0=Linear, 1=EaseIn, 2=EaseOut, 3=EaseInOut.
    pub easing_kind: u8,
    /// Distance from the viewport center within which the nearest item
    /// counts as active. A single constant covers both mid-drag feedback
    /// and the settled state.
    pub active_radius: f32,
    /// Quiet period after the last offset change before the settled
    /// active-item pass runs (ms).
    pub settle_debounce_ms: u64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            duration_ms: snap::DURATION_MS,
            easing_kind: snap::EASING_KIND,
            active_radius: snap::ACTIVE_RADIUS,
            settle_debounce_ms: timing::SETTLE_DEBOUNCE_MS,
        }
    }
}

/// Complete controller configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PickerConfig {
    pub motion: MotionConfig,
    pub snap: SnapConfig,
}
