//! Pickwheel tuning constants
//!
//! Shared defaults for drag, momentum, snap, and settle behavior. Tuning
//! should happen here so all columns update consistently; runtime overrides
//! go through [`crate::config`].

/// Drag and momentum physics defaults.
pub mod motion {
    /// Milliseconds per animation frame at the 60 Hz reference rate.
    /// Velocities are expressed in offset units per frame at this rate.
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Velocity multiplier applied once per momentum frame.
    pub const FRICTION_PER_FRAME: f32 = 0.95;
    /// Below this speed (units/frame) momentum stops and the snap takes over.
    pub const MIN_VELOCITY: f32 = 0.5;
    /// Damping factor for drag excursions beyond the scroll bounds.
    pub const RUBBER_BAND_RESISTANCE: f32 = 0.3;
    /// Maximum overscroll distance as a fraction of the viewport extent.
    pub const MAX_OVERSCROLL_FRACTION: f32 = 0.3;
}

/// Snap tween and active-item defaults.
pub mod snap {
    /// Default duration (ms) for the snap-to-center tween.
    pub const DURATION_MS: u64 = 180;
    /// Easing kind for snaps: 0=Linear, 1=EaseIn, 2=EaseOut, 3=EaseInOut.
    pub const EASING_KIND: u8 = 2; // EaseOut
    /// An item counts as "active" only within this distance of the
    /// viewport center (offset units).
    pub const ACTIVE_RADIUS: f32 = 56.0;
    /// Snap deltas below this magnitude are applied directly, no tween.
    pub const EPSILON: f32 = 0.5;
}

/// Debounce and windowing defaults.
pub mod timing {
    /// Quiet period after the last offset change before the settled
    /// active-item pass runs (ms).
    pub const SETTLE_DEBOUNCE_MS: u64 = 150;
}

/// Defaults for visible-range windowing in long columns.
pub mod windows {
    /// Items kept on each side of the visible window for smooth scrolling.
    pub const OVERSCAN_ITEMS: usize = 2;
}
