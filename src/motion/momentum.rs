//! Momentum animator: frame-stepped inertial deceleration
//!
//! Explicit `Idle -> Running -> Idle` state machine, advanced one step per
//! injected frame tick so tests can drive it without real time. Exits back
//! to `Idle` either below the minimum-velocity threshold or on a bound hit;
//! both exits hand off to the snap resolver.

use crate::column::ColumnState;
use crate::config::MotionConfig;

/// Result of advancing the animator by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not running; nothing happened.
    Idle,
    /// Offset moved; the loop continues next frame.
    Moved,
    /// The loop just terminated (min-velocity or bound hit). The caller
    /// hands the column to the snap resolver.
    Settled,
}

#[derive(Debug, Default, Clone)]
pub struct MomentumAnimator {
    running: bool,
    /// Offset units per frame, signed.
    velocity: f32,
}

impl MomentumAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Enter `Running` if the release velocity clears the threshold.
    /// Returns false when the gesture should snap directly instead.
    pub fn try_start(&mut self, velocity: f32, cfg: &MotionConfig) -> bool {
        if velocity.abs() <= cfg.min_velocity {
            return false;
        }
        self.running = true;
        self.velocity = velocity;
        true
    }

    /// Cancel any in-flight loop. A new drag must call this before its
    /// first sample is processed.
    pub fn abort(&mut self) {
        self.running = false;
        self.velocity = 0.0;
    }

    /// One frame: integrate velocity into the offset with a hard clamp at
    /// the bounds (no rubber band outside a drag), then apply friction.
    pub fn step(&mut self, surface: &mut ColumnState, cfg: &MotionConfig) -> StepOutcome {
        if !self.running {
            return StepOutcome::Idle;
        }

        let next = surface.offset() + self.velocity;
        let clamped = surface.scroll_by(self.velocity);

        if clamped != next {
            // Bound hit: zero residual velocity and terminate immediately.
            self.abort();
            return StepOutcome::Settled;
        }

        self.velocity *= cfg.friction_per_frame;
        if self.velocity.abs() < cfg.min_velocity {
            self.abort();
            return StepOutcome::Settled;
        }

        StepOutcome::Moved
    }
}
