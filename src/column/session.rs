//! DragSession: pointer tracking and velocity estimation for one gesture
//!
//! Created on pointer-down, dropped on release or cancel. Mouse and touch
//! feed the same path; the host extracts a single Y per event (first touch
//! point for touch) before it reaches the controller.

use std::time::Instant;

use crate::constants::motion::FRAME_MS;

#[derive(Debug, Clone)]
pub struct DragSession {
    /// Surface offset when the gesture began.
    start_offset: f32,
    /// Total pointer travel so far, in offset units (positive = scroll down).
    accumulated: f32,
    last_y: f32,
    last_at: Instant,
    /// Units per frame at 60 Hz, overwritten on every sample.
    velocity: f32,
}

impl DragSession {
    pub fn begin(y: f32, at: Instant, start_offset: f32) -> Self {
        Self {
            start_offset,
            accumulated: 0.0,
            last_y: y,
            last_at: at,
            velocity: 0.0,
        }
    }

    /// Feed one move sample. Returns the delta for this sample; the raw
    /// (undamped) drag position is available via [`Self::raw_offset`].
    ///
    /// Velocity is the last sample's `(prev − current) / elapsed`,
    /// normalized to units per 60 Hz frame. Duplicate timestamps keep the
    /// previous velocity rather than dividing by zero.
    pub fn sample(&mut self, y: f32, at: Instant) -> f32 {
        let delta = self.last_y - y;
        let elapsed_ms = at.duration_since(self.last_at).as_secs_f32() * 1000.0;
        if elapsed_ms > 0.0 {
            self.velocity = delta / elapsed_ms * FRAME_MS;
        }
        self.accumulated += delta;
        self.last_y = y;
        self.last_at = at;
        delta
    }

    /// Where the surface would sit with no rubber-band damping applied.
    pub fn raw_offset(&self) -> f32 {
        self.start_offset + self.accumulated
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn velocity_is_frame_normalized() {
        let t0 = Instant::now();
        let mut session = DragSession::begin(500.0, t0, 0.0);
        // 10 units of upward travel over one 60 Hz frame.
        let delta = session.sample(490.0, t0 + Duration::from_micros(16_667));
        assert_eq!(delta, 10.0);
        assert!((session.velocity() - 10.0).abs() < 0.01);
    }

    #[test]
    fn duplicate_timestamp_retains_previous_velocity() {
        let t0 = Instant::now();
        let mut session = DragSession::begin(500.0, t0, 0.0);
        session.sample(490.0, t0 + Duration::from_millis(10));
        let before = session.velocity();

        // Same timestamp again: delta still accumulates, velocity holds.
        session.sample(480.0, t0 + Duration::from_millis(10));
        assert_eq!(session.velocity(), before);
        assert_eq!(session.raw_offset(), 20.0);
    }

    #[test]
    fn last_sample_wins() {
        let t0 = Instant::now();
        let mut session = DragSession::begin(500.0, t0, 0.0);
        session.sample(400.0, t0 + Duration::from_millis(10));
        // A slow final sample overwrites the fast one entirely.
        session.sample(399.0, t0 + Duration::from_millis(110));
        assert!(session.velocity() < 1.0);
    }

    #[test]
    fn raw_offset_tracks_travel_from_start() {
        let t0 = Instant::now();
        let mut session = DragSession::begin(300.0, t0, 120.0);
        session.sample(250.0, t0 + Duration::from_millis(16));
        session.sample(260.0, t0 + Duration::from_millis(32));
        assert_eq!(session.raw_offset(), 160.0);
    }
}
