//! Frame timing for drivers
//!
//! The simulation never reads the clock; drivers measure the time between
//! frames here and pass it in.

use std::time::{Duration, Instant};

/// Measures elapsed seconds between consecutive `tick()` calls
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta: Option<f32>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: None,
            max_delta: None,
        }
    }

    /// Clamp reported deltas, so a stalled frame doesn't launch the player
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = Some(max_delta.max(0.0));
        self
    }

    /// Seconds since the previous tick; 0 on the first call
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// `tick()` against an explicit timestamp
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = match self.last {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last = Some(now);

        let dt = elapsed.as_secs_f32();
        match self.max_delta {
            Some(max) => dt.min(max),
            None => dt,
        }
    }

    /// Forget the previous timestamp; the next tick reports 0
    pub fn reset(&mut self) {
        self.last = None;
    }
}
