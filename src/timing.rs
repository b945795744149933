/*
 * Timing Module
 *
 * Caps how often the simulation ticks. nannou calls `update` once per
 * display refresh, which can be well above 60 Hz, so the app asks a
 * FrameLimiter whether a tick is due before advancing the world.
 */

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval: Duration,
    last: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(target_fps: f64) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / target_fps),
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // Whether `elapsed` since the last tick is long enough for another one
    pub fn is_due(&self, elapsed: Duration) -> bool {
        elapsed >= self.interval
    }

    /// Returns `true` and records the tick when one is due at `now`.
    ///
    /// Ticks are scheduled on a fixed grid so the average rate matches the
    /// target even when refreshes don't line up with it. After a stall of
    /// two intervals or more the grid restarts at `now` instead of firing a
    /// burst of catch-up ticks.
    pub fn ready(&mut self, now: Instant) -> bool {
        let last = match self.last {
            Some(last) => last,
            None => {
                self.last = Some(now);
                return true;
            }
        };

        let elapsed = now.saturating_duration_since(last);
        if !self.is_due(elapsed) {
            return false;
        }

        self.last = Some(if elapsed >= self.interval * 2 {
            now
        } else {
            last + self.interval
        });
        true
    }
}
