// SPDX-License-Identifier: MPL-2.0
//! Timed positional transition with a cubic ease-out curve.
//!
//! The tween is the panel's stand-in for an engine animation service: the
//! per-frame tick samples it with a monotonic clock and it reports
//! completion exactly once, after which the panel snaps to the exact
//! target.

use iced::Point;
use std::time::{Duration, Instant};

/// Snap-back animation from a drop position to the pinned target.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionTween {
    from: Point,
    to: Point,
    started_at: Instant,
    duration: Duration,
}

impl PositionTween {
    #[must_use]
    pub fn new(from: Point, to: Point, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Final position the tween settles on.
    #[must_use]
    pub fn target(&self) -> Point {
        self.to
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.duration_since(self.started_at) >= self.duration
    }

    /// Position at `now`. Clamped to the endpoints: sampling before the
    /// start yields `from`, sampling after completion yields `to` exactly.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Point {
        if self.is_finished(now) {
            return self.to;
        }

        let elapsed = now.duration_since(self.started_at).as_secs_f32();
        let t = elapsed / self.duration.as_secs_f32();
        let eased = ease_out_cubic(t.clamp(0.0, 1.0));

        Point::new(
            self.from.x + (self.to.x - self.from.x) * eased,
            self.from.y + (self.to.y - self.from.y) * eased,
        )
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
