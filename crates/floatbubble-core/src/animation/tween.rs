//! Tweening/interpolation

use std::time::Duration;

use super::Easing;

/// A single value animated from `start` to `end` over a duration
#[derive(Debug, Clone)]
pub struct Tween {
    /// Start value
    pub start: f64,
    /// End value
    pub end: f64,
    /// Duration
    pub duration: Duration,
    /// Current progress (0-1)
    pub progress: f64,
    /// Easing function
    pub easing: Easing,
    /// Whether the tween is complete
    pub complete: bool,
}

impl Tween {
    /// Create a new tween
    pub fn new(start: f64, end: f64, duration: Duration) -> Self {
        let complete = duration.is_zero();
        Self {
            start,
            end,
            duration,
            progress: if complete { 1.0 } else { 0.0 },
            easing: Easing::Linear,
            complete,
        }
    }

    /// Set easing function
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advance the tween by `dt`
    pub fn update(&mut self, dt: Duration) {
        if self.complete {
            return;
        }

        self.progress += dt.as_secs_f64() / self.duration.as_secs_f64();
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.complete = true;
        }
    }

    /// Get current value
    pub fn value(&self) -> f64 {
        if self.complete {
            return self.end;
        }
        let t = self.easing.apply(self.progress);
        self.start + (self.end - self.start) * t
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
