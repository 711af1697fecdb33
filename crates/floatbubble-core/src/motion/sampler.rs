//! Two-slot pointer sampler with jitter rejection

use std::time::{Duration, Instant};

use crate::config::MotionConfig;
use crate::geometry::{Point2D, Vector2D};

/// A point captured at a given instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub point: Point2D,
    pub time: Instant,
}

/// The two retained samples of a gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePair {
    pub previous: Point2D,
    pub current: Point2D,
}

impl SamplePair {
    pub fn new(previous: Point2D, current: Point2D) -> Self {
        Self { previous, current }
    }

    /// Displacement from the older to the newer sample
    pub fn displacement(&self) -> Vector2D {
        self.current - self.previous
    }
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    previous: Sample,
    current: Sample,
}

/// Tracks the last two meaningful pointer positions of a drag.
///
/// Points are screen coordinates; window-local points shift as the window follows the
/// pointer and would hide the motion.
///
/// Only the previous and current samples are kept: a new sample is retained when the
/// sample interval has elapsed and the pointer moved further than the distance threshold
/// from the previous sample. A slow creep after a fast move therefore still replaces the
/// fast sample, so the release sees the creep.
#[derive(Debug, Clone)]
pub struct MotionSampler {
    sample_interval: Duration,
    distance_threshold: f64,
    gesture: Option<Gesture>,
    moved: bool,
}

impl MotionSampler {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            sample_interval: config.sample_interval(),
            distance_threshold: config.distance_threshold,
            gesture: None,
            moved: false,
        }
    }

    /// Start a gesture: both slots hold the press point
    pub fn on_press(&mut self, point: Point2D, now: Instant) {
        let sample = Sample { point, time: now };
        self.gesture = Some(Gesture {
            previous: sample,
            current: sample,
        });
    }

    /// Record a drag position, returning whether it was retained as the new current sample
    pub fn on_drag(&mut self, point: Point2D, now: Instant) -> bool {
        self.moved = true;

        let Some(gesture) = self.gesture.as_mut() else {
            return false;
        };
        if now.saturating_duration_since(gesture.current.time) <= self.sample_interval {
            return false;
        }
        if gesture.previous.point.distance(&point) <= self.distance_threshold {
            return false;
        }

        gesture.previous = gesture.current;
        gesture.current = Sample { point, time: now };
        true
    }

    /// True exactly once after any drag since the last query
    pub fn was_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Retained samples of the active gesture
    pub fn samples(&self) -> Option<SamplePair> {
        self.gesture
            .map(|g| SamplePair::new(g.previous.point, g.current.point))
    }

    /// End the gesture, handing out its samples if a press started it
    pub fn finish(&mut self) -> Option<SamplePair> {
        let samples = self.samples();
        self.gesture = None;
        samples
    }
}
