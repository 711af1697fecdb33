//! Release-time fling estimation and its fixed-tick playback.
//!
//! The glide is a closed-form approximation rather than an inertial simulation: the
//! sampled displacement is capped, squared and divided into a tick count `n`, and the
//! window is nudged by `displacement * sqrt(i) / n` for `i = n-1 … 1`, one nudge per tick.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, warn};

use super::SamplePair;
use crate::config::{MotionConfig, MAX_FLING_TICKS};
use crate::geometry::Vector2D;

/// Decides whether a release is a fling and builds its plan
#[derive(Debug, Clone)]
pub struct FlingEstimator {
    distance_threshold: f64,
    distance_max: f64,
    cycle_count_ratio: u32,
}

impl FlingEstimator {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            distance_threshold: config.distance_threshold,
            distance_max: config.distance_max,
            cycle_count_ratio: config.cycle_count_ratio.max(1),
        }
    }

    /// Sampled distance, capped at the configured maximum
    pub fn capped_distance(&self, samples: &SamplePair) -> f64 {
        samples.displacement().magnitude().min(self.distance_max)
    }

    /// `floor(distance² / ratio)`, clamped to [`MAX_FLING_TICKS`]
    pub fn cycle_count(&self, distance: f64) -> u32 {
        let squared = (distance * distance).floor() as u64;
        let cycles = squared / u64::from(self.cycle_count_ratio);
        match u32::try_from(cycles) {
            Ok(cycles) if cycles <= MAX_FLING_TICKS => cycles,
            _ => {
                warn!(
                    "Fling of {} cycles exceeds the budget, clamping to {}",
                    cycles, MAX_FLING_TICKS
                );
                MAX_FLING_TICKS
            }
        }
    }

    /// Plan for a release with these samples, or `None` when the release is a plain stop
    pub fn estimate(&self, samples: SamplePair) -> Option<FlingPlan> {
        let distance = self.capped_distance(&samples);
        if distance <= self.distance_threshold {
            return None;
        }

        let cycle_count = self.cycle_count(distance);
        let plan = FlingPlan::new(samples.displacement(), cycle_count);
        if plan.is_empty() {
            return None;
        }

        debug!(
            "Fling planned: distance {:.1}px, {} steps",
            distance,
            plan.len()
        );
        Some(plan)
    }
}

/// Decreasing per-tick ratios applied to one fixed displacement
#[derive(Debug, Clone, PartialEq)]
pub struct FlingPlan {
    displacement: Vector2D,
    cycle_count: u32,
    ratios: VecDeque<f64>,
}

impl FlingPlan {
    /// Ratios `sqrt(i) / cycle_count` for `i = cycle_count-1` down to `1`
    pub fn new(displacement: Vector2D, cycle_count: u32) -> Self {
        let n = f64::from(cycle_count);
        let ratios = (1..cycle_count)
            .rev()
            .map(|i| f64::from(i).sqrt() / n)
            .collect();
        Self {
            displacement,
            cycle_count,
            ratios,
        }
    }

    pub fn displacement(&self) -> Vector2D {
        self.displacement
    }

    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    /// Remaining ratios, next first
    pub fn ratios(&self) -> impl Iterator<Item = f64> + '_ {
        self.ratios.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Sum of all remaining steps
    pub fn total_displacement(&self) -> Vector2D {
        self.displacement * self.ratios().sum::<f64>()
    }
}

impl Iterator for FlingPlan {
    type Item = Vector2D;

    /// Pop the next ratio and scale the sampled displacement by it
    fn next(&mut self) -> Option<Vector2D> {
        let ratio = self.ratios.pop_front()?;
        Some(self.displacement * ratio)
    }
}

/// Plays a [`FlingPlan`] back at a fixed tick period
#[derive(Debug, Clone)]
pub struct FlingAnimation {
    plan: FlingPlan,
    tick: Duration,
    pending: Duration,
}

impl FlingAnimation {
    pub fn new(plan: FlingPlan, tick: Duration) -> Self {
        Self {
            plan,
            tick,
            pending: Duration::ZERO,
        }
    }

    /// Advance by `dt`, calling `apply` with the displacement of every tick that elapsed.
    /// Returns the number of ticks fired.
    pub fn advance(&mut self, dt: Duration, mut apply: impl FnMut(Vector2D)) -> usize {
        self.pending += dt;
        let mut fired = 0;
        while self.pending >= self.tick && !self.plan.is_empty() {
            self.pending -= self.tick;
            if let Some(step) = self.plan.next() {
                apply(step);
                fired += 1;
            }
        }
        fired
    }

    pub fn remaining_ticks(&self) -> usize {
        self.plan.len()
    }

    pub fn is_finished(&self) -> bool {
        self.plan.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2D;

    fn estimator() -> FlingEstimator {
        FlingEstimator::new(&MotionConfig::default())
    }

    fn pair(x0: f64, y0: f64, x1: f64, y1: f64) -> SamplePair {
        SamplePair::new(Point2D::new(x0, y0), Point2D::new(x1, y1))
    }

    #[test]
    fn test_thirty_pixel_fling() {
        let plan = estimator().estimate(pair(0.0, 0.0, 30.0, 0.0)).unwrap();
        assert_eq!(plan.cycle_count(), 15);
        assert_eq!(plan.len(), 14);

        let ratios: Vec<f64> = plan.ratios().collect();
        assert_eq!(ratios[0], 14f64.sqrt() / 15.0);
        assert_eq!(ratios[13], 1.0 / 15.0);
        assert!(ratios.windows(2).all(|w| w[0] > w[1]));

        let sum: f64 = ratios.iter().sum();
        let steps: Vec<Vector2D> = plan.collect();
        let total_x: f64 = steps.iter().map(|s| s.x).sum();
        assert!((total_x - 30.0 * sum).abs() < 1e-9);
        assert!(steps.iter().all(|s| s.x <= 30.0 && s.y == 0.0));
    }

    #[test]
    fn test_below_threshold_is_no_fling() {
        assert!(estimator().estimate(pair(0.0, 0.0, 5.0, 0.0)).is_none());
        assert!(estimator().estimate(pair(0.0, 0.0, 10.0, 0.0)).is_none());
    }

    #[test]
    fn test_distance_is_capped() {
        let estimator = estimator();
        let samples = pair(0.0, 0.0, 0.0, 100.0);
        assert_eq!(estimator.capped_distance(&samples), 40.0);

        let plan = estimator.estimate(samples).unwrap();
        assert_eq!(plan.cycle_count(), 26);
        assert_eq!(plan.len(), 25);
        // Steps still scale the uncapped displacement
        assert_eq!(plan.displacement(), Vector2D::new(0.0, 100.0));
    }

    #[test]
    fn test_single_cycle_yields_no_fling() {
        // 10.5² = 110.25 -> one cycle -> no ratios
        let estimator = estimator();
        assert_eq!(estimator.cycle_count(10.5), 1);
        assert!(estimator.estimate(pair(0.0, 0.0, 10.5, 0.0)).is_none());
    }

    #[test]
    fn test_cycle_count_is_clamped() {
        // Built straight from an unvalidated config
        let estimator = FlingEstimator::new(&MotionConfig {
            distance_max: 100_000.0,
            cycle_count_ratio: 1,
            ..MotionConfig::default()
        });
        assert_eq!(estimator.cycle_count(100_000.0), MAX_FLING_TICKS);
        assert_eq!(estimator.cycle_count(f64::MAX), MAX_FLING_TICKS);
        assert_eq!(estimator.cycle_count(200.0), 40_000);

        let plan = estimator.estimate(pair(0.0, 0.0, 100_000.0, 0.0)).unwrap();
        assert_eq!(plan.len(), MAX_FLING_TICKS as usize - 1);
    }

    #[test]
    fn test_animation_fires_one_step_per_tick() {
        let plan = estimator().estimate(pair(0.0, 0.0, 30.0, 0.0)).unwrap();
        let expected_first = plan.displacement() * (14f64.sqrt() / 15.0);
        let mut animation = FlingAnimation::new(plan, Duration::from_millis(33));

        let mut steps = Vec::new();
        assert_eq!(animation.advance(Duration::from_millis(20), |s| steps.push(s)), 0);
        assert_eq!(animation.advance(Duration::from_millis(13), |s| steps.push(s)), 1);
        assert_eq!(steps, vec![expected_first]);

        assert_eq!(animation.advance(Duration::from_millis(66), |s| steps.push(s)), 2);
        assert_eq!(animation.remaining_ticks(), 11);

        animation.advance(Duration::from_secs(5), |s| steps.push(s));
        assert!(animation.is_finished());
        assert_eq!(steps.len(), 14);
        assert_eq!(animation.advance(Duration::from_secs(1), |s| steps.push(s)), 0);
    }
}
