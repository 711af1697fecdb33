//! Tunable settings for an overlay.
//!
//! All timing and distance constants are grouped here so they can be loaded from a file
//! and overridden in tests instead of being hard-coded in the controllers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{OverlayError, Result};
use crate::geometry::{BubbleGeometry, Point2D};
use crate::overlay::OverlayOption;

/// Size and initial placement of the bubble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleConfig {
    /// Diameter of the collapsed circle
    pub diameter: f64,
    /// Width of the expanded panel
    pub expanded_width: f64,
    /// Height of the expanded panel
    pub expanded_height: f64,
    /// Initial top-left corner of the collapsed window
    pub origin: Point2D,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            diameter: 64.0,
            expanded_width: 320.0,
            expanded_height: 224.0,
            origin: Point2D::new(96.0, 96.0),
        }
    }
}

impl BubbleConfig {
    /// Validated geometry for this configuration
    pub fn geometry(&self) -> Result<BubbleGeometry> {
        BubbleGeometry::new(self.diameter, self.expanded_width, self.expanded_height)
    }
}

/// Grow/shrink transition timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: Easing::Linear,
        }
    }
}

impl TransitionConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Upper bound on the number of steps a single fling may take
pub const MAX_FLING_TICKS: u32 = u16::MAX as u32;

/// Drag sampling and fling constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Minimum time between two retained drag samples
    pub sample_interval_ms: u64,
    /// Movement (px) below which samples are treated as jitter and releases as plain stops
    pub distance_threshold: f64,
    /// Cap (px) on the sampled distance used to size a fling
    pub distance_max: f64,
    /// Divisor turning the squared distance into a tick count
    pub cycle_count_ratio: u32,
    /// Period between two fling steps
    pub fling_tick_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 50,
            distance_threshold: 10.0,
            distance_max: 40.0,
            cycle_count_ratio: 60,
            fling_tick_ms: 33,
        }
    }
}

impl MotionConfig {
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    pub fn fling_tick(&self) -> Duration {
        Duration::from_millis(self.fling_tick_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.distance_threshold.is_finite() || self.distance_threshold < 0.0 {
            return Err(OverlayError::InvalidMotion(format!(
                "distance_threshold must be a non-negative number, got {}",
                self.distance_threshold
            )));
        }
        if !self.distance_max.is_finite() || self.distance_max < self.distance_threshold {
            return Err(OverlayError::InvalidMotion(format!(
                "distance_max ({}) must be at least distance_threshold ({})",
                self.distance_max, self.distance_threshold
            )));
        }
        if self.cycle_count_ratio == 0 {
            return Err(OverlayError::InvalidMotion(
                "cycle_count_ratio must be greater than zero".to_string(),
            ));
        }
        let max_cycles = ((self.distance_max * self.distance_max).floor()
            / f64::from(self.cycle_count_ratio))
        .floor();
        if max_cycles > f64::from(MAX_FLING_TICKS) {
            return Err(OverlayError::InvalidMotion(format!(
                "distance_max ({}) and cycle_count_ratio ({}) allow {} fling ticks, more than {}",
                self.distance_max, self.cycle_count_ratio, max_cycles, MAX_FLING_TICKS
            )));
        }
        if self.fling_tick_ms == 0 {
            return Err(OverlayError::InvalidMotion(
                "fling_tick_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything needed to build a [`FloatingOverlay`](crate::FloatingOverlay)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub bubble: BubbleConfig,
    pub transition: TransitionConfig,
    pub motion: MotionConfig,
    /// Behaviours applied in order after construction
    pub options: Vec<OverlayOption>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            bubble: BubbleConfig::default(),
            transition: TransitionConfig::default(),
            motion: MotionConfig::default(),
            options: vec![OverlayOption::Draggable],
        }
    }
}

impl OverlayConfig {
    /// Check every section, returning the validated geometry
    pub fn validate(&self) -> Result<BubbleGeometry> {
        let geometry = self.bubble.geometry()?;
        self.motion.validate()?;
        Ok(geometry)
    }
}
