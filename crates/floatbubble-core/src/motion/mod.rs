//! Drag sampling and post-release fling

mod drag;
mod fling;
mod sampler;

pub use drag::{DragController, FlingProgress, ReleaseOutcome};
pub use fling::{FlingAnimation, FlingEstimator, FlingPlan};
pub use sampler::{MotionSampler, Sample, SamplePair};
