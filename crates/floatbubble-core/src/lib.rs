//! floatbubble-core: floating bubble overlays for any windowing host
//!
//! This crate provides:
//! - An expand/collapse state machine that shapes the window clip across a timed transition
//! - Pointer sampling with jitter rejection for drag gestures
//! - A closed-form fling estimate that keeps a released window gliding
//! - A host-agnostic window seam (`HostWindow`, `WindowHost`) with an in-memory host
//!
//! The host owns the event loop: it translates its events into [`OverlayInput`] and calls
//! [`FloatingOverlay::advance`] from its frame clock.

pub mod animation;
pub mod bubble;
pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod motion;
pub mod observe;
pub mod overlay;

// Re-export commonly used types
pub use animation::{Easing, Tween};
pub use bubble::{BubbleState, BubbleStateMachine, ClipMask, StateChange};
pub use config::{BubbleConfig, MotionConfig, OverlayConfig, TransitionConfig, MAX_FLING_TICKS};
pub use error::{OverlayError, Result};
pub use geometry::{BubbleGeometry, Point2D, Vector2D, WindowBounds};
pub use host::{HostWindow, MemoryHost, MemoryWindow, WindowHost};
pub use input::{OverlayInput, PointerEvent};
pub use motion::{DragController, FlingEstimator, FlingPlan, MotionSampler};
pub use observe::{Observers, SubscriptionId};
pub use overlay::{FloatingOverlay, OverlayEvent, OverlayOption};
