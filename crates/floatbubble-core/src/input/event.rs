//! Pointer and focus events for an overlay

use std::time::Instant;

use crate::geometry::Point2D;

/// A pointer position with both coordinate spaces the host knows about
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position on screen
    pub screen: Point2D,
    /// Position relative to the window's top-left corner
    pub local: Point2D,
    /// When the host observed the event
    pub timestamp: Instant,
}

impl PointerEvent {
    pub fn new(screen: Point2D, local: Point2D, timestamp: Instant) -> Self {
        Self {
            screen,
            local,
            timestamp,
        }
    }
}

/// Unified input event for an overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayInput {
    /// Pointer button went down
    Press(PointerEvent),
    /// Pointer moved with the button held
    Drag(PointerEvent),
    /// Pointer button went up
    Release(PointerEvent),
    /// Press and release on the window (delivered after `Release`)
    Click(PointerEvent),
    /// Window became the focused window
    FocusGained,
    /// Window lost input focus
    FocusLost,
}

impl OverlayInput {
    /// Pointer payload, if this is a pointer event
    pub fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            OverlayInput::Press(e)
            | OverlayInput::Drag(e)
            | OverlayInput::Release(e)
            | OverlayInput::Click(e) => Some(e),
            OverlayInput::FocusGained | OverlayInput::FocusLost => None,
        }
    }
}
