//! Bubble states and the clip mask shaping the visible region

use crate::geometry::{Point2D, Vector2D, WindowBounds};

/// Lifecycle state of a bubble. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BubbleState {
    /// Collapsed circular badge
    #[default]
    Shrunk,
    /// Growing towards the panel
    Expanding,
    /// Full panel with content shown
    Expanded,
    /// Collapsing back into the badge
    Shrinking,
}

impl BubbleState {
    /// Content is shown only in the fully expanded state
    pub fn is_content_visible(&self) -> bool {
        matches!(self, BubbleState::Expanded)
    }
}

/// Visible (and hit-testable) region of the window.
///
/// `arc` follows the rounded-rectangle convention where the arc size is the corner
/// diameter: a square clip with `arc == width` is a full circle, `arc == 0` is a plain
/// rectangle. The clip is centred inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipMask {
    pub arc: f64,
    pub width: f64,
    pub height: f64,
}

impl ClipMask {
    /// Full circle of the given diameter
    pub fn circle(diameter: f64) -> Self {
        Self {
            arc: diameter,
            width: diameter,
            height: diameter,
        }
    }

    /// Plain rectangle
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self {
            arc: 0.0,
            width,
            height,
        }
    }

    /// Interpolate arc and size together
    pub fn lerp(&self, other: &ClipMask, t: f64) -> Self {
        Self {
            arc: self.arc + (other.arc - self.arc) * t,
            width: self.width + (other.width - self.width) * t,
            height: self.height + (other.height - self.height) * t,
        }
    }

    /// Radius of the rounded corners, bounded by the shorter side
    pub fn corner_radius(&self) -> f64 {
        (self.arc / 2.0).min(self.width / 2.0).min(self.height / 2.0).max(0.0)
    }

    /// Top-left of the clip relative to a window of the given bounds
    pub fn offset_within(&self, window: &WindowBounds) -> Vector2D {
        Vector2D::new(
            (window.width - self.width) / 2.0,
            (window.height - self.height) / 2.0,
        )
    }

    /// Hit test a window-local point against the rounded clip
    pub fn contains(&self, window: &WindowBounds, local: Point2D) -> bool {
        let offset = self.offset_within(window);
        let px = local.x - offset.x;
        let py = local.y - offset.y;
        if px < 0.0 || py < 0.0 || px > self.width || py > self.height {
            return false;
        }

        let r = self.corner_radius();
        if r == 0.0 {
            return true;
        }
        // Nearest point on the inner rectangle the corner circles are centred on
        let cx = px.clamp(r, self.width - r);
        let cy = py.clamp(r, self.height - r);
        let dx = px - cx;
        let dy = py - cy;
        dx * dx + dy * dy <= r * r
    }
}
