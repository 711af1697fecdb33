//! Screen geometry: points, displacements, window bounds and the bubble footprint

mod bounds;
mod point;
mod vector;

pub use bounds::WindowBounds;
pub use point::Point2D;
pub use vector::Vector2D;

use crate::error::{OverlayError, Result};

/// Collapsed and expanded footprint of a bubble.
///
/// The shape only grows outward: both expanded sides are at least the diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleGeometry {
    diameter: f64,
    expanded_width: f64,
    expanded_height: f64,
}

impl BubbleGeometry {
    /// Validate and build a geometry
    pub fn new(diameter: f64, expanded_width: f64, expanded_height: f64) -> Result<Self> {
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(OverlayError::InvalidDiameter(diameter));
        }
        if !expanded_width.is_finite() || expanded_width < diameter {
            return Err(OverlayError::ExpandedSmallerThanDiameter {
                axis: "width",
                expanded: expanded_width,
                diameter,
            });
        }
        if !expanded_height.is_finite() || expanded_height < diameter {
            return Err(OverlayError::ExpandedSmallerThanDiameter {
                axis: "height",
                expanded: expanded_height,
                diameter,
            });
        }

        Ok(Self {
            diameter,
            expanded_width,
            expanded_height,
        })
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn expanded_width(&self) -> f64 {
        self.expanded_width
    }

    pub fn expanded_height(&self) -> f64 {
        self.expanded_height
    }

    /// Horizontal growth from bubble to panel
    pub fn diff_width(&self) -> f64 {
        self.expanded_width - self.diameter
    }

    /// Vertical growth from bubble to panel
    pub fn diff_height(&self) -> f64 {
        self.expanded_height - self.diameter
    }

    /// Shift applied to the window origin when growing (centre-anchored)
    pub fn grow_offset(&self) -> Vector2D {
        Vector2D::new(-self.diff_width() / 2.0, -self.diff_height() / 2.0)
    }

    /// Window bounds once grown from `shrunk`
    pub fn expanded_bounds(&self, shrunk: WindowBounds) -> WindowBounds {
        let origin = shrunk.origin() + self.grow_offset();
        WindowBounds::new(origin.x, origin.y, self.expanded_width, self.expanded_height)
    }

    /// Window bounds once shrunk back from `expanded`
    pub fn shrunk_bounds(&self, expanded: WindowBounds) -> WindowBounds {
        WindowBounds::square(expanded.origin() - self.grow_offset(), self.diameter)
    }
}
