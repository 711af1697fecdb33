//! Window bounds (top-left origin plus size)

use serde::{Deserialize, Serialize};

use super::{Point2D, Vector2D};

/// Screen-space rectangle of a host window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WindowBounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square bounds of the given side at an origin
    pub fn square(origin: Point2D, side: f64) -> Self {
        Self::new(origin.x, origin.y, side, side)
    }

    /// Top-left corner
    pub fn origin(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Centre of the rectangle
    pub fn center(&self) -> Point2D {
        Point2D::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same size, new top-left corner
    pub fn with_origin(self, origin: Point2D) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }

    /// Same size, shifted by a displacement
    pub fn translate(self, delta: Vector2D) -> Self {
        self.with_origin(self.origin() + delta)
    }

    /// Bounds of the same size whose centre sits on `center`
    pub fn centered_on(self, center: Point2D) -> Self {
        self.with_origin(Point2D::new(
            center.x - self.width / 2.0,
            center.y - self.height / 2.0,
        ))
    }

    /// Check if a point is inside the rectangle
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_on() {
        let bounds = WindowBounds::new(0.0, 0.0, 60.0, 40.0);
        let moved = bounds.centered_on(Point2D::new(100.0, 100.0));
        assert_eq!(moved, WindowBounds::new(70.0, 80.0, 60.0, 40.0));
        assert_eq!(moved.center(), Point2D::new(100.0, 100.0));
    }

    #[test]
    fn test_contains() {
        let bounds = WindowBounds::square(Point2D::new(10.0, 10.0), 20.0);
        assert!(bounds.contains(Point2D::new(15.0, 29.0)));
        assert!(!bounds.contains(Point2D::new(31.0, 15.0)));
    }
}
