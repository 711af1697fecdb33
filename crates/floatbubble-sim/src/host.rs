//! A virtual window living on a terminal grid

use std::convert::Infallible;

use floatbubble_core::{ClipMask, HostWindow, Point2D, WindowBounds, WindowHost};
use tracing::trace;

/// Width of one terminal cell in virtual pixels
pub const CELL_WIDTH: f64 = 8.0;

/// Height of one terminal cell in virtual pixels
pub const CELL_HEIGHT: f64 = 16.0;

/// Virtual pixel at the centre of a terminal cell
pub fn cell_center(column: u16, row: u16) -> Point2D {
    Point2D::new(
        f64::from(column) * CELL_WIDTH + CELL_WIDTH / 2.0,
        f64::from(row) * CELL_HEIGHT + CELL_HEIGHT / 2.0,
    )
}

/// Window state the renderer reads back every frame
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalWindow {
    bounds: WindowBounds,
    clip: ClipMask,
    content_visible: bool,
    always_on_top: bool,
    decorated: bool,
}

impl TerminalWindow {
    pub fn new(bounds: WindowBounds) -> Self {
        Self {
            bounds,
            clip: ClipMask::rectangle(bounds.width, bounds.height),
            content_visible: true,
            always_on_top: false,
            decorated: true,
        }
    }

    pub fn clip(&self) -> ClipMask {
        self.clip
    }

    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    pub fn is_always_on_top(&self) -> bool {
        self.always_on_top
    }

    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    /// Whether a screen point falls inside the clipped window
    pub fn hit(&self, screen: Point2D) -> bool {
        let origin = self.bounds.origin();
        let local = Point2D::new(screen.x - origin.x, screen.y - origin.y);
        self.bounds.contains(screen) && self.clip.contains(&self.bounds, local)
    }
}

impl HostWindow for TerminalWindow {
    fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: WindowBounds) {
        trace!(
            "Window bounds ({:.0}, {:.0}) {:.0}x{:.0}",
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height
        );
        self.bounds = bounds;
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        self.always_on_top = on_top;
    }

    fn set_transparent_no_chrome(&mut self) {
        self.decorated = false;
    }

    fn set_clip(&mut self, clip: ClipMask) {
        self.clip = clip;
    }

    fn set_content_visible(&mut self, visible: bool) {
        self.content_visible = visible;
    }
}

/// Hands out [`TerminalWindow`]s
#[derive(Debug, Default)]
pub struct TerminalHost;

impl WindowHost for TerminalHost {
    type Window = TerminalWindow;
    type Error = Infallible;

    fn create_window(&mut self, bounds: WindowBounds) -> Result<TerminalWindow, Infallible> {
        Ok(TerminalWindow::new(bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_center() {
        assert_eq!(cell_center(0, 0), Point2D::new(4.0, 8.0));
        assert_eq!(cell_center(10, 3), Point2D::new(84.0, 56.0));
    }

    #[test]
    fn test_hit_respects_circle() {
        let bounds = WindowBounds::square(Point2D::new(80.0, 80.0), 64.0);
        let mut window = TerminalWindow::new(bounds);
        window.set_clip(ClipMask::circle(64.0));

        assert!(window.hit(Point2D::new(112.0, 112.0)));
        assert!(!window.hit(Point2D::new(82.0, 82.0)));
        assert!(!window.hit(Point2D::new(10.0, 10.0)));
    }
}
