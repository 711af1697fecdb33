//! Host windowing seam.
//!
//! The overlay never talks to a toolkit directly: a host supplies windows implementing
//! [`HostWindow`], and the overlay writes bounds, clip and content visibility through it.

mod memory;

pub use memory::{MemoryHost, MemoryWindow};

use crate::bubble::ClipMask;
use crate::geometry::{Point2D, WindowBounds};

/// A single top-level window owned by the host toolkit
pub trait HostWindow {
    /// Current screen bounds
    fn bounds(&self) -> WindowBounds;

    /// Move and resize the window
    fn set_bounds(&mut self, bounds: WindowBounds);

    /// Move the window without resizing it
    fn set_position(&mut self, origin: Point2D) {
        let bounds = self.bounds().with_origin(origin);
        self.set_bounds(bounds);
    }

    /// Keep the window above other windows
    fn set_always_on_top(&mut self, on_top: bool);

    /// Remove decorations and make everything outside the clip transparent
    fn set_transparent_no_chrome(&mut self);

    /// Shape the rendered and hit-testable region
    fn set_clip(&mut self, clip: ClipMask);

    /// Show or hide the embedded content panel
    fn set_content_visible(&mut self, visible: bool);
}

/// Factory for host windows
pub trait WindowHost {
    type Window: HostWindow;
    type Error: std::error::Error;

    /// Create a window covering `bounds`
    fn create_window(&mut self, bounds: WindowBounds) -> Result<Self::Window, Self::Error>;
}
