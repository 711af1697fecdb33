//! In-memory host that records every write, for headless use and tests

use std::convert::Infallible;

use crate::bubble::ClipMask;
use crate::geometry::WindowBounds;

use super::{HostWindow, WindowHost};

/// A window that only remembers what was written to it
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryWindow {
    pub bounds: WindowBounds,
    pub clip: Option<ClipMask>,
    pub content_visible: bool,
    pub always_on_top: bool,
    pub chrome: bool,
    /// Every bounds write, oldest first
    pub bounds_history: Vec<WindowBounds>,
}

impl MemoryWindow {
    pub fn new(bounds: WindowBounds) -> Self {
        Self {
            bounds,
            clip: None,
            content_visible: true,
            always_on_top: false,
            chrome: true,
            bounds_history: Vec::new(),
        }
    }
}

impl Default for MemoryWindow {
    fn default() -> Self {
        Self::new(WindowBounds::default())
    }
}

impl HostWindow for MemoryWindow {
    fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: WindowBounds) {
        self.bounds = bounds;
        self.bounds_history.push(bounds);
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        self.always_on_top = on_top;
    }

    fn set_transparent_no_chrome(&mut self) {
        self.chrome = false;
    }

    fn set_clip(&mut self, clip: ClipMask) {
        self.clip = Some(clip);
    }

    fn set_content_visible(&mut self, visible: bool) {
        self.content_visible = visible;
    }
}

/// Host handing out [`MemoryWindow`]s
#[derive(Debug, Default)]
pub struct MemoryHost {
    created: usize,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of windows created so far
    pub fn created(&self) -> usize {
        self.created
    }
}

impl WindowHost for MemoryHost {
    type Window = MemoryWindow;
    type Error = Infallible;

    fn create_window(&mut self, bounds: WindowBounds) -> Result<MemoryWindow, Infallible> {
        self.created += 1;
        Ok(MemoryWindow::new(bounds))
    }
}
