//! Behaviours applied to an overlay after construction

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::FloatingOverlay;
use crate::host::HostWindow;

/// Optional overlay behaviour, applied in configuration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayOption {
    /// Press/drag/release move the window and may fling it
    Draggable,
}

impl OverlayOption {
    pub fn apply<W: HostWindow>(&self, overlay: &mut FloatingOverlay<W>) {
        match self {
            OverlayOption::Draggable => overlay.set_draggable(true),
        }
        debug!("Applied overlay option {:?}", self);
    }
}
