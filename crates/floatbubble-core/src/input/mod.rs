//! Input events delivered by the host

mod event;

pub use event::{OverlayInput, PointerEvent};
