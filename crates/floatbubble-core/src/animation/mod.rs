//! Time-based interpolation driven by the host frame clock

mod easing;
mod tween;

pub use easing::Easing;
pub use tween::Tween;
