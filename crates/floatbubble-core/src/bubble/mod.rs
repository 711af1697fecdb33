//! Expand/collapse lifecycle of the bubble window

mod machine;
mod state;

pub use machine::{BubbleStateMachine, StateChange};
pub use state::{BubbleState, ClipMask};
