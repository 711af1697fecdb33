//! floatbubble-sim: run a floating bubble inside a terminal
//!
//! The terminal grid stands in for the screen: each cell is 8x16 virtual pixels, mouse
//! press/drag/release become overlay gestures, and the window's clip is drawn as text.

pub mod host;
pub mod input;
pub mod render;
pub mod runner;

pub use host::{TerminalHost, TerminalWindow};
pub use input::InputTranslator;
pub use runner::{Control, Simulator};
