//! Input handling with gamepad support
//!
//! Keyboard through macroquad, gamepad through gilrs on native builds.
//! Both resolve to the same small set of actions and produce one
//! `FrameInput` per frame.

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use state::*;
