//! Platform abstraction layer
//!
//! The collaborators a driver plugs into the simulation:
//! - Input: key events → per-frame action states
//! - Time: wall-clock frame deltas

pub mod input;
pub mod time;

pub use input::{Action, InputSource, KeyBindings, KeyState, KeyboardInput};
pub use time::FrameClock;
