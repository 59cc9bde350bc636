//! Platform abstraction layer
//!
//! The seams between the loop and the outside world:
//! - Input snapshots, once per tick
//! - Frame pacing and the game-over pause

pub mod autopilot;
pub mod input;
pub mod pacing;

use std::time::Duration;

use crate::sim::{TickInput, World};

pub use autopilot::Autopilot;
pub use input::ScriptedInput;
pub use pacing::{FixedRatePacer, NullPacer};

/// Supplies the held keys for the next tick. May look at the world (demo
/// drivers do) but must not change it.
pub trait InputSource {
    fn poll(&mut self, world: &World) -> TickInput;
}

/// Blocks the loop between ticks
pub trait FramePacer {
    /// Wait until the current frame's time budget has elapsed
    fn wait_for_next_frame(&mut self);

    /// Block for a fixed duration (game-over grace delay)
    fn sleep(&mut self, duration: Duration);
}
