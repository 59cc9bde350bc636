//! Rendering handoff
//!
//! The core never draws. Once per tick it builds a `RenderFrame` (every live
//! sprite plus the HUD text) and hands it to a `Renderer`.

pub mod frame;
pub mod headless;

pub use frame::{HudText, RenderFrame, Sprite, Visual};
pub use headless::LogRenderer;

/// Draws and presents one frame
pub trait Renderer {
    fn present(&mut self, frame: &RenderFrame);
}
