//! Renderer for runs without a display

use super::{RenderFrame, Renderer};

/// Logs the HUD instead of drawing. HUD lines go out at `trace` every frame
/// and at `info` once per `summary_every` frames.
#[derive(Debug, Clone)]
pub struct LogRenderer {
    summary_every: u64,
}

impl LogRenderer {
    pub fn new(summary_every: u64) -> Self {
        Self {
            summary_every: summary_every.max(1),
        }
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        // Once a second at the default frame rate
        Self::new(60)
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, frame: &RenderFrame) {
        let hud = frame
            .hud
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("  ");
        log::trace!("frame {}: {} sprites | {}", frame.frame, frame.sprites.len(), hud);
        if frame.frame % self.summary_every == 0 {
            log::info!("frame {} | {}", frame.frame, hud);
        }
    }
}
