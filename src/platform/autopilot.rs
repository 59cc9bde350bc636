//! Demo mode: the game plays itself
//!
//! Used by the headless binary. Steers under the lowest meteor that is still
//! above the ship and keeps the trigger held. Dodging is deliberately absent,
//! so runs end on their own.

use super::InputSource;
use crate::sim::{TickInput, World};

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Request quit after this many ticks (None = play until game over)
    max_frames: Option<u64>,
}

impl Autopilot {
    pub fn new(max_frames: Option<u64>) -> Self {
        Self { max_frames }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, world: &World) -> TickInput {
        if self.max_frames.is_some_and(|max| world.state.frame >= max) {
            return TickInput {
                quit: true,
                ..Default::default()
            };
        }

        let ship = &world.state.player.entity;
        let ship_top = ship.bounds().top();

        // Most dangerous meteor: the lowest one still above the ship
        let target = world
            .hazards
            .iter()
            .filter(|h| h.bounds().bottom() < ship_top)
            .max_by(|a, b| {
                a.pos
                    .y
                    .partial_cmp(&b.pos.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let mut input = TickInput {
            fire: true,
            ..Default::default()
        };
        if let Some(hazard) = target {
            let dx = hazard.pos.x - ship.pos.x;
            // Dead zone of one step avoids jitter around the target
            if dx > ship.speed {
                input.right = true;
            } else if dx < -ship.speed {
                input.left = true;
            }
        }
        input
    }
}
