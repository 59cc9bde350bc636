//! Hazard spawning
//!
//! One meteor every `spawn_interval` frames, starting on frame 0. Its speed is
//! a snapshot of the difficulty at spawn time: later score changes do not
//! speed up meteors already on screen.

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, EntityId, EntityKind};
use super::state::World;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Spawner {
    interval: u32,
    base_speed: f32,
    speed_per_score: f32,
    size: Vec2,
    field_width: f32,
}

impl Spawner {
    pub fn new(settings: &Settings) -> Self {
        Self {
            interval: settings.spawn_interval.max(1),
            base_speed: settings.hazard_base_speed,
            speed_per_score: settings.hazard_speed_per_score,
            size: Vec2::from(settings.hazard_size),
            field_width: settings.field_width,
        }
    }

    /// Frame 0 spawns, then every `interval` frames after
    pub fn is_spawn_frame(&self, frame: u64) -> bool {
        frame % self.interval as u64 == 0
    }

    /// Speed for a hazard spawned at the given score
    pub fn hazard_speed(&self, score: u64) -> f32 {
        self.base_speed + score as f32 * self.speed_per_score
    }

    /// Build a hazard centred on the top edge at a random x
    pub fn make_hazard(&self, id: EntityId, score: u64, rng: &mut impl Rng) -> Entity {
        let x = rng.random_range(0.0..=self.field_width);
        Entity::new(
            id,
            EntityKind::Hazard,
            Vec2::new(x, 0.0),
            self.size,
            self.hazard_speed(score),
        )
    }

    /// Spawn into the world if this frame is due. Returns the new hazard's id.
    pub fn maybe_spawn(&self, world: &mut World) -> Option<EntityId> {
        if !self.is_spawn_frame(world.state.frame) {
            return None;
        }
        let id = world.next_entity_id();
        let score = world.state.score();
        let hazard = self.make_hazard(id, score, world.rng());
        log::debug!(
            "Spawned hazard {} at x={:.1} speed={:.2} (frame {})",
            id,
            hazard.pos.x,
            hazard.speed,
            world.state.frame
        );
        world.hazards.insert(hazard);
        Some(id)
    }
}
