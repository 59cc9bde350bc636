//! Per-tick movement
//!
//! Steers the player, fires, and advances bullets and hazards. Anything that
//! leaves the field is marked during the pass and removed after it.

use glam::Vec2;

use super::entity::{Entity, EntityKind};
use super::state::{GameEvent, Player, World};
use super::tick::TickInput;
use crate::settings::Settings;

/// Advance every entity by one tick
pub fn advance(world: &mut World, input: &TickInput, events: &mut Vec<GameEvent>) {
    let field_height = world.settings.field_height;

    steer_player(&mut world.state.player, input, &world.settings);
    let now_ms = world.state.now_ms(world.settings.frame_rate);
    let fired = if try_fire(&mut world.state.player, input.fire, now_ms, &world.settings) {
        let id = world.next_entity_id();
        events.push(GameEvent::ShotFired);
        Some(Entity::at_midbottom(
            id,
            EntityKind::Bullet,
            world.state.player.entity.midtop(),
            Vec2::from(world.settings.bullet_size),
            world.settings.bullet_speed,
        ))
    } else {
        None
    };

    let mut off_field = Vec::new();
    for bullet in world.bullets.iter_mut() {
        bullet.step();
        if bullet.is_off_field(field_height) {
            off_field.push(bullet.id);
        }
    }
    for id in off_field.drain(..) {
        world.bullets.mark(id);
    }

    for hazard in world.hazards.iter_mut() {
        hazard.step();
        if hazard.is_off_field(field_height) {
            off_field.push(hazard.id);
        }
    }
    for id in off_field {
        log::trace!("Hazard {} left the field", id);
        world.hazards.mark(id);
    }

    world.sweep();

    // A bullet fired this tick starts moving next tick
    if let Some(bullet) = fired {
        world.bullets.insert(bullet);
    }
}

/// Move the player horizontally. Both edges are enforced: the bounding box is
/// clamped to the field whichever direction is held.
pub fn steer_player(player: &mut Player, input: &TickInput, settings: &Settings) {
    let mut dx = 0.0;
    if input.left {
        dx -= player.entity.speed;
    }
    if input.right {
        dx += player.entity.speed;
    }

    let half_w = player.entity.size.x * 0.5;
    let x = player.entity.pos.x + dx;
    player.entity.pos.x = x.clamp(half_w, settings.field_width - half_w);
}

/// Handle the fire button and the shot cooldown. Returns true if a shot was fired.
pub fn try_fire(player: &mut Player, fire_held: bool, now_ms: u64, settings: &Settings) -> bool {
    let mut fired = false;
    if fire_held && player.can_shoot {
        player.can_shoot = false;
        player.last_shot_ms = now_ms;
        fired = true;
    }
    if now_ms.saturating_sub(player.last_shot_ms) >= settings.shoot_cooldown_ms {
        player.can_shoot = true;
    }
    fired
}
