//! Collision detection and resolution
//!
//! Two passes per tick, both axis-aligned box overlap:
//! 1. bullets against hazards: a bullet destroys at most one hazard (lowest id wins)
//! 2. the player against hazards: every overlapping hazard is removed and costs
//!    one health point, so several simultaneous hits all count

use super::entity::EntityId;
use super::state::{GameEvent, World};

/// What the collision passes did this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub hazards_destroyed: u32,
    pub player_hits: u32,
    /// The run ended during this tick
    pub player_died: bool,
}

/// Run both collision passes in order
pub fn resolve(world: &mut World, events: &mut Vec<GameEvent>) -> CollisionReport {
    let hazards_destroyed = bullet_hazard_collisions(world, events);
    let player_hits = player_hazard_collisions(world, events);
    let player_died = world.state.check_game_over();
    if player_died {
        events.push(GameEvent::PlayerDied);
    }
    CollisionReport {
        hazards_destroyed,
        player_hits,
        player_died,
    }
}

/// Bullets against hazards. Both entities of a matched pair are removed and the
/// score goes up by one per pair. Returns the number of pairs.
pub fn bullet_hazard_collisions(world: &mut World, events: &mut Vec<GameEvent>) -> u32 {
    let mut pairs: Vec<(EntityId, EntityId)> = Vec::new();

    for bullet in world.bullets.iter() {
        let bounds = bullet.bounds();
        let target = world
            .hazards
            .iter()
            .filter(|h| !pairs.iter().any(|&(_, taken)| taken == h.id))
            .find(|h| bounds.overlaps(&h.bounds()));
        if let Some(hazard) = target {
            pairs.push((bullet.id, hazard.id));
        }
    }

    for &(bullet_id, hazard_id) in &pairs {
        log::debug!("Bullet {} destroyed hazard {}", bullet_id, hazard_id);
        world.bullets.mark(bullet_id);
        world.hazards.mark(hazard_id);
        world.state.award_point();
        events.push(GameEvent::HazardDestroyed);
    }
    world.sweep();

    pairs.len() as u32
}

/// The player against hazards. Each overlapping hazard is removed and deals one
/// point of damage. Returns the number of hits.
pub fn player_hazard_collisions(world: &mut World, events: &mut Vec<GameEvent>) -> u32 {
    let player_bounds = world.state.player.entity.bounds();
    let hits: Vec<EntityId> = world
        .hazards
        .iter()
        .filter(|h| player_bounds.overlaps(&h.bounds()))
        .map(|h| h.id)
        .collect();

    for &id in &hits {
        world.hazards.mark(id);
        world.state.damage_player();
        events.push(GameEvent::PlayerHit);
        log::debug!(
            "Hazard {} hit the player, health now {}",
            id,
            world.state.health()
        );
    }
    world.sweep();

    hits.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Entity, EntityKind, GamePhase};
    use glam::Vec2;

    fn world() -> World {
        World::new(Settings::default(), 3).expect("valid settings")
    }

    fn add_hazard(world: &mut World, pos: Vec2) -> EntityId {
        let id = world.next_entity_id();
        world.hazards.insert(Entity::new(
            id,
            EntityKind::Hazard,
            pos,
            Vec2::new(48.0, 48.0),
            2.0,
        ));
        id
    }

    fn add_bullet(world: &mut World, pos: Vec2) -> EntityId {
        let id = world.next_entity_id();
        world.bullets.insert(Entity::new(
            id,
            EntityKind::Bullet,
            pos,
            Vec2::new(8.0, 24.0),
            10.0,
        ));
        id
    }

    #[test]
    fn test_bullet_destroys_hazard() {
        let mut world = world();
        let hazard = add_hazard(&mut world, Vec2::new(100.0, 100.0));
        let bullet = add_bullet(&mut world, Vec2::new(105.0, 110.0));
        let mut events = Vec::new();

        let report = resolve(&mut world, &mut events);

        assert_eq!(report.hazards_destroyed, 1);
        assert!(!world.hazards.contains(hazard));
        assert!(!world.bullets.contains(bullet));
        assert_eq!(world.state.score(), 1);
        assert_eq!(events, vec![GameEvent::HazardDestroyed]);
    }

    #[test]
    fn test_bullet_consumes_only_first_hazard() {
        let mut world = world();
        let first = add_hazard(&mut world, Vec2::new(100.0, 100.0));
        let second = add_hazard(&mut world, Vec2::new(110.0, 100.0));
        add_bullet(&mut world, Vec2::new(105.0, 100.0));
        let mut events = Vec::new();

        let destroyed = bullet_hazard_collisions(&mut world, &mut events);

        assert_eq!(destroyed, 1);
        assert!(!world.hazards.contains(first));
        assert!(world.hazards.contains(second));
        assert_eq!(world.state.score(), 1);
    }

    #[test]
    fn test_two_bullets_two_hazards() {
        let mut world = world();
        add_hazard(&mut world, Vec2::new(100.0, 100.0));
        add_hazard(&mut world, Vec2::new(110.0, 100.0));
        add_bullet(&mut world, Vec2::new(105.0, 100.0));
        add_bullet(&mut world, Vec2::new(106.0, 100.0));
        let mut events = Vec::new();

        let destroyed = bullet_hazard_collisions(&mut world, &mut events);

        assert_eq!(destroyed, 2);
        assert!(world.hazards.is_empty());
        assert!(world.bullets.is_empty());
        assert_eq!(world.state.score(), 2);
    }

    #[test]
    fn test_two_bullets_one_hazard() {
        let mut world = world();
        add_hazard(&mut world, Vec2::new(100.0, 100.0));
        add_bullet(&mut world, Vec2::new(100.0, 100.0));
        let spare = add_bullet(&mut world, Vec2::new(101.0, 100.0));
        let mut events = Vec::new();

        bullet_hazard_collisions(&mut world, &mut events);

        assert_eq!(world.state.score(), 1);
        assert!(world.bullets.contains(spare));
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut world = world();
        add_hazard(&mut world, Vec2::new(100.0, 100.0));
        add_bullet(&mut world, Vec2::new(300.0, 100.0));
        let mut events = Vec::new();

        let report = resolve(&mut world, &mut events);

        assert_eq!(report, CollisionReport::default());
        assert_eq!(world.hazards.len(), 1);
        assert_eq!(world.bullets.len(), 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_player_hit() {
        let mut world = world();
        let player_pos = world.player().entity.pos;
        let hazard = add_hazard(&mut world, player_pos);
        let mut events = Vec::new();

        let report = resolve(&mut world, &mut events);

        assert_eq!(report.player_hits, 1);
        assert!(!report.player_died);
        assert!(!world.hazards.contains(hazard));
        assert_eq!(world.state.health(), 2);
        assert_eq!(events, vec![GameEvent::PlayerHit]);
    }

    #[test]
    fn test_simultaneous_hits_each_count() {
        let mut world = world();
        let player_pos = world.player().entity.pos;
        add_hazard(&mut world, player_pos + Vec2::new(-10.0, 0.0));
        add_hazard(&mut world, player_pos + Vec2::new(10.0, 0.0));
        let mut events = Vec::new();

        let report = resolve(&mut world, &mut events);

        assert_eq!(report.player_hits, 2);
        assert_eq!(world.state.health(), 1);
        assert!(world.hazards.is_empty());
        assert_eq!(events, vec![GameEvent::PlayerHit, GameEvent::PlayerHit]);
    }

    #[test]
    fn test_overkill_floors_health_and_dies_once() {
        let mut world = world();
        let player_pos = world.player().entity.pos;
        for dx in [-20.0, -10.0, 0.0, 10.0, 20.0] {
            add_hazard(&mut world, player_pos + Vec2::new(dx, 0.0));
        }
        let mut events = Vec::new();

        let report = resolve(&mut world, &mut events);

        assert_eq!(report.player_hits, 5);
        assert!(report.player_died);
        assert_eq!(world.state.health(), 0);
        assert_eq!(world.state.phase, GamePhase::GameOver);
        let deaths = events.iter().filter(|e| **e == GameEvent::PlayerDied).count();
        assert_eq!(deaths, 1);
        assert_eq!(events.last(), Some(&GameEvent::PlayerDied));
    }

    #[test]
    fn test_bullet_pass_runs_before_player_pass() {
        // A hazard overlapping both a bullet and the player is shot, not felt
        let mut world = world();
        let player_pos = world.player().entity.pos;
        add_hazard(&mut world, player_pos);
        add_bullet(&mut world, player_pos);
        let mut events = Vec::new();

        let report = resolve(&mut world, &mut events);

        assert_eq!(report.hazards_destroyed, 1);
        assert_eq!(report.player_hits, 0);
        assert_eq!(world.state.health(), 3);
        assert_eq!(world.state.score(), 1);
    }
}
