//! Game state and the world that owns every entity
//!
//! `World` is the single owner of all mutable simulation data. Systems borrow
//! it for the duration of a tick; nothing else holds onto entities.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, EntityKind};
use super::pool::EntityPool;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Health ran out. Terminal.
    GameOver,
}

/// Things that happened during a tick, in the order they happened.
/// Consumed by the audio side; the simulation never waits on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired,
    HazardDestroyed,
    PlayerHit,
    PlayerDied,
}

/// The player's ship plus its run counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub entity: Entity,
    pub health: u32,
    pub score: u64,
    /// Cleared on firing, set again once the cooldown has elapsed
    pub can_shoot: bool,
    /// Simulation time of the last shot (ms)
    pub last_shot_ms: u64,
}

impl Player {
    pub fn new(id: EntityId, settings: &Settings) -> Self {
        let pos = Vec2::new(
            settings.field_width / 2.0,
            settings.field_height - settings.player_bottom_offset,
        );
        let size = Vec2::from(settings.player_size);
        Self {
            entity: Entity::new(id, EntityKind::Player, pos, size, settings.player_speed),
            health: settings.initial_health,
            score: 0,
            can_shoot: true,
            last_shot_ms: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Score, health and phase: the part of the run that outlives individual entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    /// Frame counter, starts at 0
    pub frame: u64,
}

impl GameState {
    pub fn new(player: Player) -> Self {
        Self {
            phase: GamePhase::Running,
            player,
            frame: 0,
        }
    }

    pub fn score(&self) -> u64 {
        self.player.score
    }

    pub fn health(&self) -> u32 {
        self.player.health
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// One hazard shot down
    pub fn award_point(&mut self) {
        self.player.score += 1;
    }

    /// One hazard hit the player. Health never goes below zero.
    pub fn damage_player(&mut self) {
        self.player.health = self.player.health.saturating_sub(1);
    }

    /// Enter `GameOver` if health is gone. Returns true only on the transition itself.
    pub fn check_game_over(&mut self) -> bool {
        if self.phase == GamePhase::Running && !self.player.is_alive() {
            self.phase = GamePhase::GameOver;
            log::info!(
                "Game over at frame {} with score {}",
                self.frame,
                self.player.score
            );
            return true;
        }
        false
    }

    /// Simulated milliseconds since the run started
    pub fn now_ms(&self, frame_rate: u32) -> u64 {
        self.frame * 1000 / frame_rate.max(1) as u64
    }
}

/// Everything the simulation owns for one run
#[derive(Debug, Clone)]
pub struct World {
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub state: GameState,
    pub bullets: EntityPool,
    pub hazards: EntityPool,
    /// Background stars, created once and never removed
    pub decorations: Vec<Entity>,
    next_id: EntityId,
}

impl World {
    /// Build a fresh world: player at the bottom centre, stars scattered at random
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut next_id = 1;
        let player = Player::new(next_id, &settings);
        next_id += 1;

        let mut rng = Pcg32::seed_from_u64(seed);
        let star_size = Vec2::from(settings.decoration_size);
        let decorations = (0..settings.decoration_count)
            .map(|_| {
                let pos = Vec2::new(
                    rng.random_range(0.0..=settings.field_width),
                    rng.random_range(0.0..=settings.field_height),
                );
                let id = next_id;
                next_id += 1;
                Entity::new(id, EntityKind::Decoration, pos, star_size, 0.0)
            })
            .collect();

        log::debug!(
            "World created: seed={}, {}x{} field, {} stars",
            seed,
            settings.field_width,
            settings.field_height,
            settings.decoration_count
        );

        Ok(Self {
            settings,
            seed,
            rng,
            state: GameState::new(player),
            bullets: EntityPool::new(),
            hazards: EntityPool::new(),
            decorations,
            next_id,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    /// Apply all pending removals
    pub fn sweep(&mut self) {
        self.bullets.sweep();
        self.hazards.sweep();
    }
}
