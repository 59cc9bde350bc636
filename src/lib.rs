//! Epic Shooter - A top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Seeded simulation (entities, movement, collisions, game state)
//! - `game`: Fixed-rate loop driving the simulation and its collaborators
//! - `renderer`: Per-frame snapshot handed to whatever draws the screen
//! - `audio`: Named sound cues and volume handling
//! - `platform`: Input sources and frame pacing
//! - `settings`: Tuning constants, loadable from JSON

pub mod assets;
pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{AssetError, ConfigError, GameError};
pub use game::{RunOutcome, RunSummary, SimulationLoop, StepOutcome};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Simulation ticks per second
    pub const FRAME_RATE: u32 = 60;

    /// Per-tick speeds (pixels per tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 10.0;
    pub const HAZARD_BASE_SPEED: f32 = 2.0;
    /// Extra hazard speed per point of score, sampled when the hazard spawns
    pub const HAZARD_SPEED_PER_SCORE: f32 = 0.1;

    /// Frames between hazard spawns
    pub const SPAWN_INTERVAL: u32 = 30;
    /// Background stars placed at startup
    pub const DECORATION_COUNT: u32 = 20;

    pub const INITIAL_HEALTH: u32 = 3;
    /// Minimum time between shots (ms)
    pub const SHOOT_COOLDOWN_MS: u64 = 250;
    /// Pause after the death cue before the loop exits (ms)
    pub const GAME_OVER_GRACE_MS: u64 = 600;

    /// Sprite sizes (width, height)
    pub const PLAYER_SIZE: (f32, f32) = (64.0, 48.0);
    pub const BULLET_SIZE: (f32, f32) = (8.0, 24.0);
    pub const HAZARD_SIZE: (f32, f32) = (48.0, 48.0);
    pub const DECORATION_SIZE: (f32, f32) = (8.0, 8.0);

    /// Player centre sits this far above the bottom edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;
}
