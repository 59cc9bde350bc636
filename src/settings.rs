//! Game tuning settings
//!
//! Every balance knob lives here. Settings are read once at startup (JSON file
//! named by `EPIC_SHOOTER_SETTINGS`, or the built-in defaults) and never change
//! while a run is in progress.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, GameError};

/// Environment variable naming a JSON settings file
pub const SETTINGS_ENV: &str = "EPIC_SHOOTER_SETTINGS";

/// Tuning constants for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,
    /// Ticks per second
    pub frame_rate: u32,

    // === Speeds (pixels per tick) ===
    pub player_speed: f32,
    pub bullet_speed: f32,
    pub hazard_base_speed: f32,
    /// Added to hazard speed per point of score at spawn time
    pub hazard_speed_per_score: f32,

    // === Pacing ===
    /// Frames between hazard spawns
    pub spawn_interval: u32,
    pub decoration_count: u32,
    pub initial_health: u32,
    pub shoot_cooldown_ms: u64,
    pub game_over_grace_ms: u64,

    // === Sprite sizes ===
    pub player_size: (f32, f32),
    pub bullet_size: (f32, f32),
    pub hazard_size: (f32, f32),
    pub decoration_size: (f32, f32),
    pub player_bottom_offset: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            frame_rate: FRAME_RATE,

            player_speed: PLAYER_SPEED,
            bullet_speed: BULLET_SPEED,
            hazard_base_speed: HAZARD_BASE_SPEED,
            hazard_speed_per_score: HAZARD_SPEED_PER_SCORE,

            spawn_interval: SPAWN_INTERVAL,
            decoration_count: DECORATION_COUNT,
            initial_health: INITIAL_HEALTH,
            shoot_cooldown_ms: SHOOT_COOLDOWN_MS,
            game_over_grace_ms: GAME_OVER_GRACE_MS,

            player_size: PLAYER_SIZE,
            bullet_size: BULLET_SIZE,
            hazard_size: HAZARD_SIZE,
            decoration_size: DECORATION_SIZE,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,
        }
    }
}

impl Settings {
    /// Check that the settings describe a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        if self.frame_rate == 0 {
            return Err(ConfigError::NonPositive { field: "frame_rate" });
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::NonPositive {
                field: "spawn_interval",
            });
        }
        positive("player_speed", self.player_speed)?;
        positive("bullet_speed", self.bullet_speed)?;
        positive("hazard_base_speed", self.hazard_base_speed)?;
        // Zero scaling is allowed (flat difficulty), negative is not
        if self.hazard_speed_per_score.is_nan() || self.hazard_speed_per_score < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "hazard_speed_per_score",
            });
        }
        if self.initial_health == 0 {
            return Err(ConfigError::ZeroHealth);
        }

        for (kind, size) in [
            ("player", self.player_size),
            ("bullet", self.bullet_size),
            ("hazard", self.hazard_size),
            ("decoration", self.decoration_size),
        ] {
            positive("sprite width", size.0)?;
            positive("sprite height", size.1)?;
            if size.0 > self.field_width || size.1 > self.field_height {
                return Err(ConfigError::EntityTooLarge { kind });
            }
        }

        // The ship's centre sits this far above the bottom edge; its box must stay inside
        let offset = self.player_bottom_offset;
        let half_height = self.player_size.1 / 2.0;
        let lowest = half_height;
        let highest = self.field_height - half_height;
        if !offset.is_finite() || offset < lowest || offset > highest {
            return Err(ConfigError::PlayerOffField { offset });
        }
        Ok(())
    }

    /// Parse and validate settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Load settings from the file named by `EPIC_SHOOTER_SETTINGS`, or defaults.
    ///
    /// An unreadable file is reported and replaced by defaults; a file that parses
    /// but fails validation is an error, since running with it would misbehave.
    pub fn load() -> Result<Self, GameError> {
        let Ok(path) = std::env::var(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Ok(Self::default());
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                Ok(settings)
            }
            Err(GameError::Io(e)) => {
                log::warn!("Could not read settings file {}: {} - using defaults", path, e);
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field })
    }
}
