//! Error types
//!
//! Everything that can fail does so before the first tick: bad tuning values,
//! missing assets, unreadable settings files. A running simulation is infallible.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected tuning values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive")]
    NonPositive { field: &'static str },

    #[error("initial health must be at least 1")]
    ZeroHealth,

    #[error("{kind} sprite does not fit inside the playfield")]
    EntityTooLarge { kind: &'static str },

    #[error("player bottom offset {offset} puts the ship outside the playfield")]
    PlayerOffField { offset: f32 },
}

/// Startup asset problems
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("required asset missing: {}", path.display())]
    Missing { path: PathBuf },
}

/// Top-level error for building and starting a game
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
