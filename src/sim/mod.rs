//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per call, time derived from the frame counter
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod entity;
pub mod movement;
pub mod pool;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::CollisionReport;
pub use entity::{Aabb, Entity, EntityId, EntityKind};
pub use pool::EntityPool;
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameState, Player, World};
pub use tick::{TickInput, TickReport, tick};
