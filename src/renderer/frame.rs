//! Per-frame draw list

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Entity, EntityKind, World};

/// Which image a sprite uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visual {
    Player,
    Laser,
    Meteor,
    Star,
}

impl Visual {
    pub const ALL: [Visual; 4] = [Visual::Player, Visual::Laser, Visual::Meteor, Visual::Star];

    /// Image file under `images/`
    pub fn file_name(&self) -> &'static str {
        match self {
            Visual::Player => "player.png",
            Visual::Laser => "laser.png",
            Visual::Meteor => "meteor.png",
            Visual::Star => "star.png",
        }
    }
}

impl From<EntityKind> for Visual {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Player => Visual::Player,
            EntityKind::Bullet => Visual::Laser,
            EntityKind::Hazard => Visual::Meteor,
            EntityKind::Decoration => Visual::Star,
        }
    }
}

/// One thing to draw, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub visual: Visual,
    pub top_left: Vec2,
    pub size: Vec2,
}

impl From<&Entity> for Sprite {
    fn from(entity: &Entity) -> Self {
        Self {
            visual: entity.kind.into(),
            top_left: entity.bounds().min,
            size: entity.size,
        }
    }
}

/// A line of HUD text at a screen position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudText {
    pub text: String,
    pub pos: Vec2,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Ticks completed so far
    pub frame: u64,
    /// Back to front: stars, player, meteors, lasers
    pub sprites: Vec<Sprite>,
    pub score: u64,
    pub health: u32,
    pub hud: Vec<HudText>,
}

impl RenderFrame {
    /// Snapshot the world as it stands
    pub fn capture(world: &World) -> Self {
        let sprites = world
            .decorations
            .iter()
            .chain(std::iter::once(&world.state.player.entity))
            .chain(world.hazards.iter())
            .chain(world.bullets.iter())
            .map(Sprite::from)
            .collect();

        let score = world.state.score();
        let health = world.state.health();
        let hud = vec![
            HudText {
                text: format!("Score: {}", score),
                pos: Vec2::new(10.0, 10.0),
            },
            HudText {
                text: format!("Health: {}", health),
                pos: Vec2::new(world.settings.field_width - 150.0, 10.0),
            },
        ];

        Self {
            frame: world.state.frame,
            sprites,
            score,
            health,
            hud,
        }
    }

    pub fn count(&self, visual: Visual) -> usize {
        self.sprites.iter().filter(|s| s.visual == visual).count()
    }
}
