//! Entity geometry shared by the player, bullets, hazards and decorations
//!
//! Screen coordinates: origin at the top-left, y grows downward. An entity's
//! position is the centre of its bounding box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable entity identifier (never reused within a run)
pub type EntityId = u32;

/// What an entity is; decides its direction of travel and its sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Horizontal only, steered by input
    Player,
    /// Travels up
    Bullet,
    /// Meteor, travels down
    Hazard,
    /// Background star, never moves
    Decoration,
}

impl EntityKind {
    /// Unit direction of travel for self-propelled kinds
    pub fn direction(self) -> Vec2 {
        match self {
            EntityKind::Bullet => Vec2::NEG_Y,
            EntityKind::Hazard => Vec2::Y,
            EntityKind::Player | EntityKind::Decoration => Vec2::ZERO,
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap test: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// A positioned, sized, possibly moving thing on the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Centre of the bounding box
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick along the kind's direction. Fixed at creation.
    pub speed: f32,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            size,
            speed,
        }
    }

    /// Create an entity whose bottom-centre sits at `anchor`
    pub fn at_midbottom(
        id: EntityId,
        kind: EntityKind,
        anchor: Vec2,
        size: Vec2,
        speed: f32,
    ) -> Self {
        let pos = Vec2::new(anchor.x, anchor.y - size.y * 0.5);
        Self::new(id, kind, pos, size, speed)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    /// Top-centre point (where bullets leave the player)
    pub fn midtop(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y - self.size.y * 0.5)
    }

    /// Advance one tick along the kind's direction
    pub fn step(&mut self) {
        self.pos += self.kind.direction() * self.speed;
    }

    /// True once the entity has fully left the field in its direction of travel
    pub fn is_off_field(&self, field_height: f32) -> bool {
        let bounds = self.bounds();
        match self.kind {
            EntityKind::Bullet => bounds.bottom() < 0.0,
            EntityKind::Hazard => bounds.top() > field_height,
            EntityKind::Player | EntityKind::Decoration => false,
        }
    }
}
