//! Entity storage with deferred removal
//!
//! Systems never delete while iterating. They mark ids for removal and the
//! owner calls `sweep()` once the pass is complete. Entities stay sorted by id
//! (ids only grow), so iteration order is stable from tick to tick.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityPool {
    entities: Vec<Entity>,
    #[serde(skip)]
    doomed: Vec<EntityId>,
}

impl EntityPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity. Ids must be handed out in increasing order.
    pub fn insert(&mut self, entity: Entity) {
        debug_assert!(
            self.entities.last().is_none_or(|last| last.id < entity.id),
            "entity ids must increase"
        );
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|idx| &self.entities[idx])
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Schedule an entity for removal at the next sweep
    pub fn mark(&mut self, id: EntityId) {
        if !self.doomed.contains(&id) {
            self.doomed.push(id);
        }
    }

    /// Drop every marked entity. Returns how many were removed.
    pub fn sweep(&mut self) -> usize {
        if self.doomed.is_empty() {
            return 0;
        }
        let before = self.entities.len();
        let doomed = std::mem::take(&mut self.doomed);
        self.entities.retain(|e| !doomed.contains(&e.id));
        before - self.entities.len()
    }
}
