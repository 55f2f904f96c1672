//! Entity registry.
//!
//! Flat list of pickable entities discovered after a model loads.
//! Rebuilt wholesale on every load; assigns no identity beyond the
//! stable identifiers the scene already carries.

use std::collections::HashMap;

use super::entity::{EntityId, EntityRecord};

/// Flat index of the pickable entities of the currently loaded model.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: Vec<EntityRecord>,
    by_id: HashMap<EntityId, usize>,
}

impl EntityRegistry {
    /// Creates an empty registry (no model loaded).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from the entities discovered in a scene.
    ///
    /// Later duplicates of an identifier are ignored; the first record
    /// wins.
    #[must_use]
    pub fn from_entities(entities: Vec<EntityRecord>) -> Self {
        let mut registry = Self::new();
        registry.rebuild(entities);
        registry
    }

    /// Replaces the registry contents with a freshly discovered list.
    pub fn rebuild(&mut self, entities: Vec<EntityRecord>) {
        self.entities.clear();
        self.by_id.clear();
        for record in entities {
            if self.by_id.contains_key(&record.id) {
                continue;
            }
            self.by_id.insert(record.id.clone(), self.entities.len());
            self.entities.push(record);
        }
    }

    /// Looks up a live entity by identifier.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&EntityRecord> {
        self.by_id.get(id).map(|&i| &self.entities[i])
    }

    /// Whether the identifier resolves to a live entity.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Iterates entities in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityRecord> {
        self.entities.iter()
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether any model has been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
