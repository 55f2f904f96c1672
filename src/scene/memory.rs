//! In-memory scene for tests and headless play.
//!
//! Stands in for the renderer: owns visibility flags, records flashes,
//! and resolves "picks" from a scripted queue instead of a raycast.
//! Scene inventories load from a JSON array of
//! `{ "id": "...", "name": "...", "parent": "..."? }` objects; entries
//! without an id get a fabricated UUID.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use crate::error::Result;

use super::entity::{EntityId, EntityRecord, PickEvent};
use super::SceneView;

/// One entry of a scene inventory file.
#[derive(Debug, Deserialize)]
struct InventoryEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    parent: Option<String>,
}

/// Headless scene: entity list plus visibility flags.
#[derive(Debug, Default)]
pub struct MemoryScene {
    entities: Vec<EntityRecord>,
    visible: HashMap<EntityId, bool>,
    queued_pick: Option<EntityId>,
    flashes: Vec<EntityId>,
}

impl MemoryScene {
    /// Creates a scene from a list of entities, all initially visible.
    #[must_use]
    pub fn new(entities: Vec<EntityRecord>) -> Self {
        let visible = entities.iter().map(|e| (e.id.clone(), true)).collect();
        Self {
            entities,
            visible,
            queued_pick: None,
            flashes: Vec::new(),
        }
    }

    /// Loads a scene inventory from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a JSON error
    /// if it is not an inventory array.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses a scene inventory from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a JSON error if the text is not an inventory array.
    pub fn from_json(text: &str) -> Result<Self> {
        let entries: Vec<InventoryEntry> = serde_json::from_str(text)?;
        let entities = entries
            .into_iter()
            .map(|e| EntityRecord {
                id: EntityId::new(e.id.unwrap_or_else(|| Uuid::new_v4().to_string())),
                name: e.name,
                parent_name: e.parent,
            })
            .collect();
        Ok(Self::new(entities))
    }

    /// Queues the entity the next `resolve_pick` call should hit.
    ///
    /// Scripted stand-in for aiming the pointer at a mesh.
    pub fn script_next_pick(&mut self, id: EntityId) {
        self.queued_pick = Some(id);
    }

    /// Whether the entity is currently visible.
    #[must_use]
    pub fn is_visible(&self, id: &EntityId) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    /// Number of currently visible entities.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.values().filter(|v| **v).count()
    }

    /// Entities flashed so far, in order.
    #[must_use]
    pub fn flashes(&self) -> &[EntityId] {
        &self.flashes
    }
}

impl SceneView for MemoryScene {
    fn pickable_entities(&self) -> Vec<EntityRecord> {
        self.entities.clone()
    }

    fn resolve_pick(&mut self, _pick: &PickEvent) -> Option<EntityId> {
        // A raycast cannot hit a hidden mesh.
        let id = self.queued_pick.take()?;
        if self.is_visible(&id) { Some(id) } else { None }
    }

    fn set_visible(&mut self, id: &EntityId, visible: bool) {
        if let Some(flag) = self.visible.get_mut(id) {
            *flag = visible;
        }
    }

    fn flash(&mut self, id: &EntityId) {
        self.flashes.push(id.clone());
    }
}
