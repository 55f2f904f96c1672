//! Mapping store.
//!
//! Mutable association from phase key to an ordered set of entity
//! identifiers. An identifier may appear under several phase keys — no
//! exclusivity is enforced. Export order is insertion order, which
//! keeps documents deterministic for round-trip testing.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::error::MappingError;
use crate::scene::{EntityId, EntityRegistry};

/// Portable mapping document: phase key → ordered list of entity ids.
pub type MappingDocument = IndexMap<String, Vec<String>>;

/// Phase-key → entity-id-set association.
#[derive(Debug, Clone, Default)]
pub struct MappingStore {
    phases: IndexMap<String, IndexSet<EntityId>>,
}

impl MappingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the store to empty sets for the given phase keys.
    ///
    /// Invoked by the classifier before a full rebuild so every known
    /// phase is present even when nothing matches it.
    pub fn reset(&mut self, phase_keys: impl IntoIterator<Item = String>) {
        self.phases.clear();
        for key in phase_keys {
            self.phases.insert(key, IndexSet::new());
        }
    }

    /// Idempotent add of an entity to a phase, creating the phase's set
    /// if absent.
    pub fn assign(&mut self, entity: EntityId, phase_key: &str) {
        self.phases
            .entry(phase_key.to_string())
            .or_default()
            .insert(entity);
    }

    /// Removes an entity from a phase's set.
    ///
    /// Returns `true` if the entity was present. The game flow never
    /// calls this; it exists for mapping-editing surfaces.
    pub fn unassign(&mut self, entity: &EntityId, phase_key: &str) -> bool {
        self.phases
            .get_mut(phase_key)
            .is_some_and(|set| set.shift_remove(entity))
    }

    /// Number of identifiers mapped to a phase.
    #[must_use]
    pub fn count(&self, phase_key: &str) -> usize {
        self.phases.get(phase_key).map_or(0, IndexSet::len)
    }

    /// Whether the identifier is mapped to the phase.
    #[must_use]
    pub fn contains(&self, phase_key: &str, entity: &EntityId) -> bool {
        self.phases
            .get(phase_key)
            .is_some_and(|set| set.contains(entity))
    }

    /// Phase keys currently present, in insertion order.
    pub fn phase_keys(&self) -> impl Iterator<Item = &str> {
        self.phases.keys().map(String::as_str)
    }

    /// Produces a portable document: phase key → ordered id list.
    #[must_use]
    pub fn export_document(&self) -> MappingDocument {
        self.phases
            .iter()
            .map(|(key, set)| {
                let ids = set.iter().map(|id| id.as_str().to_string()).collect();
                (key.clone(), ids)
            })
            .collect()
    }

    /// Validates a JSON value as a mapping document without applying it.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Format`] if the value is not a
    /// phase-key → list-of-identifier-strings object.
    pub fn validate_document(value: &serde_json::Value) -> Result<MappingDocument, MappingError> {
        serde_json::from_value(value.clone()).map_err(|e| MappingError::Format(e.to_string()))
    }

    /// Imports a document, replacing the set of every phase key it
    /// contains. Phase keys absent from the document are untouched.
    ///
    /// Validation happens before any mutation — a malformed document
    /// leaves the store exactly as it was. Supplied lists are
    /// deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Format`] on a malformed document.
    pub fn import_document(&mut self, value: &serde_json::Value) -> Result<(), MappingError> {
        let doc = Self::validate_document(value)?;
        for (key, ids) in doc {
            let set: IndexSet<EntityId> = ids.into_iter().map(EntityId::new).collect();
            self.phases.insert(key, set);
        }
        Ok(())
    }

    /// Resolves a phase's identifiers against the live registry,
    /// silently dropping identifiers with no matching entity.
    ///
    /// Stale identifiers are expected across model reloads and are only
    /// noted at debug level.
    #[must_use]
    pub fn meshes_of(&self, phase_key: &str, registry: &EntityRegistry) -> Vec<EntityId> {
        let Some(set) = self.phases.get(phase_key) else {
            return Vec::new();
        };
        let mut live = Vec::with_capacity(set.len());
        for id in set {
            if registry.contains(id) {
                live.push(id.clone());
            } else {
                debug!(phase = phase_key, entity = %id, "dropping stale mapping reference");
            }
        }
        live
    }
}
