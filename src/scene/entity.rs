//! Entity identity types.

use serde::{Deserialize, Serialize};

/// Newtype wrapper for stable entity identifiers.
///
/// Identifiers come from the scene loader (mesh UUIDs in practice) and
/// are treated as opaque strings by the core.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Creates a new `EntityId` from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Opaque handle to a pickable mesh.
///
/// Carries identity and naming only; visibility lives with the render
/// collaborator and geometry is never exposed to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Stable unique identifier.
    pub id: EntityId,
    /// Display name; may be empty when the mesh is anonymous.
    pub name: String,
    /// Name of the immediate structural parent, if any.
    pub parent_name: Option<String>,
}

impl EntityRecord {
    /// Creates a record with no parent.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(id),
            name: name.into(),
            parent_name: None,
        }
    }

    /// Creates a record with a parent name.
    #[must_use]
    pub fn with_parent(
        id: impl Into<String>,
        name: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(id),
            name: name.into(),
            parent_name: Some(parent.into()),
        }
    }

    /// Name used for classification: the entity's own name, falling
    /// back to its immediate parent's name when empty.
    #[must_use]
    pub fn effective_name(&self) -> &str {
        if self.name.is_empty() {
            self.parent_name.as_deref().unwrap_or("")
        } else {
            &self.name
        }
    }

    /// Human-readable label for logs and the HUD: the effective name
    /// (or `(sans_nom)`) plus a shortened identifier.
    #[must_use]
    pub fn label(&self) -> String {
        let name = match self.effective_name() {
            "" => "(sans_nom)",
            n => n,
        };
        let short: String = self.id.as_str().chars().take(8).collect();
        format!("{name} [{short}]")
    }
}

/// A pointer event in normalized viewport coordinates.
///
/// The core never interprets the coordinates; it forwards the event to
/// the render collaborator for ray-based resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PickEvent {
    /// Horizontal position in `[-1, 1]`.
    pub x: f64,
    /// Vertical position in `[-1, 1]`.
    pub y: f64,
}
