//! Scene collaborators.
//!
//! The core never touches geometry, materials, or render state. It
//! reads entity identity through [`EntityRegistry`] and reaches the
//! renderer through the narrow [`SceneView`] trait: "which entity lies
//! under this pointer" and "show/hide this entity".
//!
//! # Architecture
//!
//! - [`EntityId`] / [`EntityRecord`] — opaque pickable-mesh handles
//! - [`EntityRegistry`] — flat list discovered after a model loads
//! - [`SceneView`] — render-collaborator contract
//! - [`MemoryScene`] — headless implementation for tests and scripted play

pub mod entity;
pub mod memory;
pub mod registry;

pub use entity::{EntityId, EntityRecord, PickEvent};
pub use memory::MemoryScene;
pub use registry::EntityRegistry;

/// Contract exposed by the render collaborator.
///
/// Implementations own the actual meshes and visibility flags; the
/// core only requests changes through this trait.
pub trait SceneView {
    /// Snapshot of all pickable entities currently in the scene.
    fn pickable_entities(&self) -> Vec<EntityRecord>;

    /// Resolves a pointer event to at most one entity.
    ///
    /// Hidden entities are never resolved — a raycast cannot hit an
    /// invisible mesh.
    fn resolve_pick(&mut self, pick: &PickEvent) -> Option<EntityId>;

    /// Shows or hides a single entity.
    fn set_visible(&mut self, id: &EntityId, visible: bool);

    /// Transient highlight on a correctly picked entity.
    ///
    /// Purely cosmetic; the default implementation does nothing.
    fn flash(&mut self, _id: &EntityId) {}
}
