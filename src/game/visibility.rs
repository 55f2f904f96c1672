//! Visibility coordinator.
//!
//! Translates game and mapping decisions into show/hide instructions
//! for the render collaborator. Never mutates entity state directly —
//! everything goes through [`SceneView::set_visible`].

use crate::scene::{EntityId, EntityRegistry, SceneView};

/// Thin visibility facade over a scene's entities.
#[derive(Debug)]
pub struct VisibilityCoordinator<'a> {
    registry: &'a EntityRegistry,
}

impl<'a> VisibilityCoordinator<'a> {
    /// Creates a coordinator over the current registry.
    #[must_use]
    pub const fn new(registry: &'a EntityRegistry) -> Self {
        Self { registry }
    }

    /// Hides everything, then shows only the listed entities.
    pub fn show_only(&self, scene: &mut dyn SceneView, ids: &[EntityId]) {
        self.hide_all(scene);
        self.show_also(scene, ids);
    }

    /// Shows the listed entities, leaving the rest untouched.
    pub fn show_also(&self, scene: &mut dyn SceneView, ids: &[EntityId]) {
        for id in ids {
            scene.set_visible(id, true);
        }
    }

    /// Shows every live entity.
    pub fn show_all(&self, scene: &mut dyn SceneView) {
        for entity in self.registry.iter() {
            scene.set_visible(&entity.id, true);
        }
    }

    /// Hides every live entity.
    pub fn hide_all(&self, scene: &mut dyn SceneView) {
        for entity in self.registry.iter() {
            scene.set_visible(&entity.id, false);
        }
    }
}
