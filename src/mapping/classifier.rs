//! Automatic phase classification.
//!
//! Full rebuild of the mapping store from entity names: each entity is
//! assigned to the FIRST phase (catalog order) whose pattern matches
//! its effective name. Entities matching no phase are omitted from all
//! sets. Manual edits from a previous model do not survive a rebuild.

use tracing::{debug, info};

use crate::catalog::PhaseCatalog;
use crate::scene::EntityRegistry;

use super::store::MappingStore;

/// Rebuilds `store` from the registry and catalog.
///
/// Returns the number of entities that matched some phase.
pub fn classify(
    registry: &EntityRegistry,
    catalog: &PhaseCatalog,
    store: &mut MappingStore,
) -> usize {
    store.reset(catalog.iter().map(|p| p.key.clone()));

    let mut matched = 0;
    for entity in registry.iter() {
        let name = entity.effective_name();
        for phase in catalog.iter() {
            if phase.pattern.is_match(name) {
                debug!(entity = %entity.id, name, phase = %phase.key, "classified");
                store.assign(entity.id.clone(), &phase.key);
                matched += 1;
                break;
            }
        }
    }

    info!(
        total = registry.len(),
        matched,
        unmatched = registry.len() - matched,
        "classification complete"
    );
    matched
}
