//! Phase ↔ entity mapping.
//!
//! # Architecture
//!
//! - [`MappingStore`] — mutable phase-key → entity-id-set association
//!   with atomic document import/export
//! - [`classifier`] — automatic first-match-in-catalog-order rebuild

pub mod classifier;
pub mod store;

pub use store::{MappingDocument, MappingStore};
