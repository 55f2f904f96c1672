//! `chantier` - Construction-phase training quiz over a 3D building model
//!
//! This library provides the components of a timed identification quiz:
//! a phase catalog with a regex classifier, a mapping store, the game
//! state machine, and a session log with CSV export. Rendering is
//! abstracted behind [`scene::SceneView`] so the engine runs headless.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod game;
pub mod mapping;
pub mod observability;
pub mod scene;
pub mod session;
