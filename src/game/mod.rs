//! Game state machine.
//!
//! Drives the quiz: phase sequence iteration, target selection,
//! scoring, timing, pause/resume, termination, and the event history
//! consumed by the CSV exporter.
//!
//! # Architecture
//!
//! - [`GameState`] — the single mutable state record
//! - [`GameEngine`] — orchestrator (transitions, tick, pick judging)
//! - [`visibility`] — show/hide instructions for the render collaborator

pub mod engine;
pub mod state;
pub mod visibility;

pub use engine::{GameEngine, PickOutcome};
pub use state::{EndReason, EventKind, GameState, HistoryEvent, Status};
pub use visibility::VisibilityCoordinator;
