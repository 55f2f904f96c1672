//! Game engine orchestration.
//!
//! The `GameEngine` owns the single game-state record and drives the
//! quiz machine: phase iteration over the fixed play order, target
//! drawing, pick judging, scoring, the countdown, and termination.
//!
//! The engine is synchronous and single-threaded: every mutation goes
//! through a `&mut self` call, processed in arrival order. The 1 Hz
//! tick is produced externally (see [`crate::session::Ticker`]) and
//! delivered through [`tick`](GameEngine::tick).

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{info, warn};

use crate::catalog::{GameConfig, PhaseCatalog};
use crate::error::GameError;
use crate::mapping::{MappingStore, classifier};
use crate::scene::{EntityId, EntityRecord, EntityRegistry, PickEvent, SceneView};

use super::state::{EndReason, EventKind, GameState, Status};
use super::visibility::VisibilityCoordinator;

/// Result of judging one pointer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Machine not `Running`; the event was ignored.
    NotRunning,
    /// No entity under the pointer; no state change.
    Nothing,
    /// A fresh target was credited.
    Correct {
        /// The credited entity.
        entity: EntityId,
    },
    /// Wrong entity, or a target that was already credited.
    Incorrect {
        /// The penalized entity.
        entity: EntityId,
    },
}

/// The quiz state machine.
///
/// Owns registry, mapping, and state; reaches the renderer only
/// through the [`SceneView`] passed into each call.
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    catalog: PhaseCatalog,
    registry: EntityRegistry,
    mapping: MappingStore,
    state: GameState,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an engine with an OS-seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig, catalog: PhaseCatalog) -> Self {
        Self::with_rng(config, catalog, StdRng::from_os_rng())
    }

    /// Creates an engine with a fixed seed for deterministic target
    /// draws (replays, tests).
    #[must_use]
    pub fn with_seed(config: GameConfig, catalog: PhaseCatalog, seed: u64) -> Self {
        Self::with_rng(config, catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, catalog: PhaseCatalog, rng: StdRng) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            catalog,
            registry: EntityRegistry::new(),
            mapping: MappingStore::new(),
            state,
            rng,
        }
    }

    // ------------------------------------------------------------------
    // Model loading & read accessors
    // ------------------------------------------------------------------

    /// Registers a freshly loaded model: rebuilds the entity registry
    /// from the scene and re-runs classification, overwriting any prior
    /// mapping entirely.
    ///
    /// Returns the number of pickable entities discovered.
    pub fn load_model(&mut self, scene: &dyn SceneView) -> usize {
        self.registry.rebuild(scene.pickable_entities());
        classifier::classify(&self.registry, &self.catalog, &mut self.mapping);
        info!(entities = self.registry.len(), "model loaded");
        self.registry.len()
    }

    /// Read access to the game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Read access to the entity registry.
    #[must_use]
    pub const fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Read access to the mapping store.
    #[must_use]
    pub const fn mapping(&self) -> &MappingStore {
        &self.mapping
    }

    /// Mutable access to the mapping store for manual edits and
    /// document import.
    pub const fn mapping_mut(&mut self) -> &mut MappingStore {
        &mut self.mapping
    }

    /// Read access to the tunables.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Key of the phase under the cursor, if the cursor is in range.
    #[must_use]
    pub fn current_phase_key(&self) -> Option<&str> {
        self.config
            .order
            .get(self.state.phase_index)
            .map(String::as_str)
    }

    /// Display label of the current phase, or `"—"` when idle.
    #[must_use]
    pub fn current_phase_label(&self) -> &str {
        self.current_phase_key()
            .map_or("—", |key| self.catalog.label(key))
    }

    /// Summary line of a finished game, if one has ended.
    #[must_use]
    pub fn end_summary(&self) -> Option<String> {
        match self.state.history.last()?.kind {
            EventKind::End { reason, score } => Some(format!("{reason} - final score: {score}")),
            _ => None,
        }
    }

    /// Renders the session history as CSV.
    #[must_use]
    pub fn export_csv(&self) -> String {
        self.state.history.to_csv()
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Starts a new game: resets score, clock, cursor, and history,
    /// enters `Running`, and goes to the first phase.
    ///
    /// History is cleared here and only here — an export taken after
    /// `reset_game` but before the next start still shows the prior
    /// game's log.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoModelLoaded`] when the registry is empty;
    /// the machine stays `Idle` and prior state is untouched.
    pub fn start_game(&mut self, scene: &mut dyn SceneView) -> Result<(), GameError> {
        if self.registry.is_empty() {
            warn!("start requested with no model loaded");
            return Err(GameError::NoModelLoaded);
        }

        self.state.status = Status::Running;
        self.state.time_left = self.config.duration_secs;
        self.state.score = 0;
        self.state.phase_index = 0;
        self.state.goal = 0;
        self.state.goal_total = 0;
        self.state.validated.clear();
        self.state.targets.clear();
        self.state.history.clear();

        info!(duration = self.config.duration_secs, "game started");
        self.enter_phase(scene, 0);
        Ok(())
    }

    /// One 1-second tick. Decrements the clock only while `Running`;
    /// at zero the game finishes with "time expired".
    ///
    /// Safe to call in any state — a paused or finished game ignores
    /// ticks, which lets the external timer keep firing across a pause
    /// so resume is exact.
    pub fn tick(&mut self) {
        if self.state.status != Status::Running {
            return;
        }
        self.state.time_left -= 1;
        if self.state.time_left <= 0 {
            self.finish_game(EndReason::TimeExpired);
        }
    }

    /// Pauses a running game. No effect in any other state.
    pub fn pause(&mut self) {
        if self.state.status == Status::Running {
            self.state.status = Status::Paused;
            info!("game paused");
        }
    }

    /// Resumes a paused game. No effect in any other state.
    pub fn resume(&mut self) {
        if self.state.status == Status::Paused {
            self.state.status = Status::Running;
            info!("game resumed");
        }
    }

    /// Resolves a pointer event through the scene and judges the
    /// resolved entity against the current phase's targets.
    ///
    /// Only a `Running` machine judges picks; pauses ignore them.
    pub fn handle_pick(&mut self, scene: &mut dyn SceneView, pick: &PickEvent) -> PickOutcome {
        if self.state.status != Status::Running {
            return PickOutcome::NotRunning;
        }
        let Some(id) = scene.resolve_pick(pick) else {
            return PickOutcome::Nothing;
        };
        self.judge_pick(scene, id)
    }

    /// Judges an already-resolved entity.
    fn judge_pick(&mut self, scene: &mut dyn SceneView, id: EntityId) -> PickOutcome {
        let fresh_target = self.state.is_target(&id) && !self.state.validated.contains(&id);

        if fresh_target {
            self.state.validated.insert(id.clone());
            self.state.apply_points(self.config.points_correct);
            self.state.goal += 1;

            let label = self
                .registry
                .get(&id)
                .map_or_else(|| id.to_string(), EntityRecord::label);
            info!(
                points = self.config.points_correct,
                entity = %label,
                goal = self.state.goal,
                goal_total = self.state.goal_total,
                "correct pick"
            );
            scene.flash(&id);

            if self.state.goal >= self.state.goal_total {
                self.next_phase(scene);
            }
            PickOutcome::Correct { entity: id }
        } else {
            self.state.apply_points(self.config.points_wrong);
            info!(points = self.config.points_wrong, entity = %id, "incorrect pick");
            PickOutcome::Incorrect { entity: id }
        }
    }

    /// Completes the current phase and advances the cursor, finishing
    /// the game past the last phase.
    fn next_phase(&mut self, scene: &mut dyn SceneView) {
        let key = self.config.order[self.state.phase_index].clone();
        self.state.history.push(EventKind::PhaseComplete {
            phase: key,
            score: self.state.score,
            time_left: self.state.time_left,
        });

        self.state.phase_index += 1;
        if self.state.phase_index >= self.config.order.len() {
            self.finish_game(EndReason::AllPhasesComplete);
        } else {
            self.enter_phase(scene, self.state.phase_index);
        }
    }

    /// Enters a phase: resolves its mapped meshes, draws the target
    /// subset, and isolates the phase in the scene.
    ///
    /// An empty resolved set auto-skips to the next phase in the same
    /// synchronous step — this can cascade through several empty
    /// phases. The target draw is re-rolled on every (re)entry.
    fn enter_phase(&mut self, scene: &mut dyn SceneView, idx: usize) {
        self.state.phase_index = idx;
        let key = self.config.order[idx].clone();

        let meshes = self.mapping.meshes_of(&key, &self.registry);
        if meshes.is_empty() {
            warn!(
                phase = %self.catalog.label(&key),
                "no meshes mapped to phase; skipping to the next"
            );
            self.next_phase(scene);
            return;
        }

        let mut pool = meshes.clone();
        pool.shuffle(&mut self.rng);
        pool.truncate(self.config.targets_per_phase.min(pool.len()));

        self.state.targets = pool;
        self.state.validated.clear();
        self.state.goal = 0;
        self.state.goal_total = self.state.targets.len();

        // The whole phase is shown, not just the drawn targets.
        VisibilityCoordinator::new(&self.registry).show_only(scene, &meshes);

        info!(
            phase = %self.catalog.label(&key),
            targets = self.state.goal_total,
            "phase started"
        );
        self.state.history.push(EventKind::PhaseStart {
            phase: key,
            total_targets: self.state.goal_total,
        });
    }

    /// Freezes the machine in `Finished`; history stays intact for
    /// export until the next start.
    fn finish_game(&mut self, reason: EndReason) {
        self.state.status = Status::Finished;
        self.state.history.push(EventKind::End {
            reason,
            score: self.state.score,
        });
        info!(%reason, score = self.state.score, "game finished");
    }

    /// Returns to `Idle`: zeroes score and per-phase state and restores
    /// full visibility. The clock and the history are left as they are
    /// (history is cleared by the next `start_game`).
    pub fn reset_game(&mut self, scene: &mut dyn SceneView) {
        self.state.status = Status::Idle;
        self.state.score = 0;
        self.state.goal = 0;
        self.state.goal_total = 0;
        self.state.validated.clear();
        self.state.targets.clear();
        VisibilityCoordinator::new(&self.registry).show_all(scene);
        info!("game reset");
    }
}

// ============================================================================
// Tests
// ============================================================================
