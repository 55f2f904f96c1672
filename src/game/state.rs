//! Game state record and history events.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::GameConfig;
use crate::scene::EntityId;
use crate::session::SessionLog;

// ============================================================================
// Machine states
// ============================================================================

/// States of the quiz machine: `Idle → Running ⇄ Paused → Finished`,
/// with `reset_game` returning to `Idle` from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// No game in progress.
    #[default]
    Idle,
    /// Clock ticking, picks judged.
    Running,
    /// Clock frozen, picks ignored; the underlying timer keeps firing.
    Paused,
    /// Terminal until `reset_game`; history survives for export.
    Finished,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The countdown reached zero before the last phase completed.
    TimeExpired,
    /// Every phase in the play order was completed.
    AllPhasesComplete,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimeExpired => write!(f, "time expired"),
            Self::AllPhasesComplete => write!(f, "all phases complete"),
        }
    }
}

// ============================================================================
// History events
// ============================================================================

/// Kind-specific payload of a history event.
///
/// Tagged with `"event"` when serialized, like the CSV `event` column.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    /// A phase was entered and its targets drawn.
    PhaseStart {
        /// Phase key.
        phase: String,
        /// Size of the drawn target subset.
        total_targets: usize,
    },
    /// A phase finished (all targets found, or auto-skipped when empty).
    PhaseComplete {
        /// Phase key.
        phase: String,
        /// Score at completion.
        score: i64,
        /// Seconds remaining at completion.
        time_left: i64,
    },
    /// The game ended.
    End {
        /// Why the game ended.
        reason: EndReason,
        /// Final score.
        score: i64,
    },
}

impl EventKind {
    /// The CSV `event` column value for this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PhaseStart { .. } => "phase_start",
            Self::PhaseComplete { .. } => "phase_complete",
            Self::End { .. } => "end",
        }
    }
}

/// An immutable, timestamped history record.
///
/// Append-only; emission order is chronological by construction.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEvent {
    /// Wall-clock time of emission.
    pub timestamp: DateTime<Utc>,
    /// Event payload.
    #[serde(flatten)]
    pub kind: EventKind,
}

// ============================================================================
// Game state
// ============================================================================

/// The single mutable game-state record.
///
/// Owned by the engine; callers observe through read accessors.
#[derive(Debug, Default)]
pub struct GameState {
    /// Current machine state.
    pub status: Status,
    /// Seconds remaining; counts down once per tick while running.
    pub time_left: i64,
    /// Current score, floor-clamped at zero on every update.
    pub score: i64,
    /// 0-based cursor into the fixed play order.
    pub phase_index: usize,
    /// Targets found this phase.
    pub goal: usize,
    /// Size of this phase's target subset.
    pub goal_total: usize,
    /// Identifiers already credited this phase.
    pub validated: HashSet<EntityId>,
    /// The drawn target subset, fixed at phase entry.
    pub targets: Vec<EntityId>,
    /// Append-only event history; cleared by `start_game` only.
    pub history: SessionLog,
}

impl GameState {
    /// Fresh state for a configured game, still `Idle`.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            time_left: config.duration_secs,
            ..Self::default()
        }
    }

    /// Applies a signed point delta, clamping the score at zero.
    pub fn apply_points(&mut self, delta: i64) {
        self.score = (self.score + delta).max(0);
    }

    /// Whether the entity is one of this phase's targets.
    #[must_use]
    pub fn is_target(&self, id: &EntityId) -> bool {
        self.targets.contains(id)
    }
}

/// Formats seconds as `MM:SS` for HUD display.
#[must_use]
pub fn format_clock(seconds: i64) -> String {
    let s = seconds.max(0);
    format!("{:02}:{:02}", s / 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        let state = GameState::default();
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.score, 0);
        assert!(state.history.is_empty());
    }

    #[test]
    fn new_state_takes_configured_duration() {
        let state = GameState::new(&GameConfig::default());
        assert_eq!(state.time_left, 360);
    }

    #[test]
    fn score_clamps_at_zero() {
        let mut state = GameState::default();
        state.apply_points(-5);
        assert_eq!(state.score, 0);
        state.apply_points(10);
        state.apply_points(-5);
        assert_eq!(state.score, 5);
        state.apply_points(-50);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn end_reason_display() {
        assert_eq!(EndReason::TimeExpired.to_string(), "time expired");
        assert_eq!(
            EndReason::AllPhasesComplete.to_string(),
            "all phases complete"
        );
    }

    #[test]
    fn event_kind_names_match_csv_column() {
        let start = EventKind::PhaseStart {
            phase: "toiture".to_string(),
            total_targets: 3,
        };
        assert_eq!(start.name(), "phase_start");

        let end = EventKind::End {
            reason: EndReason::TimeExpired,
            score: 40,
        };
        assert_eq!(end.name(), "end");
    }

    #[test]
    fn history_event_serializes_flat() {
        let event = HistoryEvent {
            timestamp: Utc::now(),
            kind: EventKind::PhaseComplete {
                phase: "planchers".to_string(),
                score: 30,
                time_left: 200,
            },
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "phase_complete");
        assert_eq!(value["phase"], "planchers");
        assert_eq!(value["score"], 30);
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn clock_formats_mm_ss() {
        assert_eq!(format_clock(360), "06:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(-3), "00:00");
    }
}
