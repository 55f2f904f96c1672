//! Session log and CSV exporter.
//!
//! Append-only sequence of timestamped history events, never mutated
//! after append. `to_csv` is a pure function of the log: identical
//! input always renders the identical table.

use chrono::{SecondsFormat, Utc};

use crate::game::state::{EventKind, HistoryEvent};

/// CSV header row, fixed columns.
const CSV_HEADER: &str = "time,event,phase,score,timeLeft,details";

/// Append-only session event log.
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    events: Vec<HistoryEvent>,
}

impl SessionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event stamped with the current wall-clock time.
    pub fn push(&mut self, kind: EventKind) {
        self.events.push(HistoryEvent {
            timestamp: Utc::now(),
            kind,
        });
    }

    /// Appends a pre-stamped event. Used by tests needing fixed times.
    pub fn push_event(&mut self, event: HistoryEvent) {
        self.events.push(event);
    }

    /// Clears the log. Called by `start_game`, never by `reset_game`.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of events recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates events in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEvent> {
        self.events.iter()
    }

    /// The most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEvent> {
        self.events.last()
    }

    /// Renders the fixed-column CSV table.
    ///
    /// ISO-8601 timestamps, every field double-quoted with internal
    /// quotes doubled, missing numeric fields as empty strings.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut rows = Vec::with_capacity(self.events.len() + 1);
        rows.push(csv_row(CSV_HEADER.split(',')));

        for event in &self.events {
            let time = event
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Millis, true);
            let (phase, score, time_left, details) = match &event.kind {
                EventKind::PhaseStart { phase, .. } => {
                    (phase.clone(), String::new(), String::new(), String::new())
                }
                EventKind::PhaseComplete {
                    phase,
                    score,
                    time_left,
                } => (
                    phase.clone(),
                    score.to_string(),
                    time_left.to_string(),
                    String::new(),
                ),
                EventKind::End { reason, score } => (
                    String::new(),
                    score.to_string(),
                    String::new(),
                    reason.to_string(),
                ),
            };
            rows.push(csv_row(
                [
                    time.as_str(),
                    event.kind.name(),
                    phase.as_str(),
                    score.as_str(),
                    time_left.as_str(),
                    details.as_str(),
                ]
                .into_iter(),
            ));
        }

        rows.join("\n")
    }
}

/// Joins fields into one CSV row, quoting every field and doubling
/// internal double quotes.
fn csv_row<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    fields
        .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::EndReason;
    use chrono::{DateTime, Utc};

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn three_event_log() -> SessionLog {
        let mut log = SessionLog::new();
        log.push_event(HistoryEvent {
            timestamp: at("2026-03-01T09:00:00Z"),
            kind: EventKind::PhaseStart {
                phase: "terrassement".to_string(),
                total_targets: 2,
            },
        });
        log.push_event(HistoryEvent {
            timestamp: at("2026-03-01T09:00:42Z"),
            kind: EventKind::PhaseComplete {
                phase: "terrassement".to_string(),
                score: 20,
                time_left: 318,
            },
        });
        log.push_event(HistoryEvent {
            timestamp: at("2026-03-01T09:02:00Z"),
            kind: EventKind::End {
                reason: EndReason::TimeExpired,
                score: 20,
            },
        });
        log
    }

    #[test]
    fn three_events_render_four_rows() {
        let csv = three_event_log().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "\"time\",\"event\",\"phase\",\"score\",\"timeLeft\",\"details\""
        );
    }

    #[test]
    fn missing_numerics_render_empty_not_zero() {
        let csv = three_event_log().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        // phase_start has no score/timeLeft
        assert_eq!(
            lines[1],
            "\"2026-03-01T09:00:00.000Z\",\"phase_start\",\"terrassement\",\"\",\"\",\"\""
        );
        // end has no phase/timeLeft, carries the reason
        assert_eq!(
            lines[3],
            "\"2026-03-01T09:02:00.000Z\",\"end\",\"\",\"20\",\"\",\"time expired\""
        );
    }

    #[test]
    fn complete_row_carries_score_and_time_left() {
        let csv = three_event_log().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[2],
            "\"2026-03-01T09:00:42.000Z\",\"phase_complete\",\"terrassement\",\"20\",\"318\",\"\""
        );
    }

    #[test]
    fn internal_quotes_are_doubled() {
        let mut log = SessionLog::new();
        log.push_event(HistoryEvent {
            timestamp: at("2026-03-01T09:00:00Z"),
            kind: EventKind::PhaseStart {
                phase: "say \"hi\"".to_string(),
                total_targets: 1,
            },
        });
        let csv = log.to_csv();
        assert!(csv.contains("\"say \"\"hi\"\"\""));
    }

    #[test]
    fn export_is_reproducible() {
        let log = three_event_log();
        assert_eq!(log.to_csv(), log.to_csv());
    }

    #[test]
    fn empty_log_is_header_only() {
        let log = SessionLog::new();
        assert_eq!(log.to_csv().lines().count(), 1);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = three_event_log();
        assert_eq!(log.len(), 3);
        log.clear();
        assert!(log.is_empty());
    }
}
