use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::{Phase, SegmentKind};

/// Every observable change in a playback session produces an Event.
/// The CLI prints them as JSON; analytics sinks consume a subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SessionStarted {
        session_id: Uuid,
        day: u32,
        total_exercises: usize,
        at: DateTime<Utc>,
    },
    /// A new segment became active (countdown not yet running).
    SegmentStarted {
        session_id: Uuid,
        kind: SegmentKind,
        index: usize,
        label: String,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    CountdownStarted {
        session_id: Uuid,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    CountdownPaused {
        session_id: Uuid,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// An exercise segment was advanced past, by timer expiry or by an
    /// explicit skip/complete action. The two are not distinguished.
    SegmentCompleted {
        session_id: Uuid,
        day: u32,
        segment_index: usize,
        total_segments: usize,
        name: String,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// Fired exactly once, at the transition into `Complete`.
    DayCompleted {
        session_id: Uuid,
        day: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        session_id: Uuid,
        day: u32,
        phase: Phase,
        exercise_cursor: usize,
        mental_cursor: usize,
        segment_label: String,
        remaining_secs: u32,
        total_secs: u32,
        running: bool,
        exercises_completed: usize,
        total_exercises: usize,
        at: DateTime<Utc>,
    },
}
