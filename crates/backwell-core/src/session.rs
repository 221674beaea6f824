//! Session player implementation.
//!
//! The session player is a caller-driven state machine. It owns no
//! threads and no timers -- the caller invokes `tick()` once per elapsed
//! second while the countdown is running, and forwards user actions as
//! `play()`/`pause()`/`skip()` calls. Given the same call sequence the
//! player is fully deterministic.
//!
//! ## Phases
//!
//! ```text
//! Intro --start--> Exercise <--> Mental --> Complete
//! ```
//!
//! `Complete` is terminal; construct a new player to replay a day.
//!
//! ## Interleave rule
//!
//! After every second completed exercise, if the day's mental segments
//! have not yet been shown, the player switches to the mental list and
//! drains it fully before resuming exercises. Any mental segments still
//! unconsumed when the exercises run out are drained at the end.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::events::Event;
use crate::program::{DayProgram, Exercise, MentalSegment};

/// Playback phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Intro,
    Exercise,
    Mental,
    Complete,
}

/// Which list the active segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Exercise,
    Mental,
}

/// Read-only view of the active segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentRef<'a> {
    Exercise(&'a Exercise),
    Mental(&'a MentalSegment),
}

impl SegmentRef<'_> {
    pub fn label(&self) -> &str {
        match self {
            SegmentRef::Exercise(ex) => &ex.name,
            SegmentRef::Mental(m) => m.kind.title(),
        }
    }

    pub fn duration_secs(&self) -> u32 {
        match self {
            SegmentRef::Exercise(ex) => ex.duration_secs,
            SegmentRef::Mental(m) => m.duration_secs,
        }
    }
}

/// Drives one day's program from intro to completion.
///
/// Owns a single countdown and the exercise/mental cursors. Operations
/// invalid for the current phase are silent no-ops (the UI only exposes
/// valid actions per phase); the only failure path is construction-time
/// validation of the program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPlayer {
    program: DayProgram,
    session_id: Uuid,
    phase: Phase,
    /// Index into the exercise list; also the count of completed
    /// exercises. Monotonically non-decreasing, terminal value is the
    /// exercise count.
    exercise_cursor: usize,
    /// Index into the mental list within the current pass. Reset to 0
    /// once a full pass completes.
    mental_cursor: usize,
    /// True once the mental list has been drained; no segment is
    /// unconsumed after that, regardless of the cursor reset.
    mentals_drained: bool,
    remaining_secs: u32,
    running: bool,
}

impl SessionPlayer {
    /// Create a player for the given program, in the `Intro` phase.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if the program is malformed; no
    /// session state is created in that case.
    pub fn new(program: DayProgram) -> Result<Self, ValidationError> {
        program.validate()?;
        Ok(Self {
            program,
            session_id: Uuid::new_v4(),
            phase: Phase::Intro,
            exercise_cursor: 0,
            mental_cursor: 0,
            mentals_drained: false,
            remaining_secs: 0,
            running: false,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn day(&self) -> u32 {
        self.program.day
    }

    pub fn program(&self) -> &DayProgram {
        &self.program
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn exercise_cursor(&self) -> usize {
        self.exercise_cursor
    }

    pub fn mental_cursor(&self) -> usize {
        self.mental_cursor
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The active segment, or `None` in `Intro`/`Complete`.
    pub fn current_segment(&self) -> Option<SegmentRef<'_>> {
        match self.phase {
            Phase::Exercise => self
                .program
                .exercises
                .get(self.exercise_cursor)
                .map(SegmentRef::Exercise),
            Phase::Mental => self
                .program
                .mental_segments
                .get(self.mental_cursor)
                .map(SegmentRef::Mental),
            Phase::Intro | Phase::Complete => None,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let segment = self.current_segment();
        Event::StateSnapshot {
            session_id: self.session_id,
            day: self.program.day,
            phase: self.phase,
            exercise_cursor: self.exercise_cursor,
            mental_cursor: self.mental_cursor,
            segment_label: segment.map(|s| s.label().to_string()).unwrap_or_default(),
            remaining_secs: self.remaining_secs,
            total_secs: segment.map(|s| s.duration_secs()).unwrap_or(0),
            running: self.running,
            exercises_completed: self.exercise_cursor.min(self.program.exercises.len()),
            total_exercises: self.program.exercises.len(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Leave the intro and enter the first playable segment.
    ///
    /// Valid only in `Intro`; a no-op elsewhere. An empty exercise list
    /// goes straight to `Complete`.
    pub fn start(&mut self) -> Vec<Event> {
        if self.phase != Phase::Intro {
            return Vec::new();
        }
        let mut events = vec![Event::SessionStarted {
            session_id: self.session_id,
            day: self.program.day,
            total_exercises: self.program.exercises.len(),
            at: Utc::now(),
        }];
        if self.program.exercises.is_empty() {
            events.push(self.complete());
        } else {
            self.phase = Phase::Exercise;
            self.exercise_cursor = 0;
            events.push(self.enter_exercise(0));
        }
        events
    }

    /// Begin the countdown. No-op if already running or outside a
    /// playable phase.
    pub fn play(&mut self) -> Option<Event> {
        match self.phase {
            Phase::Exercise | Phase::Mental if !self.running => {
                self.running = true;
                Some(Event::CountdownStarted {
                    session_id: self.session_id,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Halt the countdown, preserving the remaining time exactly.
    pub fn pause(&mut self) -> Option<Event> {
        match self.phase {
            Phase::Exercise | Phase::Mental if self.running => {
                self.running = false;
                Some(Event::CountdownPaused {
                    session_id: self.session_id,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Advance past the active segment regardless of remaining time.
    /// No-op in `Intro`/`Complete`.
    pub fn skip(&mut self) -> Vec<Event> {
        match self.phase {
            Phase::Exercise | Phase::Mental => {
                self.running = false;
                self.advance()
            }
            Phase::Intro | Phase::Complete => Vec::new(),
        }
    }

    /// Call once per elapsed second while running. Decrements the
    /// countdown; at zero, stops and advances. No-op when not running.
    pub fn tick(&mut self) -> Vec<Event> {
        match self.phase {
            Phase::Exercise | Phase::Mental if self.running => {
                if self.remaining_secs > 0 {
                    self.remaining_secs -= 1;
                }
                if self.remaining_secs == 0 {
                    self.running = false;
                    self.advance()
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Whether a mental segment is still unconsumed at the current
    /// cursor. Once the list has been drained the cursor reset does not
    /// make segments available again.
    fn unconsumed_mental(&self) -> bool {
        !self.mentals_drained && self.mental_cursor < self.program.mental_segments.len()
    }

    /// Advance out of the active segment and apply the interleave rule.
    fn advance(&mut self) -> Vec<Event> {
        match self.phase {
            Phase::Exercise => self.advance_exercise(),
            Phase::Mental => self.advance_mental(),
            Phase::Intro | Phase::Complete => Vec::new(),
        }
    }

    fn advance_exercise(&mut self) -> Vec<Event> {
        let index = self.exercise_cursor;
        let total = self.program.exercises.len();
        let exercise = &self.program.exercises[index];
        let mut events = vec![Event::SegmentCompleted {
            session_id: self.session_id,
            day: self.program.day,
            segment_index: index,
            total_segments: total,
            name: exercise.name.clone(),
            duration_secs: exercise.duration_secs,
            at: Utc::now(),
        }];

        let next = index + 1;
        self.exercise_cursor = next;

        if next % 2 == 0 && next < total && self.unconsumed_mental() {
            self.phase = Phase::Mental;
            events.push(self.enter_mental(self.mental_cursor));
        } else if next < total {
            events.push(self.enter_exercise(next));
        } else if self.unconsumed_mental() {
            self.phase = Phase::Mental;
            events.push(self.enter_mental(self.mental_cursor));
        } else {
            events.push(self.complete());
        }
        events
    }

    fn advance_mental(&mut self) -> Vec<Event> {
        let next = self.mental_cursor + 1;
        if next < self.program.mental_segments.len() {
            // Drain the rest of the mental list before any exercise.
            self.mental_cursor = next;
            return vec![self.enter_mental(next)];
        }

        self.mentals_drained = true;
        self.mental_cursor = 0;
        if self.exercise_cursor < self.program.exercises.len() {
            self.phase = Phase::Exercise;
            vec![self.enter_exercise(self.exercise_cursor)]
        } else {
            vec![self.complete()]
        }
    }

    /// Make exercise `index` active. Resets the countdown; it does not
    /// auto-start.
    fn enter_exercise(&mut self, index: usize) -> Event {
        let exercise = &self.program.exercises[index];
        self.phase = Phase::Exercise;
        self.remaining_secs = exercise.duration_secs;
        self.running = false;
        Event::SegmentStarted {
            session_id: self.session_id,
            kind: SegmentKind::Exercise,
            index,
            label: exercise.name.clone(),
            duration_secs: exercise.duration_secs,
            at: Utc::now(),
        }
    }

    fn enter_mental(&mut self, index: usize) -> Event {
        let segment = &self.program.mental_segments[index];
        self.phase = Phase::Mental;
        self.remaining_secs = segment.duration_secs;
        self.running = false;
        Event::SegmentStarted {
            session_id: self.session_id,
            kind: SegmentKind::Mental,
            index,
            label: segment.kind.title().to_string(),
            duration_secs: segment.duration_secs,
            at: Utc::now(),
        }
    }

    fn complete(&mut self) -> Event {
        self.phase = Phase::Complete;
        self.remaining_secs = 0;
        self.running = false;
        Event::DayCompleted {
            session_id: self.session_id,
            day: self.program.day,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::{MentalKind, MentalSegment};

    fn exercise(name: &str, secs: u32) -> Exercise {
        Exercise {
            name: name.into(),
            duration_secs: secs,
            instructions: vec![],
            icon: "wind".into(),
            focus_area: "Lower Back".into(),
        }
    }

    fn mental(secs: u32) -> MentalSegment {
        MentalSegment {
            kind: MentalKind::Breathing,
            duration_secs: secs,
            guidance: "Breathe.".into(),
        }
    }

    fn program(exercises: usize, mentals: usize) -> DayProgram {
        DayProgram {
            day: 1,
            title: "Test".into(),
            theme: "Test".into(),
            mental_focus: "Test".into(),
            exercises: (0..exercises)
                .map(|i| exercise(&format!("E{i}"), 30))
                .collect(),
            mental_segments: (0..mentals).map(|_| mental(15)).collect(),
            completion_message: "Done".into(),
        }
    }

    #[test]
    fn starts_in_intro_with_no_segment() {
        let player = SessionPlayer::new(program(3, 2)).unwrap();
        assert_eq!(player.phase(), Phase::Intro);
        assert!(player.current_segment().is_none());
        assert!(!player.is_running());
    }

    #[test]
    fn start_enters_first_exercise_without_running() {
        let mut player = SessionPlayer::new(program(3, 2)).unwrap();
        let events = player.start();
        assert_eq!(events.len(), 2);
        assert_eq!(player.phase(), Phase::Exercise);
        assert_eq!(player.remaining_secs(), 30);
        assert!(!player.is_running());
    }

    #[test]
    fn start_is_noop_outside_intro() {
        let mut player = SessionPlayer::new(program(3, 0)).unwrap();
        player.start();
        assert!(player.start().is_empty());
    }

    #[test]
    fn play_pause_round_trip_preserves_remaining() {
        let mut player = SessionPlayer::new(program(3, 0)).unwrap();
        player.start();
        player.play();
        player.tick();
        player.tick();
        assert_eq!(player.remaining_secs(), 28);
        player.pause();
        assert_eq!(player.remaining_secs(), 28);
        player.play();
        assert_eq!(player.remaining_secs(), 28);
        assert!(player.is_running());
    }

    #[test]
    fn play_is_noop_in_intro_and_when_running() {
        let mut player = SessionPlayer::new(program(3, 0)).unwrap();
        assert!(player.play().is_none());
        player.start();
        assert!(player.play().is_some());
        assert!(player.play().is_none());
    }

    #[test]
    fn tick_is_noop_while_paused() {
        let mut player = SessionPlayer::new(program(3, 0)).unwrap();
        player.start();
        let before = player.remaining_secs();
        for _ in 0..10 {
            assert!(player.tick().is_empty());
        }
        assert_eq!(player.remaining_secs(), before);
    }

    #[test]
    fn countdown_expiry_advances_segment() {
        let mut player = SessionPlayer::new(program(2, 0)).unwrap();
        player.start();
        player.play();
        let mut completed = Vec::new();
        for _ in 0..30 {
            completed.extend(player.tick());
        }
        assert!(completed
            .iter()
            .any(|e| matches!(e, Event::SegmentCompleted { segment_index: 0, .. })));
        assert_eq!(player.exercise_cursor(), 1);
        // The next segment does not auto-start.
        assert!(!player.is_running());
        assert_eq!(player.remaining_secs(), 30);
    }

    #[test]
    fn skip_completes_segment_mid_countdown() {
        let mut player = SessionPlayer::new(program(2, 0)).unwrap();
        player.start();
        player.play();
        player.tick();
        let events = player.skip();
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::SegmentCompleted { segment_index: 0, .. })));
        assert!(!player.is_running());
    }

    #[test]
    fn skip_is_noop_in_intro_and_complete() {
        let mut player = SessionPlayer::new(program(1, 0)).unwrap();
        assert!(player.skip().is_empty());
        player.start();
        player.skip();
        assert_eq!(player.phase(), Phase::Complete);
        assert!(player.skip().is_empty());
    }

    #[test]
    fn empty_program_completes_on_start() {
        let mut player = SessionPlayer::new(program(0, 3)).unwrap();
        let events = player.start();
        assert_eq!(player.phase(), Phase::Complete);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, Event::DayCompleted { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn day_completed_fires_exactly_once() {
        let mut player = SessionPlayer::new(program(3, 2)).unwrap();
        let mut day_completed = 0;
        for event in player.start() {
            if matches!(event, Event::DayCompleted { .. }) {
                day_completed += 1;
            }
        }
        while player.phase() != Phase::Complete {
            for event in player.skip() {
                if matches!(event, Event::DayCompleted { .. }) {
                    day_completed += 1;
                }
            }
        }
        // Complete is terminal; further calls emit nothing.
        assert!(player.skip().is_empty());
        assert!(player.tick().is_empty());
        assert_eq!(day_completed, 1);
    }

    #[test]
    fn mental_segments_have_no_segment_completed_event() {
        let mut player = SessionPlayer::new(program(4, 2)).unwrap();
        player.start();
        let mut exercise_completions = 0;
        while player.phase() != Phase::Complete {
            for event in player.skip() {
                if matches!(event, Event::SegmentCompleted { .. }) {
                    exercise_completions += 1;
                }
            }
        }
        assert_eq!(exercise_completions, 4);
    }

    #[test]
    fn current_segment_projects_active_item() {
        let mut player = SessionPlayer::new(program(2, 1)).unwrap();
        player.start();
        match player.current_segment() {
            Some(SegmentRef::Exercise(ex)) => assert_eq!(ex.name, "E0"),
            other => panic!("expected exercise, got {other:?}"),
        }
        player.skip(); // E0 done -> E1 (index 1 is odd, no interleave)
        player.skip(); // E1 done -> exercises exhausted -> mental
        match player.current_segment() {
            Some(SegmentRef::Mental(m)) => assert_eq!(m.duration_secs, 15),
            other => panic!("expected mental, got {other:?}"),
        }
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut player = SessionPlayer::new(program(3, 0)).unwrap();
        player.start();
        match player.snapshot() {
            Event::StateSnapshot {
                phase,
                remaining_secs,
                total_exercises,
                running,
                ..
            } => {
                assert_eq!(phase, Phase::Exercise);
                assert_eq!(remaining_secs, 30);
                assert_eq!(total_exercises, 3);
                assert!(!running);
            }
            _ => panic!("expected StateSnapshot"),
        }
    }

    #[test]
    fn player_round_trips_through_json() {
        let mut player = SessionPlayer::new(program(3, 2)).unwrap();
        player.start();
        player.play();
        player.tick();
        let json = serde_json::to_string(&player).unwrap();
        let restored: SessionPlayer = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.phase(), player.phase());
        assert_eq!(restored.remaining_secs(), player.remaining_secs());
        assert_eq!(restored.is_running(), player.is_running());
        assert_eq!(restored.session_id(), player.session_id());
    }
}
