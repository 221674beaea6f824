//! Day program data model.
//!
//! A [`DayProgram`] is the immutable content unit for one day of the
//! 28-day challenge: an ordered list of physical exercises and an ordered
//! list of mental-wellness segments, plus display metadata. Programs are
//! validated once, at construction time; the session player never has to
//! deal with a malformed segment mid-playback.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single physical exercise segment.
///
/// Identity is `(name, duration_secs)` -- two exercises with the same
/// name and duration are the same exercise for comparison purposes, even
/// across different days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    /// Duration in whole seconds. Must be > 0.
    pub duration_secs: u32,
    /// Ordered how-to-perform instructions.
    pub instructions: Vec<String>,
    /// Display icon token.
    pub icon: String,
    /// Focus-area label, e.g. "Lower Back".
    pub focus_area: String,
}

impl PartialEq for Exercise {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.duration_secs == other.duration_secs
    }
}

impl Eq for Exercise {}

impl Hash for Exercise {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.duration_secs.hash(state);
    }
}

/// Kind of mental-wellness segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentalKind {
    Breathing,
    Affirmation,
    BodyScan,
    Reflection,
}

impl MentalKind {
    /// Human-readable title for display.
    pub fn title(&self) -> &'static str {
        match self {
            MentalKind::Breathing => "Breathing Exercise",
            MentalKind::Affirmation => "Affirmation",
            MentalKind::BodyScan => "Body Scan",
            MentalKind::Reflection => "Reflection",
        }
    }

    /// Display icon token.
    pub fn icon(&self) -> &'static str {
        match self {
            MentalKind::Breathing => "wind",
            MentalKind::Affirmation => "sparkles",
            MentalKind::BodyScan => "figure.mind.and.body",
            MentalKind::Reflection => "brain.head.profile",
        }
    }
}

/// A guided mental-wellness segment. Identity is `(kind, duration_secs)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentalSegment {
    pub kind: MentalKind,
    /// Duration in whole seconds. Must be > 0.
    pub duration_secs: u32,
    /// Guidance text shown while the segment runs.
    pub guidance: String,
}

impl PartialEq for MentalSegment {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.duration_secs == other.duration_secs
    }
}

impl Eq for MentalSegment {}

impl Hash for MentalSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.duration_secs.hash(state);
    }
}

/// One day of the challenge. Identity is the day number, which is unique
/// and stable; segment order is significant and fixed at authoring time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayProgram {
    pub day: u32,
    pub title: String,
    pub theme: String,
    /// Today's mental focus, shown on the completion screen.
    pub mental_focus: String,
    pub exercises: Vec<Exercise>,
    pub mental_segments: Vec<MentalSegment>,
    pub completion_message: String,
}

impl PartialEq for DayProgram {
    fn eq(&self, other: &Self) -> bool {
        self.day == other.day
    }
}

impl Eq for DayProgram {}

impl Hash for DayProgram {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.day.hash(state);
    }
}

impl DayProgram {
    /// Validate the program structure.
    ///
    /// A well-formed program has only positive segment durations, named
    /// exercises, and guidance text on every mental segment. An empty
    /// exercise list is tolerated here (the player handles it without
    /// crashing) but callers should guard against it upstream.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (i, ex) in self.exercises.iter().enumerate() {
            if ex.name.trim().is_empty() {
                return Err(ValidationError::EmptyName {
                    day: self.day,
                    index: i,
                });
            }
            if ex.duration_secs == 0 {
                return Err(ValidationError::NonPositiveDuration {
                    day: self.day,
                    segment: ex.name.clone(),
                });
            }
        }
        for (i, m) in self.mental_segments.iter().enumerate() {
            if m.duration_secs == 0 {
                return Err(ValidationError::NonPositiveDuration {
                    day: self.day,
                    segment: m.kind.title().to_string(),
                });
            }
            if m.guidance.trim().is_empty() {
                return Err(ValidationError::EmptyGuidance {
                    day: self.day,
                    index: i,
                });
            }
        }
        Ok(())
    }

    /// Deduplicated focus-area labels, in first-seen order.
    pub fn focus_areas(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for ex in &self.exercises {
            if !seen.contains(&ex.focus_area) {
                seen.push(ex.focus_area.clone());
            }
        }
        seen
    }

    /// Total content duration in seconds (exercises + mental segments).
    pub fn total_duration_secs(&self) -> u32 {
        let ex: u32 = self.exercises.iter().map(|e| e.duration_secs).sum();
        let mental: u32 = self.mental_segments.iter().map(|m| m.duration_secs).sum();
        ex.saturating_add(mental)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(name: &str, secs: u32) -> Exercise {
        Exercise {
            name: name.into(),
            duration_secs: secs,
            instructions: vec!["Step one".into()],
            icon: "wind".into(),
            focus_area: "Lower Back".into(),
        }
    }

    #[test]
    fn exercise_identity_is_name_and_duration() {
        let a = exercise("Cat-Cow Stretch", 45);
        let mut b = exercise("Cat-Cow Stretch", 45);
        b.instructions = vec!["Different steps".into()];
        b.focus_area = "Spine".into();
        assert_eq!(a, b);

        let c = exercise("Cat-Cow Stretch", 60);
        assert_ne!(a, c);
    }

    #[test]
    fn mental_identity_is_kind_and_duration() {
        let a = MentalSegment {
            kind: MentalKind::Breathing,
            duration_secs: 30,
            guidance: "Breathe in calm.".into(),
        };
        let b = MentalSegment {
            kind: MentalKind::Breathing,
            duration_secs: 30,
            guidance: "Completely different guidance.".into(),
        };
        assert_eq!(a, b);

        let c = MentalSegment {
            kind: MentalKind::Affirmation,
            duration_secs: 30,
            guidance: "I am healing.".into(),
        };
        assert_ne!(a, c);
    }

    #[test]
    fn validate_rejects_zero_duration() {
        let program = DayProgram {
            day: 1,
            title: "Test".into(),
            theme: "Test".into(),
            mental_focus: "Test".into(),
            exercises: vec![exercise("Pelvic Tilts", 0)],
            mental_segments: vec![],
            completion_message: "Done".into(),
        };
        assert!(matches!(
            program.validate(),
            Err(ValidationError::NonPositiveDuration { day: 1, .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_guidance() {
        let program = DayProgram {
            day: 2,
            title: "Test".into(),
            theme: "Test".into(),
            mental_focus: "Test".into(),
            exercises: vec![exercise("Pelvic Tilts", 45)],
            mental_segments: vec![MentalSegment {
                kind: MentalKind::Reflection,
                duration_secs: 20,
                guidance: "  ".into(),
            }],
            completion_message: "Done".into(),
        };
        assert!(matches!(
            program.validate(),
            Err(ValidationError::EmptyGuidance { day: 2, index: 0 })
        ));
    }

    #[test]
    fn focus_areas_deduplicate_in_order() {
        let mut a = exercise("A", 30);
        a.focus_area = "Lower Back".into();
        let mut b = exercise("B", 30);
        b.focus_area = "Spine".into();
        let mut c = exercise("C", 30);
        c.focus_area = "Lower Back".into();

        let program = DayProgram {
            day: 1,
            title: "Test".into(),
            theme: "Test".into(),
            mental_focus: "Test".into(),
            exercises: vec![a, b, c],
            mental_segments: vec![],
            completion_message: "Done".into(),
        };
        assert_eq!(program.focus_areas(), vec!["Lower Back", "Spine"]);
    }
}
