//! Challenge progress over the 28 days.
//!
//! Local only -- there is no cross-device sync. The database records
//! which days have been completed; this module turns that into the
//! numbers the home screen and analytics need.

use serde::{Deserialize, Serialize};

use crate::catalog::TOTAL_DAYS;

/// Aggregated progress across the challenge.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProgressStats {
    /// Days completed so far (distinct days, not sessions).
    pub completed_days: u32,
    pub total_days: u32,
    /// 0.0 .. 100.0
    pub completion_pct: f64,
    /// First day not yet completed; `total_days + 1` after the final day.
    pub current_day: u32,
}

impl ProgressStats {
    /// Compute stats from the sorted list of completed day numbers.
    pub fn from_completed(completed: &[u32]) -> Self {
        let completed_days = completed.len() as u32;
        let current_day = (1..=TOTAL_DAYS)
            .find(|d| !completed.contains(d))
            .unwrap_or(TOTAL_DAYS + 1);
        Self {
            completed_days,
            total_days: TOTAL_DAYS,
            completion_pct: (completed_days as f64 / TOTAL_DAYS as f64 * 100.0).min(100.0),
            current_day,
        }
    }

    pub fn is_program_complete(&self) -> bool {
        self.completed_days >= self.total_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_progress_points_at_day_one() {
        let stats = ProgressStats::from_completed(&[]);
        assert_eq!(stats.completed_days, 0);
        assert_eq!(stats.current_day, 1);
        assert!(!stats.is_program_complete());
    }

    #[test]
    fn current_day_is_first_gap() {
        let stats = ProgressStats::from_completed(&[1, 2, 4]);
        assert_eq!(stats.current_day, 3);
        assert_eq!(stats.completed_days, 3);
    }

    #[test]
    fn full_completion() {
        let all: Vec<u32> = (1..=TOTAL_DAYS).collect();
        let stats = ProgressStats::from_completed(&all);
        assert!(stats.is_program_complete());
        assert_eq!(stats.current_day, TOTAL_DAYS + 1);
        assert!((stats.completion_pct - 100.0).abs() < f64::EPSILON);
    }
}
