//! Analytics emission.
//!
//! Every sink implements [`AnalyticsSink`]. Emission is fire-and-forget:
//! errors are surfaced to the caller for logging but never reach the
//! session state machine, and every method has a no-op default so sinks
//! implement only the events they care about.

use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use serde_json::json;

/// Milestone label reported with day completions.
///
/// Day 3 ends the free trial; 7/14/28 are week boundaries.
pub fn milestone_label(day: u32) -> String {
    match day {
        3 => "trial_end".to_string(),
        7 => "week_1".to_string(),
        14 => "week_2".to_string(),
        28 => "program_complete".to_string(),
        _ => format!("day_{day}"),
    }
}

/// Whether completing this day fires a milestone event.
pub fn is_milestone(day: u32) -> bool {
    !milestone_label(day).starts_with("day_")
}

/// Every analytics backend implements this trait.
pub trait AnalyticsSink: Send + Sync {
    /// Unique identifier (e.g. "event_log").
    fn name(&self) -> &str;

    /// An exercise segment was completed, by timer expiry or skip.
    fn track_segment_completed(
        &self,
        _day: u32,
        _segment_index: usize,
        _total_segments: usize,
        _name: &str,
        _duration_secs: u32,
        _entitlement: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(()) // default no-op
    }

    /// A full day program reached completion.
    fn track_day_completed(
        &self,
        _day: u32,
        _total_completed_days: u32,
        _entitlement: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(()) // default no-op
    }

    /// A milestone day (trial end, week boundary, program end) was hit.
    fn track_milestone(
        &self,
        _day: u32,
        _total_completed_days: u32,
        _milestone: &str,
        _entitlement: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(()) // default no-op
    }

    /// The paywall was shown instead of a locked day.
    fn track_paywall_viewed(
        &self,
        _placement: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(()) // default no-op
    }

    /// The user entered the free-day trial.
    fn track_trial_started(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(()) // default no-op
    }
}

/// Sink that discards everything.
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn name(&self) -> &str {
        "null"
    }
}

/// Sink that appends one JSON line per event to a log file.
///
/// Stands in for the ad-attribution SDK: same event names and parameter
/// shapes, local file instead of a network call.
pub struct EventLogSink {
    path: PathBuf,
}

impl EventLogSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Sink writing to `analytics.jsonl` under the data dir.
    pub fn open_default() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::new(crate::storage::data_dir()?.join("analytics.jsonl")))
    }

    fn append(&self, record: serde_json::Value) -> Result<(), Box<dyn std::error::Error>> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{record}")?;
        Ok(())
    }
}

impl AnalyticsSink for EventLogSink {
    fn name(&self) -> &str {
        "event_log"
    }

    fn track_segment_completed(
        &self,
        day: u32,
        segment_index: usize,
        total_segments: usize,
        name: &str,
        duration_secs: u32,
        entitlement: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.append(json!({
            "event": "exercise_completed",
            "current_day": day,
            "exercise_number": segment_index + 1,
            "total_exercises": total_segments,
            "content_id": name,
            "duration_seconds": duration_secs,
            "day_progress": (segment_index + 1) as f64 / total_segments.max(1) as f64,
            "subscription_status": entitlement,
            "at": Utc::now().to_rfc3339(),
        }))
    }

    fn track_day_completed(
        &self,
        day: u32,
        total_completed_days: u32,
        entitlement: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.append(json!({
            "event": "day_completed",
            "current_day": day,
            "content_id": format!("day_{day}"),
            "total_completed_days": total_completed_days,
            "subscription_status": entitlement,
            "at": Utc::now().to_rfc3339(),
        }))
    }

    fn track_milestone(
        &self,
        day: u32,
        total_completed_days: u32,
        milestone: &str,
        entitlement: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.append(json!({
            "event": "achieved_level",
            "current_day": day,
            "level": day.to_string(),
            "milestone": milestone,
            "total_completed_days": total_completed_days,
            "completion_rate": total_completed_days as f64 / day.max(1) as f64,
            "subscription_status": entitlement,
            "at": Utc::now().to_rfc3339(),
        }))
    }

    fn track_paywall_viewed(&self, placement: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.append(json!({
            "event": "paywall_viewed",
            "placement": placement,
            "at": Utc::now().to_rfc3339(),
        }))
    }

    fn track_trial_started(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.append(json!({
            "event": "trial_started",
            "trial_length_days": crate::entitlement::FREE_DAYS,
            "at": Utc::now().to_rfc3339(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestone_labels() {
        assert_eq!(milestone_label(3), "trial_end");
        assert_eq!(milestone_label(7), "week_1");
        assert_eq!(milestone_label(14), "week_2");
        assert_eq!(milestone_label(28), "program_complete");
        assert_eq!(milestone_label(11), "day_11");
    }

    #[test]
    fn milestone_days_agree_with_labels() {
        for day in 1..=28 {
            assert_eq!(
                is_milestone(day),
                matches!(day, 3 | 7 | 14 | 28),
                "day {day}"
            );
        }
    }

    #[test]
    fn event_log_sink_appends_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analytics.jsonl");
        let sink = EventLogSink::new(path.clone());

        sink.track_segment_completed(1, 0, 5, "Deep Breathing", 60, "trial")
            .unwrap();
        sink.track_day_completed(1, 1, "trial").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "exercise_completed");
        assert_eq!(first["exercise_number"], 1);
        assert_eq!(first["content_id"], "Deep Breathing");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["event"], "day_completed");
        assert_eq!(second["content_id"], "day_1");
    }

    #[test]
    fn null_sink_swallows_everything() {
        let sink = NullSink;
        assert!(sink.track_day_completed(1, 1, "trial").is_ok());
        assert!(sink.track_paywall_viewed("day_locked").is_ok());
    }
}
