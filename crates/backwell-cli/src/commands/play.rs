use backwell_core::analytics::{is_milestone, milestone_label};
use backwell_core::storage::Database;
use backwell_core::{
    catalog, AnalyticsSink, Config, EntitlementCheck, Event, EventLogSink, NullSink, Phase,
    SessionPlayer, SubscriptionGate, ValidationError, FREE_DAYS,
};
use chrono::{DateTime, Utc};
use clap::Subcommand;
use serde::{Deserialize, Serialize};

/// kv key holding the serialized active session between invocations.
const SESSION_KEY: &str = "active_session";

#[derive(Subcommand)]
pub enum PlayAction {
    /// Start a session for a day (locked days require a subscription)
    Start {
        /// Day number (1-28)
        #[arg(long)]
        day: u32,
    },
    /// Begin or resume the countdown
    Go,
    /// Pause the countdown
    Pause,
    /// Skip past the current segment
    Skip,
    /// Advance the countdown by elapsed seconds
    Tick {
        /// Seconds elapsed since the last tick
        #[arg(long, default_value = "1")]
        seconds: u32,
    },
    /// Print the current session state as JSON
    Status,
    /// Play the active session in real time until the day completes
    Run,
    /// Abandon the active session without recording anything
    Abandon,
}

/// The active session plus the wall-clock start time, persisted in the
/// kv store so each CLI invocation picks up where the last left off.
#[derive(Serialize, Deserialize)]
struct StoredSession {
    player: SessionPlayer,
    started_at: DateTime<Utc>,
}

fn load_session(db: &Database) -> Result<StoredSession, Box<dyn std::error::Error>> {
    let json = db
        .kv_get(SESSION_KEY)?
        .ok_or("no active session; run `backwell-cli play start --day N` first")?;
    Ok(serde_json::from_str(&json)?)
}

fn save_session(db: &Database, session: &StoredSession) -> Result<(), Box<dyn std::error::Error>> {
    db.kv_set(SESSION_KEY, &serde_json::to_string(session)?)?;
    Ok(())
}

fn open_sink() -> Box<dyn AnalyticsSink> {
    match EventLogSink::open_default() {
        Ok(sink) => Box::new(sink),
        Err(e) => {
            eprintln!("analytics disabled: {e}");
            Box::new(NullSink)
        }
    }
}

/// Forward session events to persistence and analytics. Analytics
/// failures are logged and swallowed; database failures propagate.
fn forward_events(
    db: &Database,
    sink: &dyn AnalyticsSink,
    gate: &SubscriptionGate,
    session: &StoredSession,
    events: &[Event],
) -> Result<(), Box<dyn std::error::Error>> {
    for event in events {
        match event {
            Event::SegmentCompleted {
                day,
                segment_index,
                total_segments,
                name,
                duration_secs,
                ..
            } => {
                let ent = gate.state_for_day(*day);
                if let Err(e) = sink.track_segment_completed(
                    *day,
                    *segment_index,
                    *total_segments,
                    name,
                    *duration_secs,
                    ent.as_str(),
                ) {
                    eprintln!("analytics: {e}");
                }
            }
            Event::DayCompleted {
                session_id, day, ..
            } => {
                db.record_day_completed(*day)?;
                db.record_session(
                    &session_id.to_string(),
                    *day,
                    session.started_at,
                    session.player.program().total_duration_secs(),
                )?;
                let stats = db.progress_stats()?;
                let ent = gate.state_for_day(*day);
                if let Err(e) = sink.track_day_completed(*day, stats.completed_days, ent.as_str())
                {
                    eprintln!("analytics: {e}");
                }
                if is_milestone(*day) {
                    if let Err(e) = sink.track_milestone(
                        *day,
                        stats.completed_days,
                        &milestone_label(*day),
                        ent.as_str(),
                    ) {
                        eprintln!("analytics: {e}");
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn print_events(events: &[Event]) -> Result<(), Box<dyn std::error::Error>> {
    for event in events {
        println!("{}", serde_json::to_string_pretty(event)?);
    }
    Ok(())
}

/// Persist the session, or clear it once the day is complete. Prints
/// the completion message on the way out.
fn finish(db: &Database, session: &StoredSession) -> Result<(), Box<dyn std::error::Error>> {
    if session.player.phase() == Phase::Complete {
        db.kv_delete(SESSION_KEY)?;
        println!("{}", session.player.program().completion_message);
    } else {
        save_session(db, session)?;
    }
    Ok(())
}

pub fn run(action: PlayAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let sink = open_sink();

    match action {
        PlayAction::Start { day } => {
            let program = catalog::day(day)
                .ok_or(ValidationError::DayOutOfRange {
                    day,
                    max: catalog::TOTAL_DAYS,
                })?
                .clone();
            let gate = SubscriptionGate::load(&db);
            if !gate.is_entitled(day) {
                if let Err(e) = sink.track_paywall_viewed("day_locked") {
                    eprintln!("analytics: {e}");
                }
                return Err(format!(
                    "day {day} is locked: days 1-{FREE_DAYS} are free; \
                     run `backwell-cli store subscribe` to unlock the full program"
                )
                .into());
            }
            if !gate.subscribed && db.completed_days()?.is_empty() {
                if let Err(e) = sink.track_trial_started() {
                    eprintln!("analytics: {e}");
                }
            }

            let mut player = SessionPlayer::new(program)?;
            let events = player.start();
            let session = StoredSession {
                player,
                started_at: Utc::now(),
            };
            forward_events(&db, sink.as_ref(), &gate, &session, &events)?;
            print_events(&events)?;
            finish(&db, &session)?;
        }
        PlayAction::Go => {
            let mut session = load_session(&db)?;
            match session.player.play() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&session.player.snapshot())?),
            }
            save_session(&db, &session)?;
        }
        PlayAction::Pause => {
            let mut session = load_session(&db)?;
            match session.player.pause() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&session.player.snapshot())?),
            }
            save_session(&db, &session)?;
        }
        PlayAction::Skip => {
            let mut session = load_session(&db)?;
            let gate = SubscriptionGate::load(&db);
            let events = session.player.skip();
            forward_events(&db, sink.as_ref(), &gate, &session, &events)?;
            print_events(&events)?;
            finish(&db, &session)?;
        }
        PlayAction::Tick { seconds } => {
            let mut session = load_session(&db)?;
            let gate = SubscriptionGate::load(&db);
            let mut events = Vec::new();
            for _ in 0..seconds {
                if session.player.phase() == Phase::Complete {
                    break;
                }
                events.extend(session.player.tick());
            }
            forward_events(&db, sink.as_ref(), &gate, &session, &events)?;
            print_events(&events)?;
            finish(&db, &session)?;
        }
        PlayAction::Status => {
            let session = load_session(&db)?;
            println!("{}", serde_json::to_string_pretty(&session.player.snapshot())?);
        }
        PlayAction::Run => {
            let config = Config::load()?;
            let grace = std::time::Duration::from_millis(config.player.advance_grace_ms);
            let gate = SubscriptionGate::load(&db);
            let mut session = load_session(&db)?;

            while session.player.phase() != Phase::Complete {
                if let Some(event) = session.player.play() {
                    println!("{}", serde_json::to_string(&event)?);
                }
                std::thread::sleep(std::time::Duration::from_secs(1));
                let events = session.player.tick();
                forward_events(&db, sink.as_ref(), &gate, &session, &events)?;
                let mut advanced = false;
                for event in &events {
                    println!("{}", serde_json::to_string(event)?);
                    if matches!(event, Event::SegmentStarted { .. }) {
                        advanced = true;
                    }
                }
                if advanced {
                    std::thread::sleep(grace);
                }
            }
            finish(&db, &session)?;
        }
        PlayAction::Abandon => {
            db.kv_delete(SESSION_KEY)?;
            println!("{{\"type\": \"session_abandoned\"}}");
        }
    }
    Ok(())
}
