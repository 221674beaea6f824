//! # BackWell Core Library
//!
//! Core business logic for BackWell, a 28-day guided back-wellness
//! program. CLI-first: every operation is available through the
//! standalone CLI binary; any GUI would be a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Session Player**: a caller-driven state machine that sequences
//!   one day's exercises and mental-wellness segments; the caller invokes
//!   `tick()` once per second while the countdown runs
//! - **Catalog**: the static 28-day program content
//! - **Storage**: SQLite progress storage and TOML configuration
//! - **Entitlement**: free-trial/subscription gating for day selection
//! - **Analytics**: fire-and-forget event sinks
//!
//! ## Key Components
//!
//! - [`SessionPlayer`]: playback state machine
//! - [`catalog::day`]: day program lookup
//! - [`Database`]: progress persistence
//! - [`Config`]: application configuration
//! - [`EntitlementCheck`] / [`AnalyticsSink`]: collaborator seams

pub mod analytics;
pub mod catalog;
pub mod entitlement;
pub mod error;
pub mod events;
pub mod program;
pub mod progress;
pub mod session;
pub mod storage;

pub use analytics::{AnalyticsSink, EventLogSink, NullSink};
pub use entitlement::{EntitlementCheck, EntitlementState, SubscriptionGate, FREE_DAYS};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use events::Event;
pub use program::{DayProgram, Exercise, MentalKind, MentalSegment};
pub use progress::ProgressStats;
pub use session::{Phase, SegmentKind, SegmentRef, SessionPlayer};
pub use storage::{Config, Database};
