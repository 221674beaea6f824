//! Entitlement gating for day programs.
//!
//! Days 1..=3 are always playable; day 4 onward requires an active
//! subscription. The check is a synchronous boolean predicate injected
//! into whatever gates day selection -- there is no global singleton and
//! no receipt validation here, the commerce backend is simulated by a
//! persisted flag.

use serde::{Deserialize, Serialize};

use crate::error::DatabaseError;
use crate::storage::Database;

/// Number of days playable without a subscription.
pub const FREE_DAYS: u32 = 3;

/// Key under which the subscription flag lives in the kv store.
const SUBSCRIBED_KEY: &str = "store_subscribed";

/// Subscription state attached to analytics events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntitlementState {
    /// Within the free days, no subscription.
    Trial,
    /// Active subscription.
    Active,
    /// Past the free days with no subscription.
    Inactive,
}

impl EntitlementState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntitlementState::Trial => "trial",
            EntitlementState::Active => "active",
            EntitlementState::Inactive => "inactive",
        }
    }
}

/// Synchronous entitlement predicate, injected at the day-selection seam.
pub trait EntitlementCheck: Send + Sync {
    /// Whether the given day may be played.
    fn is_entitled(&self, day: u32) -> bool;

    /// Subscription state reported alongside analytics for the day.
    fn state_for_day(&self, day: u32) -> EntitlementState;
}

/// Entitlement check backed by a subscription flag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SubscriptionGate {
    pub subscribed: bool,
}

impl SubscriptionGate {
    pub fn new(subscribed: bool) -> Self {
        Self { subscribed }
    }

    /// Load the persisted subscription flag from the kv store.
    pub fn load(db: &Database) -> Self {
        let subscribed = matches!(db.kv_get(SUBSCRIBED_KEY), Ok(Some(v)) if v == "true");
        Self { subscribed }
    }

    /// Persist a new subscription state.
    pub fn save(db: &Database, subscribed: bool) -> Result<(), DatabaseError> {
        db.kv_set(SUBSCRIBED_KEY, if subscribed { "true" } else { "false" })
    }
}

impl EntitlementCheck for SubscriptionGate {
    fn is_entitled(&self, day: u32) -> bool {
        day <= FREE_DAYS || self.subscribed
    }

    fn state_for_day(&self, day: u32) -> EntitlementState {
        if self.subscribed {
            EntitlementState::Active
        } else if day <= FREE_DAYS {
            EntitlementState::Trial
        } else {
            EntitlementState::Inactive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_days_are_always_entitled() {
        let gate = SubscriptionGate::new(false);
        for day in 1..=FREE_DAYS {
            assert!(gate.is_entitled(day));
        }
    }

    #[test]
    fn day_four_requires_subscription() {
        assert!(!SubscriptionGate::new(false).is_entitled(4));
        assert!(SubscriptionGate::new(true).is_entitled(4));
    }

    #[test]
    fn state_labels() {
        let free = SubscriptionGate::new(false);
        assert_eq!(free.state_for_day(2), EntitlementState::Trial);
        assert_eq!(free.state_for_day(10), EntitlementState::Inactive);
        let paid = SubscriptionGate::new(true);
        assert_eq!(paid.state_for_day(2), EntitlementState::Active);
        assert_eq!(paid.state_for_day(10), EntitlementState::Active);
    }

    #[test]
    fn gate_round_trips_through_db() {
        let db = Database::open_memory().unwrap();
        assert!(!SubscriptionGate::load(&db).subscribed);
        SubscriptionGate::save(&db, true).unwrap();
        assert!(SubscriptionGate::load(&db).subscribed);
        SubscriptionGate::save(&db, false).unwrap();
        assert!(!SubscriptionGate::load(&db).subscribed);
    }
}
