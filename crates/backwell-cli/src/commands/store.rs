use backwell_core::storage::Database;
use backwell_core::{Config, EntitlementCheck, SubscriptionGate, FREE_DAYS};
use clap::Subcommand;
use serde_json::json;

#[derive(Subcommand)]
pub enum StoreAction {
    /// Show subscription status
    Status,
    /// Activate the subscription (simulated purchase)
    Subscribe,
    /// Deactivate the subscription
    Cancel,
    /// Re-apply a previous purchase (simulated restore)
    Restore,
}

fn print_status(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let gate = SubscriptionGate::load(db);
    // Account-level state is the state of the day the user is on.
    let state = gate.state_for_day(db.progress_stats()?.current_day);
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "subscribed": gate.subscribed,
            "state": state.as_str(),
            "product_id": config.store.product_id,
            "free_days": FREE_DAYS,
        }))?
    );
    Ok(())
}

pub fn run(action: StoreAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    match action {
        StoreAction::Status => print_status(&db)?,
        StoreAction::Subscribe => {
            SubscriptionGate::save(&db, true)?;
            print_status(&db)?;
        }
        StoreAction::Cancel => {
            SubscriptionGate::save(&db, false)?;
            print_status(&db)?;
        }
        StoreAction::Restore => {
            // No receipt backend; restore re-applies the stored flag.
            let gate = SubscriptionGate::load(&db);
            SubscriptionGate::save(&db, gate.subscribed)?;
            print_status(&db)?;
        }
    }
    Ok(())
}
