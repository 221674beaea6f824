use backwell_core::storage::Database;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Show challenge progress
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List recorded sessions for a day
    Sessions {
        /// Day number (1-28)
        #[arg(long)]
        day: u32,
    },
    /// Delete all progress and session history
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    match action {
        ProgressAction::Show { json } => {
            let stats = db.progress_stats()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!(
                    "{}/{} days completed ({:.0}%)",
                    stats.completed_days, stats.total_days, stats.completion_pct
                );
                if stats.is_program_complete() {
                    println!("Program complete.");
                } else {
                    println!("Next up: day {}", stats.current_day);
                }
                let completed = db.completed_days()?;
                if !completed.is_empty() {
                    let days: Vec<String> = completed.iter().map(|d| d.to_string()).collect();
                    println!("Completed: {}", days.join(", "));
                }
            }
        }
        ProgressAction::Sessions { day } => {
            let sessions = db.sessions_for_day(day)?;
            println!("{}", serde_json::to_string_pretty(&sessions)?);
        }
        ProgressAction::Reset { yes } => {
            if !yes {
                return Err("progress reset is destructive; re-run with --yes to confirm".into());
            }
            db.reset_progress()?;
            println!("progress reset");
        }
    }
    Ok(())
}
