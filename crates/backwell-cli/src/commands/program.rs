use backwell_core::{catalog, ValidationError};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProgramAction {
    /// List all 28 days
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one day's full program
    Show {
        /// Day number (1-28)
        #[arg(long)]
        day: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ProgramAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProgramAction::List { json } => {
            let days = catalog::all_days();
            if json {
                println!("{}", serde_json::to_string_pretty(days)?);
            } else {
                for p in days {
                    let mins = p.total_duration_secs() / 60;
                    let secs = p.total_duration_secs() % 60;
                    println!(
                        "day {:>2}  {:<40} {:<28} {:>2}m{:02}s  {} exercises, {} mental",
                        p.day,
                        p.title,
                        p.theme,
                        mins,
                        secs,
                        p.exercises.len(),
                        p.mental_segments.len()
                    );
                }
            }
        }
        ProgramAction::Show { day, json } => {
            let program = catalog::day(day).ok_or(ValidationError::DayOutOfRange {
                day,
                max: catalog::TOTAL_DAYS,
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(program)?);
            } else {
                println!("Day {}: {}", program.day, program.title);
                println!("Theme: {}", program.theme);
                println!("Mental focus: {}", program.mental_focus);
                println!("Focus areas: {}", program.focus_areas().join(", "));
                println!();
                println!("Exercises:");
                for (i, ex) in program.exercises.iter().enumerate() {
                    println!("  {}. {} ({}s) [{}]", i + 1, ex.name, ex.duration_secs, ex.focus_area);
                    for step in &ex.instructions {
                        println!("       - {step}");
                    }
                }
                println!();
                println!("Mental segments:");
                for (i, m) in program.mental_segments.iter().enumerate() {
                    println!("  {}. {} ({}s)", i + 1, m.kind.title(), m.duration_secs);
                    println!("       {}", m.guidance);
                }
            }
        }
    }
    Ok(())
}
