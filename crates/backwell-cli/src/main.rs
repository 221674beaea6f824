use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "backwell-cli", version, about = "BackWell 28-day program CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the 28-day program catalog
    Program {
        #[command(subcommand)]
        action: commands::program::ProgramAction,
    },
    /// Session playback control
    Play {
        #[command(subcommand)]
        action: commands::play::PlayAction,
    },
    /// Challenge progress
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Subscription management
    Store {
        #[command(subcommand)]
        action: commands::store::StoreAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Program { action } => commands::program::run(action),
        Commands::Play { action } => commands::play::run(action),
        Commands::Progress { action } => commands::progress::run(action),
        Commands::Store { action } => commands::store::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
