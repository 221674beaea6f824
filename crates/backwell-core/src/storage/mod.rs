mod config;
pub mod database;

pub use config::{Config, NotificationsConfig, PlayerConfig, StoreConfig};
pub use database::{Database, DaySessionRecord};

use std::path::PathBuf;

/// Returns `~/.config/backwell[-dev]/` based on BACKWELL_ENV.
///
/// Set BACKWELL_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BACKWELL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("backwell-dev")
    } else {
        base_dir.join("backwell")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
