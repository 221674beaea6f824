pub mod config;
pub mod play;
pub mod program;
pub mod progress;
pub mod store;
