// src/logging.rs

//! File-backed tracing subscriber. The terminal belongs to ratatui, so logs go to disk.
use color_eyre::eyre::eyre;
use std::fs::{create_dir_all, File};
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

pub const LOG_DIR: &str = "./logs";
pub const LOG_FILE: &str = "title-animator.log";

/// `DEBUG=true` raises the level to debug.
pub fn debug_enabled() -> bool {
    std::env::var("DEBUG").unwrap_or_default() == "true"
}

pub fn init(log_dir: impl AsRef<Path>) -> color_eyre::Result<()> {
    let log_dir = log_dir.as_ref();
    create_dir_all(log_dir)?;

    // Start fresh each run
    let file = File::create(log_dir.join(LOG_FILE))?;
    let level = if debug_enabled() { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| eyre!("Failed to install log subscriber: {}", e))
}
