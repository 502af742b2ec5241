//! Opt-in file logging.
//!
//! The alternate screen owns stdout, so log output goes to a dated file
//! under the platform data directory instead (default:
//! `~/.local/share/colormatch/logs/`). Nothing is created unless
//! `RUST_LOG` is set.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("colormatch")
        .join("logs")
}

pub fn init() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let dir = log_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let path = dir.join(format!("colormatch_{}.log", date));
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .with(EnvFilter::from_default_env())
        .init();

    Ok(())
}
