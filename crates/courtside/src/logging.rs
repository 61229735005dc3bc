//! File logging. The terminal belongs to the UI, so logs go to a file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use courtside_config::{Config, LogLevel};
use simplelog::{ConfigBuilder, WriteLogger};

/// Install the global logger, appending to the courtside log file.
/// Returns the log file path.
pub fn init(level: LogLevel) -> color_eyre::Result<PathBuf> {
    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(log::LevelFilter::Off)
        .build();
    WriteLogger::init(level.to_level_filter(), config, file)?;
    Ok(path)
}
