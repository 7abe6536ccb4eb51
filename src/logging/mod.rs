// src/logging/mod.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use env_logger::Target;
use crate::core::config::Config;
use crate::core::Result;

/// Open `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

// Stderr when the log file cannot be opened
fn log_target(path: &Path) -> (Target, Option<io::Error>) {
    match open_log_file(path) {
        Ok(file) => (Target::Pipe(Box::new(file)), None),
        Err(e) => (Target::Stderr, Some(e)),
    }
}

/// Route the `log` facade to the configured log file, or to stderr if the
/// file is unusable.
///
/// `RUST_LOG`, when set, overrides the configured level.
pub fn init(config: &Config) -> Result<()> {
    let (target, open_error) = log_target(&config.log_file);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .target(target)
        .try_init()?;

    match open_error {
        Some(e) => log::warn!(
            "Cannot open log file {} ({}), logging to stderr",
            config.log_file.display(),
            e
        ),
        None => log::info!("🦅 Falcon toolkit starting (log file: {})", config.log_file.display()),
    }
    Ok(())
}
