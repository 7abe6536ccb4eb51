// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

// Configuration for the toolkit front-ends
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_password_count: usize,

    // Wordlist Generation
    pub wordlist_max_combos: usize,
    pub wordlist_preview_size: usize,

    // Output
    pub output_directory: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_password_count: 10,

            // Wordlist Generation
            wordlist_max_combos: 50_000,
            wordlist_preview_size: 30,

            // Output
            output_directory: PathBuf::from("."),

            // Logging
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("./falcon.log"),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Self::from_vars(|key| env::var(key).ok());

        // Only fall back to the app data dir when LOG_FILE was not given
        if env::var("LOG_FILE").is_err() {
            if let Some(dir) = crate::utils::get_app_data_dir() {
                config.log_file = dir.join("falcon.log");
            }
        }

        config
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Numeric settings must be positive integers; anything else is
    /// reported and the default is kept.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            apply_positive("DEFAULT_PASSWORD_LENGTH", &val, &mut config.default_password_length);
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_COUNT") {
            apply_positive("DEFAULT_PASSWORD_COUNT", &val, &mut config.default_password_count);
        }

        // Wordlist Generation
        if let Some(val) = lookup("WORDLIST_MAX_COMBOS") {
            apply_positive("WORDLIST_MAX_COMBOS", &val, &mut config.wordlist_max_combos);
        }

        if let Some(val) = lookup("WORDLIST_PREVIEW_SIZE") {
            apply_positive("WORDLIST_PREVIEW_SIZE", &val, &mut config.wordlist_preview_size);
        }

        // Output
        if let Some(dir) = lookup("OUTPUT_DIRECTORY") {
            if !dir.trim().is_empty() {
                config.output_directory = PathBuf::from(dir.trim());
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                "off" => config.log_level = LevelFilter::Off,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        config
    }
}

fn apply_positive(key: &str, raw: &str, slot: &mut usize) {
    match crate::utils::parse_positive(raw) {
        Ok(value) => *slot = value,
        Err(e) => log::warn!("Ignoring {}: {}", key, e),
    }
}
