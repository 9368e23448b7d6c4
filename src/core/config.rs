// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

// Configuration for the password meter
#[derive(Debug, Clone)]
pub struct Config {
    // History
    pub history_file: PathBuf,

    // Password Generation
    pub default_password_length: usize,

    // Web Interface
    pub web_enabled: bool,
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // History
            history_file: PathBuf::from("./data/password_history.csv"),

            // Password Generation
            default_password_length: 12,

            // Web Interface
            web_enabled: true,
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_dir: PathBuf::from("./logs"),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    /// for missing or unparsable values.
    ///
    /// Ignored values are returned as warnings since logging is configured
    /// from the result and is not running yet.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // History
        if let Some(path) = lookup("HISTORY_FILE") {
            config.history_file = PathBuf::from(path);
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if (8..=32).contains(&length) => config.default_password_length = length,
                _ => warnings.push(format!("Ignoring DEFAULT_PASSWORD_LENGTH '{}', expected 8-32", val)),
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_ENABLED") {
            match val.parse() {
                Ok(enabled) => config.web_enabled = enabled,
                Err(_) => warnings.push(format!("Ignoring WEB_ENABLED '{}', expected true or false", val)),
            }
        }

        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => warnings.push(format!("Ignoring invalid WEB_PORT '{}'", val)),
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(dir) = lookup("LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        (config, warnings)
    }

    // Create directories needed for operation
    pub fn ensure_directories_exist(&self) -> std::io::Result<()> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir)?;
        }

        if let Some(parent) = self.history_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(())
    }
}
