//! Configuration management for the outreach composer.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use crate::output::DEFAULT_FILENAME;
use std::env;
use std::path::PathBuf;

/// Configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Contacts CSV (required for a run, checked when the run starts)
    pub contacts_path: Option<PathBuf>,

    /// Templates CSV (required for a run, checked when the run starts)
    pub templates_path: Option<PathBuf>,

    /// Optional do-not-contact CSV
    pub dnc_path: Option<PathBuf>,

    /// Directory receiving the generated artifacts (default: ".")
    pub output_dir: PathBuf,

    /// Artifact file name (default: "messages.csv")
    pub output_filename: String,

    /// Prefix the artifact name with today's date as MM-DD-YYYY (default: false)
    pub dated_output: bool,

    /// Split output into parts of at most this many rows
    pub messages_per_file: Option<usize>,

    /// Shuffle the final message list before writing (default: false)
    pub shuffle_output: bool,

    /// Seed for a reproducible random source
    pub rng_seed: Option<u64>,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CONTACTS_PATH`: contacts CSV
    /// - `TEMPLATES_PATH`: templates CSV
    /// - `DNC_PATH`: do-not-contact CSV
    /// - `OUTPUT_DIR`: output directory (default: ".")
    /// - `OUTPUT_FILENAME`: artifact name, must end in `.csv` (default: "messages.csv")
    /// - `DATED_OUTPUT`: prefix the artifact name with the date (default: false)
    /// - `MESSAGES_PER_FILE`: split size, must be positive
    /// - `SHUFFLE_OUTPUT`: shuffle the messages (default: false)
    /// - `RNG_SEED`: seed for the random source
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let output_filename =
            env::var("OUTPUT_FILENAME").unwrap_or_else(|_| DEFAULT_FILENAME.to_string());
        if !output_filename.to_ascii_lowercase().ends_with(".csv")
            || output_filename.contains(['/', '\\'])
        {
            return Err(ConfigError::InvalidValue {
                var: "OUTPUT_FILENAME".to_string(),
                reason: format!("Must be a plain file name ending in .csv, got: {}", output_filename),
            });
        }

        let messages_per_file = Self::parse_env_opt::<usize>("MESSAGES_PER_FILE")?;
        if messages_per_file == Some(0) {
            return Err(ConfigError::InvalidValue {
                var: "MESSAGES_PER_FILE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        Ok(Config {
            contacts_path: Self::env_path("CONTACTS_PATH"),
            templates_path: Self::env_path("TEMPLATES_PATH"),
            dnc_path: Self::env_path("DNC_PATH"),
            output_dir: Self::env_path("OUTPUT_DIR").unwrap_or_else(|| PathBuf::from(".")),
            output_filename,
            dated_output: Self::parse_env_bool("DATED_OUTPUT", false)?,
            messages_per_file,
            shuffle_output: Self::parse_env_bool("SHUFFLE_OUTPUT", false)?,
            rng_seed: Self::parse_env_opt::<u64>("RNG_SEED")?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Read a path variable; empty values count as unset.
    fn env_path(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .map(PathBuf::from)
    }

    /// Parse an optional numeric environment variable.
    fn parse_env_opt<T: std::str::FromStr>(var_name: &str) -> ConfigResult<Option<T>> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Ok(None),
            Ok(val) => val
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }

    /// Parse a boolean environment variable with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" | "" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_path: None,
            templates_path: None,
            dnc_path: None,
            output_dir: PathBuf::from("."),
            output_filename: DEFAULT_FILENAME.to_string(),
            dated_output: false,
            messages_per_file: None,
            shuffle_output: false,
            rng_seed: None,
            log_level: "info".to_string(),
        }
    }
}
