//! Configuration for the demo binary.
//!
//! Loads configuration from environment variables with sensible defaults.
//! The store itself reads no configuration.

use serde::{Deserialize, Serialize};
use std::env;

/// Separator between seed tasks in `TASKLIST_SEED`
pub const SEED_SEPARATOR: char = '|';

/// Demo configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log filter directive (trace, debug, info, warn, error, or a full `EnvFilter` string)
    pub log_level: String,
    /// Tasks to add before the scripted session runs
    pub seed: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `TASKLIST_LOG_LEVEL` (default `info`)
    /// - `TASKLIST_SEED`: `|`-separated task texts (default none)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("TASKLIST_LOG_LEVEL").ok(),
            env::var("TASKLIST_SEED").ok(),
        )
    }

    fn from_vars(log_level: Option<String>, seed: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: log_level
                .filter(|level| !level.trim().is_empty())
                .unwrap_or(defaults.log_level),
            seed: seed
                .map(|raw| parse_seed(&raw))
                .unwrap_or(defaults.seed),
        }
    }
}

fn parse_seed(raw: &str) -> Vec<String> {
    raw.split(SEED_SEPARATOR)
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_vars(None, None), Config::default());
    }

    #[test]
    fn blank_log_level_falls_back() {
        let config = Config::from_vars(Some("  ".to_string()), None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn seed_is_split_and_blank_entries_dropped() {
        let config = Config::from_vars(
            Some("debug".to_string()),
            Some("buy milk|| |walk dog".to_string()),
        );

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.seed, ["buy milk", "walk dog"]);
    }
}
