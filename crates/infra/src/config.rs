//! Runtime configuration, read from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `SHIPTRACK_SEED_DEMO` | `true` |
//! | `SHIPTRACK_LOG_FORMAT` | `pretty` |
//! | `SHIPTRACK_LOG` | `warn` (used when `RUST_LOG` is unset) |

use thiserror::Error;

use shiptrack_observability::{LogFormat, LogSettings};

pub const SEED_DEMO_VAR: &str = "SHIPTRACK_SEED_DEMO";
pub const LOG_FORMAT_VAR: &str = "SHIPTRACK_LOG_FORMAT";
pub const LOG_FILTER_VAR: &str = "SHIPTRACK_LOG";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Process configuration for the tracker binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Seed the demo shipments at start-up.
    pub seed_demo_data: bool,
    pub log: LogSettings,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            log: LogSettings::default(),
        }
    }
}

impl TrackerConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_DEMO_VAR) {
            config.seed_demo_data = parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: SEED_DEMO_VAR,
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log.format = raw.parse::<LogFormat>().map_err(|_| ConfigError::InvalidValue {
                key: LOG_FORMAT_VAR,
                value: raw.clone(),
            })?;
        }

        // A blank filter keeps the default rather than silencing everything.
        if let Some(raw) = lookup(LOG_FILTER_VAR).filter(|raw| !raw.trim().is_empty()) {
            config.log.default_directive = raw;
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = TrackerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert!(config.seed_demo_data);
        assert_eq!(config.log.format, LogFormat::Pretty);
        assert_eq!(config.log.default_directive, "warn");
    }

    #[test]
    fn variables_override_defaults() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            (SEED_DEMO_VAR, "off"),
            (LOG_FORMAT_VAR, "json"),
            (LOG_FILTER_VAR, "shiptrack=debug"),
        ]))
        .unwrap();

        assert!(!config.seed_demo_data);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.default_directive, "shiptrack=debug");
    }

    #[test]
    fn bool_parsing_is_case_insensitive() {
        for (raw, expected) in [("TRUE", true), ("Yes", true), ("0", false), ("No", false)] {
            let config = TrackerConfig::from_lookup(lookup_from(&[(SEED_DEMO_VAR, raw)])).unwrap();
            assert_eq!(config.seed_demo_data, expected, "raw value {raw}");
        }
    }

    #[test]
    fn invalid_values_are_reported_with_their_key() {
        let err = TrackerConfig::from_lookup(lookup_from(&[(SEED_DEMO_VAR, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: SEED_DEMO_VAR,
                value: "maybe".to_string(),
            }
        );

        let err = TrackerConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for SHIPTRACK_LOG_FORMAT: 'xml'");
    }

    #[test]
    fn blank_log_filter_keeps_default() {
        let config = TrackerConfig::from_lookup(lookup_from(&[(LOG_FILTER_VAR, "  ")])).unwrap();
        assert_eq!(config.log.default_directive, "warn");
    }
}
