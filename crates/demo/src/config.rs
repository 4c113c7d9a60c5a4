//! Process configuration, read from the environment once at startup.

use std::path::PathBuf;

use stockroom_observability::LogFormat;
use thiserror::Error;

pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const OUTPUT_VAR: &str = "STOCKROOM_OUTPUT";
pub const SCRIPT_VAR: &str = "STOCKROOM_SCRIPT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: unsupported value {value:?} (expected one of: {expected})")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// How listings are written to stdout.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `Display` line per item.
    #[default]
    Text,
    /// Pretty-printed JSON array per listing.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub log_format: LogFormat,
    pub output: OutputFormat,
    /// JSON step script; the built-in showroom walkthrough when unset.
    pub script: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(value) => match value.trim().to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: LOG_FORMAT_VAR,
                        value,
                        expected: "json, pretty",
                    });
                }
            },
        };

        let output = match lookup(OUTPUT_VAR) {
            None => OutputFormat::default(),
            Some(value) => match value.trim().to_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: OUTPUT_VAR,
                        value,
                        expected: "text, json",
                    });
                }
            },
        };

        let script = lookup(SCRIPT_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            log_format,
            output,
            script,
        })
    }
}
