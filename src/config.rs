use std::env;

use thiserror::Error;

pub const LOG_FILTER_VAR: &str = "ARITH_RPC_LOG";
pub const LOG_FORMAT_VAR: &str = "ARITH_RPC_LOG_FORMAT";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ARITH_RPC_LOG_FORMAT must be one of: compact, pretty, json")]
    InvalidLogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| {
            var(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let log_filter = non_empty(LOG_FILTER_VAR)
            .or_else(|| non_empty("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_format = match non_empty(LOG_FORMAT_VAR)
            .map(|value| value.to_ascii_lowercase())
            .as_deref()
        {
            None | Some("compact") => LogFormat::Compact,
            Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            _ => return Err(ConfigError::InvalidLogFormat),
        };

        Ok(Self {
            log_filter,
            log_format,
        })
    }
}
