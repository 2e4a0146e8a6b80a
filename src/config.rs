use std::env;
use std::time::Duration;

use chrono::FixedOffset;
use derive_more::Display;
use dotenvy::dotenv;

use crate::attendance::marking::RecordFetchPolicy;
use crate::utils::clock::parse_utc_offset;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ConfigError {
    #[display(fmt = "{} must be set", _0)]
    Missing(&'static str),
    #[display(fmt = "{} has an invalid value: {}", _0, _1)]
    Invalid(&'static str, String),
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    /// Root of the attendance service, e.g. `https://school.example/api`
    pub api_base_url: String,
    /// Fixed offset "today" is computed in (default +05:30)
    pub utc_offset: FixedOffset,
    pub request_timeout: Duration,
    pub record_fetch: RecordFetchPolicy,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` feeds it the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("API_BASE_URL"))?;

        let offset_raw = lookup("INSTITUTION_UTC_OFFSET").unwrap_or_else(|| "+05:30".to_string());
        let utc_offset = parse_utc_offset(&offset_raw)
            .ok_or_else(|| ConfigError::Invalid("INSTITUTION_UTC_OFFSET", offset_raw.clone()))?;

        let timeout_raw = lookup("REQUEST_TIMEOUT_SECS").unwrap_or_else(|| "15".to_string()); // default 15 sec
        let request_timeout = timeout_raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECS", timeout_raw.clone()))?;

        let strict_raw = lookup("RECORD_FETCH_STRICT").unwrap_or_else(|| "false".to_string());
        let record_fetch = match strict_raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => RecordFetchPolicy::Strict,
            "0" | "false" | "no" => RecordFetchPolicy::Lenient,
            _ => return Err(ConfigError::Invalid("RECORD_FETCH_STRICT", strict_raw)),
        };

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            utc_offset,
            request_timeout,
            record_fetch,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
