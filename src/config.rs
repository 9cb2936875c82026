//! UI configuration parsed from environment variables on the server side.
//!
//! The server renders with this config and embeds it in the page payload, so
//! the hydrated client never reads the environment itself.

use serde::{Deserialize, Serialize};

use crate::error::UiError;

pub const DEFAULT_TOXICITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_THRESHOLD_STEP: f64 = 0.01;
pub const THRESHOLD_MIN: f64 = 0.0;
pub const THRESHOLD_MAX: f64 = 1.0;

/// Verbosity for the browser console logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub default_threshold: f64,
    pub threshold_step: f64,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_threshold: DEFAULT_TOXICITY_THRESHOLD,
            threshold_step: DEFAULT_THRESHOLD_STEP,
            log_level: LogLevel::Info,
        }
    }
}

impl UiConfig {
    /// Build typed UI config from environment variables.
    ///
    /// Optional:
    /// - `REDTOX_TOXICITY_THRESHOLD`: default 0.7, must lie in `[0, 1]`
    /// - `REDTOX_THRESHOLD_STEP`: default 0.01, must be positive
    /// - `REDTOX_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ThresholdOutOfRange`] when the default threshold lies
    /// outside `[0, 1]`, and [`UiError::Config`] for any other malformed value.
    pub fn from_env() -> Result<Self, UiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`UiConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`UiConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, UiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_threshold = match lookup("REDTOX_TOXICITY_THRESHOLD") {
            Some(raw) => parse_threshold_value(&raw)?,
            None => DEFAULT_TOXICITY_THRESHOLD,
        };
        let threshold_step = match lookup("REDTOX_THRESHOLD_STEP") {
            Some(raw) => parse_step(&raw)?,
            None => DEFAULT_THRESHOLD_STEP,
        };
        let log_level = parse_log_level(lookup("REDTOX_LOG_LEVEL").as_deref())?;

        Ok(Self { default_threshold, threshold_step, log_level })
    }
}

fn parse_threshold_value(raw: &str) -> Result<f64, UiError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| UiError::Config(format!("REDTOX_TOXICITY_THRESHOLD '{raw}': {e}")))?;
    if !(THRESHOLD_MIN..=THRESHOLD_MAX).contains(&value) {
        return Err(UiError::ThresholdOutOfRange { value, min: THRESHOLD_MIN, max: THRESHOLD_MAX });
    }
    Ok(value)
}

fn parse_step(raw: &str) -> Result<f64, UiError> {
    let step = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| UiError::Config(format!("REDTOX_THRESHOLD_STEP '{raw}': {e}")))?;
    if !step.is_finite() || step <= 0.0 {
        return Err(UiError::Config(format!("REDTOX_THRESHOLD_STEP must be positive, got {step}")));
    }
    Ok(step)
}

fn parse_log_level(raw: Option<&str>) -> Result<LogLevel, UiError> {
    match raw.map(str::trim).unwrap_or("info").to_ascii_lowercase().as_str() {
        "error" => Ok(LogLevel::Error),
        "warn" => Ok(LogLevel::Warn),
        "info" => Ok(LogLevel::Info),
        "debug" => Ok(LogLevel::Debug),
        "trace" => Ok(LogLevel::Trace),
        other => Err(UiError::Config(format!("unknown REDTOX_LOG_LEVEL: {other}"))),
    }
}

#[cfg(feature = "hydrate")]
impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
