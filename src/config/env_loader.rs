use crate::config::model::Config;
use crate::error::AgendaError;
use crate::logger::LogLevel;
use std::env::{self, VarError};

pub const LOG_LEVEL_VAR: &str = "AGENDA_LOG_LEVEL";

pub fn load_config() -> Result<Config, AgendaError> {
    let min_log_level = load_log_level_config(LOG_LEVEL_VAR)?;

    Ok(Config { min_log_level })
}

fn load_log_level_config(name: &str) -> Result<LogLevel, AgendaError> {
    log_level_from_var(env::var(name))
}

/// Interprets the result of reading the level variable. Unset means the default,
/// a value that isn't valid Unicode is rejected like any other unknown level.
pub fn log_level_from_var(value: Result<String, VarError>) -> Result<LogLevel, AgendaError> {
    match value {
        Ok(value) => parse_log_level(Some(&value)),
        Err(VarError::NotPresent) => parse_log_level(None),
        Err(VarError::NotUnicode(value)) => Err(AgendaError::InvalidLogLevel {
            value: value.to_string_lossy().into_owned(),
        }),
    }
}

/// Parses a configured level, falling back to the default when unset.
pub fn parse_log_level(value: Option<&str>) -> Result<LogLevel, AgendaError> {
    match value.map(str::trim) {
        None | Some("") => Ok(LogLevel::default()),
        Some(value) => value.parse().map_err(|_| AgendaError::InvalidLogLevel {
            value: value.to_string(),
        }),
    }
}
