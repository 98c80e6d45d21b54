use crate::logger::LogLevel;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub min_log_level: LogLevel,
}
