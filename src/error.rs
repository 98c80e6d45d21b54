/// Error type for every fallible operation in the agenda crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgendaError {
    /// A month number outside 1..=12.
    #[error("Invalid given month! ({month})")]
    InvalidMonth { month: u32 },

    /// A day number outside 1..=max_day for an otherwise valid month.
    #[error("Invalid given day! ({day} for month {month}, max {max_day})")]
    InvalidDay { day: u32, month: u32, max_day: u32 },

    /// Time text that isn't shaped like `h:mm`.
    #[error("malformed time '{text}' (expected h:mm)")]
    MalformedTime { text: String },

    /// Time text with hours >= 24 or minutes >= 60.
    #[error("time out of range: {hours}:{minutes:02}")]
    TimeOutOfRange { hours: u32, minutes: u32 },

    #[error("invalid log level '{value}'. Expected one of debug, info, warn, error")]
    InvalidLogLevel { value: String },

    #[error("a global logger has already been installed")]
    LoggerAlreadyInstalled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            AgendaError::InvalidMonth { month: 13 }.to_string(),
            "Invalid given month! (13)"
        );
        assert_eq!(
            AgendaError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28
            }
            .to_string(),
            "Invalid given day! (29 for month 2, max 28)"
        );
        assert_eq!(
            AgendaError::TimeOutOfRange {
                hours: 24,
                minutes: 0
            }
            .to_string(),
            "time out of range: 24:00"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<AgendaError>();
    }
}
