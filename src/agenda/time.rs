use crate::error::AgendaError;
use crate::logger::Logger;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::warn;

/// Days per month, February fixed at 28 since dates carry no year.
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

lazy_static! {
    static ref TIME_REGEX: Regex =
        Regex::new(r"^([0-9]+):([0-9]{2})$").expect("Failed to create time regex");
}

/// Number of days in `month`, or `None` when it isn't a month.
pub fn days_in_month(month: u32) -> Option<u32> {
    let index = month.checked_sub(1)? as usize;

    DAYS_IN_MONTH.get(index).copied()
}

/// A day of a month, without a year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateParts")]
pub struct SimpleDate {
    day: u32,
    month: u32,
}

impl SimpleDate {
    pub fn new(day: u32, month: u32) -> Result<Self, AgendaError> {
        let max_day = days_in_month(month).ok_or(AgendaError::InvalidMonth { month })?;

        if day < 1 || day > max_day {
            return Err(AgendaError::InvalidDay {
                day,
                month,
                max_day,
            });
        }

        Ok(Self { day, month })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl Display for SimpleDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.day, self.month)
    }
}

impl TryFrom<NaiveDate> for SimpleDate {
    type Error = AgendaError;

    /// Fails for the 29th of February.
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        SimpleDate::new(date.day(), date.month())
    }
}

#[derive(Deserialize)]
struct DateParts {
    day: u32,
    month: u32,
}

impl TryFrom<DateParts> for SimpleDate {
    type Error = AgendaError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        SimpleDate::new(parts.day, parts.month)
    }
}

/// A time of day as hours and minutes.
///
/// Construction doesn't validate, only the text parsers do.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleTime {
    pub hours: u32,
    pub minutes: u32,
}

impl SimpleTime {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// Strictly parses `h:mm` (any number of hour digits, exactly two minute digits).
    pub fn parse(time: &str) -> Result<Self, AgendaError> {
        let malformed = || AgendaError::MalformedTime {
            text: time.to_string(),
        };

        let captures = TIME_REGEX.captures(time).ok_or_else(malformed)?;
        let hours: u32 = captures[1].parse().map_err(|_| malformed())?;
        let minutes: u32 = captures[2].parse().map_err(|_| malformed())?;

        if hours >= 24 || minutes >= 60 {
            return Err(AgendaError::TimeOutOfRange { hours, minutes });
        }

        Ok(Self { hours, minutes })
    }

    /**
    Extracts the hour and minute values from `time`, formatted as (h)h:mm.
    * Invalid input is logged as a warning and yields (0, 0)
    * Without any logger set up, the warning goes to stdout at the default level
    */
    pub fn decode(time: &str) -> (u32, u32) {
        Logger::in_current_or_default(|| Self::decode_or_warn(time))
    }

    /// Same as [`SimpleTime::decode`], warning through `logger`.
    pub fn decode_with(logger: &Logger, time: &str) -> (u32, u32) {
        logger.in_scope(|| Self::decode_or_warn(time))
    }

    fn decode_or_warn(time: &str) -> (u32, u32) {
        match Self::parse(time) {
            Ok(parsed) => (parsed.hours, parsed.minutes),
            Err(e) => {
                warn!("Input time is invalid! {}", e);
                (0, 0)
            }
        }
    }
}

impl Display for SimpleTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for SimpleTime {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveTime> for SimpleTime {
    fn from(time: NaiveTime) -> Self {
        SimpleTime::new(time.hour(), time.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_in_month_table() {
        assert_eq!(days_in_month(0), None);
        assert_eq!(days_in_month(1), Some(31));
        assert_eq!(days_in_month(2), Some(28));
        assert_eq!(days_in_month(4), Some(30));
        assert_eq!(days_in_month(12), Some(31));
        assert_eq!(days_in_month(13), None);
        assert_eq!(days_in_month(u32::MAX), None);
    }

    #[test]
    fn total_days_is_no_leap_year() {
        assert_eq!(DAYS_IN_MONTH.iter().sum::<u32>(), 365);
    }

    #[test]
    fn regex_rejects_non_ascii_digits() {
        assert!(!TIME_REGEX.is_match("٩:٠٥"));
        assert!(TIME_REGEX.is_match("9:05"));
    }
}
