//! In-memory model of a weekly class schedule: weeks made of days, days made of
//! events, plus a small leveled console logger.

pub mod agenda;
pub mod config;
pub mod error;
pub mod logger;

pub use agenda::model::{Day, Event, Week};
pub use agenda::time::{SimpleDate, SimpleTime};
pub use agenda::weekday::Weekday;
pub use error::AgendaError;
pub use logger::{LogLevel, Logger};
