use crate::config::model::Config;
use crate::error::AgendaError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::io;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::NoSubscriber;
use tracing::{debug, dispatcher, error, info, warn, Dispatch, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{filter, fmt};

/// Module path prefix of this crate's events. The trailing `::` keeps crates
/// such as `agenda_web` out of the match.
const CRATE_TARGET: &str = "agenda::";

lazy_static! {
    static ref DEFAULT_LOGGER: Logger = Logger::default();
}

#[derive(Debug, Copy, Clone)]
enum AnsiStyle {
    BlackBold,
    Red,
    Grey,
    /// Equivalent to uncolored
    Reset,
}

impl AnsiStyle {
    fn code(self) -> &'static str {
        match self {
            AnsiStyle::BlackBold => "\u{1b}[1;30m",
            AnsiStyle::Red => "\u{1b}[0;31m",
            AnsiStyle::Grey => "\u{1b}[0;37m",
            AnsiStyle::Reset => "\u{1b}[0m",
        }
    }
}

impl Display for AnsiStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Severity of a log line, ordered from least to most severe.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn style(self) -> AnsiStyle {
        match self {
            LogLevel::Debug => AnsiStyle::Grey,
            LogLevel::Info => AnsiStyle::Reset,
            LogLevel::Warn => AnsiStyle::BlackBold,
            LogLevel::Error => AnsiStyle::Red,
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl From<Level> for LogLevel {
    /// Trace has no counterpart and is reported as debug.
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

/// Formats every event as `{style}[Logger/{LEVEL}]: {message}{reset}`.
#[derive(Debug, Default, Copy, Clone)]
pub struct LoggerFormat;

impl<S, N> FormatEvent<S, N> for LoggerFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let level = LogLevel::from(*event.metadata().level());

        write!(writer, "{}[Logger/{}]: ", level.style(), level)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer, "{}", AnsiStyle::Reset)
    }
}

/// Leveled console logger.
///
/// Each handle owns its own dispatcher, so several loggers can coexist. Use
/// [`Logger::in_scope`] to route the crate's own warnings through a handle, or
/// [`Logger::init`] to make it the process-wide default.
#[derive(Debug, Clone)]
pub struct Logger {
    min_level: LogLevel,
    dispatch: Dispatch,
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(LogLevel::default())
    }
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Logger::with_writer(min_level, io::stdout)
    }

    pub fn from_config(config: &Config) -> Self {
        Logger::new(config.min_log_level)
    }

    pub fn with_writer<W>(min_level: LogLevel, make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let filter = filter::Targets::new()
            .with_target(CRATE_TARGET, LevelFilter::from_level(min_level.into()))
            .with_default(LevelFilter::from_level(
                min_level.max(LogLevel::Warn).into(),
            ));

        let registry = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .event_format(LoggerFormat)
                .with_writer(make_writer),
        );

        Self {
            min_level,
            dispatch: Dispatch::new(registry),
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Runs `f` with this logger as the current thread's default.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }

    /// Runs `f` under the current dispatcher, or under a stdout logger at the
    /// default level when none was installed or scoped.
    pub(crate) fn in_current_or_default<T>(f: impl FnOnce() -> T) -> T {
        if dispatcher::get_default(|current| current.is::<NoSubscriber>()) {
            DEFAULT_LOGGER.in_scope(f)
        } else {
            f()
        }
    }

    /// Installs this logger as the process-wide default. Only the first call succeeds.
    pub fn init(self) -> Result<(), AgendaError> {
        dispatcher::set_global_default(self.dispatch)
            .map_err(|_| AgendaError::LoggerAlreadyInstalled)
    }

    pub fn debug(&self, message: &str) {
        self.in_scope(|| debug!("{}", message));
    }

    pub fn info(&self, message: &str) {
        self.in_scope(|| info!("{}", message));
    }

    pub fn warn(&self, message: &str) {
        self.in_scope(|| warn!("{}", message));
    }

    pub fn error(&self, message: &str) {
        self.in_scope(|| error!("{}", message));
    }
}
