mod common;

use agenda::config::model::Config;
use agenda::{LogLevel, Logger};
use common::captured_logger;

#[test_log::test]
fn should_only_print_warn_and_error_at_warn_level() {
    let (logger, output) = captured_logger(LogLevel::Warn);

    logger.debug("debugging");
    logger.info("informing");
    logger.warn("warning");
    logger.error("failing");

    assert_eq!(
        output.lines(),
        vec![
            "\u{1b}[1;30m[Logger/WARN]: warning\u{1b}[0m",
            "\u{1b}[0;31m[Logger/ERROR]: failing\u{1b}[0m",
        ]
    );
}

#[test_log::test]
fn should_print_every_level_at_debug_level() {
    let (logger, output) = captured_logger(LogLevel::Debug);

    logger.debug("one");
    logger.info("two");
    logger.warn("three");
    logger.error("four");

    assert_eq!(
        output.lines(),
        vec![
            "\u{1b}[0;37m[Logger/DEBUG]: one\u{1b}[0m",
            "\u{1b}[0m[Logger/INFO]: two\u{1b}[0m",
            "\u{1b}[1;30m[Logger/WARN]: three\u{1b}[0m",
            "\u{1b}[0;31m[Logger/ERROR]: four\u{1b}[0m",
        ]
    );
}

#[test_log::test]
fn should_only_print_errors_at_error_level() {
    let (logger, output) = captured_logger(LogLevel::Error);

    logger.warn("ignored");
    logger.error("kept");

    let lines = output.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("[Logger/ERROR]: kept"));
}

#[test_log::test]
fn should_route_tracing_events_in_scope() {
    let (logger, output) = captured_logger(LogLevel::Info);

    logger.in_scope(|| {
        tracing::info!(target: "agenda::schedule", "Loaded week {}", 12);
        tracing::debug!(target: "agenda::schedule", "too verbose");
    });

    assert_eq!(
        output.lines(),
        vec!["\u{1b}[0m[Logger/INFO]: Loaded week 12\u{1b}[0m"]
    );
}

#[test_log::test]
fn should_only_print_warnings_from_other_targets() {
    let (logger, output) = captured_logger(LogLevel::Debug);

    logger.in_scope(|| {
        tracing::info!("from the caller");
        tracing::warn!("caller warning");
    });

    assert_eq!(
        output.lines(),
        vec!["\u{1b}[1;30m[Logger/WARN]: caller warning\u{1b}[0m"]
    );
}

#[test_log::test]
fn should_not_treat_similarly_named_crates_as_own() {
    let (logger, output) = captured_logger(LogLevel::Debug);

    logger.in_scope(|| {
        tracing::debug!(target: "agenda_web", "other crate");
        tracing::debug!(target: "agenda::model", "own crate");
    });

    assert_eq!(
        output.lines(),
        vec!["\u{1b}[0;37m[Logger/DEBUG]: own crate\u{1b}[0m"]
    );
}

#[test_log::test]
fn loggers_are_independent() {
    let (quiet, quiet_output) = captured_logger(LogLevel::Error);
    let (verbose, verbose_output) = captured_logger(LogLevel::Debug);

    quiet.info("not shown");
    verbose.info("shown");

    assert!(quiet_output.lines().is_empty());
    assert_eq!(verbose_output.lines().len(), 1);
}

#[test_log::test]
fn should_build_from_config() {
    let logger = Logger::from_config(&Config {
        min_log_level: LogLevel::Warn,
    });

    assert_eq!(logger.min_level(), LogLevel::Warn);
    assert_eq!(Logger::from_config(&Config::default()).min_level(), LogLevel::Info);
}
