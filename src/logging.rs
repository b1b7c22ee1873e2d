use log::{LevelFilter, Metadata, Record};
use std::env;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger with a level taken from `SINKFLEET_LOG`.
/// Defaults to `info` if the variable is unset or invalid. Calling it twice
/// keeps the first logger.
pub fn init_logging() {
    init_logging_with(env::var("SINKFLEET_LOG").ok().as_deref());
}

/// Same as [`init_logging`] with an explicit level string.
pub fn init_logging_with(level: Option<&str>) {
    let level = level
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
