use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Metadata, Record};

struct Logger;

static LOGGER: Logger = Logger;

/// Installs the stderr logger and sets the max level.
///
/// Calling it again only changes the level.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level);
}

/// `-v` raises the level to debug, `-vv` (or more) to trace; otherwise the
/// configured level stands.
pub fn level_for_verbosity(configured: LevelFilter, verbosity: usize) -> LevelFilter {
    match verbosity {
        0 => configured,
        1 => configured.max(LevelFilter::Debug),
        _ => LevelFilter::Trace,
    }
}

fn tag(level: Level) -> ColoredString {
    let name = format!("{:<5}", level);
    match level {
        Level::Error => name.red().bold(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.dimmed(),
    }
}

pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{}] {}: {}", tag(level), target, message)
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "{}",
            format_line(record.level(), record.target(), &record.args().to_string())
        );
    }

    fn flush(&self) {}
}
