//! Minimal `log` backend writing to stderr

use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;

use crate::io::error::Result;

/// Logger printing `[LEVEL] target: message` lines to stderr
#[derive(Debug)]
pub struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

/// Render a record the way `StderrLogger` prints it
pub fn format_record(record: &Record<'_>) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr().lock();
            // Write failures are dropped
            let _ = writeln!(stderr, "{}", format_record(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Maximum level for the verbosity flag
pub const fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install `StderrLogger` as the global logger
///
/// # Errors
///
/// Returns an error if a global logger was already installed
pub fn init(verbose: bool) -> Result<()> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level_for(verbose));
    Ok(())
}
