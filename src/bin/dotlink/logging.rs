//! Stderr logger for the demo.
//!
//! The engine logs through the `log` facade. This logger prints those
//! records to stderr when `--verbose` is set and drops them otherwise.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    level: Level,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "[{:5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static VERBOSE: StderrLogger = StderrLogger { level: Level::Debug };

/// Install the logger. Verbose mode shows debug records; otherwise only warnings.
///
/// Fails if a logger is already installed.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    log::set_logger(&VERBOSE).map_err(|e| anyhow::anyhow!("installing logger: {e}"))?;
    log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        fn install_twice() -> anyhow::Result<()> {
            init(true)?;
            init(false)?;
            Ok(())
        }

        let err = install_twice().unwrap_err();
        assert!(err.to_string().starts_with("installing logger"));
        assert!(log::log_enabled!(Level::Debug));
    }
}
