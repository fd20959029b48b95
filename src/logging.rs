//! Stderr logger for the demo binary.
//!
//! Session lifecycle events go to stderr so the played transcript on stdout
//! stays clean. The level comes from the `MINIGAME_LOG` env var (default:
//! `info`).

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "[{}] [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Register the stderr logger as the global `log` logger.
pub fn init_logger() -> Result<(), log::SetLoggerError> {
    let level = std::env::var("MINIGAME_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
