use std::env;
use std::io::Write;

use log::{
    LevelFilter,
    Log,
    Metadata,
    Record,
    SetLoggerError
};

pub const LOG_ENV: &'static str = "CURVEFIT_LOG";

/// 寫到 stderr 的最小 logger，層級由 `CURVEFIT_LOG` 決定（預設 warn）
pub struct StderrLogger {
    level: LevelFilter
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> StderrLogger {
        StderrLogger { level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

pub fn init() -> Result<(), SetLoggerError> {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    log::set_boxed_logger(Box::new(StderrLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}
