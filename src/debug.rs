//! Log output for the fontpaint binary.
//!
//! The library crates only emit through the `log` facade. The binary installs
//! [`init_log_bridge`] once at startup, which routes every record to stderr so
//! that the rendered document on stdout stays clean.
//!
//! Level precedence: `--log-level` flag, then the `FONTPAINT_LOG` environment
//! variable, then `warn`.

use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{Level, LevelFilter, Log, Metadata, Record};

const LOG_ENV: &str = "FONTPAINT_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level_str = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{}] [{}] [{}] {}",
            timestamp(),
            level_str,
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;
static INSTALLED: OnceLock<LevelFilter> = OnceLock::new();

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Parse a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

fn level_from_env() -> Option<LevelFilter> {
    std::env::var(LOG_ENV).ok().as_deref().and_then(parse_level)
}

/// Install the stderr logger. Later calls keep the first level.
///
/// Returns the level in effect.
pub fn init_log_bridge(level: Option<LevelFilter>) -> LevelFilter {
    *INSTALLED.get_or_init(|| {
        let level = level.or_else(level_from_env).unwrap_or(LevelFilter::Warn);
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
        level
    })
}
