//! Diagnostic logging for catlog tooling.
//!
//! The facade itself never installs a subscriber; that is the application's
//! call. Binaries in this workspace use this module to capture catlog's own
//! `tracing` output (and records routed through
//! [`TracingAdapter`](crate::log::TracingAdapter)):
//! - Writes to a log file (cleared on session start)
//! - Optionally also prints to stdout
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::log::{LogLevel, TracingAdapter};

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize diagnostic logging.
///
/// Creates the log directory if needed, clears the previous log file, and
/// installs a global subscriber writing to the file and, when
/// `stdout_enabled`, to stdout. `RUST_LOG` overrides `level`.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created, the log file
/// cannot be cleared, or a global subscriber is already installed.
pub fn init_logging(
    log_path: &Path,
    stdout_enabled: bool,
    level: LogLevel,
) -> Result<LoggingGuard, io::Error> {
    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new(default_log_dir()));
    let log_file = log_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| default_log_file().into());

    fs::create_dir_all(log_dir)?;

    // Clear previous log file by writing empty content
    fs::write(log_dir.join(&log_file), "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, &log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stdout_layer = stdout_enabled.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
    });

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter(level).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Subscriber filter matching a facade level.
pub fn level_filter(level: LogLevel) -> LevelFilter {
    LevelFilter::from_level(TracingAdapter::tracing_level(level))
}

/// Get default log directory path.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    "catlog.log"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        assert_eq!(default_log_dir(), "logs");
        assert_eq!(default_log_file(), "catlog.log");
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(level_filter(LogLevel::Trace), LevelFilter::TRACE);
        assert_eq!(level_filter(LogLevel::Notice), LevelFilter::INFO);
        assert_eq!(level_filter(LogLevel::Warning), LevelFilter::WARN);
        assert_eq!(level_filter(LogLevel::Emergency), LevelFilter::ERROR);
    }

    #[test]
    fn test_guard_structure() {
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);

        let _logging_guard = LoggingGuard { _file_guard: guard };
    }

    // Installing the subscriber is process-global and can only happen once,
    // so init_logging is exercised by the CLI integration tests instead.
}
