//! Standard error adapter.

use chrono::Utc;
use std::fmt::Arguments;
use std::io::Write;

use super::format::format_line;
use crate::log::{Adapter, Category, LogLevel};

/// Adapter that writes one line per record to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrAdapter;

impl StderrAdapter {
    /// Create a new stderr adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Adapter for StderrAdapter {
    fn log(&self, category: &Category, level: LogLevel, args: Arguments<'_>) {
        let line = format_line(Utc::now(), category, level, args);
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }

    fn name(&self) -> &'static str {
        "stderr"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_adapter_enables_every_level() {
        let category = Category::new("test");
        for level in LogLevel::ALL {
            assert!(StderrAdapter.enabled(&category, level));
        }
    }

    #[test]
    fn test_stderr_adapter_writes_without_panicking() {
        let adapter = StderrAdapter::new();
        adapter.log(&Category::new("test"), LogLevel::Notice, format_args!("to stderr"));
        adapter.flush();
        assert_eq!(adapter.name(), "stderr");
    }
}
