//! Tracing library adapter implementation.

use crate::log::{Adapter, Category, LogLevel};
use std::fmt::Arguments;

/// Adapter that forwards records to the `tracing` crate.
///
/// Lets an application that already runs a `tracing` subscriber route
/// facade output through it. `tracing` has five levels, so the nine facade
/// levels are folded onto them; the original level is kept in the
/// `severity` field and the category in the `category` field.
///
/// | Facade level                           | tracing level |
/// |----------------------------------------|---------------|
/// | Trace                                  | TRACE         |
/// | Debug                                  | DEBUG         |
/// | Info, Notice                           | INFO          |
/// | Warning                                | WARN          |
/// | Error, Critical, Alert, Emergency      | ERROR         |
///
/// # Example
///
/// ```ignore
/// use catlog::log::TracingAdapter;
/// use catlog::registry;
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized
/// registry::global().set_default(Arc::new(TracingAdapter));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAdapter;

impl TracingAdapter {
    /// Create a new tracing adapter.
    pub fn new() -> Self {
        Self
    }

    /// The `tracing` level a facade level is emitted at.
    pub fn tracing_level(level: LogLevel) -> tracing::Level {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info | LogLevel::Notice => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Error | LogLevel::Critical | LogLevel::Alert | LogLevel::Emergency => {
                tracing::Level::ERROR
            }
        }
    }
}

impl Adapter for TracingAdapter {
    fn log(&self, category: &Category, level: LogLevel, args: Arguments<'_>) {
        let category = category.as_str();
        let severity = level.as_str();
        match Self::tracing_level(level) {
            tracing::Level::TRACE => tracing::trace!(category, severity, "{}", args),
            tracing::Level::DEBUG => tracing::debug!(category, severity, "{}", args),
            tracing::Level::INFO => tracing::info!(category, severity, "{}", args),
            tracing::Level::WARN => tracing::warn!(category, severity, "{}", args),
            _ => tracing::error!(category, severity, "{}", args),
        }
    }

    fn enabled(&self, _category: &Category, level: LogLevel) -> bool {
        match Self::tracing_level(level) {
            tracing::Level::TRACE => tracing::enabled!(tracing::Level::TRACE),
            tracing::Level::DEBUG => tracing::enabled!(tracing::Level::DEBUG),
            tracing::Level::INFO => tracing::enabled!(tracing::Level::INFO),
            tracing::Level::WARN => tracing::enabled!(tracing::Level::WARN),
            _ => tracing::enabled!(tracing::Level::ERROR),
        }
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}
