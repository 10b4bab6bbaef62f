//! Adapter trait definition.

use std::fmt::Arguments;

use super::{Category, LogLevel};

/// Backend that receives log records.
///
/// Applications bind adapters to categories in a
/// [`Registry`](crate::registry::Registry); library code only ever sees a
/// [`Logger`](crate::proxy::Logger) and never names an adapter.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Adapters are shared as
/// `Arc<dyn Adapter>` between every logger resolved to them.
///
/// # Example
///
/// ```
/// use catlog::log::{Adapter, Category, LogLevel};
/// use std::fmt::Arguments;
///
/// struct Counter(std::sync::atomic::AtomicUsize);
///
/// impl Adapter for Counter {
///     fn log(&self, _category: &Category, _level: LogLevel, _args: Arguments<'_>) {
///         self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
///     }
///
///     fn name(&self) -> &'static str {
///         "counter"
///     }
/// }
/// ```
pub trait Adapter: Send + Sync {
    /// Write one record.
    ///
    /// Loggers only call this after [`Adapter::enabled`] returned true.
    fn log(&self, category: &Category, level: LogLevel, args: Arguments<'_>);

    /// Whether a record at `level` for `category` would be written.
    fn enabled(&self, _category: &Category, _level: LogLevel) -> bool {
        true
    }

    /// Flush buffered output.
    fn flush(&self) {}

    /// Short backend name, shown by diagnostics.
    fn name(&self) -> &'static str;
}
