//! Per-category logger handle.
//!
//! A [`Logger`] is what library code holds. It knows its category and the
//! registry it came from, and forwards every call to whichever adapter that
//! registry currently resolves the category to.
//!
//! The resolved adapter is cached in the logger together with the registry
//! generation it was resolved at, so the steady-state cost of a call is one
//! atomic load, one uncontended read lock and the adapter's `enabled` check.

use parking_lot::RwLock;
use std::fmt::Arguments;
use std::sync::Arc;

use crate::log::{interpolate, Adapter, Category, Context, LogLevel};
use crate::registry::Registry;

struct CachedAdapter {
    generation: u64,
    adapter: Arc<dyn Adapter>,
}

/// Handle for emitting records under one category.
///
/// # Example
///
/// ```
/// use catlog::log::MemoryAdapter;
/// use catlog::registry::Registry;
/// use std::sync::Arc;
///
/// let registry = Arc::new(Registry::new());
/// let memory = Arc::new(MemoryAdapter::new());
/// registry.bind("app", memory.clone());
///
/// let logger = registry.logger("app.db");
/// logger.info("connected");
/// catlog::log_warning!(logger, "pool at {}%", 90);
///
/// assert_eq!(memory.messages(), vec!["connected", "pool at 90%"]);
/// ```
pub struct Logger {
    category: Category,
    registry: Arc<Registry>,
    cached: RwLock<CachedAdapter>,
}

macro_rules! level_methods {
    ($($level:ident => $plain:ident, $formatted:ident, $predicate:ident;)*) => {
        $(
            #[doc = concat!("Log a message at ", stringify!($level), " level.")]
            #[inline]
            pub fn $plain(&self, message: &str) {
                self.log_fmt(LogLevel::$level, format_args!("{}", message));
            }

            #[doc = concat!("Log formatted arguments at ", stringify!($level), " level.")]
            #[inline]
            pub fn $formatted(&self, args: Arguments<'_>) {
                self.log_fmt(LogLevel::$level, args);
            }

            #[doc = concat!("Whether ", stringify!($level), " records would be written.")]
            #[inline]
            pub fn $predicate(&self) -> bool {
                self.is_enabled(LogLevel::$level)
            }
        )*
    };
}

impl Logger {
    /// Create a logger for `category` on `registry`.
    pub fn new(registry: Arc<Registry>, category: Category) -> Self {
        let (generation, adapter) = registry.resolve_tracked(&category);
        Self {
            category,
            registry,
            cached: RwLock::new(CachedAdapter {
                generation,
                adapter,
            }),
        }
    }

    /// The category records are emitted under.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The registry this logger resolves through.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Logger for a nested category on the same registry.
    pub fn child(&self, segment: &str) -> Logger {
        Logger::new(Arc::clone(&self.registry), self.category.join(segment))
    }

    /// The adapter this logger currently forwards to.
    pub fn adapter(&self) -> Arc<dyn Adapter> {
        let current = self.registry.generation();
        {
            let cached = self.cached.read();
            if cached.generation == current {
                return Arc::clone(&cached.adapter);
            }
        }

        let (generation, adapter) = self.registry.resolve_tracked(&self.category);
        *self.cached.write() = CachedAdapter {
            generation,
            adapter: Arc::clone(&adapter),
        };
        adapter
    }

    /// Whether records at `level` would be written.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.adapter().enabled(&self.category, level)
    }

    /// Log a plain message at `level`.
    #[inline]
    pub fn log(&self, level: LogLevel, message: &str) {
        self.log_fmt(level, format_args!("{}", message));
    }

    /// Log formatted arguments at `level`.
    ///
    /// Nothing is formatted when the level is disabled.
    #[inline]
    pub fn log_fmt(&self, level: LogLevel, args: Arguments<'_>) {
        let adapter = self.adapter();
        if adapter.enabled(&self.category, level) {
            adapter.log(&self.category, level, args);
        }
    }

    /// Log `message` at `level` with `{key}` placeholders filled from
    /// `context`.
    pub fn log_context(&self, level: LogLevel, message: &str, context: &Context<'_>) {
        let adapter = self.adapter();
        if adapter.enabled(&self.category, level) {
            let message = interpolate(message, context);
            adapter.log(&self.category, level, format_args!("{}", message));
        }
    }

    /// Flush the adapter this logger forwards to.
    pub fn flush(&self) {
        self.adapter().flush();
    }

    level_methods! {
        Trace => trace, trace_fmt, is_trace_enabled;
        Debug => debug, debug_fmt, is_debug_enabled;
        Info => info, info_fmt, is_info_enabled;
        Notice => notice, notice_fmt, is_notice_enabled;
        Warning => warning, warning_fmt, is_warning_enabled;
        Error => error, error_fmt, is_error_enabled;
        Critical => critical, critical_fmt, is_critical_enabled;
        Alert => alert, alert_fmt, is_alert_enabled;
        Emergency => emergency, emergency_fmt, is_emergency_enabled;
    }
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        let cached = self.cached.read();
        Self {
            category: self.category.clone(),
            registry: Arc::clone(&self.registry),
            cached: RwLock::new(CachedAdapter {
                generation: cached.generation,
                adapter: Arc::clone(&cached.adapter),
            }),
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("category", &self.category)
            .field("adapter", &self.cached.read().adapter.name())
            .finish()
    }
}

/// Log at an explicit level with `format!`-style arguments.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.log_fmt($level, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_notice {
    ($logger:expr, $($arg:tt)*) => {
        $logger.notice_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        $logger.critical_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_alert {
    ($logger:expr, $($arg:tt)*) => {
        $logger.alert_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_emergency {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emergency_fmt(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{LevelFilter, MemoryAdapter, NullAdapter};
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn registry_with_memory(category: &str) -> (Arc<Registry>, Arc<MemoryAdapter>) {
        let registry = Arc::new(Registry::new());
        let memory = Arc::new(MemoryAdapter::new());
        registry.bind(category, memory.clone());
        (registry, memory)
    }

    /// Display impl that counts how often it is formatted.
    struct CountingDisplay(AtomicUsize);

    impl fmt::Display for CountingDisplay {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            f.write_str("counted")
        }
    }

    #[test]
    fn test_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }

    #[test]
    fn test_every_level_method_forwards() {
        let (registry, memory) = registry_with_memory("app");
        let logger = registry.logger("app");

        logger.trace("trace");
        logger.debug("debug");
        logger.info("info");
        logger.notice("notice");
        logger.warning("warning");
        logger.error("error");
        logger.critical("critical");
        logger.alert("alert");
        logger.emergency("emergency");

        let levels: Vec<_> = memory.records().iter().map(|r| r.level).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
        assert_eq!(memory.records()[3].message, "notice");
    }

    #[test]
    fn test_formatted_variants_and_macros() {
        let (registry, memory) = registry_with_memory("app");
        let logger = registry.logger("app.http");

        logger.info_fmt(format_args!("status {}", 200));
        crate::log_error!(logger, "status {}", 500);
        crate::log_at!(logger, LogLevel::Alert, "{} of {}", 1, 2);
        crate::log_trace!(logger, "t");
        crate::log_debug!(logger, "d");
        crate::log_notice!(logger, "n");
        crate::log_warning!(logger, "w");
        crate::log_critical!(logger, "c");
        crate::log_alert!(logger, "a");
        crate::log_emergency!(logger, "e");
        crate::log_info!(logger, "i");

        let records = memory.records();
        assert_eq!(records.len(), 11);
        assert_eq!(records[0].message, "status 200");
        assert_eq!(records[1].level, LogLevel::Error);
        assert_eq!(records[2].message, "1 of 2");
        assert_eq!(records[2].category, Category::new("app.http"));
    }

    #[test]
    fn test_unbound_category_uses_null_default() {
        let registry = Arc::new(Registry::new());
        let logger = registry.logger("nothing.bound");

        for level in LogLevel::ALL {
            assert!(!logger.is_enabled(level));
        }
        assert!(!logger.is_trace_enabled());
        assert!(!logger.is_emergency_enabled());
        logger.emergency("dropped");
        assert_eq!(logger.adapter().name(), "null");
    }

    #[test]
    fn test_disabled_level_is_not_formatted() {
        let registry = Arc::new(Registry::new());
        registry.bind(
            "app",
            Arc::new(LevelFilter::new(Arc::new(MemoryAdapter::new()), LogLevel::Info)),
        );
        let logger = registry.logger("app");
        let counter = CountingDisplay(AtomicUsize::new(0));

        crate::log_debug!(logger, "{}", counter);
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);

        crate::log_info!(logger, "{}", counter);
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_predicates_follow_filter() {
        let registry = Arc::new(Registry::new());
        registry.bind(
            "app",
            Arc::new(LevelFilter::new(Arc::new(MemoryAdapter::new()), LogLevel::Warning)),
        );
        let logger = registry.logger("app.db");

        assert!(!logger.is_trace_enabled());
        assert!(!logger.is_debug_enabled());
        assert!(!logger.is_info_enabled());
        assert!(!logger.is_notice_enabled());
        assert!(logger.is_warning_enabled());
        assert!(logger.is_error_enabled());
        assert!(logger.is_critical_enabled());
        assert!(logger.is_alert_enabled());
        assert!(logger.is_emergency_enabled());
    }

    #[test]
    fn test_existing_logger_sees_rebinding() {
        let registry = Arc::new(Registry::new());
        let logger = registry.logger("app.db");
        logger.info("before binding");

        let memory = Arc::new(MemoryAdapter::new());
        registry.bind("app", memory.clone());
        logger.info("after binding");

        registry.unbind("app");
        logger.info("after unbinding");

        assert_eq!(memory.messages(), vec!["after binding"]);
    }

    #[test]
    fn test_clone_shares_registry() {
        let (registry, memory) = registry_with_memory("app");
        let logger = registry.logger("app");
        let cloned = logger.clone();

        logger.info("from original");
        cloned.info("from clone");

        assert_eq!(memory.len(), 2);
        assert_eq!(cloned.category(), logger.category());
    }

    #[test]
    fn test_child_logger() {
        let (registry, memory) = registry_with_memory("app.db");
        let parent = registry.logger("app");
        let child = parent.child("db");

        parent.info("parent");
        child.info("child");

        assert_eq!(child.category().as_str(), "app.db");
        assert_eq!(memory.messages(), vec!["child"]);
    }

    #[test]
    fn test_log_context_interpolates() {
        let (registry, memory) = registry_with_memory("app");
        let logger = registry.logger("app");
        let user = "alice";
        let attempts = 3;

        logger.log_context(
            LogLevel::Warning,
            "{user} failed {attempts} times",
            &[("user", &user), ("attempts", &attempts)],
        );

        assert_eq!(memory.messages(), vec!["alice failed 3 times"]);
    }

    #[test]
    fn test_log_context_skipped_when_disabled() {
        let registry = Arc::new(Registry::new());
        registry.bind("app", Arc::new(NullAdapter));
        let logger = registry.logger("app");
        let counter = CountingDisplay(AtomicUsize::new(0));

        logger.log_context(LogLevel::Error, "{n}", &[("n", &counter)]);
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_debug_impl() {
        let registry = Arc::new(Registry::new());
        let logger = registry.logger("app");
        let debug = format!("{:?}", logger);
        assert!(debug.contains("app"));
        assert!(debug.contains("null"));
    }
}
