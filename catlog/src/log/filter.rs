//! Minimum-level wrapper adapter.

use std::fmt::Arguments;
use std::sync::Arc;

use crate::log::{Adapter, Category, LogLevel};

/// Adapter that drops records below a minimum level before they reach the
/// wrapped adapter.
///
/// A record passes when its level is at least `min_level` and the inner
/// adapter is enabled for it.
///
/// # Example
///
/// ```
/// use catlog::log::{Adapter, Category, LevelFilter, LogLevel, MemoryAdapter};
/// use std::sync::Arc;
///
/// let filtered = LevelFilter::new(Arc::new(MemoryAdapter::new()), LogLevel::Warning);
/// let category = Category::new("app");
/// assert!(!filtered.enabled(&category, LogLevel::Info));
/// assert!(filtered.enabled(&category, LogLevel::Error));
/// ```
#[derive(Clone)]
pub struct LevelFilter {
    inner: Arc<dyn Adapter>,
    min_level: LogLevel,
}

impl LevelFilter {
    /// Wrap `inner`, passing only records at `min_level` or above.
    pub fn new(inner: Arc<dyn Adapter>, min_level: LogLevel) -> Self {
        Self { inner, min_level }
    }

    /// The configured threshold.
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// The wrapped adapter.
    pub fn inner(&self) -> &Arc<dyn Adapter> {
        &self.inner
    }
}

impl Adapter for LevelFilter {
    #[inline]
    fn log(&self, category: &Category, level: LogLevel, args: Arguments<'_>) {
        if level >= self.min_level {
            self.inner.log(category, level, args);
        }
    }

    #[inline]
    fn enabled(&self, category: &Category, level: LogLevel) -> bool {
        level >= self.min_level && self.inner.enabled(category, level)
    }

    fn flush(&self) {
        self.inner.flush();
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

impl std::fmt::Debug for LevelFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelFilter")
            .field("inner", &self.inner.name())
            .field("min_level", &self.min_level)
            .finish()
    }
}
