//! Null adapter implementation.

use crate::log::{Adapter, Category, LogLevel};
use std::fmt::Arguments;

/// An adapter that discards all records.
///
/// This is the registry default, so a library that logs before the
/// application has configured anything stays silent. It reports every level
/// as disabled, which lets guarded call sites skip formatting entirely.
///
/// # Example
///
/// ```
/// use catlog::log::{Adapter, Category, LogLevel, NullAdapter};
/// use std::sync::Arc;
///
/// let adapter: Arc<dyn Adapter> = Arc::new(NullAdapter);
/// assert!(!adapter.enabled(&Category::new("app"), LogLevel::Emergency));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAdapter;

impl Adapter for NullAdapter {
    #[inline]
    fn log(&self, _category: &Category, _level: LogLevel, _args: Arguments<'_>) {}

    #[inline]
    fn enabled(&self, _category: &Category, _level: LogLevel) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_adapter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NullAdapter>();
    }

    #[test]
    fn test_null_adapter_disables_every_level() {
        let category = Category::new("test");
        for level in LogLevel::ALL {
            assert!(!NullAdapter.enabled(&category, level));
        }
    }

    #[test]
    fn test_null_adapter_as_trait_object() {
        let adapter: Box<dyn Adapter> = Box::new(NullAdapter);
        let category = Category::new("test");
        adapter.log(&category, LogLevel::Info, format_args!("discarded"));
        adapter.flush();
        assert_eq!(adapter.name(), "null");
    }

    #[test]
    fn test_null_adapter_debug_impl() {
        assert_eq!(format!("{:?}", NullAdapter), "NullAdapter");
    }
}
