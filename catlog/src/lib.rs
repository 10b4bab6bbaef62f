//! catlog - category-routed logging facade
//!
//! Library code asks for a logger by category and emits leveled records;
//! the application decides, in one place, which adapter receives the
//! records of each category.
//!
//! # High-Level API
//!
//! ```
//! use catlog::log::{LogLevel, MemoryAdapter};
//! use catlog::registry;
//! use std::sync::Arc;
//!
//! // Application startup: route everything under "app" to memory
//! let memory = Arc::new(MemoryAdapter::new());
//! registry::global().bind("app", memory.clone());
//!
//! // Library code
//! let logger = registry::logger("app::db");
//! if logger.is_debug_enabled() {
//!     catlog::log_debug!(logger, "pool size {}", 8);
//! }
//! logger.warning("slow query");
//!
//! assert_eq!(memory.len(), 2);
//! assert_eq!(memory.records()[1].level, LogLevel::Warning);
//! ```
//!
//! # Modules
//!
//! - [`log`]: levels, categories, the [`Adapter`](log::Adapter) trait and the
//!   built-in adapters
//! - [`registry`]: category → adapter bindings and the process-wide instance
//! - [`proxy`]: the [`Logger`](proxy::Logger) handle library code holds
//! - [`config`]: INI configuration and registry construction
//! - [`bench`]: disabled-trace call-pattern comparison
//! - [`logging`]: diagnostic subscriber setup for catlog binaries

pub mod bench;
pub mod config;
pub mod log;
pub mod logging;
pub mod proxy;
pub mod registry;

/// Version of the catlog library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
