//! Logging facade primitives.
//!
//! This module holds the pieces the facade is made of, decoupled from where
//! records end up:
//!
//! - [`LogLevel`]: nine severities from `Trace` to `Emergency`
//! - [`Category`]: hierarchical label records are routed by
//! - [`Adapter`]: the backend trait applications implement or choose
//!
//! # Adapters
//!
//! - [`NullAdapter`]: discards everything (the registry default)
//! - [`StderrAdapter`]: one line per record on stderr
//! - [`FileAdapter`]: one line per record appended to a file
//! - [`TracingAdapter`]: forwards to the `tracing` crate
//! - [`MemoryAdapter`]: captures records for inspection
//! - [`LevelFilter`]: wraps another adapter with a minimum level
//!
//! # Usage
//!
//! Library code asks the registry for a logger and never names an adapter:
//!
//! ```
//! use catlog::registry;
//! use catlog::{log_debug, log_info};
//!
//! struct Pool {
//!     logger: catlog::proxy::Logger,
//! }
//!
//! impl Pool {
//!     fn new() -> Self {
//!         Self { logger: registry::logger("app.db.pool") }
//!     }
//!
//!     fn checkout(&self, id: u32) {
//!         log_debug!(self.logger, "checking out connection {}", id);
//!         log_info!(self.logger, "connection {} ready", id);
//!     }
//! }
//!
//! Pool::new().checkout(1);
//! ```

mod adapter;
mod category;
mod console;
mod file;
mod filter;
mod format;
mod interpolate;
mod level;
mod memory;
mod noop;
mod tracing_adapter;

pub use adapter::Adapter;
pub use category::{Ancestors, Category};
pub use console::StderrAdapter;
pub use file::FileAdapter;
pub use filter::LevelFilter;
pub use format::format_line;
pub use interpolate::{interpolate, Context};
pub use level::{LogLevel, ParseLevelError};
pub use memory::{CapturedRecord, MemoryAdapter};
pub use noop::NullAdapter;
pub use tracing_adapter::TracingAdapter;
