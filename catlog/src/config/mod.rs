//! Configuration for catlog.
//!
//! The configuration file describes which adapter each category is routed
//! to. It is split by concern:
//!
//! - `settings`: plain data types for each section
//! - `defaults`: `DEFAULT_*` constants and `Default` impls
//! - `parser`: INI → `ConfigFile`
//! - `writer`: `ConfigFile` → commented INI
//! - `file`: load/save and error type
//! - `apply`: `ConfigFile` → live adapters in a [`Registry`](crate::registry::Registry)
//!
//! # Example
//!
//! ```
//! use catlog::config::{AdapterKind, BindingSettings, ConfigFile};
//! use catlog::log::{Category, LogLevel};
//!
//! let mut config = ConfigFile::default();
//! config.set_category(
//!     Category::new("app.db"),
//!     BindingSettings {
//!         adapter: AdapterKind::Stderr,
//!         level: LogLevel::Debug,
//!         file: None,
//!     },
//! );
//!
//! let registry = config.build_registry().unwrap();
//! assert_eq!(registry.bindings().len(), 1);
//! ```

mod apply;
mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use apply::configured_categories;
pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{AdapterKind, BindingSettings, ConfigFile, LoggingSettings, UnknownAdapterKind};
