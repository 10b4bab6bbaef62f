//! Process-wide registry.
//!
//! Libraries fetch loggers from here; the application configures it once at
//! startup, either by binding adapters directly or through [`install`].

use std::sync::{Arc, OnceLock};

use super::Registry;
use crate::config::{ConfigFile, ConfigFileError};
use crate::log::Category;
use crate::proxy::Logger;

static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();

/// The process-wide registry, created on first use.
pub fn global() -> &'static Arc<Registry> {
    GLOBAL.get_or_init(|| Arc::new(Registry::new()))
}

/// Logger for `category` backed by the process-wide registry.
pub fn logger(category: impl Into<Category>) -> Logger {
    global().logger(category)
}

/// Replace the process-wide bindings with those described by `config`.
///
/// Adapters are opened before anything is replaced, so on error the
/// previous bindings stay in place.
pub fn install(config: &ConfigFile) -> Result<(), ConfigFileError> {
    config.apply_to(global())
}
