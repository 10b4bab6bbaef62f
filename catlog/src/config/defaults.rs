//! Default values and constants for all configuration settings.
//!
//! Contains the `DEFAULT_*` constants and the `Default` implementations for
//! the settings structs.

use super::file::config_directory;
use super::settings::*;
use crate::log::LogLevel;

/// Adapter for the `[default]` binding when the file does not say otherwise.
pub const DEFAULT_ADAPTER: AdapterKind = AdapterKind::Stderr;

/// Minimum level for a binding that does not set `level`.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

/// File name of the diagnostic log inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "catlog.log";

/// Prefix that marks a category section: `[category app.db]`.
pub const CATEGORY_SECTION_PREFIX: &str = "category ";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            default: BindingSettings {
                adapter: DEFAULT_ADAPTER,
                ..BindingSettings::default()
            },
            categories: Vec::new(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for BindingSettings {
    fn default() -> Self {
        Self {
            adapter: AdapterKind::default(),
            level: DEFAULT_LEVEL,
            file: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: config_directory().join(DEFAULT_LOG_FILE_NAME),
            level: DEFAULT_LEVEL,
        }
    }
}
