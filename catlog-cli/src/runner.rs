//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, diagnostic logging and registry installation
//! so command handlers start from a configured global registry.

use std::path::{Path, PathBuf};

use catlog::config::{config_file_path, ConfigFile};
use catlog::log::LogLevel;
use catlog::logging::{init_logging, LoggingGuard};
use catlog::registry;
use tracing::info;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
    /// Where the configuration was loaded from
    config_path: PathBuf,
}

impl CliRunner {
    /// Load the configuration, start diagnostic logging and install the
    /// configured bindings into the global registry.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Explicit config file, or `None` for `~/.catlog/config.ini`
    /// * `debug_mode` - Log catlog diagnostics at debug level and echo them to stdout
    pub fn new(config_path: Option<PathBuf>, debug_mode: bool) -> Result<Self, CliError> {
        let config_path = resolve_config_path(config_path);
        let config = ConfigFile::load_from(&config_path)?;

        let level = if debug_mode {
            LogLevel::Debug
        } else {
            config.logging.level
        };
        let logging_guard = init_logging(&config.logging.file, debug_mode, level)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        info!(path = %config_path.display(), "Loaded configuration");
        registry::install(&config)?;

        Ok(Self {
            logging_guard,
            config,
            config_path,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Get the path the configuration was loaded from.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("catlog v{}", catlog::VERSION);
        info!("catlog CLI: {} command", command);
    }
}

/// The explicit path when given, otherwise the default location.
pub fn resolve_config_path(config_path: Option<PathBuf>) -> PathBuf {
    config_path.unwrap_or_else(config_file_path)
}
