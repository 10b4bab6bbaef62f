//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::log::{Category, LogLevel};

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Binding used for categories with no more specific entry (`[default]`)
    pub default: BindingSettings,
    /// Per-category bindings (`[category <name>]`), in file order
    pub categories: Vec<(Category, BindingSettings)>,
    /// Diagnostics for the catlog tooling itself (`[logging]`)
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Settings for exactly `category`, if the file has a section for it.
    pub fn category(&self, category: &Category) -> Option<&BindingSettings> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, settings)| settings)
    }

    /// Insert or replace the settings for `category`.
    pub fn set_category(&mut self, category: Category, settings: BindingSettings) {
        match self.categories.iter_mut().find(|(name, _)| *name == category) {
            Some(entry) => entry.1 = settings,
            None => self.categories.push((category, settings)),
        }
    }
}

/// Which adapter a binding creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdapterKind {
    /// Discard records
    #[default]
    Null,
    /// Write lines to stderr
    Stderr,
    /// Append lines to a file
    File,
    /// Forward to the `tracing` crate
    Tracing,
}

impl AdapterKind {
    /// Name as written in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            AdapterKind::Null => "null",
            AdapterKind::Stderr => "stderr",
            AdapterKind::File => "file",
            AdapterKind::Tracing => "tracing",
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognized adapter name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown adapter '{0}'")]
pub struct UnknownAdapterKind(pub String);

impl FromStr for AdapterKind {
    type Err = UnknownAdapterKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "null" | "none" => Ok(AdapterKind::Null),
            "stderr" => Ok(AdapterKind::Stderr),
            "file" => Ok(AdapterKind::File),
            "tracing" => Ok(AdapterKind::Tracing),
            _ => Err(UnknownAdapterKind(s.to_string())),
        }
    }
}

/// One category binding (or the default binding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSettings {
    /// Adapter to create
    pub adapter: AdapterKind,
    /// Minimum level passed to the adapter
    pub level: LogLevel,
    /// Target file, required when `adapter = file`
    pub file: Option<PathBuf>,
}

/// Logging configuration for the catlog tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Diagnostic log file path
    pub file: PathBuf,
    /// Diagnostic log level
    pub level: LogLevel,
}
