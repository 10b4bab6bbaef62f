//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::{Ini, ParseOption, Properties};
use std::path::PathBuf;

use super::defaults::CATEGORY_SECTION_PREFIX;
use super::file::ConfigFileError;
use super::settings::{AdapterKind, BindingSettings, ConfigFile};
use crate::log::{Category, LogLevel};

/// INI reading options for config files.
///
/// Escapes are disabled: values are taken verbatim, so Windows paths such as
/// `C:\new\db.log` keep their backslashes and written files read back equal.
pub(super) fn parse_option() -> ParseOption {
    ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    }
}

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
/// Category sections start from `BindingSettings::default()`, not from the
/// `[default]` section.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [default] section
    if let Some(section) = ini.section(Some("default")) {
        config.default = parse_binding("default", section, config.default)?;
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("level") {
            config.logging.level = parse_level("logging", v)?;
        }
    }

    // [category <name>] sections
    for (name, section) in ini.iter() {
        let Some(name) = name else {
            continue;
        };
        let Some(label) = name.strip_prefix(CATEGORY_SECTION_PREFIX) else {
            continue;
        };

        let category = Category::new(label);
        if category.is_root() {
            return Err(ConfigFileError::InvalidValue {
                section: name.to_string(),
                key: "(section)".to_string(),
                value: label.to_string(),
                reason: "category name must not be empty; use [default] instead".to_string(),
            });
        }

        let settings = parse_binding(name, section, BindingSettings::default())?;
        config.set_category(category, settings);
    }

    Ok(config)
}

/// Overlay the keys of one binding section onto `settings`.
fn parse_binding(
    section_name: &str,
    section: &Properties,
    mut settings: BindingSettings,
) -> Result<BindingSettings, ConfigFileError> {
    if let Some(v) = section.get("adapter") {
        settings.adapter = v
            .parse::<AdapterKind>()
            .map_err(|_| ConfigFileError::InvalidValue {
                section: section_name.to_string(),
                key: "adapter".to_string(),
                value: v.to_string(),
                reason: "must be one of: null, stderr, file, tracing".to_string(),
            })?;
    }
    if let Some(v) = section.get("level") {
        settings.level = parse_level(section_name, v)?;
    }
    if let Some(v) = section.get("file") {
        let v = v.trim();
        if !v.is_empty() {
            settings.file = Some(expand_tilde(v));
        }
    }

    if settings.adapter == AdapterKind::File && settings.file.is_none() {
        return Err(ConfigFileError::MissingValue {
            section: section_name.to_string(),
            key: "file".to_string(),
            reason: "required when adapter = file".to_string(),
        });
    }

    Ok(settings)
}

fn parse_level(section_name: &str, value: &str) -> Result<LogLevel, ConfigFileError> {
    value
        .parse::<LogLevel>()
        .map_err(|_| ConfigFileError::InvalidValue {
            section: section_name.to_string(),
            key: "level".to_string(),
            value: value.to_string(),
            reason: "must be one of: trace, debug, info, notice, warning, error, critical, alert, emergency"
                .to_string(),
        })
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
