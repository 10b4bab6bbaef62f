//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::fmt::Write;
use std::path::Path;

use super::defaults::CATEGORY_SECTION_PREFIX;
use super::settings::{BindingSettings, ConfigFile};

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let mut out = String::new();

    out.push_str(
        r#"; catlog configuration
;
; Records are routed by category. A record for app.db.pool goes to the
; [category app.db.pool] binding if present, else [category app.db], else
; [category app], else [default].
;
; Adapters:
;   null    - discard records
;   stderr  - one line per record on stderr
;   file    - one line per record appended to `file`
;   tracing - forward to the tracing subscriber of the host application
;
; Levels (least to most severe):
;   trace, debug, info, notice, warning, error, critical, alert, emergency

[default]
"#,
    );
    write_binding(&mut out, &config.default);

    let _ = write!(
        out,
        r#"
[logging]
; Diagnostic log for the catlog tool itself
file = {}
level = {}
"#,
        path_to_string(&config.logging.file),
        config.logging.level.as_str()
    );

    for (category, settings) in &config.categories {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}{}]", CATEGORY_SECTION_PREFIX, category);
        write_binding(&mut out, settings);
    }

    out
}

fn write_binding(out: &mut String, settings: &BindingSettings) {
    let _ = writeln!(out, "adapter = {}", settings.adapter);
    let _ = writeln!(out, "level = {}", settings.level.as_str());
    if let Some(file) = &settings.file {
        let _ = writeln!(out, "file = {}", path_to_string(file));
    }
}

/// Render a path, abbreviating the home directory as `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parser::parse_option;
    use crate::config::settings::AdapterKind;
    use crate::log::{Category, LogLevel};
    use ini::Ini;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid_ini() {
        let content = to_config_string(&ConfigFile::default());
        let ini = Ini::load_from_str_opt(&content, parse_option()).unwrap();

        let default = ini.section(Some("default")).unwrap();
        assert_eq!(default.get("adapter"), Some("stderr"));
        assert_eq!(default.get("level"), Some("info"));
        assert!(ini.section(Some("logging")).is_some());
    }

    #[test]
    fn test_categories_written_in_order() {
        let mut config = ConfigFile::default();
        config.set_category(
            Category::new("app.db"),
            BindingSettings {
                adapter: AdapterKind::File,
                level: LogLevel::Debug,
                file: Some(PathBuf::from("/var/log/db.log")),
            },
        );
        config.set_category(Category::new("app.http"), BindingSettings::default());

        let content = to_config_string(&config);
        let db = content.find("[category app.db]").unwrap();
        let http = content.find("[category app.http]").unwrap();
        assert!(db < http);
        assert!(content.contains("file = /var/log/db.log"));
    }

    #[test]
    fn test_path_to_string_abbreviates_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_string(&home.join("x.log")), "~/x.log");
        }
        assert_eq!(path_to_string(Path::new("/abs/x.log")), "/abs/x.log");
    }
}
