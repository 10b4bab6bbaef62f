//! Turning a `ConfigFile` into live adapters.

use std::sync::Arc;
use tracing::info;

use super::defaults::CATEGORY_SECTION_PREFIX;
use super::file::ConfigFileError;
use super::settings::{AdapterKind, BindingSettings, ConfigFile};
use crate::log::{
    Adapter, Category, FileAdapter, LevelFilter, NullAdapter, StderrAdapter, TracingAdapter,
};
use crate::registry::Registry;

impl ConfigFile {
    /// Build a new registry holding the configured bindings.
    pub fn build_registry(&self) -> Result<Registry, ConfigFileError> {
        let registry = Registry::new();
        self.apply_to(&registry)?;
        Ok(registry)
    }

    /// Replace the bindings of `registry` with the configured ones.
    ///
    /// Every adapter is created before the registry is touched, so a failure
    /// leaves the registry unchanged.
    pub fn apply_to(&self, registry: &Registry) -> Result<(), ConfigFileError> {
        let default = build_adapter("default", &self.default)?;

        let mut bindings = Vec::with_capacity(self.categories.len());
        for (category, settings) in &self.categories {
            let section = format!("{}{}", CATEGORY_SECTION_PREFIX, category);
            bindings.push((category.clone(), build_adapter(&section, settings)?));
        }

        info!(
            default = self.default.adapter.as_str(),
            categories = bindings.len(),
            "Applying logging configuration"
        );
        registry.replace(default, bindings);
        Ok(())
    }
}

/// Create the adapter for one binding, wrapped in its level filter.
fn build_adapter(
    section: &str,
    settings: &BindingSettings,
) -> Result<Arc<dyn Adapter>, ConfigFileError> {
    let inner: Arc<dyn Adapter> = match settings.adapter {
        // A filter around the null adapter would only add a call
        AdapterKind::Null => return Ok(Arc::new(NullAdapter)),
        AdapterKind::Stderr => Arc::new(StderrAdapter::new()),
        AdapterKind::Tracing => Arc::new(TracingAdapter::new()),
        AdapterKind::File => {
            let path = settings
                .file
                .as_ref()
                .ok_or_else(|| ConfigFileError::MissingValue {
                    section: section.to_string(),
                    key: "file".to_string(),
                    reason: "required when adapter = file".to_string(),
                })?;
            let adapter =
                FileAdapter::open(path).map_err(|source| ConfigFileError::AdapterOpen {
                    section: section.to_string(),
                    path: path.clone(),
                    source,
                })?;
            Arc::new(adapter)
        }
    };

    Ok(Arc::new(LevelFilter::new(inner, settings.level)))
}

/// Categories configured in `config`, most specific first.
///
/// Useful for diagnostics that list how a category tree is routed.
pub fn configured_categories(config: &ConfigFile) -> Vec<Category> {
    let mut categories: Vec<Category> = config.categories.iter().map(|(c, _)| c.clone()).collect();
    categories.sort_by(|a, b| {
        b.segments()
            .count()
            .cmp(&a.segments().count())
            .then_with(|| a.cmp(b))
    });
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogLevel;
    use tempfile::TempDir;

    #[test]
    fn test_build_registry_binds_categories() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = ConfigFile::default();
        config.default.level = LogLevel::Warning;
        config.set_category(
            Category::new("app.db"),
            BindingSettings {
                adapter: AdapterKind::File,
                level: LogLevel::Debug,
                file: Some(temp_dir.path().join("db.log")),
            },
        );
        config.set_category(Category::new("vendor"), BindingSettings::default());

        let registry = config.build_registry().unwrap();

        let db = registry.resolve(&Category::new("app.db.pool"));
        assert_eq!(db.name(), "file");
        assert!(db.enabled(&Category::new("app.db.pool"), LogLevel::Debug));
        assert!(!db.enabled(&Category::new("app.db.pool"), LogLevel::Trace));

        let vendor = registry.resolve(&Category::new("vendor.lib"));
        assert_eq!(vendor.name(), "null");

        let default = registry.resolve(&Category::new("other"));
        assert_eq!(default.name(), "stderr");
        assert!(!default.enabled(&Category::new("other"), LogLevel::Notice));
        assert!(default.enabled(&Category::new("other"), LogLevel::Warning));
    }

    #[test]
    fn test_file_records_reach_disk() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("app.log");
        let mut config = ConfigFile::default();
        config.default = BindingSettings {
            adapter: AdapterKind::File,
            level: LogLevel::Info,
            file: Some(log_path.clone()),
        };

        let registry = Arc::new(config.build_registry().unwrap());
        let logger = registry.logger("app");
        logger.debug("filtered out");
        logger.info("kept");
        registry.flush();

        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("[app] kept"));
        assert!(!contents.contains("filtered out"));
    }

    #[test]
    fn test_apply_failure_leaves_registry_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let registry = Registry::new();
        registry.bind("keep", Arc::new(StderrAdapter));

        let mut config = ConfigFile::default();
        config.set_category(
            Category::new("broken"),
            BindingSettings {
                adapter: AdapterKind::File,
                level: LogLevel::Info,
                // A directory cannot be opened as a log file
                file: Some(temp_dir.path().to_path_buf()),
            },
        );

        let err = config.apply_to(&registry).unwrap_err();
        assert!(matches!(err, ConfigFileError::AdapterOpen { ref section, .. } if section == "category broken"));
        assert!(registry.is_bound("keep"));
        assert!(!registry.is_bound("broken"));
    }

    #[test]
    fn test_configured_categories_most_specific_first() {
        let mut config = ConfigFile::default();
        config.set_category(Category::new("app"), BindingSettings::default());
        config.set_category(Category::new("app.db.pool"), BindingSettings::default());
        config.set_category(Category::new("app.db"), BindingSettings::default());
        config.set_category(Category::new("aaa.zzz"), BindingSettings::default());

        let ordered = configured_categories(&config);
        let labels: Vec<_> = ordered.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels, vec!["app.db.pool", "aaa.zzz", "app.db", "app"]);
    }
}
