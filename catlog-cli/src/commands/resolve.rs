//! `catlog resolve` - show which binding serves a category.

use clap::Args;

use catlog::config::configured_categories;
use catlog::log::Category;
use catlog::registry;

use super::display_category;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Categories to resolve; lists configured bindings, most specific
    /// first, when omitted
    pub categories: Vec<String>,
}

/// Run the resolve command.
pub fn run(args: ResolveArgs, runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("resolve");
    let registry = registry::global();

    if args.categories.is_empty() {
        println!(
            "Bindings from {} ({} categories)",
            runner.config_path().display(),
            runner.config().categories.len()
        );
        for category in configured_categories(runner.config()) {
            let resolution = registry.explain(&category);
            println!(
                "  {:<24} {}",
                display_category(&category),
                resolution.adapter.name()
            );
        }
        println!("  {:<24} {}", "default", registry.default_adapter().name());
        return Ok(());
    }

    for name in &args.categories {
        let resolution = registry.explain(&Category::new(name));
        let matched = match &resolution.matched {
            Some(category) => display_category(category),
            None => "default".to_string(),
        };
        println!(
            "{} -> {} ({})",
            display_category(&resolution.category),
            matched,
            resolution.adapter.name()
        );
    }

    Ok(())
}
