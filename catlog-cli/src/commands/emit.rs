//! `catlog emit` - send one record through the configured registry.

use std::fmt::Display;

use clap::Args;
use tracing::debug;

use catlog::log::LogLevel;
use catlog::registry;

use super::display_category;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the emit command.
#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Category the record is logged under
    #[arg(long, default_value = "catlog.cli")]
    pub category: String,

    /// Severity of the record (trace .. emergency)
    #[arg(long, default_value = "info")]
    pub level: LogLevel,

    /// Value for a {key} placeholder in the message (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub set: Vec<(String, String)>,

    /// Message text, may contain {key} placeholders
    pub message: String,
}

/// Run the emit command.
pub fn run(args: EmitArgs, runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("emit");

    let logger = registry::logger(args.category.as_str());
    let context: Vec<(&str, &dyn Display)> = args
        .set
        .iter()
        .map(|(key, value)| (key.as_str(), value as &dyn Display))
        .collect();

    let delivered = logger.is_enabled(args.level);
    logger.log_context(args.level, &args.message, &context);
    logger.flush();

    let category = display_category(logger.category());
    let adapter = logger.adapter().name();
    debug!(category = %category, adapter, delivered, "Emit finished");

    if delivered {
        println!("Emitted {} record to '{}' via {}", args.level, category, adapter);
    } else {
        println!(
            "Dropped {} record: level disabled for '{}' ({})",
            args.level, category, adapter
        );
    }

    Ok(())
}

/// Parse a `key=value` pair.
fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
