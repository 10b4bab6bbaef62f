//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show` and `config init` for locating,
//! reviewing and creating the configuration file.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use catlog::config::ConfigFile;

use crate::error::CliError;
use crate::runner::resolve_config_path;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Print the effective configuration as INI
    ///
    /// Defaults are filled in for anything the file leaves out.
    Show,

    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, config_path: Option<PathBuf>) -> Result<(), CliError> {
    let path = resolve_config_path(config_path);
    match command {
        ConfigCommands::Path => run_path(&path),
        ConfigCommands::Show => run_show(&path),
        ConfigCommands::Init { force } => run_init(&path, force),
    }
}

/// Show the configuration file path.
fn run_path(path: &Path) -> Result<(), CliError> {
    println!("{}", path.display());
    Ok(())
}

/// Print the effective configuration.
fn run_show(path: &Path) -> Result<(), CliError> {
    if !path.exists() {
        println!("# {} not found, showing defaults", path.display());
    }
    let config = ConfigFile::load_from(path)?;
    print!("{}", config.to_ini_string());
    Ok(())
}

/// Create the configuration file.
fn run_init(path: &Path, force: bool) -> Result<(), CliError> {
    if force {
        ConfigFile::default().save_to(path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    if ConfigFile::ensure_exists_at(path)? {
        println!("Created configuration file at {}", path.display());
    } else {
        println!("Configuration file already exists at {}", path.display());
        println!("Use 'catlog config init --force' to overwrite it.");
    }
    Ok(())
}
