//! catlog CLI - Command-line interface
//!
//! Inspects and exercises a catlog configuration: which adapter serves a
//! category, what a record looks like once routed, and what a disabled trace
//! call costs.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::bench::BenchArgs;
use commands::config::ConfigCommands;
use commands::emit::EmitArgs;
use commands::resolve::ResolveArgs;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "catlog")]
#[command(version = catlog::VERSION)]
#[command(about = "Category-routed logging facade tools", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.catlog/config.ini)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log catlog diagnostics at debug level and echo them to stdout
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which binding and adapter serve each category
    Resolve(ResolveArgs),

    /// Emit one record through the configured registry
    Emit(EmitArgs),

    /// Compare guarded and unconditional trace call costs
    Bench(BenchArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Config(command) => commands::config::run(command, cli.config),
        Commands::Resolve(args) => {
            let runner = CliRunner::new(cli.config, cli.debug)?;
            commands::resolve::run(args, &runner)
        }
        Commands::Emit(args) => {
            let runner = CliRunner::new(cli.config, cli.debug)?;
            commands::emit::run(args, &runner)
        }
        Commands::Bench(args) => {
            let runner = CliRunner::new(cli.config, cli.debug)?;
            commands::bench::run(args, &runner)
        }
    }
}
