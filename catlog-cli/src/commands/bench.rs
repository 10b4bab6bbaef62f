//! `catlog bench` - time guarded against unconditional trace calls.
//!
//! Runs against whatever adapter the configuration routes the category to,
//! so the numbers reflect the real cost of a disabled (or enabled) trace.

use clap::Args;

use catlog::bench::{compare, PatternTiming};
use catlog::registry;

use super::display_category;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the bench command.
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Calls per pattern
    #[arg(long, default_value_t = 1_000_000)]
    pub iterations: u64,

    /// Category the trace calls are issued under
    #[arg(long, default_value = "catlog.bench")]
    pub category: String,
}

/// Run the bench command.
pub fn run(args: BenchArgs, runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("bench");

    let logger = registry::logger(args.category.as_str());
    let adapter = logger.adapter();

    println!("Trace Call Benchmark");
    println!("====================");
    println!();
    println!(
        "Category:   {} -> {} (trace {})",
        display_category(logger.category()),
        adapter.name(),
        if logger.is_trace_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("Iterations: {}", args.iterations);
    println!();

    let comparison = compare(&logger, args.iterations)?;
    logger.flush();

    print_timing(&comparison.unconditional);
    print_timing(&comparison.guarded);
    println!();
    println!(
        "Faster: {} (unconditional/guarded = {:.2}x)",
        comparison.faster().as_str(),
        comparison.ratio()
    );

    Ok(())
}

fn print_timing(timing: &PatternTiming) {
    println!(
        "  {:<14} {:>10.2} ns/call  ({:.3} ms total)",
        timing.pattern.as_str(),
        timing.nanos_per_call(),
        timing.elapsed.as_secs_f64() * 1000.0
    );
}
