//! Trace call-pattern comparison.
//!
//! Measures the two ways a hot path can emit a trace record that is usually
//! disabled:
//!
//! - [`CallPattern::Unconditional`]: `logger.trace_fmt(...)` every time
//! - [`CallPattern::Guarded`]: `if logger.is_trace_enabled() { ... }`
//!
//! The criterion benchmark in `benches/trace_call.rs` covers the same pair
//! with statistical rigor; this module backs the quick `catlog bench`
//! command.

use std::hint::black_box;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::proxy::Logger;

/// Benchmark errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchError {
    /// Zero iterations cannot produce a per-call figure
    #[error("iteration count must be greater than zero")]
    ZeroIterations,
}

/// How the trace call is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPattern {
    /// Call the trace method unconditionally.
    Unconditional,
    /// Check `is_trace_enabled()` first and only call when it returns true.
    Guarded,
}

impl CallPattern {
    /// Short label used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            CallPattern::Unconditional => "unconditional",
            CallPattern::Guarded => "guarded",
        }
    }
}

/// Timing for one pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternTiming {
    pub pattern: CallPattern,
    pub iterations: u64,
    pub elapsed: Duration,
}

impl PatternTiming {
    /// Average nanoseconds per call.
    pub fn nanos_per_call(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }
}

/// Timings for both patterns against the same logger.
#[derive(Debug, Clone, Copy)]
pub struct Comparison {
    pub unconditional: PatternTiming,
    pub guarded: PatternTiming,
}

impl Comparison {
    /// The pattern with the lower per-call time.
    pub fn faster(&self) -> CallPattern {
        if self.guarded.elapsed <= self.unconditional.elapsed {
            CallPattern::Guarded
        } else {
            CallPattern::Unconditional
        }
    }

    /// Unconditional time divided by guarded time.
    ///
    /// Above 1.0 means the guard paid off. Returns `f64::INFINITY` when the
    /// guarded run was too fast to measure.
    pub fn ratio(&self) -> f64 {
        let guarded = self.guarded.nanos_per_call();
        if guarded == 0.0 {
            f64::INFINITY
        } else {
            self.unconditional.nanos_per_call() / guarded
        }
    }
}

/// Time `iterations` trace calls issued with `pattern`.
pub fn measure(
    logger: &Logger,
    pattern: CallPattern,
    iterations: u64,
) -> Result<PatternTiming, BenchError> {
    if iterations == 0 {
        return Err(BenchError::ZeroIterations);
    }

    let start = Instant::now();
    match pattern {
        CallPattern::Unconditional => {
            for i in 0..iterations {
                logger.trace_fmt(format_args!("iteration {}", black_box(i)));
            }
        }
        CallPattern::Guarded => {
            for i in 0..iterations {
                if logger.is_trace_enabled() {
                    logger.trace_fmt(format_args!("iteration {}", black_box(i)));
                }
            }
        }
    }

    Ok(PatternTiming {
        pattern,
        iterations,
        elapsed: start.elapsed(),
    })
}

/// Time both patterns, unconditional first.
pub fn compare(logger: &Logger, iterations: u64) -> Result<Comparison, BenchError> {
    Ok(Comparison {
        unconditional: measure(logger, CallPattern::Unconditional, iterations)?,
        guarded: measure(logger, CallPattern::Guarded, iterations)?,
    })
}
